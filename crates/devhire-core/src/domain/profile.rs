//! Business and developer profiles created during onboarding

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hiring side of the marketplace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub company: String,
    pub created_at: DateTime<Utc>,
}

impl BusinessProfile {
    pub fn new(user_id: Uuid, name: String, company: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.trim().to_string(),
            company: company.trim().to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Candidate side of the marketplace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub hero: String,
    pub created_at: DateTime<Utc>,
}

impl DeveloperProfile {
    pub fn new(user_id: Uuid, name: String, hero: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.trim().to_string(),
            hero: hero.trim().to_string(),
            created_at: Utc::now(),
        }
    }
}

// ============================================================================
// DevHire Core - User Entity
// File: crates/devhire-core/src/domain/user.rs
// Description: Signed-in account, owner of profiles and notifications
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct User {
    pub id: Uuid,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 2, max = 100, message = "Display name must be between 2 and 100 characters"))]
    pub display_name: String,

    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String, display_name: String) -> Result<Self, validator::ValidationErrors> {
        let user = Self {
            id: Uuid::new_v4(),
            email: email.trim().to_lowercase(),
            display_name: display_name.trim().to_string(),
            is_admin: false,
            created_at: Utc::now(),
        };

        user.validate()?;
        Ok(user)
    }

    pub fn promote_to_admin(mut self) -> Self {
        self.is_admin = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user() {
        let user = User::new("  Ada@Example.com ".to_string(), "Ada".to_string()).unwrap();
        assert_eq!(user.email, "ada@example.com");
        assert!(!user.is_admin);
        assert!(user.promote_to_admin().is_admin);
    }

    #[test]
    fn test_invalid_email_rejected() {
        assert!(User::new("not-an-email".to_string(), "Ada".to_string()).is_err());
    }
}

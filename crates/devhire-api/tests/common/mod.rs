//! In-memory repositories and request helpers for router tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header::AUTHORIZATION, Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use devhire_api::{build_router, AppState};
use devhire_core::domain::{BusinessProfile, Conversation, DeveloperProfile, MessageNotification, User};
use devhire_core::repositories::{
    ConversationRepository, NotificationRepository, ProfileRepository, UserRepository,
};
use devhire_core::services::{NotificationService, UserMenuService};
use devhire_core::DomainError;
use devhire_security::JwtService;
use devhire_shared::Pagination;

pub const SECRET: &str = "router-test-secret";

#[derive(Default)]
pub struct Store {
    pub users: Mutex<Vec<User>>,
    pub businesses: Mutex<Vec<BusinessProfile>>,
    pub developers: Mutex<Vec<DeveloperProfile>>,
    pub conversations: Mutex<Vec<Conversation>>,
    pub notifications: Mutex<Vec<MessageNotification>>,
}

impl Store {
    pub fn add_user(&self, admin: bool) -> User {
        let mut user = User::new(format!("{}@example.com", Uuid::new_v4()), "Member".to_string()).unwrap();
        user.is_admin = admin;
        self.users.lock().unwrap().push(user.clone());
        user
    }

    pub fn add_business(&self, user: &User) -> BusinessProfile {
        let business = BusinessProfile::new(user.id, "Owner".to_string(), "Acme".to_string());
        self.businesses.lock().unwrap().push(business.clone());
        business
    }

    pub fn add_developer(&self, user: &User) -> DeveloperProfile {
        let developer = DeveloperProfile::new(user.id, "Dev".to_string(), "Rustacean".to_string());
        self.developers.lock().unwrap().push(developer.clone());
        developer
    }

    pub fn add_conversation(&self, developer: &DeveloperProfile, business: &BusinessProfile) -> Conversation {
        let conversation = Conversation::new(developer.id, business.id);
        self.conversations.lock().unwrap().push(conversation.clone());
        conversation
    }

    pub fn notify(&self, recipient: &User, conversation: &Conversation, read_at: Option<DateTime<Utc>>) -> MessageNotification {
        self.notify_at(recipient, conversation, Utc::now(), read_at)
    }

    pub fn notify_at(
        &self,
        recipient: &User,
        conversation: &Conversation,
        created_at: DateTime<Utc>,
        read_at: Option<DateTime<Utc>>,
    ) -> MessageNotification {
        let mut notification = MessageNotification::new(recipient.id, Uuid::new_v4(), conversation.id);
        notification.created_at = created_at;
        if let Some(at) = read_at {
            notification.mark_as_read(at);
        }
        self.notifications.lock().unwrap().push(notification.clone());
        notification
    }

    fn page_of(&self, recipient_id: &Uuid, page: &Pagination, read: bool) -> Vec<MessageNotification> {
        let mut found: Vec<_> = self
            .notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.recipient_id == *recipient_id && n.is_read() == read)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        found
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect()
    }
}

pub struct InMemory(pub Arc<Store>);

#[async_trait]
impl UserRepository for InMemory {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.0.users.lock().unwrap().iter().find(|u| u.id == *id).cloned())
    }
}

#[async_trait]
impl ProfileRepository for InMemory {
    async fn find_business_by_user(&self, user_id: &Uuid) -> Result<Option<BusinessProfile>, DomainError> {
        Ok(self.0.businesses.lock().unwrap().iter().find(|b| b.user_id == *user_id).cloned())
    }

    async fn find_developer_by_user(&self, user_id: &Uuid) -> Result<Option<DeveloperProfile>, DomainError> {
        Ok(self.0.developers.lock().unwrap().iter().find(|d| d.user_id == *user_id).cloned())
    }
}

#[async_trait]
impl ConversationRepository for InMemory {
    async fn exists_for_business(&self, business_id: &Uuid) -> Result<bool, DomainError> {
        Ok(self.0.conversations.lock().unwrap().iter().any(|c| c.business_id == *business_id))
    }

    async fn exists_for_developer(&self, developer_id: &Uuid) -> Result<bool, DomainError> {
        Ok(self.0.conversations.lock().unwrap().iter().any(|c| c.developer_id == *developer_id))
    }
}

#[async_trait]
impl NotificationRepository for InMemory {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<MessageNotification>, DomainError> {
        Ok(self.0.notifications.lock().unwrap().iter().find(|n| n.id == *id).cloned())
    }

    async fn list_read(&self, recipient_id: &Uuid, page: &Pagination) -> Result<Vec<MessageNotification>, DomainError> {
        Ok(self.0.page_of(recipient_id, page, true))
    }

    async fn list_unread(&self, recipient_id: &Uuid, page: &Pagination) -> Result<Vec<MessageNotification>, DomainError> {
        Ok(self.0.page_of(recipient_id, page, false))
    }

    async fn has_unread(&self, recipient_id: &Uuid) -> Result<bool, DomainError> {
        Ok(self
            .0
            .notifications
            .lock()
            .unwrap()
            .iter()
            .any(|n| n.recipient_id == *recipient_id && !n.is_read()))
    }

    async fn mark_as_read(&self, id: &Uuid, read_at: DateTime<Utc>) -> Result<MessageNotification, DomainError> {
        let mut notifications = self.0.notifications.lock().unwrap();
        let notification = notifications
            .iter_mut()
            .find(|n| n.id == *id)
            .ok_or(DomainError::NotificationNotFound(*id))?;
        notification.mark_as_read(read_at);
        Ok(notification.clone())
    }
}

pub struct TestApp {
    pub store: Arc<Store>,
    pub jwt: Arc<JwtService>,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(Store::default());
        let repo = Arc::new(InMemory(store.clone()));
        let jwt = Arc::new(JwtService::new(SECRET, 900, 3600));

        let state = AppState {
            jwt: jwt.clone(),
            users: repo.clone(),
            menu_service: Arc::new(UserMenuService::new(repo.clone(), repo.clone(), repo.clone())),
            notification_service: Arc::new(NotificationService::new(repo)),
        };

        Self { store, jwt, router: build_router(state) }
    }

    pub fn token_for(&self, user: &User) -> String {
        self.jwt.generate_access_token(&user.id).unwrap()
    }

    pub async fn request(&self, method: Method, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        let authorization = token.map(|token| format!("Bearer {}", token));
        self.request_with_authorization(method, uri, authorization.as_deref()).await
    }

    /// Sends `authorization` verbatim as the `Authorization` header.
    pub async fn request_with_authorization(
        &self,
        method: Method,
        uri: &str,
        authorization: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        let response = self
            .router
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str, user: &User) -> (StatusCode, Value) {
        let token = self.token_for(user);
        self.request(Method::GET, uri, Some(&token)).await
    }
}

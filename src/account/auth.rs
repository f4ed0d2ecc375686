//! Mock authentication over the key-value store. Users and the active
//! session id live under fixed keys; corrupt records degrade to an empty
//! user list rather than erroring.

use chrono::Utc;
use log::{error, info, warn};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use super::models::{User, UserResult, UserSubscription};
use crate::ai::types::FullAnalysis;
use crate::storage::KeyValueStore;

const USERS_KEY: &str = "career-finder-users";
const SESSION_KEY: &str = "career-finder-session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub success: bool,
    pub message: String,
}

impl AuthOutcome {
    fn ok(message: &str) -> Self {
        Self { success: true, message: message.to_string() }
    }

    fn err(message: &str) -> Self {
        Self { success: false, message: message.to_string() }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Default)]
pub struct AuthManager {
    current_user: Option<User>,
}

impl AuthManager {
    /// Restores the signed-in user from the stored session id, cleaning up a
    /// dangling session pointing at a user that no longer exists.
    pub fn new(store: &mut dyn KeyValueStore) -> Self {
        let mut manager = Self { current_user: None };
        if let Some(user_id) = store.get(SESSION_KEY) {
            let users = Self::users(store);
            match users.into_iter().find(|u| u.id.to_string() == user_id) {
                Some(user) => {
                    info!("Restored session for {}", user.email);
                    manager.current_user = Some(user);
                }
                None => {
                    warn!("Stored session references unknown user, clearing");
                    let _ = store.remove(SESSION_KEY);
                }
            }
        }
        manager
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn register(&mut self, store: &mut dyn KeyValueStore, request: RegisterRequest) -> AuthOutcome {
        if let Err(errors) = request.validate() {
            let message = errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .filter_map(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .next()
                .unwrap_or_else(|| "Invalid registration details.".to_string());
            return AuthOutcome { success: false, message };
        }

        let mut users = Self::users(store);
        if users.iter().any(|u| u.email.eq_ignore_ascii_case(&request.email)) {
            return AuthOutcome::err("An account with this email already exists.");
        }

        let user = User {
            id: Uuid::new_v4(),
            name: request.name,
            email: request.email.clone(),
            password: request.password.clone(),
            results: Vec::new(),
            tests_taken: 0,
            created_at: Utc::now(),
            subscription: None,
        };
        users.push(user);
        Self::save_users(store, &users);

        self.login(store, &request.email, &request.password)
    }

    pub fn login(&mut self, store: &mut dyn KeyValueStore, email: &str, password: &str) -> AuthOutcome {
        let users = Self::users(store);
        let user = users.into_iter().find(|u| u.email.eq_ignore_ascii_case(email));

        match user {
            Some(user) if user.password == password => {
                if let Err(e) = store.set(SESSION_KEY, &user.id.to_string()) {
                    error!("Failed to persist session: {}", e);
                }
                info!("User {} logged in", user.email);
                self.current_user = Some(user);
                AuthOutcome::ok("Login successful!")
            }
            _ => AuthOutcome::err("Invalid email or password."),
        }
    }

    pub fn logout(&mut self, store: &mut dyn KeyValueStore) {
        self.current_user = None;
        let _ = store.remove(SESSION_KEY);
    }

    /// Prepends a timestamped result to the signed-in user's history.
    /// No-op when nobody is logged in.
    pub fn save_result(&mut self, store: &mut dyn KeyValueStore, analysis: &FullAnalysis) {
        let Some(user) = self.current_user.as_mut() else {
            return;
        };

        let result = UserResult {
            id: Uuid::new_v4(),
            date: Utc::now(),
            archetype: analysis.archetype.name.clone(),
            analysis: analysis.clone(),
        };
        user.results.insert(0, result);

        let updated = user.clone();
        Self::persist_user(store, updated);
    }

    pub fn increment_test_count(&mut self, store: &mut dyn KeyValueStore) {
        let Some(user) = self.current_user.as_mut() else {
            return;
        };
        user.tests_taken += 1;
        let updated = user.clone();
        Self::persist_user(store, updated);
    }

    pub fn update_user_subscription(
        &mut self,
        store: &mut dyn KeyValueStore,
        subscription: UserSubscription,
    ) {
        let Some(user) = self.current_user.as_mut() else {
            return;
        };
        user.subscription = Some(subscription);
        let updated = user.clone();
        Self::persist_user(store, updated);
    }

    fn persist_user(store: &mut dyn KeyValueStore, user: User) {
        let mut users = Self::users(store);
        if let Some(slot) = users.iter_mut().find(|u| u.id == user.id) {
            *slot = user;
            Self::save_users(store, &users);
        }
    }

    fn users(store: &dyn KeyValueStore) -> Vec<User> {
        match store.get(USERS_KEY) {
            Some(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                error!("Error reading stored users: {}", e);
                Vec::new()
            }),
            None => Vec::new(),
        }
    }

    fn save_users(store: &mut dyn KeyValueStore, users: &[User]) {
        match serde_json::to_string(users) {
            Ok(json) => {
                if let Err(e) = store.set(USERS_KEY, &json) {
                    error!("Error saving users: {}", e);
                }
            }
            Err(e) => error!("Error serializing users: {}", e),
        }
    }
}

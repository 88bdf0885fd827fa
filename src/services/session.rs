//! Session provider
//!
//! The identity provider is external; the client only needs to know who is
//! signed in and how to sign them out.

use std::sync::{PoisonError, RwLock};

use tracing::info;

use crate::models::SessionUser;

/// Source of the current identity
pub trait SessionProvider: Send + Sync {
    fn current_user(&self) -> Option<SessionUser>;

    fn logout(&self);
}

/// In-memory session, filled in after login
#[derive(Debug, Default)]
pub struct LocalSession {
    user: RwLock<Option<SessionUser>>,
}

impl LocalSession {
    pub fn new(user: Option<SessionUser>) -> Self {
        Self {
            user: RwLock::new(user),
        }
    }
}

impl SessionProvider for LocalSession {
    fn current_user(&self) -> Option<SessionUser> {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn logout(&self) {
        let previous = self
            .user
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(user) = previous {
            info!(user = user.name.as_deref().unwrap_or("unknown"), "Signed out");
        }
    }
}

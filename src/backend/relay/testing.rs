//! In-memory collaborators for relay unit tests.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::backend::error::{AuthFailure, BackendError};
use crate::backend::relay::collaborators::{Authenticator, HistoryStore, RelationshipGraph};
use crate::shared::{RelayMessage, UserIdentity};

#[derive(Clone, Default)]
pub struct FakeGraph {
    edges: Arc<Mutex<HashSet<(UserIdentity, UserIdentity)>>>,
    failing: Arc<Mutex<bool>>,
}

impl FakeGraph {
    /// Record a one-directional edge; lookups are symmetric
    pub fn link(&self, a: &str, b: &str) {
        self.edges.lock().unwrap().insert((a.into(), b.into()));
    }

    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }
}

#[async_trait]
impl RelationshipGraph for FakeGraph {
    async fn linked(&self, a: &UserIdentity, b: &UserIdentity) -> Result<bool, BackendError> {
        if *self.failing.lock().unwrap() {
            return Err(BackendError::state("graph unavailable"));
        }
        let edges = self.edges.lock().unwrap();
        Ok(edges.contains(&(a.clone(), b.clone())) || edges.contains(&(b.clone(), a.clone())))
    }
}

type AppendHook = Arc<dyn Fn(&RelayMessage) + Send + Sync>;

#[derive(Clone, Default)]
pub struct FakeHistory {
    appended: Arc<Mutex<Vec<RelayMessage>>>,
    failing: Arc<Mutex<bool>>,
    hook: Option<AppendHook>,
}

impl FakeHistory {
    /// Run `hook` at the start of every append
    pub fn with_append_hook<F>(hook: F) -> Self
    where
        F: Fn(&RelayMessage) + Send + Sync + 'static,
    {
        Self {
            hook: Some(Arc::new(hook)),
            ..Self::default()
        }
    }

    pub fn appended(&self) -> Vec<RelayMessage> {
        self.appended.lock().unwrap().clone()
    }

    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }
}

#[async_trait]
impl HistoryStore for FakeHistory {
    async fn append(&self, message: &RelayMessage) -> Result<(), BackendError> {
        if let Some(hook) = &self.hook {
            hook(message);
        }
        if *self.failing.lock().unwrap() {
            return Err(BackendError::state("history unavailable"));
        }
        self.appended.lock().unwrap().push(message.clone());
        Ok(())
    }

    async fn range_between(
        &self,
        a: &UserIdentity,
        b: &UserIdentity,
    ) -> Result<Vec<RelayMessage>, BackendError> {
        Ok(self
            .appended()
            .into_iter()
            .filter(|m| {
                (&m.sender == a && &m.recipient == b) || (&m.sender == b && &m.recipient == a)
            })
            .collect())
    }
}

#[derive(Clone, Default)]
pub struct FakeAuthenticator {
    tokens: Arc<Mutex<HashMap<String, UserIdentity>>>,
}

impl FakeAuthenticator {
    pub fn issue(&self, token: &str, identity: &str) {
        self.tokens
            .lock()
            .unwrap()
            .insert(token.to_string(), identity.into());
    }
}

#[async_trait]
impl Authenticator for FakeAuthenticator {
    async fn identity_for(&self, token: &str) -> Result<UserIdentity, AuthFailure> {
        if token.is_empty() {
            return Err(AuthFailure::MissingToken);
        }
        self.tokens
            .lock()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(AuthFailure::InvalidToken)
    }
}

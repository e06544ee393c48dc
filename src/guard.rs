//! Navigation Guard
//!
//! Binds the router's decision table to the session: read-only, synchronous,
//! never touches the network.

use std::sync::Arc;

use adept_router::{evaluate, Navigation};

use crate::session::SessionStore;

#[derive(Clone)]
pub struct NavigationGuard {
    session: Arc<dyn SessionStore>,
}

impl NavigationGuard {
    pub fn new(session: Arc<dyn SessionStore>) -> Self {
        Self { session }
    }

    /// Decide what to render for a transition to `path`
    pub fn check(&self, path: &str) -> Navigation {
        evaluate(path, self.session.is_authenticated())
    }

    /// Path to render: the target itself or the redirect
    pub fn destination<'a>(&self, path: &'a str) -> &'a str {
        self.check(path).redirect_path().unwrap_or(path)
    }
}

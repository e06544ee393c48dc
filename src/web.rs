//! Browser Bindings
//!
//! Entry points for the JavaScript view layer: the guard hook the router
//! calls before every transition.

use std::sync::Arc;

use wasm_bindgen::prelude::*;

use crate::guard::NavigationGuard;
use crate::session::{LocalStorageSession, SessionStore};

/// Redirect target for a transition to `path`, or `undefined` to proceed
#[wasm_bindgen(js_name = guardNavigation)]
pub fn guard_navigation(path: &str) -> Option<String> {
    NavigationGuard::new(Arc::new(LocalStorageSession))
        .check(path)
        .redirect_path()
        .map(str::to_string)
}

/// Whether a session token is currently stored
#[wasm_bindgen(js_name = isAuthenticated)]
pub fn is_authenticated() -> bool {
    LocalStorageSession.is_authenticated()
}

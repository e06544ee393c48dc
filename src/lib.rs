//! Adept Client
//!
//! Typed REST client and navigation guard for the Adept project manager:
//! organizations own projects, projects own tasks, tasks own subtasks and
//! comments. The view layer consumes [`ApiClient`] and [`NavigationGuard`].

pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod models;
pub mod session;

#[cfg(target_arch = "wasm32")]
mod web;

pub use adept_router::{Navigation, RouteDef, RouteMatch, RouteName};
pub use api::{build_headers, encode_component, ApiClient};
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult, ConfigError, SessionError};
pub use guard::NavigationGuard;
pub use session::{default_session, MemorySession, SessionStore};

#[cfg(not(target_arch = "wasm32"))]
pub use session::FileSession;

#[cfg(target_arch = "wasm32")]
pub use session::LocalStorageSession;

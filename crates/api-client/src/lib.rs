pub mod auth;
pub mod config;
pub mod dispatch;
pub mod error_convert;
pub mod http;

pub use auth::resolve_session;
pub use http::ApiClient;

//! HTTP request handlers.

pub mod auth_handler;
pub mod blog_handler;
pub mod contact_handler;
pub mod diagnostics_handler;

pub use auth_handler::auth_routes;
pub use blog_handler::blog_routes;
pub use contact_handler::contact_routes;
pub use diagnostics_handler::diagnostics_routes;

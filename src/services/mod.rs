//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and repositories to fulfill
//! application use cases. They depend on abstractions (traits) so the
//! store behind them can be swapped.

mod auth_service;
mod blog_service;
mod contact_service;
pub mod container;
pub mod diagnostics;

pub use auth_service::{AuthService, Authenticator};
pub use blog_service::{BlogManager, BlogService};
pub use contact_service::{ContactInbox, ContactService};
pub use container::{ServiceContainer, Services};
pub use diagnostics::DiagnosticsReport;

//! SaaS Starter - a small backend-as-a-service over a document store.
//!
//! Exposes user registration and login, blog post listing and creation,
//! contact-message submission and a diagnostics endpoint, backed by MongoDB.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Entity schemas and password hashing
//! - **services**: Application use cases
//! - **infra**: Document store adapters and typed repositories
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server (DATABASE_URL / DATABASE_NAME select the database)
//! cargo run -- serve
//!
//! # Start without MongoDB
//! cargo run -- serve --in-memory
//!
//! # Print the diagnostics report
//! cargo run -- diagnose
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{BlogPost, ContactMessage, EntityKind, Product, User};
pub use errors::{AppError, AppResult};
pub use infra::{DocumentStore, MemoryStore, MongoStore};

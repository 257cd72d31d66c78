//! devlog-api: REST backend for blog posts, comments and job applications on PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;

pub use config::{from_env, from_lookup, AppConfig, DatabaseConfig, ServerConfig};
pub use error::{AppError, ConfigError};
pub use routes::{app, application_routes, blog_routes, common_routes};
pub use service::{ApplicationService, CommentService, PostService};
pub use state::AppState;

//! HTTP handlers. Each validates its input before running a single statement.

pub mod applications;
pub mod comments;
pub mod posts;

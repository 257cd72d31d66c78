//! Row types returned to clients and per-endpoint request shapes with their validation.

pub mod application;
pub mod comment;
pub mod post;

pub use application::*;
pub use comment::*;
pub use post::*;

/// Truthiness rule shared by all required text fields: absent, null and "" are missing.
pub(crate) fn present(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.is_empty())
}

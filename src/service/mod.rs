//! One service per resource. Each call runs exactly one statement against the pool.

mod applications;
mod posts;
pub use applications::ApplicationService;
pub use posts::{CommentService, PostService};

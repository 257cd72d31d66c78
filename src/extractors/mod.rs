//! Request extractors whose rejections are reported as `AppError`.

mod id;
mod json;
mod query;
pub use id::RowId;
pub use json::JsonBody;
pub use query::QueryParams;

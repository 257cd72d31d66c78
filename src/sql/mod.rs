//! Fixed, parameterized SQL. Optional filters select between two static variants; nothing is built at runtime.

mod statements;
pub use statements::*;

//! Trait definitions for Transifex operations.
//!
//! Each entity type implements the traits it supports, encapsulating
//! endpoint paths and response shapes in the implementations.

mod create;
mod delete;
mod get;
mod list;

pub use create::Create;
pub use delete::Delete;
pub use get::Get;
pub use list::List;

//! Transifex API model types.

mod language;
mod project;
mod resource;
mod translation;

pub use language::*;
pub use project::*;
pub use resource::*;
pub use translation::*;

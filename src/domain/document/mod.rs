//! Document module - a contributed prompt file and its metadata.

mod aggregate;
mod value_objects;

pub use aggregate::Document;
pub use value_objects::{DocumentPath, DocumentRevision, MAX_PATH_LENGTH};

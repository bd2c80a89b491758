//! Loading the YAML documents that proxy trees are built from.

mod document;

pub use document::{DEMO_ASSIGNMENTS, DEMO_DOCUMENT, DocumentError, parse, read_source};

//! Dirty-tracking proxy trees.
//!
//! [`build`] mirrors a nested value as a tree of [`ProxyNode`]s. Leaves become
//! [`FieldProxy`]s that can be read and replaced, containers become
//! [`ObjectProxy`]s keyed like the original value. Any node reports whether it
//! or one of its descendants differs from the value it was built from.

mod field;
mod key;
mod node;
mod object;
mod yaml;

pub use field::FieldProxy;
pub use key::{Key, PathError, ProxyPath};
pub use node::{Proxify, ProxyNode, Shape, build};
pub use object::ObjectProxy;
pub use yaml::scalar_text;

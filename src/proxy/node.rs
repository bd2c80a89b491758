use std::ops::{Index, IndexMut};

use snafu::prelude::*;
use tracing::trace;

use super::key::{MissingKeySnafu, NotAContainerSnafu, NotAFieldSnafu};
use super::{FieldProxy, Key, ObjectProxy, PathError, ProxyPath};

/// How a value decomposes when a proxy tree is built from it.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape<T> {
    /// Wrapped as a whole in a field.
    Leaf(T),
    /// Own keys and their values, in the value's natural iteration order.
    Container(Vec<(Key, T)>),
}

/// Values a proxy tree can be built from.
///
/// Implementors decide which of their values are containers. Everything that
/// is not a container, including null-like values, becomes a leaf.
pub trait Proxify: Clone + PartialEq + Sized {
    fn into_shape(self) -> Shape<Self>;
}

/// One node of a proxy tree, mirroring the shape of the value it was built
/// from.
#[derive(Debug, Clone)]
pub enum ProxyNode<T> {
    Field(FieldProxy<T>),
    Container(ObjectProxy<T>),
}

/// Builds a proxy tree mirroring `value`.
///
/// Every call produces an independent tree. Input must be finite: owned
/// values cannot form cycles, so recursion always terminates.
pub fn build<T: Proxify>(value: T) -> ProxyNode<T> {
    match value.into_shape() {
        Shape::Leaf(value) => ProxyNode::Field(FieldProxy::new(value)),
        Shape::Container(entries) => {
            trace!("Building container with {} keys", entries.len());
            ProxyNode::Container(
                entries
                    .into_iter()
                    .map(|(key, child)| (key, build(child)))
                    .collect(),
            )
        }
    }
}

impl<T: PartialEq> ProxyNode<T> {
    pub fn is_dirty(&self) -> bool {
        match self {
            ProxyNode::Field(field) => field.is_dirty(),
            ProxyNode::Container(object) => object.is_dirty(),
        }
    }
}

impl<T> ProxyNode<T> {
    pub fn is_field(&self) -> bool {
        matches!(self, ProxyNode::Field(_))
    }

    pub fn is_container(&self) -> bool {
        matches!(self, ProxyNode::Container(_))
    }

    pub fn as_field(&self) -> Option<&FieldProxy<T>> {
        match self {
            ProxyNode::Field(field) => Some(field),
            ProxyNode::Container(_) => None,
        }
    }

    pub fn as_field_mut(&mut self) -> Option<&mut FieldProxy<T>> {
        match self {
            ProxyNode::Field(field) => Some(field),
            ProxyNode::Container(_) => None,
        }
    }

    pub fn as_container(&self) -> Option<&ObjectProxy<T>> {
        match self {
            ProxyNode::Container(object) => Some(object),
            ProxyNode::Field(_) => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut ObjectProxy<T>> {
        match self {
            ProxyNode::Container(object) => Some(object),
            ProxyNode::Field(_) => None,
        }
    }

    /// Direct child under `key`. Fields have no children.
    pub fn child(&self, key: impl AsRef<str>) -> Option<&ProxyNode<T>> {
        self.as_container().and_then(|object| object.get(key))
    }

    pub fn child_mut(&mut self, key: impl AsRef<str>) -> Option<&mut ProxyNode<T>> {
        self.as_container_mut()
            .and_then(|object| object.get_mut(key))
    }

    /// Walks `path` down from this node.
    pub fn at(&self, path: &ProxyPath) -> Result<&ProxyNode<T>, PathError> {
        let mut current = self;
        for (depth, key) in path.iter().enumerate() {
            current = match current {
                ProxyNode::Container(object) => object.get(key).with_context(|| MissingKeySnafu {
                    key: key.clone(),
                    path: path.describe_prefix(depth),
                })?,
                ProxyNode::Field(_) => {
                    return NotAContainerSnafu {
                        path: path.describe_prefix(depth),
                    }
                    .fail();
                }
            };
        }
        Ok(current)
    }

    pub fn at_mut(&mut self, path: &ProxyPath) -> Result<&mut ProxyNode<T>, PathError> {
        let mut current = self;
        for (depth, key) in path.iter().enumerate() {
            current = match current {
                ProxyNode::Container(object) => object.get_mut(key).with_context(|| MissingKeySnafu {
                    key: key.clone(),
                    path: path.describe_prefix(depth),
                })?,
                ProxyNode::Field(_) => {
                    return NotAContainerSnafu {
                        path: path.describe_prefix(depth),
                    }
                    .fail();
                }
            };
        }
        Ok(current)
    }

    pub fn field_at(&self, path: &ProxyPath) -> Result<&FieldProxy<T>, PathError> {
        self.at(path)?.as_field().with_context(|| NotAFieldSnafu {
            path: path.describe(),
        })
    }

    pub fn field_at_mut(&mut self, path: &ProxyPath) -> Result<&mut FieldProxy<T>, PathError> {
        self.at_mut(path)?.as_field_mut().with_context(|| NotAFieldSnafu {
            path: path.describe(),
        })
    }
}

impl<T> Index<&str> for ProxyNode<T> {
    type Output = ProxyNode<T>;

    fn index(&self, key: &str) -> &Self::Output {
        match self {
            ProxyNode::Container(object) => object
                .get(key)
                .unwrap_or_else(|| panic!("no key '{key}' in container")),
            ProxyNode::Field(_) => panic!("cannot index a field with key '{key}'"),
        }
    }
}

impl<T> IndexMut<&str> for ProxyNode<T> {
    fn index_mut(&mut self, key: &str) -> &mut Self::Output {
        match self {
            ProxyNode::Container(object) => object
                .get_mut(key)
                .unwrap_or_else(|| panic!("no key '{key}' in container")),
            ProxyNode::Field(_) => panic!("cannot index a field with key '{key}'"),
        }
    }
}

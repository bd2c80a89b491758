use hashlink::LinkedHashMap;
use tracing::trace;

use super::{Key, ProxyNode};

/// Container of a proxy tree, mirroring the keys of the value it was built
/// from.
///
/// The key set is captured at construction and never changes afterwards.
#[derive(Debug, Clone)]
pub struct ObjectProxy<T> {
    children: LinkedHashMap<Key, ProxyNode<T>>,
}

impl<T> ObjectProxy<T> {
    pub fn get(&self, key: impl AsRef<str>) -> Option<&ProxyNode<T>> {
        self.children.get(key.as_ref())
    }

    pub fn get_mut(&mut self, key: impl AsRef<str>) -> Option<&mut ProxyNode<T>> {
        self.children.get_mut(key.as_ref())
    }

    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.children.contains_key(key.as_ref())
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.children.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &ProxyNode<T>)> {
        self.children.iter()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T: PartialEq> ObjectProxy<T> {
    /// Recomputed from the children on every call.
    pub fn is_dirty(&self) -> bool {
        self.children.values().any(ProxyNode::is_dirty)
    }
}

impl<T> FromIterator<(Key, ProxyNode<T>)> for ObjectProxy<T> {
    fn from_iter<I: IntoIterator<Item = (Key, ProxyNode<T>)>>(iter: I) -> Self {
        let mut children = LinkedHashMap::new();
        for (key, node) in iter {
            // A repeated key keeps its first position and takes the latest node
            if let Some(slot) = children.get_mut(&key) {
                trace!("Key '{}' seen again, replacing its node", key);
                *slot = node;
            } else {
                children.insert(key, node);
            }
        }
        ObjectProxy { children }
    }
}

use std::borrow::Borrow;
use std::fmt;

use derive_more::{Display, From};
use snafu::Snafu;

/// Name of a child inside a container node.
///
/// Sequence elements are keyed by their index rendered as text, so `"0"`,
/// `"1"` and so on address list items the same way names address map entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From)]
pub struct Key(String);

impl Key {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key(name.to_string())
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key(index.to_string())
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Dot-separated route from a root node down to one of its descendants.
///
/// The empty path addresses the root itself. A `.` or `\` inside a key is
/// escaped with a backslash, so `app\.name` is the single key `app.name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, From)]
pub struct ProxyPath(Vec<Key>);

const SEPARATOR: char = '.';
const ESCAPE: char = '\\';

impl ProxyPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Key> {
        self.0.iter()
    }

    pub fn push(&mut self, key: impl Into<Key>) {
        self.0.push(key.into());
    }

    /// Human readable form used in error messages, where the bare root would
    /// otherwise print as an empty string.
    pub fn describe(&self) -> String {
        if self.is_root() {
            "(root)".to_string()
        } else {
            self.to_string()
        }
    }

    pub(crate) fn describe_prefix(&self, len: usize) -> String {
        ProxyPath(self.0[..len.min(self.0.len())].to_vec()).describe()
    }
}

impl From<&str> for ProxyPath {
    fn from(raw: &str) -> Self {
        let mut path = Self::root();
        if raw.is_empty() {
            return path;
        }

        let mut current = String::new();
        let mut chars = raw.chars();
        while let Some(c) = chars.next() {
            match c {
                ESCAPE => match chars.clone().next() {
                    Some(next @ (SEPARATOR | ESCAPE)) => {
                        current.push(next);
                        chars.next();
                    }
                    // A lone backslash is kept as is
                    _ => current.push(ESCAPE),
                },
                SEPARATOR => path.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
        path.push(current);
        path
    }
}

impl fmt::Display for ProxyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            for c in key.as_str().chars() {
                if c == SEPARATOR || c == ESCAPE {
                    write!(f, "{}", ESCAPE)?;
                }
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum PathError {
    #[snafu(display("No key '{}' under '{}'", key, path))]
    MissingKey { key: Key, path: String },
    #[snafu(display("'{}' is a field and has no children", path))]
    NotAContainer { path: String },
    #[snafu(display("'{}' is a container, not a field", path))]
    NotAField { path: String },
}

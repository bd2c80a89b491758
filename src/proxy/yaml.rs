use saphyr::{Scalar, Yaml};
use tracing::{debug, trace};

use super::{Key, Proxify, Shape};

/// Textual form of a scalar, as used for mapping keys.
pub fn scalar_text(scalar: &Scalar<'_>) -> String {
    match scalar {
        Scalar::Null => "null".to_string(),
        Scalar::Boolean(value) => value.to_string(),
        Scalar::Integer(value) => value.to_string(),
        Scalar::FloatingPoint(value) => value.to_string(),
        Scalar::String(value) => value.to_string(),
    }
}

fn key_from_yaml(key: &Yaml<'_>) -> Option<Key> {
    match key {
        Yaml::Value(scalar) => Some(Key::from(scalar_text(scalar))),
        _ => None,
    }
}

/// Mappings and sequences are containers, tagged or not; scalars, nulls,
/// aliases and anything else are leaves.
impl<'input> Proxify for Yaml<'input> {
    fn into_shape(self) -> Shape<Self> {
        match self {
            Yaml::Mapping(mapping) => Shape::Container(
                mapping
                    .into_iter()
                    .filter_map(|(key, value)| match key_from_yaml(&key) {
                        Some(name) => Some((name, value)),
                        None => {
                            debug!("Skipping mapping entry with a non-scalar key: {:?}", key);
                            None
                        }
                    })
                    .collect(),
            ),
            Yaml::Sequence(items) => Shape::Container(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| (Key::from(index), item))
                    .collect(),
            ),
            Yaml::Tagged(_, inner) if matches!(*inner, Yaml::Mapping(_) | Yaml::Sequence(_)) => {
                trace!("Mirroring the contents of a tagged container");
                (*inner).into_shape()
            }
            leaf => Shape::Leaf(leaf),
        }
    }
}

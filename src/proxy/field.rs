/// Leaf of a proxy tree, wrapping a single value.
///
/// The value seen at construction is kept as the origin for the lifetime of
/// the field. Dirtiness is a live comparison against it, so setting the
/// original value back makes the field clean again.
#[derive(Debug, Clone)]
pub struct FieldProxy<T> {
    origin: T,
    current: T,
}

impl<T: Clone> FieldProxy<T> {
    pub fn new(value: T) -> Self {
        Self {
            origin: value.clone(),
            current: value,
        }
    }
}

impl<T> FieldProxy<T> {
    pub fn get(&self) -> &T {
        &self.current
    }

    pub fn set(&mut self, value: T) {
        self.current = value;
    }

    pub fn origin(&self) -> &T {
        &self.origin
    }
}

impl<T: PartialEq> FieldProxy<T> {
    pub fn is_dirty(&self) -> bool {
        self.current != self.origin
    }
}

use std::{fmt, marker::PhantomData};

///
/// Field
///
/// Typed descriptor of one stored field of object `O` holding a `V`.
/// Zero-cost: carries only the schema name. Generated as associated
/// constants by `#[derive(Object)]`.
///

pub struct Field<O, V> {
    name: &'static str,
    _marker: PhantomData<fn() -> (O, V)>,
}

impl<O, V> Field<O, V> {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// Stored schema name of the field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }
}

impl<O, V> Clone for Field<O, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O, V> Copy for Field<O, V> {}

impl<O, V> fmt::Debug for Field<O, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Field").field(&self.name).finish()
    }
}

impl<O, V> PartialEq for Field<O, V> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<O, V> Eq for Field<O, V> {}

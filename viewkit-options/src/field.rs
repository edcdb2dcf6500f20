use serde::{Deserialize, Deserializer};

/// An options field that is only written when it carries a value.
///
/// `Unset` means "leave the component's current value alone". It is
/// deliberately not [Option]: an `Option<Color>` field can hold "no color" as a
/// real value to write, while `Field<bool>` being `Unset` writes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field<T> {
    /// Leave the component's value untouched.
    Unset,
    /// Overwrite the component's value.
    Set(T),
}

impl<T> Field<T> {
    /// Create a field from an [Option], mapping [None] to [Field::Unset].
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Field::Set(value),
            None => Field::Unset,
        }
    }

    /// Returns `true` if the field carries a value.
    pub fn is_set(&self) -> bool {
        matches!(self, Field::Set(_))
    }

    /// Returns `true` if the field is unset.
    pub fn is_unset(&self) -> bool {
        !self.is_set()
    }

    /// Returns a reference to the value, if set.
    pub fn get(&self) -> Option<&T> {
        match self {
            Field::Set(value) => Some(value),
            Field::Unset => None,
        }
    }

    /// Converts into an [Option].
    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Set(value) => Some(value),
            Field::Unset => None,
        }
    }

    /// Calls `write` with the value if the field is set, and does nothing otherwise.
    pub fn if_set(self, write: impl FnOnce(T)) {
        if let Field::Set(value) = self {
            write(value);
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Unset
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Set(value)
    }
}

// A present key is always `Set`; absent keys fall back to the container's default.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Field::Set)
    }
}

//! The "all or one value" selector used by the categorical filters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Text form of [`Selector::All`].
pub const ALL_SENTINEL: &str = "all";

/// A categorical filter value: either no constraint or one exact value.
///
/// Parses from and serializes to text, with [`ALL_SENTINEL`] standing for
/// [`Selector::All`].
///
/// # Example
///
/// ```
/// use portfolio_view::filter::Selector;
///
/// let any: Selector<String> = "all".parse().unwrap();
/// assert!(any.is_all());
/// assert!(any.matches(&"d1".to_string()));
///
/// let one: Selector<String> = "d1".parse().unwrap();
/// assert!(one.matches(&"d1".to_string()));
/// assert!(!one.matches(&"d2".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector<T> {
    /// No constraint on this dimension.
    All,
    /// Only values equal to this one.
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T> Selector<T> {
    /// Creates a selector constrained to one value.
    pub fn only(value: T) -> Self {
        Selector::Only(value)
    }

    /// Returns true for the unconstrained selector.
    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }

    /// Returns the selected value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Selector::All => None,
            Selector::Only(value) => Some(value),
        }
    }
}

impl<T: PartialEq> Selector<T> {
    /// Returns true if `candidate` passes this selector.
    ///
    /// `All` passes everything; `Only(v)` passes exactly `v`.
    pub fn matches(&self, candidate: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(value) => value == candidate,
        }
    }
}

impl<T> From<T> for Selector<T> {
    fn from(value: T) -> Self {
        Selector::Only(value)
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => f.write_str(ALL_SENTINEL),
            Selector::Only(value) => value.fmt(f),
        }
    }
}

impl<T: FromStr> FromStr for Selector<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_SENTINEL {
            return Ok(Selector::All);
        }
        s.parse().map(Selector::Only)
    }
}

impl<T: Serialize> Serialize for Selector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Selector::All => serializer.serialize_str(ALL_SENTINEL),
            Selector::Only(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T> Deserialize<'de> for Selector<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

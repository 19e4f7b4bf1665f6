//! Identifier types for nodes and edges.

use std::fmt;
use std::hash::Hash;

use common_error::{HypernetError, HypernetResult};
use serde::{Deserialize, Serialize};

/// A type usable as a node or edge identifier.
///
/// Nodes and edges of one hypergraph share a key type: the dual swaps their
/// roles. Keys must be hashable and comparable; insertion order is tracked by
/// the tables themselves, so no ordering is required.
pub trait HyperKey: Clone + Eq + Hash + fmt::Debug {
    /// Build a key from an auto-assigned numeric edge ID.
    ///
    /// Fails with `InvalidParameter` when the key type cannot represent
    /// `uid`; keys are never wrapped or truncated.
    fn from_uid(uid: u64) -> HypernetResult<Self>;

    /// Whether this key is the null identifier. Null keys are rejected.
    fn is_null(&self) -> bool {
        false
    }
}

macro_rules! impl_integer_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl HyperKey for $t {
                fn from_uid(uid: u64) -> HypernetResult<Self> {
                    <$t>::try_from(uid).map_err(|_| uid_out_of_range(uid, stringify!($t)))
                }
            }
        )*
    };
}

impl_integer_key!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

fn uid_out_of_range(uid: u64, ty: &str) -> HypernetError {
    HypernetError::invalid_parameter(format!("edge ID {uid} does not fit in {ty}"))
}

impl HyperKey for String {
    fn from_uid(uid: u64) -> HypernetResult<Self> {
        Ok(uid.to_string())
    }
}

impl<T: HyperKey> HyperKey for Option<T> {
    fn from_uid(uid: u64) -> HypernetResult<Self> {
        T::from_uid(uid).map(Some)
    }

    fn is_null(&self) -> bool {
        self.is_none()
    }
}

/// Heterogeneous identifier: an integer or a string.
///
/// Lets one hypergraph mix numeric auto-assigned edge IDs with named nodes
/// and edges (`"fruits"`, `"apple"`).
///
/// # Example
///
/// ```rust
/// use hypernet_core::Id;
///
/// let auto = Id::from(0);
/// let named = Id::from("fruits");
///
/// assert!(auto.is_int());
/// assert_eq!(named.as_str(), Some("fruits"));
/// assert_eq!(named.to_string(), "fruits");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    /// Integer identifier.
    Int(i64),
    /// String identifier.
    Str(String),
}

impl Id {
    /// Check if this is an integer identifier.
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Get the integer value, if any.
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Str(_) => None,
        }
    }

    /// Get the string value, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Int(_) => None,
        }
    }
}

impl HyperKey for Id {
    fn from_uid(uid: u64) -> HypernetResult<Self> {
        i64::try_from(uid)
            .map(Self::Int)
            .map_err(|_| uid_out_of_range(uid, "i64"))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Id {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Id {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<u64> for Id {
    fn from(i: u64) -> Self {
        Self::Int(i as i64)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

/// Issues strictly increasing numeric edge IDs. Values are never reused,
/// so a stale ID can never alias an edge created later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Create an allocator starting at 0.
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// Create an allocator whose first value is `first`.
    pub const fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Return the next unused value.
    ///
    /// Fails with `InvalidParameter` once the counter is exhausted rather
    /// than wrapping around to values already handed out.
    pub fn next_uid(&mut self) -> HypernetResult<u64> {
        let uid = self.next;
        self.next = uid
            .checked_add(1)
            .ok_or_else(|| HypernetError::invalid_parameter("edge ID allocator is exhausted"))?;
        Ok(uid)
    }

    /// The value the next call to `next_uid` returns.
    pub const fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

//! Errors raised by mutating a [`Value`](crate::Value) through the wrong kind.

use crate::ValueKind;

/// A payload accessor was used on a value of another kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// `set` on a non-object, `push` on a non-list.
    #[error("invalid access: expected {expected}, found {found}")]
    InvalidAccess {
        expected: ValueKind,
        found: ValueKind,
    },
}

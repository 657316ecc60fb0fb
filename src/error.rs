use thiserror::Error;

/// Raised when a plain collection with no elements is converted into one of
/// the non-empty collection types.
///
/// Most operations signal emptiness with `Option` instead; this type exists
/// for `TryFrom` conversions and for the messages reported by decoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum EmptyError {
    /// An empty sequence or set.
    #[error("expected at least 1 element")]
    NoElements,
    /// An empty map.
    #[error("expected at least 1 field")]
    NoFields,
    #[error("String is empty")]
    EmptyString,
}

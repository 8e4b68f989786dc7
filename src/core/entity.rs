//! Object identification.
//!
//! Every authored record (card, building, onus tile) carries a unique
//! `ObjectId`. Ids are handed out by an `IdSequence` owned by the
//! generation run, so two runs (or two tests) never share a counter.
//!
//! ## Usage
//!
//! ```
//! use hive_tables::core::{IdSequence, ObjectId};
//!
//! let mut ids = IdSequence::new();
//!
//! assert_eq!(ids.next_id(), ObjectId(1));
//! assert_eq!(ids.next_id(), ObjectId(2));
//! assert_eq!(ids.issued(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for an authored record.
///
/// Assigned in authoring order starting at 1, never reused within a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub u32);

impl ObjectId {
    /// The first id issued by a fresh sequence.
    pub const FIRST: ObjectId = ObjectId(1);

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for ObjectId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Object({})", self.0)
    }
}

/// Monotonic id generator scoped to one generation run.
#[derive(Clone, Debug)]
pub struct IdSequence {
    next: u32,
}

impl IdSequence {
    /// Create a sequence whose first id is [`ObjectId::FIRST`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: ObjectId::FIRST.0,
        }
    }

    /// The id the next call to [`next_id`](Self::next_id) will return.
    #[must_use]
    pub const fn peek(&self) -> ObjectId {
        ObjectId(self.next)
    }

    /// Allocate the next id.
    pub fn next_id(&mut self) -> ObjectId {
        let id = ObjectId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub const fn issued(&self) -> u32 {
        self.next - ObjectId::FIRST.0
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_starts_at_one() {
        let mut ids = IdSequence::new();
        assert_eq!(ids.issued(), 0);
        assert_eq!(ids.next_id(), ObjectId(1));
    }

    #[test]
    fn test_sequence_is_contiguous() {
        let mut ids = IdSequence::default();
        let issued: Vec<u32> = (0..5).map(|_| ids.next_id().raw()).collect();

        assert_eq!(issued, vec![1, 2, 3, 4, 5]);
        assert_eq!(ids.issued(), 5);
    }

    #[test]
    fn test_peek_does_not_allocate() {
        let mut ids = IdSequence::new();
        assert_eq!(ids.peek(), ObjectId(1));
        assert_eq!(ids.peek(), ObjectId(1));
        assert_eq!(ids.issued(), 0);

        assert_eq!(ids.next_id(), ObjectId(1));
        assert_eq!(ids.peek(), ObjectId(2));
    }

    #[test]
    fn test_sequences_are_independent() {
        let mut a = IdSequence::new();
        let mut b = IdSequence::new();

        a.next_id();
        a.next_id();

        assert_eq!(b.next_id(), ObjectId::FIRST);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ObjectId(42)), "Object(42)");
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&ObjectId(7)).unwrap();
        assert_eq!(json, "7");

        let back: ObjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ObjectId(7));
    }
}

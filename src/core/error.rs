//! Error taxonomy for table generation.

use std::path::PathBuf;

use crate::output::OutputTable;
use crate::resources::QuantityKey;

/// Errors raised while authoring, valuing or exporting tables.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// A key with a non-zero count has no unit value.
    ///
    /// This is an authoring defect and aborts the run before any output
    /// is written.
    #[error("no unit value for key '{key}'")]
    UnknownKey { key: QuantityKey },

    /// A card type tag named a key outside the bug-type namespace.
    #[error("'{entity}' tagged with '{key}', which is not a bug type")]
    NotABugType { key: QuantityKey, entity: String },

    /// A token string contained something outside the key vocabulary.
    #[error("unknown token '{token}'")]
    UnknownToken { token: String },

    /// A table could not be encoded as JSON.
    #[error("failed to encode {table} table: {source}")]
    Encode {
        table: OutputTable,
        #[source]
        source: serde_json::Error,
    },

    /// A table could not be persisted to its destination.
    #[error("failed to write {table} table to {}: {source}", path.display())]
    Write {
        table: OutputTable,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DataError {
    /// The output table this error concerns, if any.
    #[must_use]
    pub fn table(&self) -> Option<OutputTable> {
        match self {
            DataError::Encode { table, .. } | DataError::Write { table, .. } => Some(*table),
            DataError::UnknownKey { .. }
            | DataError::NotABugType { .. }
            | DataError::UnknownToken { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_message() {
        let err = DataError::UnknownKey {
            key: QuantityKey::Clarity,
        };
        assert_eq!(err.to_string(), "no unit value for key 'clarity'");
        assert_eq!(err.table(), None);
    }

    #[test]
    fn test_write_message_names_table_and_path() {
        let err = DataError::Write {
            table: OutputTable::Buildings,
            path: PathBuf::from("data/building_data.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        let msg = err.to_string();
        assert!(msg.contains("buildings"));
        assert!(msg.contains("data/building_data.json"));
        assert_eq!(err.table(), Some(OutputTable::Buildings));
    }
}

//! Error types for the sectioned list engine.
//!
//! Both families are programmer errors: a model/view desynchronization
//! (an index outside the current model) or a registration bug (a reuse key
//! with no template). They are returned as values at the renderer boundary so
//! the host can log them and degrade instead of aborting.

use crate::model::ReuseKey;

/// Result type alias for list engine operations.
pub type Result<T> = std::result::Result<T, TableError>;

/// Errors returned by the model, reuse catalog and renderers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A section index outside the model.
    #[error("Section {section} is out of range (section count {count})")]
    SectionOutOfRange { section: usize, count: usize },

    /// A row index outside its section.
    #[error("Row {row} is out of range for section {section} (row count {count})")]
    RowOutOfRange {
        section: usize,
        row: usize,
        count: usize,
    },

    /// No template was registered for the requested reuse key.
    #[error("No view template registered for reuse key '{0}'")]
    UnknownReuseKey(ReuseKey),
}

impl TableError {
    /// Create a section range error.
    pub fn section_out_of_range(section: usize, count: usize) -> Self {
        Self::SectionOutOfRange { section, count }
    }

    /// Create a row range error.
    pub fn row_out_of_range(section: usize, row: usize, count: usize) -> Self {
        Self::RowOutOfRange {
            section,
            row,
            count,
        }
    }

    /// Create an unknown reuse key error.
    pub fn unknown_reuse_key(key: impl Into<ReuseKey>) -> Self {
        Self::UnknownReuseKey(key.into())
    }

    /// Returns `true` for model index errors (section or row out of range).
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            Self::SectionOutOfRange { .. } | Self::RowOutOfRange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TableError::section_out_of_range(4, 2).to_string(),
            "Section 4 is out of range (section count 2)"
        );
        assert_eq!(
            TableError::row_out_of_range(1, 9, 3).to_string(),
            "Row 9 is out of range for section 1 (row count 3)"
        );
        assert_eq!(
            TableError::unknown_reuse_key("profile").to_string(),
            "No view template registered for reuse key 'profile'"
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(TableError::section_out_of_range(0, 0).is_index_error());
        assert!(TableError::row_out_of_range(0, 1, 1).is_index_error());
        assert!(!TableError::unknown_reuse_key("x").is_index_error());
    }
}

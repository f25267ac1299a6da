//! Per-item error reports produced by failed operations.

use crate::error::CollectionError;

/// Result of an iterating operation: `Ok(())` or the captured fault
pub type ProcessResult<T> = std::result::Result<(), ErrorReport<T>>;

/// The fault that stopped (or, under a continue policy, last disturbed) an
/// operation, together with the element and index it happened at.
///
/// `item` and `index` are absent only when the operation failed before
/// touching any element, such as a zip length mismatch.
#[derive(Debug, Clone)]
pub struct ErrorReport<T> {
    error: CollectionError,
    item: Option<T>,
    index: Option<usize>,
    faults: usize,
}

impl<T> ErrorReport<T> {
    pub(crate) fn new(error: CollectionError, item: T, index: usize) -> Self {
        Self {
            error,
            item: Some(item),
            index: Some(index),
            faults: 1,
        }
    }

    pub(crate) fn without_item(error: CollectionError) -> Self {
        Self {
            error,
            item: None,
            index: None,
            faults: 1,
        }
    }

    /// Record a later fault; the report now describes it
    pub(crate) fn supersede(&mut self, error: CollectionError, item: T, index: usize) {
        self.error = error;
        self.item = Some(item);
        self.index = Some(index);
        self.faults += 1;
    }

    pub fn error(&self) -> &CollectionError {
        &self.error
    }

    pub fn item(&self) -> Option<&T> {
        self.item.as_ref()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Number of faults seen by the operation (always 1 under fail-fast)
    pub fn fault_count(&self) -> usize {
        self.faults
    }

    pub fn into_error(self) -> CollectionError {
        self.error
    }

    pub fn into_item(self) -> Option<T> {
        self.item
    }

    /// Replace the error with one built from the offending item.
    ///
    /// The captured item and index are left untouched. Reports without an
    /// item are returned unchanged.
    pub fn with_error_message<F, E>(mut self, formatter: F) -> Self
    where
        F: FnOnce(&T) -> E,
        E: Into<CollectionError>,
    {
        if let Some(item) = &self.item {
            self.error = formatter(item).into();
        }
        self
    }

    /// Like [`with_error_message`](Self::with_error_message), but the
    /// formatter also receives the index of the offending item.
    pub fn with_indexed_error_message<F, E>(mut self, formatter: F) -> Self
    where
        F: FnOnce(usize, &T) -> E,
        E: Into<CollectionError>,
    {
        if let (Some(index), Some(item)) = (self.index, &self.item) {
            self.error = formatter(index, item).into();
        }
        self
    }
}

impl<T> std::fmt::Display for ErrorReport<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.index {
            Some(index) => write!(f, "item at index {} failed: {}", index, self.error),
            None => write!(f, "{}", self.error),
        }
    }
}

impl<T: std::fmt::Debug> std::error::Error for ErrorReport<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Error builder methods on operation results.
///
/// On `Ok(())` every method is a no-op.
pub trait ReportExt<T> {
    fn with_error_message<F, E>(self, formatter: F) -> Self
    where
        F: FnOnce(&T) -> E,
        E: Into<CollectionError>;

    fn with_indexed_error_message<F, E>(self, formatter: F) -> Self
    where
        F: FnOnce(usize, &T) -> E,
        E: Into<CollectionError>;
}

impl<T> ReportExt<T> for ProcessResult<T> {
    fn with_error_message<F, E>(self, formatter: F) -> Self
    where
        F: FnOnce(&T) -> E,
        E: Into<CollectionError>,
    {
        self.map_err(|report| report.with_error_message(formatter))
    }

    fn with_indexed_error_message<F, E>(self, formatter: F) -> Self
    where
        F: FnOnce(usize, &T) -> E,
        E: Into<CollectionError>,
    {
        self.map_err(|report| report.with_indexed_error_message(formatter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatter_keeps_item_and_index() {
        let report = ErrorReport::new(CollectionError::panicked("index out of bounds"), "John", 2)
            .with_error_message(|name| format!("cannot process {}", name));

        assert_eq!(report.error().to_string(), "cannot process John");
        assert_eq!(report.item(), Some(&"John"));
        assert_eq!(report.index(), Some(2));
    }

    #[test]
    fn test_indexed_formatter() {
        let report = ErrorReport::new(CollectionError::custom("boom"), 3, 2)
            .with_indexed_error_message(|index, item| format!("{} at {}", item, index));
        assert_eq!(report.to_string(), "item at index 2 failed: 3 at 2");
    }

    #[test]
    fn test_formatter_skipped_without_item() {
        let report: ErrorReport<&str> =
            ErrorReport::without_item(CollectionError::length_mismatch(2, 1))
                .with_error_message(|_| "KO");
        assert!(matches!(report.error(), CollectionError::LengthMismatch { .. }));
        assert!(report.item().is_none());
    }

    #[test]
    fn test_result_extension() {
        let ok: ProcessResult<i32> = Ok(());
        assert!(ok.with_error_message(|_| "KO").is_ok());

        let failed: ProcessResult<i32> = Err(ErrorReport::new(CollectionError::custom("x"), 7, 0));
        let report = failed.with_error_message(|_| "KO").unwrap_err();
        assert_eq!(report.error().to_string(), "KO");
        assert_eq!(report.into_item(), Some(7));
    }

    #[test]
    fn test_supersede_counts_faults() {
        let mut report = ErrorReport::new(CollectionError::custom("first"), 'a', 0);
        report.supersede(CollectionError::custom("second"), 'c', 2);

        assert_eq!(report.fault_count(), 2);
        assert_eq!(report.index(), Some(2));
        assert_eq!(report.item(), Some(&'c'));
        assert_eq!(report.into_error().to_string(), "second");
    }
}

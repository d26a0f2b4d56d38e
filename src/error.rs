use thiserror::Error;

/// Reason a source row was dropped instead of becoming a record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowRejection {
    #[error("row is blank")]
    Blank,

    #[error("row has {found} cells, layout needs {expected}")]
    Short { expected: usize, found: usize },
}

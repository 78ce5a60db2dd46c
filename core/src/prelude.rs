/// Serialized form of a grid's cell texts, row-major.
pub type GridSnapshot = Vec<Vec<String>>;

/// Construction-time failures. Fatal: these abort initialization and are
/// never caught by the controller.
#[derive(thiserror::Error, Debug)]
pub enum SetupError {
    #[error("saved snapshot for {0} has no cells")]
    EmptySnapshot(String),
    #[error("saved snapshot for {id} is ragged: row {row} has {found} entries, expected {expected}")]
    RaggedSnapshot {
        id: String,
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("corrupt session snapshot for {0}: {1}")]
    CorruptSnapshot(String, String),
}

/// Per-submission failures. Recoverable: the controller inspects these and
/// falls back to the generic user-facing message.
#[derive(thiserror::Error, Debug)]
pub enum EntryError {
    #[error("malformed entry token {0:?}")]
    Malformed(String),
    #[error("zero denominator in entry token {0:?}")]
    ZeroDenominator(String),
    #[error("entry token {0:?} overflows the rational range")]
    Overflow(String),
    #[error("entry ({row}, {column}) outside {rows}x{columns} grid")]
    OutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
}

pub type EntryResult<T> = Result<T, EntryError>;

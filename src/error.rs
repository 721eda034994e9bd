pub type Result<T> = std::result::Result<T, GridError>;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum GridError {
    #[error("grid dimensions must be at least 1x1, got {rows}x{columns}")]
    EmptyDimension { rows: usize, columns: usize },

    #[error("a {rows}x{columns} grid does not fit in memory")]
    TooLarge { rows: usize, columns: usize },

    #[error("cell ({x}, {y}) is outside the {columns}x{rows} grid")]
    OutOfBounds {
        x: isize,
        y: isize,
        columns: usize,
        rows: usize,
    },
}

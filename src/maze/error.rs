use thiserror::Error;

/// Erreurs de configuration du labyrinthe.
#[derive(Debug, Error, PartialEq)]
pub enum MazeError {
    #[error("invalid maze dimensions: {cols} columns x {rows} rows (both must be at least 1)")]
    InvalidDimensions { cols: usize, rows: usize },

    #[error("invalid cell size: {width} x {height} (both must be positive and finite)")]
    InvalidCellSize { width: f64, height: f64 },
}

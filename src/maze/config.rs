use crate::maze::error::MazeError;
use crate::maze::geometry::{Layout, Point};

pub const DEFAULT_SEED: u64 = 8451;

/// Configuration d'un labyrinthe : taille de la grille, placement en pixels et graine.
#[derive(Debug, Clone, PartialEq)]
pub struct MazeConfig {
    pub x1: f64,
    pub y1: f64,
    pub cols: usize,
    pub rows: usize,
    pub cell_width: f64,
    pub cell_height: f64,
    pub seed: u64,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            x1: 10.0,
            y1: 10.0,
            cols: 50,
            rows: 40,
            cell_width: 15.0,
            cell_height: 15.0,
            seed: DEFAULT_SEED,
        }
    }
}

impl MazeConfig {
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(MazeError::InvalidDimensions {
                cols: self.cols,
                rows: self.rows,
            });
        }
        let valid = |size: f64| size.is_finite() && size > 0.0;
        if !valid(self.cell_width) || !valid(self.cell_height) {
            return Err(MazeError::InvalidCellSize {
                width: self.cell_width,
                height: self.cell_height,
            });
        }
        Ok(())
    }

    pub fn layout(&self) -> Layout {
        Layout {
            origin: Point::new(self.x1, self.y1),
            cell_width: self.cell_width,
            cell_height: self.cell_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(MazeConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let config = MazeConfig {
            cols: 0,
            ..MazeConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(MazeError::InvalidDimensions { cols: 0, rows: 40 })
        );
    }

    #[test]
    fn test_bad_cell_size_rejected() {
        let config = MazeConfig {
            cell_height: 0.0,
            ..MazeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(MazeError::InvalidCellSize { .. })
        ));

        let config = MazeConfig {
            cell_width: f64::NAN,
            ..MazeConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

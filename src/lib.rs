pub mod maze;

use crate::maze::config::MazeConfig;
use crate::maze::error::MazeError;
use crate::maze::generator::Generator;
use crate::maze::grid::Grid;
use crate::maze::render::{MazeObserver, NoopObserver};
use crate::maze::solver;

pub use crate::maze::cell::Coord;

// -----------------------------------------------------------------------------
// Maze
// -----------------------------------------------------------------------------
pub struct Maze {
    config: MazeConfig,
    grid: Grid,
    passages: usize,
}

impl Maze {
    /// Valide la configuration, crée la grille et creuse le labyrinthe.
    pub fn new(config: MazeConfig) -> Result<Self, MazeError> {
        Self::with_observer(config, &mut NoopObserver)
    }

    /// Comme `new`, en notifiant `observer` de chaque mur redessiné pendant la génération.
    pub fn with_observer<O: MazeObserver>(
        config: MazeConfig,
        observer: &mut O,
    ) -> Result<Self, MazeError> {
        config.validate()?;

        let mut grid = Grid::with_layout(config.cols, config.rows, config.layout());
        let passages = Generator::new(config.seed).generate(&mut grid, observer);
        log::info!(
            "maze ready: {}x{} cells, seed {}",
            config.cols,
            config.rows,
            config.seed
        );

        Ok(Self {
            config,
            grid,
            passages,
        })
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Nombre de passages creusés par la génération (hors entrée et sortie).
    pub fn passages(&self) -> usize {
        self.passages
    }

    pub fn solve(&mut self) -> bool {
        self.solve_with(&mut NoopObserver)
    }

    /// Résout depuis un état non visité, pour qu'un second appel refasse la même recherche.
    pub fn solve_with<O: MazeObserver>(&mut self, observer: &mut O) -> bool {
        self.grid.reset_visited();
        solver::solve(&mut self.grid, observer)
    }

    pub fn find_path(&mut self) -> Option<Vec<Coord>> {
        self.grid.reset_visited();
        solver::find_path(&mut self.grid)
    }
}

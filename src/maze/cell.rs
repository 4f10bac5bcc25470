use std::fmt;

use crate::maze::direction::Direction;
use crate::maze::geometry::{Placement, Point};
use crate::maze::walls::Walls;

/// Coordonnées d'une cellule dans la grille.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub col: usize,
    pub row: usize,
}

impl Coord {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// État d'une cellule (visitée ou pas).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    NotVisited,
    Visited,
}

/// Représente une cellule du labyrinthe.
///
/// Une cellule possède une configuration de murs, un état indiquant si elle a été visitée
/// et son placement en pixels (calculé, utile seulement au rendu).
#[derive(Debug, Clone)]
pub struct Cell {
    pub coord: Coord,
    /// Les murs délimitant la cellule.
    pub walls: Walls,
    /// L'état de la cellule.
    pub state: CellState,
    pub placement: Placement,
}

impl Cell {
    /// Crée une cellule fermée sur ses quatre côtés, non visitée.
    pub fn new(coord: Coord, placement: Placement) -> Self {
        Self {
            coord,
            walls: Walls::default(),
            state: CellState::NotVisited,
            placement,
        }
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls.has(direction)
    }

    pub fn is_visited(&self) -> bool {
        self.state == CellState::Visited
    }

    pub fn center(&self) -> Point {
        self.placement.center()
    }
}

//! Placement des cellules en pixels, pour les collaborateurs de rendu.

use crate::maze::cell::Coord;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Segment entre deux points (un mur ou un déplacement du solveur).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
}

impl Line {
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.p1.x, self.p1.y, self.p2.x, self.p2.y]
    }
}

/// Rectangle occupé par une cellule : coin haut-gauche `(x1, y1)`, coin bas-droit `(x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Placement {
    pub fn center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }
}

/// Origine de la grille et taille d'une cellule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub origin: Point,
    pub cell_width: f64,
    pub cell_height: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            origin: Point::new(0.0, 0.0),
            cell_width: 1.0,
            cell_height: 1.0,
        }
    }
}

impl Layout {
    pub fn placement(&self, coord: Coord) -> Placement {
        let x1 = self.origin.x + coord.col as f64 * self.cell_width;
        let y1 = self.origin.y + coord.row as f64 * self.cell_height;
        Placement {
            x1,
            y1,
            x2: x1 + self.cell_width,
            y2: y1 + self.cell_height,
        }
    }
}

use crate::maze::cell::{Cell, CellState, Coord};
use crate::maze::direction::Direction;
use crate::maze::geometry::Layout;

/// Grille rectangulaire de `cols x rows` cellules, rangées par colonne (`cells[col][row]`).
///
/// Chaque mur intérieur existe en double (une fois sur chaque cellule adjacente) ;
/// `remove_wall_between` garde les deux côtés cohérents.
#[derive(Debug, Clone)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Crée une grille avec une cellule d'un pixel par case, sans décalage.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self::with_layout(cols, rows, Layout::default())
    }

    /// Crée une grille dont les cellules sont placées selon `layout`.
    pub fn with_layout(cols: usize, rows: usize, layout: Layout) -> Self {
        let cells = (0..cols)
            .map(|col| {
                (0..rows)
                    .map(|row| {
                        let coord = Coord::new(col, row);
                        Cell::new(coord, layout.placement(coord))
                    })
                    .collect()
            })
            .collect();
        Self { cols, rows, cells }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Nombre total de cellules.
    pub fn len(&self) -> usize {
        self.cols * self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entrée du labyrinthe, en haut à gauche.
    pub fn entrance(&self) -> Coord {
        Coord::new(0, 0)
    }

    /// Sortie du labyrinthe, en bas à droite.
    pub fn exit(&self) -> Coord {
        Coord::new(self.cols.saturating_sub(1), self.rows.saturating_sub(1))
    }

    /// `0 <= col < cols && 0 <= row < rows`
    pub fn in_bounds(&self, col: isize, row: isize) -> bool {
        col >= 0 && row >= 0 && (col as usize) < self.cols && (row as usize) < self.rows
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.col < self.cols && coord.row < self.rows
    }

    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        self.cells.get(coord.col)?.get(coord.row)
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        self.cells.get_mut(coord.col)?.get_mut(coord.row)
    }

    /// Accès direct à une cellule. Panique hors de la grille, comme l'indexation d'une slice.
    pub fn cell(&self, coord: Coord) -> &Cell {
        &self.cells[coord.col][coord.row]
    }

    pub fn cell_mut(&mut self, coord: Coord) -> &mut Cell {
        &mut self.cells[coord.col][coord.row]
    }

    /// Parcourt toutes les cellules, colonne par colonne.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Voisin de `coord` dans la direction donnée, s'il est dans la grille.
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let (dx, dy) = direction.offset();
        let col = coord.col.checked_add_signed(dx)?;
        let row = coord.row.checked_add_signed(dy)?;
        let next = Coord::new(col, row);
        self.contains(next).then_some(next)
    }

    pub fn is_visited(&self, coord: Coord) -> bool {
        self.cell(coord).is_visited()
    }

    pub fn mark_visited(&mut self, coord: Coord) {
        self.cell_mut(coord).state = CellState::Visited;
    }

    /// Remet toutes les cellules à l'état `NotVisited`.
    pub fn reset_visited(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.state = CellState::NotVisited;
        }
    }

    /// Casse le mur partagé entre `a` et `b`, des deux côtés.
    ///
    /// Retourne `false` sans rien modifier si les cellules ne sont pas voisines.
    pub fn remove_wall_between(&mut self, a: Coord, b: Coord) -> bool {
        if !self.contains(a) || !self.contains(b) {
            return false;
        }
        let Some(direction) = Direction::between(a, b) else {
            return false;
        };
        self.cell_mut(a).walls.open(direction);
        self.cell_mut(b).walls.open(direction.turn_back());
        true
    }

    /// Vrai si aucun des deux côtés du mur entre `a` et `b` n'est présent.
    pub fn is_passage(&self, a: Coord, b: Coord) -> bool {
        match Direction::between(a, b) {
            Some(direction) => {
                !self.cell(a).has_wall(direction) && !self.cell(b).has_wall(direction.turn_back())
            }
            None => false,
        }
    }

    /// Nombre de passages ouverts entre cellules voisines, chaque mur intérieur compté une fois.
    pub fn count_open_interior_walls(&self) -> usize {
        self.iter()
            .map(|cell| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter_map(|direction| self.neighbor(cell.coord, direction))
                    .filter(|&next| self.is_passage(cell.coord, next))
                    .count()
            })
            .sum()
    }
}

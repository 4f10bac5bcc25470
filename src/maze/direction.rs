use crate::maze::cell::Coord;

/// Les quatre directions orthogonales d'une cellule.
///
/// `North` correspond au mur du haut (ligne - 1), `South` au mur du bas (ligne + 1),
/// `East` au mur de droite (colonne + 1) et `West` au mur de gauche (colonne - 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// Ordre dans lequel la génération et la résolution examinent les voisins :
/// gauche, droite, haut, bas.
pub const NEIGHBOR_ORDER: [Direction; 4] = [
    Direction::West,
    Direction::East,
    Direction::North,
    Direction::South,
];

impl Direction {
    /// Fait demi tour (par ex. North -> South)
    pub fn turn_back(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Décalage `(colonne, ligne)` d'un pas dans cette direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Direction qui mène de `from` vers `to`, si les deux cellules sont voisines.
    ///
    /// Le calcul passe par le discriminant `d = |2 * (x - i) + (y - j) - 1|`, où `(i, j)` est
    /// la cellule courante et `(x, y)` le voisin :
    ///
    /// * `0` : voisin en dessous
    /// * `1` : voisin à droite
    /// * `2` : voisin au dessus
    /// * `3` : voisin à gauche
    ///
    /// Retourne `None` si les cellules ne diffèrent pas d'exactement un pas sur un seul axe.
    pub fn between(from: Coord, to: Coord) -> Option<Self> {
        let dx = to.col as isize - from.col as isize;
        let dy = to.row as isize - from.row as isize;
        if dx.abs() + dy.abs() != 1 {
            return None;
        }

        match (2 * dx + dy - 1).abs() {
            0 => Some(Direction::South),
            1 => Some(Direction::East),
            2 => Some(Direction::North),
            3 => Some(Direction::West),
            _ => None,
        }
    }
}

/*!
 * # Visualisation ASCII du labyrinthe
 *
 * Convertit une `Grid` en texte : `+` aux coins, `---` pour un mur horizontal, `|` pour un
 * mur vertical, trois caractères d'intérieur par cellule. Les cellules du chemin sont
 * marquées ` * `.
 */

use std::collections::HashSet;

use crate::maze::cell::Coord;
use crate::maze::direction::Direction;
use crate::maze::grid::Grid;

/// Génère une représentation ASCII de la grille.
///
/// # Arguments
///
/// * `grid` - La grille à dessiner.
/// * `path` - Les cellules à marquer (vide pour un labyrinthe sans solution affichée).
///
/// # Retour
///
/// Une `String` avec une ligne de murs horizontaux au dessus de chaque rangée, puis une
/// ligne de murs verticaux, et une dernière ligne pour le bas de la grille.
pub fn visualize_maze_ascii(grid: &Grid, path: &[Coord]) -> String {
    let on_path: HashSet<Coord> = path.iter().copied().collect();
    let mut out = String::new();

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let cell = grid.cell(Coord::new(col, row));
            out.push('+');
            out.push_str(if cell.has_wall(Direction::North) { "---" } else { "   " });
        }
        out.push_str("+\n");

        for col in 0..grid.cols() {
            let coord = Coord::new(col, row);
            let cell = grid.cell(coord);
            out.push(if cell.has_wall(Direction::West) { '|' } else { ' ' });
            out.push_str(if on_path.contains(&coord) { " * " } else { "   " });
            if col + 1 == grid.cols() {
                out.push(if cell.has_wall(Direction::East) { '|' } else { ' ' });
            }
        }
        out.push('\n');
    }

    if let Some(last_row) = grid.rows().checked_sub(1) {
        for col in 0..grid.cols() {
            let cell = grid.cell(Coord::new(col, last_row));
            out.push('+');
            out.push_str(if cell.has_wall(Direction::South) { "---" } else { "   " });
        }
        out.push_str("+\n");
    }

    out
}

/*!
 * # Résolution du labyrinthe
 *
 * Parcours en profondeur avec retour arrière, de l'entrée `(0, 0)` jusqu'à la sortie
 * `(cols - 1, rows - 1)`. Chaque pas en avant est notifié à l'observateur ; chaque branche
 * sans issue est annulée par une notification `undo`. Le premier chemin trouvé gagne,
 * sans garantie de plus court chemin.
 */

use crate::maze::cell::Coord;
use crate::maze::direction::NEIGHBOR_ORDER;
use crate::maze::grid::Grid;
use crate::maze::render::{MazeObserver, MoveRecorder};

/// Une cellule en cours d'exploration et l'indice du prochain voisin à essayer.
#[derive(Debug, Clone, Copy)]
struct Frame {
    coord: Coord,
    next: usize,
}

/// Vrai si le solveur peut aller de `from` à `to` : `to` est dans la grille, pas encore
/// visité, et le mur entre les deux est absent des deux côtés.
pub fn can_move(grid: &Grid, from: Coord, to: Coord) -> bool {
    if !grid.contains(from) || !grid.contains(to) {
        return false;
    }
    !grid.is_visited(to) && grid.is_passage(from, to)
}

/// Cherche un chemin de l'entrée à la sortie. Retourne `false` si la sortie est inaccessible.
///
/// Les cellules explorées restent marquées visitées après l'appel.
pub fn solve<O: MazeObserver>(grid: &mut Grid, observer: &mut O) -> bool {
    if grid.is_empty() {
        return false;
    }

    let start = grid.entrance();
    let target = grid.exit();

    grid.mark_visited(start);
    if start == target {
        return true;
    }

    let mut visited = 1usize;
    let mut undone = 0usize;
    let mut stack = vec![Frame { coord: start, next: 0 }];

    while let Some(frame) = stack.last_mut() {
        let from = frame.coord;

        let Some(&direction) = NEIGHBOR_ORDER.get(frame.next) else {
            // Impasse : on remonte et on annule le pas qui nous a amenés ici.
            stack.pop();
            if let Some(parent) = stack.last() {
                observer.on_move(grid.cell(parent.coord), grid.cell(from), true);
                undone += 1;
            }
            continue;
        };
        frame.next += 1;

        let Some(to) = grid.neighbor(from, direction) else {
            continue;
        };
        if !can_move(grid, from, to) {
            continue;
        }

        observer.on_move(grid.cell(from), grid.cell(to), false);
        grid.mark_visited(to);
        visited += 1;

        if to == target {
            log::debug!(
                "maze solved: {} cells visited, {} moves undone, path length {}",
                visited,
                undone,
                stack.len() + 1
            );
            return true;
        }
        stack.push(Frame { coord: to, next: 0 });
    }

    log::debug!("no path to {}: {} cells visited", target, visited);
    false
}

/// Résout le labyrinthe et retourne le chemin trouvé, de l'entrée à la sortie incluses.
pub fn find_path(grid: &mut Grid) -> Option<Vec<Coord>> {
    let mut recorder = MoveRecorder::new();
    if !solve(grid, &mut recorder) {
        return None;
    }
    let path = recorder.net_path();
    if path.is_empty() {
        // Entrée et sortie confondues.
        return Some(vec![grid.entrance()]);
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::generator::generate;
    use crate::maze::render::NoopObserver;

    /// Grille 3x1 ouverte de bout en bout : (0,0) - (1,0) - (2,0).
    fn corridor() -> Grid {
        let mut grid = Grid::new(3, 1);
        grid.remove_wall_between(Coord::new(0, 0), Coord::new(1, 0));
        grid.remove_wall_between(Coord::new(1, 0), Coord::new(2, 0));
        grid
    }

    #[test]
    fn test_can_move_requires_open_wall() {
        let mut grid = Grid::new(2, 1);
        assert!(!can_move(&grid, Coord::new(0, 0), Coord::new(1, 0)));
        grid.remove_wall_between(Coord::new(0, 0), Coord::new(1, 0));
        assert!(can_move(&grid, Coord::new(0, 0), Coord::new(1, 0)));
        grid.mark_visited(Coord::new(1, 0));
        assert!(!can_move(&grid, Coord::new(0, 0), Coord::new(1, 0)));
    }

    #[test]
    fn test_can_move_rejects_out_of_bounds_and_far_cells() {
        let grid = corridor();
        assert!(!can_move(&grid, Coord::new(2, 0), Coord::new(3, 0)));
        assert!(!can_move(&grid, Coord::new(0, 0), Coord::new(2, 0)));
    }

    #[test]
    fn test_can_move_needs_both_sides_open() {
        let mut grid = Grid::new(2, 1);
        grid.cell_mut(Coord::new(0, 0)).walls.east = crate::maze::walls::Wall::Open;
        assert!(!can_move(&grid, Coord::new(0, 0), Coord::new(1, 0)));
    }

    #[test]
    fn test_solve_corridor() {
        let mut grid = corridor();
        let mut recorder = MoveRecorder::new();
        assert!(solve(&mut grid, &mut recorder));
        assert_eq!(recorder.moves.len(), 2);
        assert_eq!(recorder.undo_count(), 0);
        assert_eq!(
            recorder.net_path(),
            vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]
        );
    }

    #[test]
    fn test_solve_undoes_dead_end() {
        // (0,0) ouvre vers (1,0) (impasse) et vers (0,1) qui mène à (1,1).
        let mut grid = Grid::new(2, 2);
        grid.remove_wall_between(Coord::new(0, 0), Coord::new(1, 0));
        grid.remove_wall_between(Coord::new(0, 0), Coord::new(0, 1));
        grid.remove_wall_between(Coord::new(0, 1), Coord::new(1, 1));

        let mut recorder = MoveRecorder::new();
        assert!(solve(&mut grid, &mut recorder));

        // la droite est essayée avant le bas
        assert_eq!(recorder.moves[0].to, Coord::new(1, 0));
        assert!(!recorder.moves[0].undo);
        assert_eq!(recorder.moves[1].from, Coord::new(0, 0));
        assert_eq!(recorder.moves[1].to, Coord::new(1, 0));
        assert!(recorder.moves[1].undo);
        assert_eq!(
            recorder.net_path(),
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)]
        );
    }

    #[test]
    fn test_unsolvable_returns_false() {
        let mut grid = Grid::new(3, 3);
        grid.remove_wall_between(Coord::new(0, 0), Coord::new(1, 0));
        let mut recorder = MoveRecorder::new();
        assert!(!solve(&mut grid, &mut recorder));
        assert_eq!(recorder.undo_count(), 1);
        assert!(recorder.net_path().is_empty());
        assert_eq!(find_path(&mut Grid::new(3, 3)), None);
    }

    #[test]
    fn test_single_cell_is_solved_without_moves() {
        let mut grid = Grid::new(1, 1);
        generate(&mut grid, 1);
        let mut recorder = MoveRecorder::new();
        assert!(solve(&mut grid, &mut recorder));
        assert!(recorder.moves.is_empty());
        assert!(grid.is_visited(Coord::new(0, 0)));
    }

    #[test]
    fn test_two_by_two_seed_one() {
        let mut grid = Grid::new(2, 2);
        generate(&mut grid, 1);
        let mut recorder = MoveRecorder::new();
        assert!(solve(&mut grid, &mut recorder));
        let first = recorder.moves.first().copied();
        let last = recorder.moves.last().copied();
        assert_eq!(first.map(|m| m.from), Some(Coord::new(0, 0)));
        assert_eq!(last.map(|m| m.to), Some(Coord::new(1, 1)));
    }

    #[test]
    fn test_find_path_on_generated_maze() {
        let mut grid = Grid::new(15, 10);
        generate(&mut grid, 8451);
        let path = find_path(&mut grid).unwrap_or_default();
        assert_eq!(path.first(), Some(&Coord::new(0, 0)));
        assert_eq!(path.last(), Some(&Coord::new(14, 9)));

        let mut fresh = Grid::new(15, 10);
        generate(&mut fresh, 8451);
        for pair in path.windows(2) {
            assert!(fresh.is_passage(pair[0], pair[1]));
        }
    }

    #[test]
    fn test_no_cell_visited_twice() {
        let mut grid = Grid::new(10, 10);
        generate(&mut grid, 5);
        let mut recorder = MoveRecorder::new();
        assert!(solve(&mut grid, &mut recorder));
        let mut seen = std::collections::HashSet::new();
        seen.insert(Coord::new(0, 0));
        for m in recorder.forward_moves() {
            assert!(seen.insert(m.to), "{} entered twice", m.to);
        }
    }

    #[test]
    fn test_empty_grid() {
        let mut grid = Grid::new(0, 0);
        assert!(!solve(&mut grid, &mut NoopObserver));
    }
}

/*!
 * # Génération du labyrinthe
 *
 * Parcours en profondeur aléatoire qui casse les murs : on part d'une cellule tirée au
 * hasard, on choisit uniformément un voisin non visité, on casse le mur partagé et on
 * continue depuis ce voisin. Quand une cellule n'a plus de voisin libre, on revient à la
 * précédente. Le résultat est un arbre couvrant (labyrinthe parfait) : exactement
 * `cols * rows - 1` murs intérieurs sont cassés.
 *
 * La pile explicite reproduit l'ordre du parcours récursif, tirage aléatoire compris : une
 * même graine donne toujours le même labyrinthe.
 */

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::maze::cell::Coord;
use crate::maze::direction::NEIGHBOR_ORDER;
use crate::maze::grid::Grid;
use crate::maze::render::{MazeObserver, NoopObserver};
use crate::maze::walls::Wall;

/// Générateur de labyrinthe à graine fixe.
#[derive(Debug, Clone)]
pub struct Generator {
    rng: ChaCha8Rng,
    seed: u64,
}

impl Generator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Creuse le labyrinthe dans `grid` et retourne le nombre de passages ouverts par le
    /// parcours (entrée et sortie non comprises).
    ///
    /// Après l'appel, aucune cellule n'est marquée visitée.
    pub fn generate<O: MazeObserver>(&mut self, grid: &mut Grid, observer: &mut O) -> usize {
        if grid.is_empty() {
            return 0;
        }

        for cell in grid.iter() {
            observer.on_wall_changed(cell);
        }

        self.break_entrance_and_exit(grid, observer);

        let start = Coord::new(
            self.rng.random_range(0..grid.cols()),
            self.rng.random_range(0..grid.rows()),
        );
        let carved = self.break_walls(grid, start, observer);
        grid.reset_visited();

        log::debug!(
            "maze {}x{} generated from seed {} (start {}, {} passages)",
            grid.cols(),
            grid.rows(),
            self.seed,
            start,
            carved
        );
        carved
    }

    fn break_entrance_and_exit<O: MazeObserver>(&self, grid: &mut Grid, observer: &mut O) {
        let entrance = grid.entrance();
        grid.cell_mut(entrance).walls.west = Wall::Open;
        observer.on_wall_changed(grid.cell(entrance));

        let exit = grid.exit();
        grid.cell_mut(exit).walls.east = Wall::Open;
        observer.on_wall_changed(grid.cell(exit));
    }

    fn break_walls<O: MazeObserver>(
        &mut self,
        grid: &mut Grid,
        start: Coord,
        observer: &mut O,
    ) -> usize {
        let mut carved = 0;
        let mut stack = Vec::with_capacity(grid.len());
        let mut to_visit: Vec<Coord> = Vec::with_capacity(NEIGHBOR_ORDER.len());

        grid.mark_visited(start);
        stack.push(start);

        while let Some(&current) = stack.last() {
            to_visit.clear();
            to_visit.extend(
                NEIGHBOR_ORDER
                    .iter()
                    .filter_map(|&direction| grid.neighbor(current, direction))
                    .filter(|&next| !grid.is_visited(next)),
            );

            // Plus de voisin libre : les murs de cette cellule sont définitifs.
            let Some(&next) = to_visit.choose(&mut self.rng) else {
                observer.on_wall_changed(grid.cell(current));
                stack.pop();
                continue;
            };

            grid.remove_wall_between(current, next);
            grid.mark_visited(next);
            carved += 1;
            log::trace!("carve {} -> {}", current, next);
            stack.push(next);
        }

        carved
    }
}

/// Génère un labyrinthe dans `grid` avec la graine donnée, sans rendu.
pub fn generate(grid: &mut Grid, seed: u64) -> usize {
    Generator::new(seed).generate(grid, &mut NoopObserver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::direction::Direction;
    use crate::maze::render::MoveRecorder;

    fn walls_of(grid: &Grid) -> Vec<[bool; 4]> {
        grid.iter()
            .map(|cell| {
                [
                    cell.has_wall(Direction::North),
                    cell.has_wall(Direction::East),
                    cell.has_wall(Direction::South),
                    cell.has_wall(Direction::West),
                ]
            })
            .collect()
    }

    #[test]
    fn test_same_seed_same_maze() {
        let mut a = Grid::new(12, 9);
        let mut b = Grid::new(12, 9);
        generate(&mut a, 8451);
        generate(&mut b, 8451);
        assert_eq!(walls_of(&a), walls_of(&b));
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        let mut a = Grid::new(12, 9);
        let mut b = Grid::new(12, 9);
        generate(&mut a, 1);
        generate(&mut b, 2);
        assert_ne!(walls_of(&a), walls_of(&b));
    }

    #[test]
    fn test_spanning_tree_wall_count() {
        let mut grid = Grid::new(7, 5);
        let carved = generate(&mut grid, 42);
        assert_eq!(carved, 7 * 5 - 1);
        assert_eq!(grid.count_open_interior_walls(), 7 * 5 - 1);
    }

    #[test]
    fn test_entrance_and_exit_open() {
        for seed in 0..20 {
            let mut grid = Grid::new(5, 4);
            generate(&mut grid, seed);
            assert!(!grid.cell(Coord::new(0, 0)).has_wall(Direction::West));
            assert!(!grid.cell(Coord::new(4, 3)).has_wall(Direction::East));
        }
    }

    #[test]
    fn test_visited_reset_after_generation() {
        let mut grid = Grid::new(6, 6);
        generate(&mut grid, 3);
        assert!(grid.iter().all(|cell| !cell.is_visited()));
    }

    #[test]
    fn test_two_by_two_seed_one() {
        let mut grid = Grid::new(2, 2);
        let carved = generate(&mut grid, 1);
        assert_eq!(carved, 3);
        assert_eq!(grid.count_open_interior_walls(), 3);
        assert!(!grid.cell(Coord::new(0, 0)).has_wall(Direction::West));
        assert!(!grid.cell(Coord::new(1, 1)).has_wall(Direction::East));
    }

    #[test]
    fn test_single_cell() {
        let mut grid = Grid::new(1, 1);
        let carved = generate(&mut grid, 1);
        assert_eq!(carved, 0);
        let cell = grid.cell(Coord::new(0, 0));
        assert!(!cell.has_wall(Direction::West));
        assert!(!cell.has_wall(Direction::East));
        assert!(cell.has_wall(Direction::North));
        assert!(cell.has_wall(Direction::South));
    }

    #[test]
    fn test_observer_sees_every_cell_finalized() {
        let mut grid = Grid::new(4, 3);
        let mut recorder = MoveRecorder::new();
        Generator::new(9).generate(&mut grid, &mut recorder);

        // dessin initial + entrée/sortie + une fois par cellule terminée
        assert_eq!(recorder.wall_changes.len(), 12 + 2 + 12);
        assert_eq!(recorder.wall_changes[12], Coord::new(0, 0));
        assert_eq!(recorder.wall_changes[13], Coord::new(3, 2));
        assert!(recorder.moves.is_empty());
    }

    #[test]
    fn test_observer_does_not_change_result() {
        let mut silent = Grid::new(8, 8);
        let mut watched = Grid::new(8, 8);
        generate(&mut silent, 77);
        Generator::new(77).generate(&mut watched, &mut MoveRecorder::new());
        assert_eq!(walls_of(&silent), walls_of(&watched));
    }
}

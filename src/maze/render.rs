//! Contrat entre le labyrinthe et ses collaborateurs de rendu.
//!
//! Le générateur et le solveur notifient un `MazeObserver` de chaque changement visible.
//! L'observateur reçoit des références partagées : il peut lire les cellules, jamais les
//! modifier. Les deux méthodes ont une implémentation vide par défaut, l'absence de rendu
//! s'exprime donc avec `NoopObserver`.

use crate::maze::cell::{Cell, Coord};

pub trait MazeObserver {
    /// Les murs de `cell` sont à jour et peuvent être redessinés.
    fn on_wall_changed(&mut self, _cell: &Cell) {}

    /// Le solveur avance de `from` vers `to`, ou revient en arrière si `undo` est vrai.
    fn on_move(&mut self, _from: &Cell, _to: &Cell, _undo: bool) {}
}

/// Observateur qui ignore toutes les notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl MazeObserver for NoopObserver {}

/// Un déplacement notifié par le solveur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
    pub undo: bool,
}

/// Enregistre les notifications reçues, dans l'ordre.
#[derive(Debug, Default, Clone)]
pub struct MoveRecorder {
    pub moves: Vec<Move>,
    pub wall_changes: Vec<Coord>,
}

impl MoveRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn forward_moves(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter().filter(|m| !m.undo)
    }

    pub fn undo_count(&self) -> usize {
        self.moves.iter().filter(|m| m.undo).count()
    }

    /// Chemin net : les pas en avant moins ceux qui ont été annulés.
    ///
    /// Vide si aucun déplacement n'a été notifié.
    pub fn net_path(&self) -> Vec<Coord> {
        let mut path: Vec<Coord> = Vec::new();
        for m in &self.moves {
            if m.undo {
                if path.last() == Some(&m.to) {
                    path.pop();
                }
                if path.len() == 1 {
                    path.clear();
                }
            } else {
                if path.is_empty() {
                    path.push(m.from);
                }
                path.push(m.to);
            }
        }
        path
    }
}

impl MazeObserver for MoveRecorder {
    fn on_wall_changed(&mut self, cell: &Cell) {
        self.wall_changes.push(cell.coord);
    }

    fn on_move(&mut self, from: &Cell, to: &Cell, undo: bool) {
        self.moves.push(Move {
            from: from.coord,
            to: to.coord,
            undo,
        });
    }
}

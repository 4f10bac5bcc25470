use std::io::{self, Write};

use serde_json::{json, Value};

use crate::maze::cell::Cell;
use crate::maze::direction::Direction;
use crate::maze::geometry::Line;
use crate::maze::render::MazeObserver;

pub fn wall_event(cell: &Cell) -> Value {
    let p = &cell.placement;
    json!({
        "WallChanged": {
            "col": cell.coord.col,
            "row": cell.coord.row,
            "top": cell.has_wall(Direction::North),
            "right": cell.has_wall(Direction::East),
            "bottom": cell.has_wall(Direction::South),
            "left": cell.has_wall(Direction::West),
            "bounds": [p.x1, p.y1, p.x2, p.y2],
        }
    })
}

pub fn move_event(from: &Cell, to: &Cell, undo: bool) -> Value {
    let line = Line::new(from.center(), to.center());
    json!({
        "MoveTo": {
            "from": [from.coord.col, from.coord.row],
            "to": [to.coord.col, to.coord.row],
            "undo": undo,
            "line": line.as_array(),
        }
    })
}

/// Observateur qui écrit chaque notification sous forme d'un objet JSON par ligne.
///
/// La première erreur d'écriture est conservée et les notifications suivantes sont
/// ignorées ; `finish` la renvoie.
pub struct JsonTrace<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> JsonTrace<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    fn emit(&mut self, event: Value) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.writer, "{}", event) {
            log::error!("json trace write failed: {}", e);
            self.error = Some(e);
        }
    }

    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> MazeObserver for JsonTrace<W> {
    fn on_wall_changed(&mut self, cell: &Cell) {
        self.emit(wall_event(cell));
    }

    fn on_move(&mut self, from: &Cell, to: &Cell, undo: bool) {
        self.emit(move_event(from, to, undo));
    }
}

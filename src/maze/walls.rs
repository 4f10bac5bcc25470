use crate::maze::direction::Direction;

/// État d'un mur de cellule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Open,
    Wall,
}

/// Les quatre murs d'une cellule. Tous présents à la création.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls {
    pub north: Wall,
    pub east: Wall,
    pub south: Wall,
    pub west: Wall,
}

impl Default for Walls {
    fn default() -> Self {
        Self {
            north: Wall::Wall,
            east: Wall::Wall,
            south: Wall::Wall,
            west: Wall::Wall,
        }
    }
}

impl Walls {
    pub fn get(&self, direction: Direction) -> Wall {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    pub fn has(&self, direction: Direction) -> bool {
        self.get(direction) == Wall::Wall
    }

    /// Casse le mur dans la direction donnée.
    pub fn open(&mut self, direction: Direction) {
        let wall = match direction {
            Direction::North => &mut self.north,
            Direction::East => &mut self.east,
            Direction::South => &mut self.south,
            Direction::West => &mut self.west,
        };
        *wall = Wall::Open;
    }
}

use serde::Serialize;

/// A position on the character grid, in units of cells.
///
/// Coordinates are signed so that neighbors of the first row/column can be formed freely;
/// such cells are simply never occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn east(self) -> Self {
        Self::new(self.x + 1, self.y)
    }

    pub const fn west(self) -> Self {
        Self::new(self.x - 1, self.y)
    }

    pub const fn north(self) -> Self {
        Self::new(self.x, self.y - 1)
    }

    pub const fn south(self) -> Self {
        Self::new(self.x, self.y + 1)
    }

    pub const fn north_west(self) -> Self {
        Self::new(self.x - 1, self.y - 1)
    }

    pub const fn north_east(self) -> Self {
        Self::new(self.x + 1, self.y - 1)
    }

    pub const fn south_west(self) -> Self {
        Self::new(self.x - 1, self.y + 1)
    }

    pub const fn south_east(self) -> Self {
        Self::new(self.x + 1, self.y + 1)
    }

    /// The adjacent cell in direction `o`; `Orientation::None` yields `self`.
    pub const fn step(self, o: Orientation) -> Self {
        match o {
            Orientation::None => self,
            Orientation::N => self.north(),
            Orientation::NE => self.north_east(),
            Orientation::NW => self.north_west(),
            Orientation::S => self.south(),
            Orientation::SE => self.south_east(),
            Orientation::SW => self.south_west(),
            Orientation::E => self.east(),
            Orientation::W => self.west(),
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(column {}, row {})", self.x, self.y)
    }
}

/// The primary direction a drawable is facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Orientation {
    /// No structure present.
    #[default]
    None,
    N,
    NE,
    NW,
    S,
    SE,
    SW,
    E,
    W,
}

impl Orientation {
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::E | Self::W)
    }

    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::N | Self::S)
    }

    pub const fn is_diagonal(self) -> bool {
        matches!(self, Self::NE | Self::SE | Self::SW | Self::NW)
    }
}

//! Coordinate orders used to scan the grid.
//!
//! Every traversal visits each cell of a `width x height` rectangle exactly once. Detectors
//! depend on the visiting order to accumulate runs, so the orders are fixed.

use crate::geom::{Coord, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Row outer, column inner.
    RowMajor,
    /// Column outer, row inner.
    ColumnMajor,
    /// Groups of constant `x + y`, each walked south-west to north-east. Used for `/`.
    DiagonalUp,
    /// Groups of constant `x - y`, each walked north-west to south-east. Used for `\`.
    DiagonalDown,
}

impl Traversal {
    pub fn iter(self, width: i32, height: i32) -> Cells {
        Cells::new(self, width, height)
    }

    /// The direction of travel within one group of this traversal.
    pub const fn direction(self) -> Orientation {
        match self {
            Self::RowMajor => Orientation::E,
            Self::ColumnMajor => Orientation::S,
            Self::DiagonalUp => Orientation::NE,
            Self::DiagonalDown => Orientation::SE,
        }
    }
}

/// Iterator over the cells of a rectangle in one [`Traversal`] order.
#[derive(Debug, Clone)]
pub struct Cells {
    order: Traversal,
    width: i32,
    height: i32,
    /// Group index: row, column, `x + y` or `x - y` depending on `order`.
    group: i32,
    last_group: i32,
    /// Column of the next cell to yield within the current group.
    x: i32,
    y: i32,
}

impl Cells {
    fn new(order: Traversal, width: i32, height: i32) -> Self {
        let (group, last_group) = if width <= 0 || height <= 0 {
            (0, -1)
        } else {
            match order {
                Traversal::RowMajor => (0, height - 1),
                Traversal::ColumnMajor => (0, width - 1),
                Traversal::DiagonalUp => (0, width + height - 2),
                Traversal::DiagonalDown => (1 - height, width - 1),
            }
        };
        let mut cells = Self {
            order,
            width,
            height,
            group,
            last_group,
            x: 0,
            y: 0,
        };
        cells.enter_group();
        cells
    }

    /// Positions `x`/`y` at the first cell of `self.group`.
    fn enter_group(&mut self) {
        match self.order {
            Traversal::RowMajor => {
                self.x = 0;
                self.y = self.group;
            }
            Traversal::ColumnMajor => {
                self.x = self.group;
                self.y = 0;
            }
            Traversal::DiagonalUp => {
                self.x = (self.group - (self.height - 1)).max(0);
                self.y = self.group - self.x;
            }
            Traversal::DiagonalDown => {
                self.x = self.group.max(0);
                self.y = self.x - self.group;
            }
        }
    }

    fn in_bounds(&self) -> bool {
        (0..self.width).contains(&self.x) && (0..self.height).contains(&self.y)
    }
}

impl Iterator for Cells {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        while self.group <= self.last_group {
            if self.in_bounds() {
                let here = Coord::new(self.x, self.y);
                let next = here.step(self.order.direction());
                self.x = next.x;
                self.y = next.y;
                return Some(here);
            }
            self.group += 1;
            self.enter_group();
        }
        None
    }
}

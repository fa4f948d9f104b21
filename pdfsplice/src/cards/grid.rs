//! Card grid geometry and drop targeting.
//!
//! Cards are laid out left to right in rows that wrap at the available
//! width. A drop lands before the first card whose vertical center lies
//! below the pointer, or at the end when there is none.

use serde::{Deserialize, Serialize};

/// A point in grid coordinates, origin top-left, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
}

impl Point {
    /// Create a point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Center of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Layout parameters of the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardGrid {
    /// Width available to the grid.
    pub width: f32,
    /// Width of a card.
    pub card_width: f32,
    /// Height of a card.
    pub card_height: f32,
    /// Horizontal room reserved per card, before spacing.
    pub slot_width: f32,
    /// Gap between slots, both directions.
    pub spacing: f32,
}

impl Default for CardGrid {
    fn default() -> Self {
        Self {
            width: 800.0,
            card_width: 150.0,
            card_height: 220.0,
            slot_width: 200.0,
            spacing: 20.0,
        }
    }
}

impl CardGrid {
    /// Default card sizes at the given available width.
    pub fn with_width(width: f32) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Number of columns; always at least one.
    pub fn columns(&self) -> usize {
        let pitch = self.slot_width + self.spacing;
        if pitch <= 0.0 || !self.width.is_finite() {
            return 1;
        }
        ((self.width / pitch).floor() as usize).max(1)
    }

    /// Row and column of the card at `index`.
    pub fn cell(&self, index: usize) -> (usize, usize) {
        let columns = self.columns();
        (index / columns, index % columns)
    }

    /// Where the card at `index` is drawn.
    pub fn card_rect(&self, index: usize) -> Rect {
        let (row, col) = self.cell(index);
        Rect {
            x: col as f32 * (self.slot_width + self.spacing),
            y: row as f32 * (self.card_height + self.spacing),
            width: self.card_width,
            height: self.card_height,
        }
    }

    /// Index at which a card dropped at `point` is inserted, given `count`
    /// cards currently laid out.
    pub fn insertion_index(&self, point: Point, count: usize) -> usize {
        (0..count)
            .find(|&index| point.y < self.card_rect(index).center().y)
            .unwrap_or(count)
    }
}

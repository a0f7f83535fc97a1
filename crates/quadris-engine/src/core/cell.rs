use serde::{Deserialize, Serialize};

/// Color tag carried by every grid cell.
///
/// `Background` marks an empty cell; the other variants are the canonical
/// tetromino colors. The renderer maps these to whatever palette it likes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[repr(u8)]
pub enum ColorTag {
    /// Neutral background (empty cell).
    #[default]
    Background,
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

/// A single playfield slot: occupancy plus color tag.
///
/// Plain value type with copy semantics. The default cell is empty with the
/// background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Cell {
    pub filled: bool,
    pub color: ColorTag,
}

impl Cell {
    pub const EMPTY: Self = Self {
        filled: false,
        color: ColorTag::Background,
    };

    /// A filled cell with the given color.
    #[must_use]
    pub const fn filled(color: ColorTag) -> Self {
        Self {
            filled: true,
            color,
        }
    }
}

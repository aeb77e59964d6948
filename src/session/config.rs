//! Display configuration handed to the renderer.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{PieceKind, Side};

/// Side length of one board cell in pixels.
pub const DEFAULT_CELL_SIZE: f32 = 75.0;

/// Largest sprite dimension in pixels; sprites are scaled to fit.
pub const DEFAULT_SPRITE_SIZE: f32 = 60.0;

/// Root directory holding one sub-directory per piece style.
pub const SKINS_ROOT: &str = "Skins";

/// Piece artwork set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceStyle {
    #[default]
    Default,
    Style1,
    Style2,
}

impl PieceStyle {
    pub const ALL: [PieceStyle; 3] = [PieceStyle::Default, PieceStyle::Style1, PieceStyle::Style2];

    /// Style bound to the number keys 1-3.
    #[must_use]
    pub fn from_key(key: u32) -> Option<PieceStyle> {
        match key {
            1 => Some(PieceStyle::Default),
            2 => Some(PieceStyle::Style1),
            3 => Some(PieceStyle::Style2),
            _ => None,
        }
    }

    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            PieceStyle::Default => "Default",
            PieceStyle::Style1 => "memeSkins",
            PieceStyle::Style2 => "memeSkins2",
        }
    }

    /// Directory holding this style's sprites, with trailing slash
    #[must_use]
    pub fn asset_dir(self) -> String {
        format!("{SKINS_ROOT}/{}/", self.dir_name())
    }

    /// Sprite path for a piece in this style, e.g. `Skins/Default/W_Pawn.png`
    #[must_use]
    pub fn sprite_path(self, kind: PieceKind, side: Side) -> String {
        format!("{}{}", self.asset_dir(), sprite_file(kind, side))
    }

    /// Paths to try in order: this style, then the default style.
    #[must_use]
    pub fn sprite_candidates(self, kind: PieceKind, side: Side) -> Vec<String> {
        let mut paths = vec![self.sprite_path(kind, side)];
        if self != PieceStyle::Default {
            paths.push(PieceStyle::Default.sprite_path(kind, side));
        }
        paths
    }
}

impl fmt::Display for PieceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Sprite file name, e.g. `B_Knight.png`
#[must_use]
pub fn sprite_file(kind: PieceKind, side: Side) -> String {
    format!("{}_{}.png", side.sprite_prefix(), kind.name())
}

/// Everything the renderer needs that is not board state.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    pub cell_size: f32,
    pub sprite_size: f32,
    pub style: PieceStyle,
}

impl DisplayConfig {
    #[must_use]
    pub fn new() -> Self {
        DisplayConfig {
            cell_size: DEFAULT_CELL_SIZE,
            sprite_size: DEFAULT_SPRITE_SIZE,
            style: PieceStyle::Default,
        }
    }

    #[must_use]
    pub const fn with_style(mut self, style: PieceStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub const fn with_cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Window side length in pixels.
    #[must_use]
    pub fn board_pixels(&self) -> f32 {
        self.cell_size * 8.0
    }

    /// Uniform scale fitting a texture of the given size into `sprite_size`.
    #[must_use]
    pub fn sprite_scale(&self, texture_width: u32, texture_height: u32) -> f32 {
        let largest = texture_width.max(texture_height);
        if largest == 0 {
            1.0
        } else {
            self.sprite_size / largest as f32
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_paths() {
        assert_eq!(
            PieceStyle::Default.sprite_path(PieceKind::Pawn, Side::White),
            "Skins/Default/W_Pawn.png"
        );
        assert_eq!(
            PieceStyle::Style2.sprite_path(PieceKind::Queen, Side::Black),
            "Skins/memeSkins2/B_Queen.png"
        );
    }

    #[test]
    fn test_sprite_candidates_fall_back_to_default() {
        assert_eq!(
            PieceStyle::Style1.sprite_candidates(PieceKind::King, Side::White),
            vec![
                "Skins/memeSkins/W_King.png".to_string(),
                "Skins/Default/W_King.png".to_string(),
            ]
        );
        assert_eq!(
            PieceStyle::Default
                .sprite_candidates(PieceKind::King, Side::White)
                .len(),
            1
        );
    }

    #[test]
    fn test_style_keys() {
        assert_eq!(PieceStyle::from_key(1), Some(PieceStyle::Default));
        assert_eq!(PieceStyle::from_key(2), Some(PieceStyle::Style1));
        assert_eq!(PieceStyle::from_key(3), Some(PieceStyle::Style2));
        assert_eq!(PieceStyle::from_key(4), None);
    }

    #[test]
    fn test_default_config() {
        let config = DisplayConfig::default();
        assert_eq!(config.board_pixels(), 600.0);
        assert_eq!(config.style, PieceStyle::Default);
        assert_eq!(config.sprite_scale(120, 60), 0.5);
        assert_eq!(config.sprite_scale(0, 0), 1.0);
    }
}

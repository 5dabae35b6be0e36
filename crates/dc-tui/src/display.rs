//! Glyph system for TUI rendering
//!
//! Provides a plain ASCII glyph set and a Unicode one with block doors and
//! triangle staircases.

use dc_core::dungeon::TileKind;
use strum::{Display, EnumString, VariantNames};

/// Available graphics modes for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, VariantNames, Default)]
#[strum(serialize_all = "lowercase")]
pub enum GraphicsMode {
    /// Plain ASCII characters.
    Classic,
    /// Unicode block and triangle characters.
    Fancy,
    /// Automatically detect support.
    #[default]
    Auto,
}

/// Set of glyphs used for rendering map tiles.
pub trait GlyphSet: Send + Sync {
    /// Get the character for a tile.
    fn tile_char(&self, tile: TileKind) -> char;
}

/// ASCII glyph set.
pub struct ClassicGlyphs;

impl GlyphSet for ClassicGlyphs {
    fn tile_char(&self, tile: TileKind) -> char {
        match tile {
            TileKind::Void => ' ',
            TileKind::Floor => '.',
            TileKind::Wall => '#',
            TileKind::Door => '+',
            TileKind::Player => '@',
            TileKind::StaircaseDown => '>',
            TileKind::StaircaseUp => '<',
        }
    }
}

/// Unicode glyph set.
pub struct FancyGlyphs;

impl GlyphSet for FancyGlyphs {
    fn tile_char(&self, tile: TileKind) -> char {
        match tile {
            TileKind::Door => '█',
            TileKind::StaircaseDown => '▼',
            TileKind::StaircaseUp => '▲',
            _ => ClassicGlyphs.tile_char(tile),
        }
    }
}

/// Detect if the terminal supports Unicode/UTF-8.
pub fn supports_unicode() -> bool {
    ["LC_ALL", "LC_CTYPE", "LANG"].iter().any(|var| {
        std::env::var(var).is_ok_and(|val| {
            let val = val.to_uppercase();
            val.contains("UTF-8") || val.contains("UTF8")
        })
    })
}

/// Returns the best available glyph set for the current environment.
pub fn detect_glyph_set(mode: GraphicsMode) -> Box<dyn GlyphSet> {
    match mode {
        GraphicsMode::Classic => Box::new(ClassicGlyphs),
        GraphicsMode::Fancy => Box::new(FancyGlyphs),
        GraphicsMode::Auto => {
            if supports_unicode() {
                Box::new(FancyGlyphs)
            } else {
                Box::new(ClassicGlyphs)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_graphics_mode_parse() {
        assert_eq!(GraphicsMode::from_str("classic"), Ok(GraphicsMode::Classic));
        assert_eq!(GraphicsMode::from_str("fancy"), Ok(GraphicsMode::Fancy));
        assert!(GraphicsMode::from_str("sparkly").is_err());
        assert_eq!(GraphicsMode::default().to_string(), "auto");
        assert_eq!(GraphicsMode::VARIANTS, ["classic", "fancy", "auto"]);
    }

    #[test]
    fn test_fancy_falls_back_to_classic() {
        assert_eq!(FancyGlyphs.tile_char(TileKind::Wall), '#');
        assert_eq!(FancyGlyphs.tile_char(TileKind::Door), '█');
        assert_eq!(ClassicGlyphs.tile_char(TileKind::Door), '+');
    }
}

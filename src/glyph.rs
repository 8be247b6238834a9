//! Maps a 2x2 block of opacity flags onto a Unicode quadrant-block glyph.
//!
//! Flags are ordered top-left, top-right, bottom-left, bottom-right:
//!
//! ```text
//! a b
//! c d
//! ```

use std::collections::HashMap;

use strum::EnumIter;

use crate::error::{
    Error,
    Result,
};

/// Every 2x2 pattern and its glyph, ordered so that the pattern `[a, b, c, d]`
/// sits at index `a << 3 | b << 2 | c << 1 | d`.
pub const BLOCKS: [([u8; 4], char); 16] = [
    ([0, 0, 0, 0], ' '),
    ([0, 0, 0, 1], '▗'),
    ([0, 0, 1, 0], '▖'),
    ([0, 0, 1, 1], '▄'),
    ([0, 1, 0, 0], '▝'),
    ([0, 1, 0, 1], '▐'),
    ([0, 1, 1, 0], '▞'),
    ([0, 1, 1, 1], '▟'),
    ([1, 0, 0, 0], '▘'),
    ([1, 0, 0, 1], '▚'),
    ([1, 0, 1, 0], '▌'),
    ([1, 0, 1, 1], '▙'),
    ([1, 1, 0, 0], '▀'),
    ([1, 1, 0, 1], '▜'),
    ([1, 1, 1, 0], '▛'),
    ([1, 1, 1, 1], '█'),
];

/// One quadrant of a sample cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Pixel offset of this quadrant from the cell's top-left pixel.
    pub const fn offset(self) -> (u32, u32) {
        match self {
            Corner::TopLeft => (0, 0),
            Corner::TopRight => (1, 0),
            Corner::BottomLeft => (0, 1),
            Corner::BottomRight => (1, 1),
        }
    }
}

/// Reduces an alpha value to an opacity flag. Only fully opaque pixels count,
/// anything below 255 floors to 0.
pub const fn alpha_flag(alpha: u8) -> u8 {
    alpha / 255
}

/// Looks up the glyph for a block of opacity flags.
pub fn glyph(flags: [u8; 4]) -> Result<char> {
    if flags.iter().any(|&flag| flag > 1) {
        return Err(Error::UnmappedPattern(flags));
    }

    let [a, b, c, d] = flags;
    let index = (a << 3 | b << 2 | c << 1 | d) as usize;

    Ok(BLOCKS[index].1)
}

/// Checks that no two patterns in [`BLOCKS`] share a glyph. Run once before
/// converting anything.
pub fn verify_table() -> Result<()> {
    check_unique(&BLOCKS)
}

fn check_unique(table: &[([u8; 4], char)]) -> Result<()> {
    let mut seen = HashMap::with_capacity(table.len());

    for &(pattern, glyph) in table {
        if let Some(first) = seen.insert(glyph, pattern) {
            return Err(Error::DuplicateGlyph {
                glyph,
                first,
                second: pattern,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_pattern_has_a_distinct_glyph() {
        let mut glyphs = HashSet::new();
        for bits in 0u8..16 {
            let flags = [bits >> 3 & 1, bits >> 2 & 1, bits >> 1 & 1, bits & 1];
            let glyph = glyph(flags).unwrap();
            assert!(glyphs.insert(glyph), "{glyph:?} repeated for {flags:?}");
        }
        assert_eq!(glyphs.len(), 16);
    }

    #[test]
    fn table_is_indexed_by_pattern_bits() {
        for (index, (pattern, _)) in BLOCKS.iter().enumerate() {
            let [a, b, c, d] = *pattern;
            assert_eq!((a << 3 | b << 2 | c << 1 | d) as usize, index);
        }
    }

    #[test]
    fn table_passes_verification() {
        verify_table().unwrap();
    }

    #[test]
    fn duplicate_glyph_is_reported() {
        let mut table = BLOCKS;
        table[5].1 = '█';

        match check_unique(&table) {
            Err(Error::DuplicateGlyph {
                glyph,
                first,
                second,
            }) => {
                assert_eq!(glyph, '█');
                assert_eq!(first, [0, 1, 0, 1]);
                assert_eq!(second, [1, 1, 1, 1]);
            }
            other => panic!("expected a duplicate glyph error, got {other:?}"),
        }
    }

    #[test]
    fn corner_glyphs() {
        assert_eq!(glyph([0, 0, 0, 0]).unwrap(), ' ');
        assert_eq!(glyph([1, 1, 1, 1]).unwrap(), '█');
        assert_eq!(glyph([1, 0, 0, 1]).unwrap(), '▚');
        assert_eq!(glyph([0, 1, 1, 0]).unwrap(), '▞');
        assert_eq!(glyph([1, 1, 0, 0]).unwrap(), '▀');
        assert_eq!(glyph([0, 0, 1, 1]).unwrap(), '▄');
    }

    #[test]
    fn flags_outside_zero_one_are_unmapped() {
        assert!(matches!(
            glyph([2, 0, 0, 0]),
            Err(Error::UnmappedPattern([2, 0, 0, 0]))
        ));
        assert!(matches!(
            glyph([0, 0, 0, 255]),
            Err(Error::UnmappedPattern(_))
        ));
    }

    #[test]
    fn alpha_floors_to_a_flag() {
        assert_eq!(alpha_flag(0), 0);
        assert_eq!(alpha_flag(128), 0);
        assert_eq!(alpha_flag(254), 0);
        assert_eq!(alpha_flag(255), 1);
    }

    #[test]
    fn corners_follow_key_order() {
        let offsets = Corner::iter().map(Corner::offset).collect::<Vec<_>>();
        assert_eq!(offsets, [(0, 0), (1, 0), (0, 1), (1, 1)]);
    }
}

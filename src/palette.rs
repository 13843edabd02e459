//! Deterministic colors for categories without an explicit one.
//!
//! Categories created server-side carry no color, so screens derive one
//! from the name: the same name always hashes to the same palette slot
//! within and across screens.

/// The fixed palette categories are mapped into.
pub const CATEGORY_PALETTE: [&str; 6] = [
    "#6366f1", // indigo
    "#a855f7", // purple
    "#ec4899", // pink
    "#f43f5e", // rose
    "#f59e0b", // amber
    "#10b981", // emerald
];

/// The palette slot for `name`.
///
/// Uses the classic `hash = char + (hash << 5) - hash` string hash over
/// UTF-16 units with wrapping arithmetic, then the absolute value modulo
/// the palette size. Empty and non-ASCII names are fine; the hash may go
/// negative on the way, which is why the absolute value is taken before
/// the modulo.
pub fn palette_index(name: &str) -> usize {
    let mut hash: i32 = 0;

    for unit in name.encode_utf16() {
        hash = (unit as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }

    hash.unsigned_abs() as usize % CATEGORY_PALETTE.len()
}

/// The palette color for `name`.
pub fn category_color(name: &str) -> &'static str {
    CATEGORY_PALETTE[palette_index(name)]
}

#[cfg(test)]
mod tests {
    use super::{CATEGORY_PALETTE, category_color, palette_index};

    #[test]
    fn same_name_always_hashes_to_the_same_slot() {
        assert_eq!(palette_index("Food"), palette_index("Food"));
        assert_eq!(category_color("Food"), category_color("Food"));
    }

    #[test]
    fn empty_name_does_not_panic() {
        assert!(palette_index("") < CATEGORY_PALETTE.len());
    }

    #[test]
    fn unicode_names_do_not_panic() {
        assert!(palette_index("Groceries 🛒") < CATEGORY_PALETTE.len());
        assert!(palette_index("日用品") < CATEGORY_PALETTE.len());
    }

    #[test]
    fn long_names_overflow_safely() {
        let long_name = "a".repeat(10_000);

        assert!(palette_index(&long_name) < CATEGORY_PALETTE.len());
    }

    #[test]
    fn index_is_always_in_bounds() {
        for name in ["Food", "Travel", "Bills", "Entertainment", "", "General"] {
            assert!(palette_index(name) < CATEGORY_PALETTE.len());
        }
    }
}

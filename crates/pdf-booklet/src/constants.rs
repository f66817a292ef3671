//! Shared constants for booklet imposition
//!
//! This module centralizes the numbers the resolver and sequence builder
//! agree on.

// =============================================================================
// Sheet Geometry
// =============================================================================

/// Logical pages on one folded sheet (two per side, front and back)
pub const PAGES_PER_SHEET: usize = 4;

/// Logical pages on one printable sheet side
pub const PAGES_PER_SIDE: usize = 2;

// =============================================================================
// Signature Defaults
// =============================================================================

/// Lower bound used when a signature range omits its minimum
pub const DEFAULT_MIN_SIGNATURE: usize = PAGES_PER_SHEET;

/// Most page slots a single sequence may hold, blanks included
pub const MAX_SEQUENCE_SLOTS: usize = 1 << 24;

/// Round `value` up to the next multiple of `multiple`.
///
/// A value already on a multiple is returned unchanged. `None` on overflow.
#[inline]
pub fn round_up(value: usize, multiple: usize) -> Option<usize> {
    value.div_ceil(multiple).checked_mul(multiple)
}

/// Round `value` up to a whole number of sheets
#[inline]
pub fn round_to_sheet(value: usize) -> Option<usize> {
    round_up(value, PAGES_PER_SHEET)
}

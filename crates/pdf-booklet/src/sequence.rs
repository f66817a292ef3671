//! Page sequencing for folded signatures
//!
//! Each signature of `n` pages is a nest of `n / 4` sheets. Walking the
//! slots of a signature in print order, positions alternate between the
//! outer end of the signature and its inner start:
//!
//! ```text
//! signature of 8:   [8 | 1] [2 | 7] [6 | 3] [4 | 5]
//!                    outer sheet      inner sheet
//! ```
//!
//! Slots past the end of the document stay blank.

use log::{debug, warn};

use crate::constants::{
    MAX_SEQUENCE_SLOTS, PAGES_PER_SHEET, PAGES_PER_SIDE, round_to_sheet, round_up,
};
use crate::types::*;

/// Build the printable sequence of sheet sides.
///
/// A `signature` of 0 binds the whole document as a single signature.
/// With `cover` set, the document's last page is moved into the first
/// blank slot so it lands on the outside of the final sheet.
pub fn build_sequence(page_count: usize, signature: usize, cover: bool) -> Result<PageSequence> {
    if page_count == 0 {
        return Err(ImposeError::NoPages);
    }
    if signature % PAGES_PER_SHEET != 0 || signature > MAX_SEQUENCE_SLOTS {
        return Err(ImposeError::InvalidSignature(signature));
    }

    let max_page = if signature == 0 {
        round_to_sheet(page_count)
    } else {
        round_up(page_count, signature)
    }
    .filter(|&slots| slots <= MAX_SEQUENCE_SLOTS)
    .ok_or_else(|| ImposeError::Config(format!("{page_count} pages is too many to impose")))?;
    let signature = if signature == 0 { max_page } else { signature };

    let mut slots: Vec<Option<usize>> = (0..max_page)
        .map(|current| {
            let actual = page_for_slot(current, signature);
            (actual < page_count).then_some(actual + 1)
        })
        .collect();

    if cover {
        move_last_page_to_cover(&mut slots, page_count);
    }

    debug!(
        "sequenced {page_count} pages into {} sides (signature {signature})",
        max_page / PAGES_PER_SIDE
    );

    let sides = slots
        .chunks_exact(PAGES_PER_SIDE)
        .map(|pair| SheetSide::new(pair[0], pair[1]))
        .collect();
    Ok(PageSequence::new(signature, sides))
}

/// 0-based source page printed in slot `current`.
fn page_for_slot(current: usize, signature: usize) -> usize {
    let pos_in_sig = current % signature;
    let signature_base = current - pos_in_sig;

    match current % PAGES_PER_SHEET {
        0 | 3 => signature_base + signature - 1 - pos_in_sig / 2,
        _ => signature_base + pos_in_sig / 2,
    }
}

/// Swap the last page into the first blank slot, leaving its old slot blank.
fn move_last_page_to_cover(slots: &mut [Option<usize>], page_count: usize) {
    let last = slots.iter().position(|&slot| slot == Some(page_count));
    let first_blank = slots.iter().position(Option::is_none);

    match (last, first_blank) {
        (Some(last), Some(blank)) => {
            slots[blank] = Some(page_count);
            slots[last] = None;
        }
        (Some(_), None) => {
            warn!("cover requested but {page_count} pages fill every slot; nothing to move");
        }
        (None, _) => {}
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(seq: &PageSequence) -> Vec<Option<usize>> {
        seq.iter().flat_map(|s| [s.front, s.back]).collect()
    }

    #[test]
    fn test_page_for_slot_single_sheet() {
        let order: Vec<usize> = (0..4).map(|i| page_for_slot(i, 4)).collect();
        assert_eq!(order, vec![3, 0, 1, 2]);
    }

    #[test]
    fn test_page_for_slot_two_sheets() {
        let order: Vec<usize> = (0..8).map(|i| page_for_slot(i, 8)).collect();
        assert_eq!(order, vec![7, 0, 1, 6, 5, 2, 3, 4]);
    }

    #[test]
    fn test_page_for_slot_second_signature() {
        let order: Vec<usize> = (4..8).map(|i| page_for_slot(i, 4)).collect();
        assert_eq!(order, vec![7, 4, 5, 6]);
    }

    #[test]
    fn test_three_pages_whole_document() {
        let seq = build_sequence(3, 0, false).unwrap();
        assert_eq!(seq.signature(), 4);
        assert_eq!(flatten(&seq), vec![None, Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_cover_moves_last_page() {
        let seq = build_sequence(3, 0, true).unwrap();
        assert_eq!(flatten(&seq), vec![Some(3), Some(1), Some(2), None]);
    }

    #[test]
    fn test_cover_without_blanks_is_noop() {
        let plain = build_sequence(8, 8, false).unwrap();
        let covered = build_sequence(8, 8, true).unwrap();
        assert_eq!(plain, covered);
    }

    #[test]
    fn test_rejects_signature_too_large_to_lay_out() {
        assert!(matches!(
            build_sequence(10, MAX_SEQUENCE_SLOTS * 4, false),
            Err(ImposeError::InvalidSignature(_))
        ));
        assert!(matches!(
            build_sequence(MAX_SEQUENCE_SLOTS + 1, 0, false),
            Err(ImposeError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_odd_signature() {
        assert!(matches!(
            build_sequence(10, 6, false),
            Err(ImposeError::InvalidSignature(6))
        ));
    }
}

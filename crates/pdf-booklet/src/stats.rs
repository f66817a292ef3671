use crate::constants::{PAGES_PER_SHEET, PAGES_PER_SIDE};
use crate::types::*;

/// Calculate statistics for a booklet plan
pub fn calculate_statistics(plan: &BookletPlan) -> BookletStatistics {
    let slots = plan.sequence.slots();
    let signature = plan.sequence.signature();
    let blank_pages_added = slots - plan.page_count;

    BookletStatistics {
        source_pages: plan.page_count,
        signature,
        signatures: slots / signature,
        output_sheets: slots / PAGES_PER_SHEET,
        output_sides: slots / PAGES_PER_SIDE,
        blank_pages_added,
        cover_applied: plan.cover && blank_pages_added > 0,
    }
}

mod constants;
mod io;
mod options;
pub mod sequence;
pub mod signature;
mod stats;
mod types;

pub use constants::{PAGES_PER_SHEET, PAGES_PER_SIDE};
pub use io::read_page_count;
pub use options::*;
pub use sequence::build_sequence;
pub use signature::{find_signature, resolve};
pub use stats::calculate_statistics;
pub use types::*;

/// Resolve the signature for `page_count` pages and sequence them.
pub fn plan(page_count: usize, spec: &SignatureSpec, cover: bool) -> Result<BookletPlan> {
    let resolution = resolve(page_count, spec)?;
    let sequence = build_sequence(page_count, resolution.signature, cover)?;
    Ok(BookletPlan {
        page_count,
        cover,
        resolution,
        sequence,
    })
}

//! Signature resolution
//!
//! Turns a [`SignatureSpec`] and a page count into the concrete number of
//! pages per signature, plus the blank padding that choice costs.
//!
//! ## Ranges
//!
//! For a range `min-max` the resolver prefers the largest signature that
//! divides the (sheet-rounded) page count evenly. When no divisor within
//! the range exists, it pads the document one sheet at a time until one
//! does. A 61 page document with range `20-60`:
//!
//! ```text
//! 61 pages -> 64 (3 blanks)
//! 60, 56, ..., 36 do not divide 64; 32 does -> signature 32
//! ```

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::constants::{DEFAULT_MIN_SIGNATURE, PAGES_PER_SHEET, round_to_sheet};
use crate::types::*;

// =============================================================================
// Parsing
// =============================================================================

impl FromStr for SignatureSpec {
    type Err = ImposeError;

    /// Parse `""`, `"0"`, `"16"`, `"20-60"`, `"-32"` or `"8-"`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(SignatureSpec::Whole);
        }

        if is_digits(s) {
            let value: usize = s
                .parse()
                .map_err(|_| ImposeError::UnrecognizedSignatureFormat(s.to_string()))?;
            return match value {
                0 => Ok(SignatureSpec::Whole),
                v if v % PAGES_PER_SHEET == 0 => Ok(SignatureSpec::Exact(v)),
                v => Err(ImposeError::InvalidSignature(v)),
            };
        }

        match s.split_once('-') {
            Some((min, max)) if is_bound(min) && is_bound(max) => Ok(SignatureSpec::Range {
                min: parse_bound(min)?,
                max: parse_bound(max)?,
            }),
            _ => Err(ImposeError::UnrecognizedSignatureFormat(s.to_string())),
        }
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_bound(s: &str) -> bool {
    s.is_empty() || is_digits(s)
}

fn parse_bound(s: &str) -> Result<Option<usize>> {
    if s.is_empty() {
        return Ok(None);
    }
    s.parse()
        .map(Some)
        .map_err(|e| ImposeError::MalformedRange(format!("{s}: {e}")))
}

impl fmt::Display for SignatureSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureSpec::Whole => Ok(()),
            SignatureSpec::Exact(n) => write!(f, "{n}"),
            SignatureSpec::Range { min, max } => {
                if let Some(min) = min {
                    write!(f, "{min}")?;
                }
                f.write_str("-")?;
                if let Some(max) = max {
                    write!(f, "{max}")?;
                }
                Ok(())
            }
        }
    }
}

impl SignatureSpec {
    /// Range bounds after defaulting and rounding up to whole sheets.
    ///
    /// `Ok(None)` when the spec is not a range.
    pub fn rounded_bounds(&self, page_count: usize) -> Result<Option<(usize, usize)>> {
        match *self {
            SignatureSpec::Range { min, max } => Ok(Some((
                round_bound(min.unwrap_or(DEFAULT_MIN_SIGNATURE))?,
                round_bound(max.unwrap_or(page_count))?,
            ))),
            _ => Ok(None),
        }
    }
}

fn round_bound(bound: usize) -> Result<usize> {
    round_to_sheet(bound)
        .ok_or_else(|| ImposeError::MalformedRange(format!("{bound}: bound too large")))
}

/// Sheet-rounded page count
fn round_pages(page_count: usize) -> Result<usize> {
    round_to_sheet(page_count)
        .ok_or_else(|| ImposeError::Config(format!("{page_count} pages is too many to impose")))
}

// =============================================================================
// Resolution
// =============================================================================

/// Work out the signature size for `page_count` pages.
pub fn resolve(page_count: usize, spec: &SignatureSpec) -> Result<Resolution> {
    if page_count == 0 {
        return Err(ImposeError::NoPages);
    }

    match *spec {
        SignatureSpec::Whole => {
            let rounded = round_pages(page_count)?;
            Ok(Resolution {
                signature: rounded,
                blank_padding: rounded - page_count,
            })
        }
        SignatureSpec::Exact(n) => {
            if n == 0 || n % PAGES_PER_SHEET != 0 {
                return Err(ImposeError::InvalidSignature(n));
            }
            // The sequence builder pads to a multiple of `n` itself
            Ok(Resolution {
                signature: n,
                blank_padding: 0,
            })
        }
        SignatureSpec::Range { .. } => {
            let (min, max) = spec
                .rounded_bounds(page_count)?
                .ok_or_else(|| ImposeError::InternalInvariant("range without bounds".into()))?;
            resolve_range(page_count, min, max)
        }
    }
}

fn resolve_range(page_count: usize, min: usize, max: usize) -> Result<Resolution> {
    if max <= min {
        return Err(ImposeError::InvalidRange { min, max });
    }

    let mut rounded = round_pages(page_count)?;
    let mut needed = rounded - page_count;
    debug!("resolving {page_count} pages ({rounded} rounded) within {min}-{max}");

    if rounded <= min {
        return Ok(Resolution {
            signature: rounded,
            blank_padding: needed,
        });
    }

    let mut signature = find_signature(rounded, max)?;
    while rounded > max && signature < min {
        rounded = rounded
            .checked_add(PAGES_PER_SHEET)
            .ok_or_else(|| ImposeError::Config(format!("{page_count} pages is too many to impose")))?;
        needed += PAGES_PER_SHEET;
        signature = find_signature(rounded, max)?;
        debug!("padded to {rounded} pages, best signature now {signature}");
    }

    Ok(Resolution {
        signature,
        blank_padding: needed,
    })
}

/// Largest multiple of 4 that is at most `max` and divides `num`.
///
/// Candidates are tried downward in steps of 4, starting no higher than
/// `num` since nothing larger can divide it.
pub fn find_signature(num: usize, max: usize) -> Result<usize> {
    let start = max.min(num) / PAGES_PER_SHEET * PAGES_PER_SHEET;
    std::iter::successors(Some(start), |i| i.checked_sub(PAGES_PER_SHEET))
        .take_while(|&i| i > 0)
        .find(|&i| num % i == 0)
        .ok_or_else(|| {
            ImposeError::InternalInvariant(format!("no signature up to {max} divides {num}"))
        })
}

// =============================================================================
// Tests
// =============================================================================

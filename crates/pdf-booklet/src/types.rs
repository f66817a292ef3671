use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImposeError {
    #[error("Invalid signature {0}: must be a positive multiple of 4")]
    InvalidSignature(usize),
    #[error("Invalid signature range {min}-{max}: max must be greater than min")]
    InvalidRange { min: usize, max: usize },
    #[error("Malformed signature range: {0}")]
    MalformedRange(String),
    #[error("Unrecognized signature format: {0:?}")]
    UnrecognizedSignatureFormat(String),
    #[error("Internal invariant violated: {0}")]
    InternalInvariant(String),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages to impose")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// How the caller wants pages grouped into signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureSpec {
    /// No signature given: the whole document becomes one signature
    #[default]
    Whole,
    /// A fixed signature size (must be a positive multiple of 4)
    Exact(usize),
    /// Let the resolver pick a size between the bounds.
    /// Omitted bounds default to 4 and the page count.
    Range {
        min: Option<usize>,
        max: Option<usize>,
    },
}

/// The signature chosen for a document, along with the blank pages
/// needed to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    /// Pages per signature, always a multiple of 4
    pub signature: usize,
    /// Filler pages appended by the resolver's own rounding
    pub blank_padding: usize,
}

/// One printable side of a sheet: two logical pages side by side.
///
/// Pages are 1-based; `None` marks a blank slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetSide {
    /// Left half of the output sheet
    pub front: Option<usize>,
    /// Right half of the output sheet
    pub back: Option<usize>,
}

impl SheetSide {
    pub fn new(front: Option<usize>, back: Option<usize>) -> Self {
        Self { front, back }
    }

    pub fn is_blank(&self) -> bool {
        self.front.is_none() && self.back.is_none()
    }

    pub fn contains(&self, page: usize) -> bool {
        self.front == Some(page) || self.back == Some(page)
    }
}

impl fmt::Display for SheetSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn slot(page: Option<usize>) -> String {
            page.map_or_else(|| "-".to_string(), |p| p.to_string())
        }
        write!(f, "[{} | {}]", slot(self.front), slot(self.back))
    }
}

/// Which half of a sheet side a page landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotPosition {
    Front,
    Back,
}

/// Ordered sheet sides ready for the renderer.
///
/// Only [`build_sequence`](crate::build_sequence) constructs one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PageSequence {
    signature: usize,
    sides: Vec<SheetSide>,
}

impl PageSequence {
    pub(crate) fn new(signature: usize, sides: Vec<SheetSide>) -> Self {
        Self { signature, sides }
    }

    /// Signature size the sequence was built with
    pub fn signature(&self) -> usize {
        self.signature
    }

    pub fn sides(&self) -> &[SheetSide] {
        &self.sides
    }

    pub fn len(&self) -> usize {
        self.sides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sides.is_empty()
    }

    /// Total number of page slots, blanks included
    pub fn slots(&self) -> usize {
        self.sides.len() * 2
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SheetSide> {
        self.sides.iter()
    }

    /// Physical sheets: each chunk is the outward side followed by the
    /// side printed on its reverse.
    pub fn sheets(&self) -> std::slice::Chunks<'_, SheetSide> {
        self.sides.chunks(2)
    }

    /// Locate a logical page: index of its sheet side and which half it is on.
    pub fn position_of(&self, page: usize) -> Option<(usize, SlotPosition)> {
        self.sides.iter().enumerate().find_map(|(i, side)| {
            if side.front == Some(page) {
                Some((i, SlotPosition::Front))
            } else if side.back == Some(page) {
                Some((i, SlotPosition::Back))
            } else {
                None
            }
        })
    }
}

impl<'a> IntoIterator for &'a PageSequence {
    type Item = &'a SheetSide;
    type IntoIter = std::slice::Iter<'a, SheetSide>;

    fn into_iter(self) -> Self::IntoIter {
        self.sides.iter()
    }
}

impl IntoIterator for PageSequence {
    type Item = SheetSide;
    type IntoIter = std::vec::IntoIter<SheetSide>;

    fn into_iter(self) -> Self::IntoIter {
        self.sides.into_iter()
    }
}

/// Everything computed for one imposition request
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BookletPlan {
    pub page_count: usize,
    pub cover: bool,
    pub resolution: Resolution,
    pub sequence: PageSequence,
}

/// Statistics about the imposition
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookletStatistics {
    /// Total number of source pages
    pub source_pages: usize,
    /// Pages per signature
    pub signature: usize,
    /// Number of signatures
    pub signatures: usize,
    /// Physical sheets of paper (4 pages each)
    pub output_sheets: usize,
    /// Printable sheet sides (2 pages each)
    pub output_sides: usize,
    /// Number of blank pages added for padding
    pub blank_pages_added: usize,
    /// Whether the last page was moved onto the back cover
    pub cover_applied: bool,
}

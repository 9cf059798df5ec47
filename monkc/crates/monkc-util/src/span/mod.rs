//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations as
//! half-open byte ranges, plus file identification for drivers that handle
//! more than one buffer. Line and column numbers are not stored in the span;
//! they are resolved on demand through [`SourceFile::offset_to_line_col`].
//!
//! # Examples
//!
//! ```
//! use monkc_util::span::{FileId, Span};
//!
//! // A span covering bytes 4..8
//! let span = Span::new(4, 8);
//! assert_eq!(span.len(), 4);
//!
//! // The same span attributed to a specific file
//! let span = span.with_file_id(FileId(1));
//! assert_eq!(span.file_id, FileId(1));
//! ```

mod source_map;

pub use source_map::{SourceFile, SourceMap};

use std::fmt;

/// A unique identifier for a source file
///
/// FileIds are assigned sequentially as files are added to the [`SourceMap`].
///
/// # Examples
///
/// ```
/// use monkc_util::span::FileId;
///
/// let id = FileId(0);
/// assert_eq!(id.index(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub usize);

impl FileId {
    /// A dummy FileId for buffers that are not registered anywhere
    pub const DUMMY: FileId = FileId(0);

    /// Create a new FileId
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the raw index value
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl Default for FileId {
    #[inline]
    fn default() -> Self {
        Self::DUMMY
    }
}

/// Source location span
///
/// A `Span` is the half-open byte range `[start, end)` of a lexeme inside
/// one source buffer.
///
/// # Examples
///
/// ```
/// use monkc_util::span::Span;
///
/// let span = Span::new(10, 20);
/// assert!(span.contains(10));
/// assert!(!span.contains(20));
///
/// let point = Span::point(7);
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source (inclusive)
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// File identifier
    pub file_id: FileId,
}

impl Span {
    /// Dummy span for diagnostics without a location
    ///
    /// ```
    /// use monkc_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        file_id: FileId::DUMMY,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            file_id: FileId::DUMMY,
        }
    }

    /// Create an empty span at a single offset
    #[inline]
    pub const fn point(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Returns true if the span covers no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Number of bytes covered by the span
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if `offset` falls inside the span
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Span from the start of `self` to the end of `other`
    ///
    /// ```
    /// use monkc_util::span::Span;
    ///
    /// let joined = Span::new(0, 3).to(Span::new(8, 9));
    /// assert_eq!(joined, Span::new(0, 9));
    /// ```
    #[inline]
    pub fn to(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            file_id: self.file_id,
        }
    }

    /// Attach this span to a file
    #[inline]
    pub fn with_file_id(mut self, file_id: FileId) -> Self {
        self.file_id = file_id;
        self
    }

    /// The span as a `Range`, suitable for slicing the source buffer
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

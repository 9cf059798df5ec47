//! Source map for managing source buffers and computing source locations.
//!
//! This module provides the [`SourceMap`] type for managing the buffers a
//! driver has read and computing line/column information from byte offsets.

use std::sync::Arc;

use super::{FileId, Span};
use crate::error::{SourceMapError, SourceMapResult};

/// A source buffer with its name and precomputed line table
///
/// # Examples
///
/// ```
/// use monkc_util::span::SourceFile;
///
/// let file = SourceFile::new(0, "add.mk", "let add = fn(x, y) { x + y; };");
/// assert_eq!(file.name(), "add.mk");
/// assert_eq!(file.line_count(), 1);
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// Unique file identifier
    id: FileId,
    /// File name (path, `<stdin>` or `<repl>`)
    name: String,
    /// File content
    content: Arc<str>,
    /// Byte offsets where each line starts
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    ///
    /// # Arguments
    ///
    /// * `id` - Unique file identifier
    /// * `name` - Display name
    /// * `content` - Full buffer content
    pub fn new(id: usize, name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        std::iter::once(0)
            .chain(
                content
                    .bytes()
                    .enumerate()
                    .filter(|&(_, b)| b == b'\n')
                    .map(|(i, _)| i + 1),
            )
            .collect()
    }

    /// Get the file identifier
    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// ```
    /// use monkc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "t.mk", "let a = 1;\nlet b = 2;\n");
    /// assert_eq!(file.line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Convert a byte offset to 1-based (line, column) coordinates
    ///
    /// Column is measured in bytes from the start of the line. Offsets past
    /// the end of the buffer resolve against the last line.
    ///
    /// # Examples
    ///
    /// ```
    /// use monkc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "t.mk", "let five = 5;\nlet ten = 10;");
    /// assert_eq!(file.offset_to_line_col(4), (1, 5));
    /// assert_eq!(file.offset_to_line_col(18), (2, 5));
    /// ```
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => (line + 1, 1),
            Err(insert_point) => {
                // line_starts[0] == 0, so insert_point >= 1 for every offset
                let line = insert_point.saturating_sub(1);
                let line_start = self.line_starts.get(line).copied().unwrap_or(0);
                (line + 1, offset.saturating_sub(line_start) + 1)
            },
        }
    }

    /// Get the source line containing a byte offset
    pub fn line_at_offset(&self, offset: usize) -> Option<&str> {
        let (line, _) = self.offset_to_line_col(offset);
        self.line_at(line)
    }

    /// Get a specific source line (1-indexed), without its line terminator
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());

        let line_content = self.content.get(start..end)?;
        Some(line_content.trim_end_matches(['\n', '\r']))
    }

    /// Extract a substring from the file content with bounds checking
    ///
    /// # Returns
    ///
    /// * `Ok(&str)` - The extracted substring
    /// * `Err(SourceMapError)` - Range is inverted, out of bounds, or splits
    ///   a multi-byte character
    ///
    /// # Examples
    ///
    /// ```
    /// use monkc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "t.mk", "let five = 5;");
    /// assert_eq!(file.extract_range(4, 8).unwrap(), "five");
    /// assert!(file.extract_range(8, 4).is_err());
    /// ```
    pub fn extract_range(&self, start: usize, end: usize) -> SourceMapResult<&str> {
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }

        self.content
            .get(start..end)
            .ok_or(SourceMapError::NotCharBoundary { start, end })
    }

    /// Extract the text covered by a span with bounds checking
    pub fn extract_span(&self, span: Span) -> SourceMapResult<&str> {
        self.extract_range(span.start, span.end)
    }

    /// Returns the raw byte at `offset`, if any
    #[inline]
    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        self.content.as_bytes().get(offset).copied()
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

/// A source map owning every buffer a driver has read
///
/// # Examples
///
/// ```
/// use monkc_util::span::SourceMap;
///
/// let mut map = SourceMap::new();
/// let file_id = map.add_file("five.mk", "let five = 5;");
/// let file = map.get(file_id).unwrap();
/// assert_eq!(file.name(), "five.mk");
/// ```
#[derive(Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
}

impl SourceMap {
    /// Create a new empty source map
    #[inline]
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Add a new source file, returning its [`FileId`]
    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<Arc<str>>) -> FileId {
        let id = self.files.len();
        let file = SourceFile::new(id, name, content);
        let file_id = file.id();
        self.files.push(Arc::new(file));
        file_id
    }

    /// Get a source file by its ID
    #[inline]
    pub fn get(&self, id: FileId) -> Option<Arc<SourceFile>> {
        self.files.get(id.0).cloned()
    }

    /// Get a source file by its ID with error handling
    pub fn get_file(&self, id: FileId) -> SourceMapResult<Arc<SourceFile>> {
        self.get(id)
            .ok_or_else(|| SourceMapError::FileNotFound(format!("FileId({})", id.0)))
    }

    /// Get the number of files in the source map
    #[inline]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Iterate over every registered file in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<SourceFile>> {
        self.files.iter()
    }

    /// Render `file:line:col` for the start of a span
    ///
    /// ```
    /// use monkc_util::span::{SourceMap, Span};
    ///
    /// let mut map = SourceMap::new();
    /// let id = map.add_file("t.mk", "let a = @;");
    /// let span = Span::new(8, 9).with_file_id(id);
    /// assert_eq!(map.format_location(span).unwrap(), "t.mk:1:9");
    /// ```
    pub fn format_location(&self, span: Span) -> Option<String> {
        let file = self.get(span.file_id)?;
        let (line, col) = file.offset_to_line_col(span.start);
        Some(format!("{}:{}:{}", file.name(), line, col))
    }
}

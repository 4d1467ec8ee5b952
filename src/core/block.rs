//! Matched location block representation

/// A location block found in the scanned config, kept or removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationBlock {
    /// 1-based rank of this block among all matched blocks
    pub occurrence: usize,
    /// Line number of the block header (1-indexed)
    pub start_line: usize,
    /// Number of lines in the block, header and closing line included
    pub line_count: usize,
}

impl LocationBlock {
    /// Create a block starting at its header line
    pub fn new(occurrence: usize, start_line: usize) -> Self {
        Self {
            occurrence,
            start_line,
            line_count: 1,
        }
    }

    /// Only the first occurrence survives
    #[inline]
    pub fn is_kept(&self) -> bool {
        self.occurrence == 1
    }

    /// Get the last line of the block (1-indexed, inclusive)
    pub fn end_line(&self) -> usize {
        self.start_line + self.line_count - 1
    }
}

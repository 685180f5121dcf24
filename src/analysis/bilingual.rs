//! Chunk cursor for incremental bilingual loading.

use crate::util::text::{char_len, char_range};

/// Default chunk size for bilingual "load more", in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 2_500;

/// Tracks which fixed-size chunk of the source text to translate next.
///
/// The cursor advances by exactly one chunk per successful load; it never
/// re-fetches or replaces previously loaded chunks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkCursor {
    chunk_size: usize,
    next_chunk: usize,
}

impl Default for ChunkCursor {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE)
    }
}

impl ChunkCursor {
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk size must be positive");
        Self {
            chunk_size,
            next_chunk: 0,
        }
    }

    /// Index of the chunk the next load will fetch.
    pub fn next_chunk(&self) -> usize {
        self.next_chunk
    }

    /// The slice of `text` the next load covers; empty past the end.
    pub fn current_chunk<'a>(&self, text: &'a str) -> &'a str {
        char_range(text, self.next_chunk * self.chunk_size, self.chunk_size)
    }

    /// Move past the current chunk.
    pub fn advance(&mut self) {
        self.next_chunk += 1;
    }

    /// Whether any untranslated text remains past the cursor.
    ///
    /// Drives the visibility of the "load more" control.
    pub fn has_more(&self, text: &str) -> bool {
        char_len(text) > self.next_chunk * self.chunk_size
    }
}

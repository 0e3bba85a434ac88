//! Ordered chunk collection.
//!
//! A chunk's index is its position in the grid and never changes while the
//! chunk is present. Consumers (the clipmap index, the renderer) refer to
//! chunks by that index.

use crate::chunk::{Chunk, ChunkCoord};

/// Ordered sequence of chunks with stable indices.
#[derive(Clone, Default)]
pub struct ChunkGrid {
    chunks: Vec<Chunk>,
}

impl ChunkGrid {
    /// Creates an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty grid with room for `capacity` chunks.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chunks: Vec::with_capacity(capacity),
        }
    }

    /// Appends a chunk and returns its index.
    pub fn push(&mut self, chunk: Chunk) -> usize {
        self.chunks.push(chunk);
        self.chunks.len() - 1
    }

    /// Returns the chunk at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Chunk> {
        self.chunks.get(index)
    }

    /// Returns the chunk at `index` for editing.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Chunk> {
        self.chunks.get_mut(index)
    }

    /// Returns the index of the first chunk at `coord`.
    #[must_use]
    pub fn index_of(&self, coord: ChunkCoord) -> Option<usize> {
        self.chunks.iter().position(|chunk| chunk.coord() == coord)
    }

    /// Returns the number of chunks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Returns true if the grid holds no chunk.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Iterates chunks in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Chunk> {
        self.chunks.iter()
    }
}

impl<'a> IntoIterator for &'a ChunkGrid {
    type Item = &'a Chunk;
    type IntoIter = std::slice::Iter<'a, Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter()
    }
}

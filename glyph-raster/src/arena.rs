//! A chunked pool for fixed size records.

use alloc::vec::Vec;
use std::mem::size_of;

use crate::RasterError;

#[derive(Debug)]
enum Slot<T> {
    Occupied(T),
    Vacant { next: Option<u32> },
}

/// Pool allocator handing out `u32` handles to records of type `T`.
///
/// Records live in chunks holding a fixed batch of slots. A chunk, once
/// allocated, is never resized or released individually: freed slots are
/// threaded onto a free list that satisfies future allocations before any
/// new chunk is grown, and all chunks are released together by
/// [`release_all`](Self::release_all) or on drop.
///
/// The number of slots per chunk depends on the record size: 2000 for
/// records smaller than 32 bytes, 800 below 128 bytes and 100 otherwise.
#[derive(Debug)]
pub struct Arena<T> {
    chunks: Vec<Vec<Slot<T>>>,
    free: Option<u32>,
    live: usize,
    limit: Option<usize>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    /// Creates an empty arena with no memory limit.
    pub const fn new() -> Self {
        Self {
            chunks: Vec::new(),
            free: None,
            live: 0,
            limit: None,
        }
    }

    /// Creates an empty arena that fails to grow beyond `max_bytes` of
    /// chunk storage.
    pub const fn with_limit(max_bytes: usize) -> Self {
        Self {
            chunks: Vec::new(),
            free: None,
            live: 0,
            limit: Some(max_bytes),
        }
    }

    /// Number of slots in each chunk.
    pub const fn batch_size() -> usize {
        let size = size_of::<T>();
        if size < 32 {
            2000
        } else if size < 128 {
            800
        } else {
            100
        }
    }

    /// Stores `value` and returns its handle.
    ///
    /// Fails only when a new chunk is needed and cannot be allocated.
    pub fn alloc(&mut self, value: T) -> Result<u32, RasterError> {
        if let Some(handle) = self.free {
            let (chunk, index) = locate::<T>(handle);
            if let Some(slot) = self.chunks.get_mut(chunk).and_then(|c| c.get_mut(index)) {
                if let Slot::Vacant { next } = *slot {
                    self.free = next;
                    *slot = Slot::Occupied(value);
                    self.live += 1;
                    return Ok(handle);
                }
            }
        }
        let batch = Self::batch_size();
        if self.chunks.last().map_or(true, |chunk| chunk.len() == batch) {
            self.grow()?;
        }
        let chunk_index = self.chunks.len() - 1;
        let chunk = self.chunks.last_mut().ok_or(RasterError::OutOfMemory)?;
        let handle = chunk_index
            .checked_mul(batch)
            .and_then(|base| base.checked_add(chunk.len()))
            .and_then(|handle| u32::try_from(handle).ok())
            .filter(|handle| *handle != u32::MAX)
            .ok_or(RasterError::OutOfMemory)?;
        // capacity was reserved when the chunk was created
        chunk.push(Slot::Occupied(value));
        self.live += 1;
        Ok(handle)
    }

    /// Returns the record for `handle` to the pool.
    ///
    /// Returns `None`, and does nothing, if the handle is not live.
    pub fn free(&mut self, handle: u32) -> Option<T> {
        let (chunk, index) = locate::<T>(handle);
        let slot = self.chunks.get_mut(chunk)?.get_mut(index)?;
        if !matches!(slot, Slot::Occupied(_)) {
            return None;
        }
        let Slot::Occupied(value) = std::mem::replace(slot, Slot::Vacant { next: self.free })
        else {
            return None;
        };
        self.free = Some(handle);
        self.live -= 1;
        Some(value)
    }

    pub fn get(&self, handle: u32) -> Option<&T> {
        let (chunk, index) = locate::<T>(handle);
        match self.chunks.get(chunk)?.get(index)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get_mut(&mut self, handle: u32) -> Option<&mut T> {
        let (chunk, index) = locate::<T>(handle);
        match self.chunks.get_mut(chunk)?.get_mut(index)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    /// Drops every record and releases all chunks.
    pub fn release_all(&mut self) {
        self.chunks = Vec::new();
        self.free = None;
        self.live = 0;
    }

    /// Number of chunks currently allocated.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    fn grow(&mut self) -> Result<(), RasterError> {
        let batch = Self::batch_size();
        let chunk_bytes = batch * size_of::<Slot<T>>();
        if let Some(limit) = self.limit {
            let total = (self.chunks.len() + 1).saturating_mul(chunk_bytes);
            if total > limit {
                log::warn!(
                    "arena limit of {limit} bytes reached with {} chunks",
                    self.chunks.len()
                );
                return Err(RasterError::OutOfMemory);
            }
        }
        let mut chunk = Vec::new();
        if chunk.try_reserve_exact(batch).is_err() || self.chunks.try_reserve(1).is_err() {
            log::warn!("failed to allocate an arena chunk of {chunk_bytes} bytes");
            return Err(RasterError::OutOfMemory);
        }
        self.chunks.push(chunk);
        Ok(())
    }
}

fn locate<T>(handle: u32) -> (usize, usize) {
    let batch = Arena::<T>::batch_size();
    let handle = handle as usize;
    (handle / batch, handle % batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_sizes() {
        assert_eq!(Arena::<u64>::batch_size(), 2000);
        assert_eq!(Arena::<[u8; 31]>::batch_size(), 2000);
        assert_eq!(Arena::<[u8; 32]>::batch_size(), 800);
        assert_eq!(Arena::<[u8; 127]>::batch_size(), 800);
        assert_eq!(Arena::<[u8; 128]>::batch_size(), 100);
    }

    #[test]
    fn alloc_get_free() {
        let mut arena = Arena::new();
        let a = arena.alloc(1u64).unwrap();
        let b = arena.alloc(2u64).unwrap();
        assert_eq!(arena.get(a), Some(&1));
        *arena.get_mut(b).unwrap() = 5;
        assert_eq!(arena.free(b), Some(5));
        assert_eq!(arena.get(b), None);
        // double free is ignored
        assert_eq!(arena.free(b), None);
        assert_eq!(arena.len(), 1);
        // freed slots are reused first
        assert_eq!(arena.alloc(3u64).unwrap(), b);
        assert_eq!(arena.free(u32::MAX), None);
    }

    #[test]
    fn free_list_is_lifo() {
        let mut arena = Arena::new();
        let handles = (0..4u64).map(|v| arena.alloc(v).unwrap()).collect::<Vec<_>>();
        arena.free(handles[1]);
        arena.free(handles[3]);
        assert_eq!(arena.alloc(10).unwrap(), handles[3]);
        assert_eq!(arena.alloc(11).unwrap(), handles[1]);
        assert_eq!(arena.alloc(12).unwrap(), 4);
    }

    #[test]
    fn chunks_grow_only_at_peak() {
        let batch = Arena::<u64>::batch_size();
        let mut arena = Arena::new();
        let mut live = Vec::new();
        let mut peak = 0;
        // interleave bursts of allocation with partial frees
        for round in 0..12usize {
            for i in 0..(round * 397) % 1700 + 300 {
                live.push(arena.alloc(i as u64).unwrap());
            }
            peak = peak.max(live.len());
            let keep = live.len() * (round % 3) / 4;
            for handle in live.drain(keep..) {
                assert!(arena.free(handle).is_some());
            }
            assert_eq!(arena.len(), live.len());
        }
        assert!(peak > batch);
        assert_eq!(arena.chunk_count(), peak.div_ceil(batch));
    }

    #[test]
    fn warm_arena_does_not_grow() {
        let mut arena = Arena::new();
        for _ in 0..3 {
            let handles = (0..4500u64).map(|v| arena.alloc(v).unwrap()).collect::<Vec<_>>();
            for handle in handles {
                arena.free(handle);
            }
            assert_eq!(arena.chunk_count(), 3);
        }
        arena.release_all();
        assert_eq!(arena.chunk_count(), 0);
        assert!(arena.is_empty());
        // release is idempotent
        arena.release_all();
        assert_eq!(arena.alloc(1u64).unwrap(), 0);
    }

    #[test]
    fn limit_reports_out_of_memory() {
        let chunk_bytes = Arena::<u64>::batch_size() * size_of::<Slot<u64>>();
        let mut arena = Arena::with_limit(chunk_bytes);
        for i in 0..Arena::<u64>::batch_size() {
            arena.alloc(i as u64).unwrap();
        }
        assert_eq!(arena.alloc(0), Err(RasterError::OutOfMemory));
        // the free list still works at the limit
        arena.free(7);
        assert_eq!(arena.alloc(0), Ok(7));
        let mut arena = Arena::with_limit(0);
        assert_eq!(arena.alloc(0u64), Err(RasterError::OutOfMemory));
    }
}

//! Scratch memory for a single rasterization pass, making use of the stack
//! for small sizes.

use std::mem::{align_of, size_of};

use crate::{raster::ActiveEdge, RasterError};

/// The partitioned scratch memory used by one rasterization pass.
///
/// A single caller owned block is split into an active edge pool with one
/// slot per edge followed by the two scanline accumulators: `coverage`
/// (`width` values) and `fill` (`width + 1` values).
#[derive(Debug)]
pub struct RasterScratch<'a> {
    pub edges: &'a mut [ActiveEdge],
    pub coverage: &'a mut [f32],
    pub fill: &'a mut [f32],
}

impl<'a> RasterScratch<'a> {
    /// Returns the number of bytes required to bind scratch memory for a
    /// bitmap of the given width and number of edges.
    ///
    /// The result includes slop for aligning an arbitrary byte buffer.
    pub fn required_bytes(width: usize, edge_count: usize) -> usize {
        let mut size = edge_count.saturating_mul(size_of::<ActiveEdge>());
        let scanline_len = width.saturating_mul(2).saturating_add(1);
        size = size.saturating_add(scanline_len.saturating_mul(size_of::<f32>()));
        // If we're given a buffer that is not aligned, we'll need to
        // adjust, so add our maximum alignment requirement in bytes.
        size.saturating_add(MAX_ALIGN)
    }

    /// Partitions `buf` into scratch memory for a bitmap of the given width
    /// and number of edges.
    ///
    /// This never allocates. A buffer of [`required_bytes`] bytes always
    /// succeeds; a smaller one fails if the aligned layout does not fit.
    ///
    /// [`required_bytes`]: Self::required_bytes
    pub fn bind(buf: &'a mut [u8], width: usize, edge_count: usize) -> Result<Self, RasterError> {
        let provided = buf.len();
        let too_small = || {
            let required = Self::required_bytes(width, edge_count);
            log::warn!("rejected scratch buffer of {provided} bytes (required {required})");
            RasterError::ScratchTooSmall { required, provided }
        };
        let (edges, buf) = alloc_slice(buf, edge_count).ok_or_else(too_small)?;
        let (coverage, buf) = alloc_slice(buf, width).ok_or_else(too_small)?;
        let fill_len = width.checked_add(1).ok_or_else(too_small)?;
        let (fill, _) = alloc_slice(buf, fill_len).ok_or_else(too_small)?;
        Ok(Self {
            edges,
            coverage,
            fill,
        })
    }
}

const MAX_ALIGN: usize = if align_of::<ActiveEdge>() > align_of::<f32>() {
    align_of::<ActiveEdge>()
} else {
    align_of::<f32>()
};

/// Invokes the callback with a memory buffer of the requested size.
///
/// Sizes above the largest stack bucket are allocated on the heap, and a
/// failed heap allocation is reported as [`RasterError::OutOfMemory`].
pub(crate) fn with_temporary_memory<R>(
    size: usize,
    mut f: impl FnMut(&mut [u8]) -> Result<R, RasterError>,
) -> Result<R, RasterError> {
    if size == 0 {
        return f(&mut []);
    }
    // Wrap in a function and prevent inlining to avoid stack allocation
    // and zeroing if we don't take this code path.
    #[inline(never)]
    fn stack_mem<const STACK_SIZE: usize, R>(
        size: usize,
        mut f: impl FnMut(&mut [u8]) -> Result<R, RasterError>,
    ) -> Result<R, RasterError> {
        f(&mut [0u8; STACK_SIZE][..size])
    }
    // Use bucketed stack allocations (up to 16k) to prevent excessive zeroing
    // of memory
    if size <= 512 {
        stack_mem::<512, _>(size, f)
    } else if size <= 1024 {
        stack_mem::<1024, _>(size, f)
    } else if size <= 2048 {
        stack_mem::<2048, _>(size, f)
    } else if size <= 4096 {
        stack_mem::<4096, _>(size, f)
    } else if size <= 8192 {
        stack_mem::<8192, _>(size, f)
    } else if size <= 16384 {
        stack_mem::<16384, _>(size, f)
    } else {
        let mut buf = alloc::vec::Vec::new();
        if buf.try_reserve_exact(size).is_err() {
            log::warn!("failed to allocate {size} bytes of scratch memory");
            return Err(RasterError::OutOfMemory);
        }
        buf.resize(size, 0u8);
        f(&mut buf)
    }
}

/// Allocates a mutable slice of `T` of the given length from the specified
/// buffer.
///
/// Returns the allocated slice and the remainder of the buffer.
fn alloc_slice<T>(buf: &mut [u8], len: usize) -> Option<(&mut [T], &mut [u8])>
where
    T: bytemuck::AnyBitPattern + bytemuck::NoUninit,
{
    if len == 0 {
        return Some((Default::default(), buf));
    }
    // 1) Ensure we slice the buffer at a position that is properly aligned
    // for T.
    let base_ptr = buf.as_ptr() as usize;
    let aligned_ptr = align_up(base_ptr, align_of::<T>());
    let aligned_offset = aligned_ptr - base_ptr;
    let buf = buf.get_mut(aligned_offset..)?;
    // 2) Ensure we have enough space in the buffer to allocate our slice.
    let len_in_bytes = len.checked_mul(size_of::<T>())?;
    if len_in_bytes > buf.len() {
        return None;
    }
    let (slice_buf, rest) = buf.split_at_mut(len_in_bytes);
    // Bytemuck handles all safety guarantees here.
    let slice = bytemuck::try_cast_slice_mut(slice_buf).ok()?;
    Some((slice, rest))
}

fn align_up(len: usize, alignment: usize) -> usize {
    len + (len.wrapping_neg() & (alignment - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr_range<T>(slice: &[T]) -> std::ops::Range<usize> {
        let range = slice.as_ptr_range();
        range.start as usize..range.end as usize
    }

    fn unaligned(buf: &mut [u8]) -> &mut [u8] {
        let alignment = align_of::<ActiveEdge>();
        let addr = buf.as_ptr() as usize;
        // Force an unaligned offset
        let offset = if addr % alignment == 0 { 1 } else { 0 };
        &mut buf[offset..]
    }

    #[test]
    fn unaligned_buffer() {
        let mut buf = [0u8; 40];
        let unaligned = unaligned(&mut buf);
        assert!(unaligned.as_ptr() as usize % align_of::<f32>() != 0);
        let (slice, _) = alloc_slice::<f32>(unaligned, 8).unwrap();
        assert_eq!(slice.as_ptr() as usize % align_of::<f32>(), 0);
    }

    #[test]
    fn fail_unaligned_buffer() {
        let mut buf = [0u8; 40];
        let unaligned = unaligned(&mut buf);
        assert_eq!(alloc_slice::<f32>(unaligned, 10), None);
    }

    #[test]
    fn required_bytes_is_deterministic() {
        for (width, edges) in [(0, 0), (1, 1), (17, 3), (640, 1000)] {
            let size = RasterScratch::required_bytes(width, edges);
            assert_eq!(size, RasterScratch::required_bytes(width, edges));
            assert!(size >= edges * size_of::<ActiveEdge>() + (2 * width + 1) * 4);
        }
        assert_eq!(RasterScratch::required_bytes(usize::MAX, 4), usize::MAX);
    }

    #[test]
    fn bind_exact_size() {
        let (width, edge_count) = (13, 7);
        let required = RasterScratch::required_bytes(width, edge_count);
        // try every misalignment of the start of the block
        for start in 0..align_of::<ActiveEdge>() {
            let mut buf = vec![0xFFu8; required + start];
            let scratch = RasterScratch::bind(&mut buf[start..], width, edge_count).unwrap();
            assert_eq!(scratch.edges.len(), edge_count);
            assert_eq!(scratch.coverage.len(), width);
            assert_eq!(scratch.fill.len(), width + 1);
            let edges = addr_range(scratch.edges);
            let coverage = addr_range(scratch.coverage);
            let fill = addr_range(scratch.fill);
            assert!(edges.end <= coverage.start);
            assert!(coverage.end <= fill.start);
            assert_eq!(edges.start % align_of::<ActiveEdge>(), 0);
            assert_eq!(coverage.start % align_of::<f32>(), 0);
            assert_eq!(fill.start % align_of::<f32>(), 0);
        }
    }

    #[test]
    fn fail_bind() {
        let (width, edge_count) = (13, 7);
        // Required size adds slop to account for alignment. Subtract
        // more than that to force a failure.
        let not_enough = RasterScratch::required_bytes(width, edge_count) - MAX_ALIGN - 1;
        let mut buf = vec![0u8; not_enough];
        assert_eq!(
            RasterScratch::bind(&mut buf, width, edge_count).unwrap_err(),
            RasterError::ScratchTooSmall {
                required: not_enough + MAX_ALIGN + 1,
                provided: not_enough,
            }
        );
    }

    #[test]
    fn temporary_memory_sizes() {
        for size in [0, 1, 512, 513, 16384, 16385, 100_000] {
            let len = with_temporary_memory(size, |buf| Ok(buf.len())).unwrap();
            assert_eq!(len, size);
        }
    }
}

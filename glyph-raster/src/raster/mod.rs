//! The scanline sweep.
//!
//! Rows are processed top to bottom. Before each row, edges that end above
//! it are retired from the active list and edges that start before its
//! bottom are activated. Every active edge then adds its exact signed area
//! to the row accumulators, which are integrated left to right into pixel
//! values.

mod active;
mod fill;

use alloc::vec::Vec;

use crate::{
    memory::{with_temporary_memory, RasterScratch},
    Arena, BitmapMut, Edge, EdgeList, Point, RasterError, RasterOptions,
};

#[cfg(feature = "libm")]
#[allow(unused_imports)]
use core_maths::CoreFloat;

pub use active::ActiveEdge;
pub(crate) use active::{EdgePool, ScratchPool, NIL};

/// Rasterizes closed, flattened contours into `target`.
///
/// `contour_lengths` holds the number of points in each consecutive contour
/// of `points`. Temporary memory is taken from the stack when small enough
/// and from the heap otherwise; use a [`Rasterizer`] to reuse allocations
/// across glyphs.
///
/// On error, `target` is cleared.
pub fn rasterize<P>(
    target: &mut BitmapMut,
    points: &[P],
    contour_lengths: &[usize],
    options: &RasterOptions,
) -> Result<(), RasterError>
where
    P: Copy + Into<Point>,
{
    let edges = EdgeList::from_contours(points, contour_lengths, options);
    rasterize_edges(target, &edges, options.offset_x, options.offset_y)
}

/// Rasterizes a list of edges into `target`.
///
/// Pixel `(0, 0)` of the target covers the unit square at
/// `(offset_x, offset_y)` in edge space. All scratch memory for the pass is
/// bound from a single temporary block sized by
/// [`RasterScratch::required_bytes`].
///
/// On error, `target` is cleared.
pub fn rasterize_edges(
    target: &mut BitmapMut,
    edges: &EdgeList,
    offset_x: i32,
    offset_y: i32,
) -> Result<(), RasterError> {
    let result = check_edge_count(edges).and_then(|_| {
        let width = target.width();
        let size = RasterScratch::required_bytes(width, edges.len());
        with_temporary_memory(size, |buf| {
            let scratch = RasterScratch::bind(buf, width, edges.len())?;
            let mut pool = ScratchPool::new(scratch.edges);
            sweep(
                target,
                edges.edges(),
                offset_x,
                offset_y,
                &mut pool,
                scratch.coverage,
                scratch.fill,
            )
        })
    });
    blank_on_error(target, result)
}

/// Rasterization context that keeps its memory between glyphs.
///
/// Active edges are allocated from an [`Arena`], so once the context has
/// seen a glyph with the largest number of simultaneously active edges,
/// further glyphs are rasterized without allocating chunks.
#[derive(Debug, Default)]
pub struct Rasterizer {
    edges: EdgeList,
    arena: Arena<ActiveEdge>,
    scanline: Vec<f32>,
}

impl Rasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context whose active edge storage may not exceed
    /// `max_bytes`.
    pub fn with_memory_limit(max_bytes: usize) -> Self {
        Self {
            arena: Arena::with_limit(max_bytes),
            ..Default::default()
        }
    }

    /// Returns the arena holding active edges.
    pub fn arena(&self) -> &Arena<ActiveEdge> {
        &self.arena
    }

    /// Rasterizes closed, flattened contours into `target`.
    ///
    /// See [`rasterize`].
    pub fn rasterize<P>(
        &mut self,
        target: &mut BitmapMut,
        points: &[P],
        contour_lengths: &[usize],
        options: &RasterOptions,
    ) -> Result<(), RasterError>
    where
        P: Copy + Into<Point>,
    {
        let mut edges = std::mem::take(&mut self.edges);
        edges.build(points, contour_lengths, options);
        let result = self.rasterize_edges(target, &edges, options.offset_x, options.offset_y);
        self.edges = edges;
        result
    }

    /// Rasterizes a list of edges into `target`.
    ///
    /// See [`rasterize_edges`].
    pub fn rasterize_edges(
        &mut self,
        target: &mut BitmapMut,
        edges: &EdgeList,
        offset_x: i32,
        offset_y: i32,
    ) -> Result<(), RasterError> {
        let result = check_edge_count(edges).and_then(|_| {
            let width = target.width();
            let len = width
                .checked_mul(2)
                .and_then(|len| len.checked_add(1))
                .ok_or(RasterError::OutOfMemory)?;
            self.scanline.clear();
            self.scanline
                .try_reserve(len)
                .map_err(|_| RasterError::OutOfMemory)?;
            self.scanline.resize(len, 0.0);
            let (coverage, fill) = self.scanline.split_at_mut(width);
            sweep(
                target,
                edges.edges(),
                offset_x,
                offset_y,
                &mut self.arena,
                coverage,
                fill,
            )
        });
        blank_on_error(target, result)
    }
}

fn check_edge_count(edges: &EdgeList) -> Result<(), RasterError> {
    // every edge may be active at once and NIL must stay unused
    if edges.len() >= NIL as usize {
        return Err(RasterError::TooManyEdges(edges.len()));
    }
    Ok(())
}

fn blank_on_error(
    target: &mut BitmapMut,
    result: Result<(), RasterError>,
) -> Result<(), RasterError> {
    if let Err(e) = &result {
        log::warn!("rasterization failed, leaving the glyph blank: {e}");
        target.clear();
    }
    result
}

/// Runs the sweep and returns all remaining active edges to the pool.
fn sweep(
    target: &mut BitmapMut,
    edges: &[Edge],
    offset_x: i32,
    offset_y: i32,
    pool: &mut impl EdgePool,
    coverage: &mut [f32],
    fill: &mut [f32],
) -> Result<(), RasterError> {
    let mut active = NIL;
    let result = sweep_rows(
        target,
        edges,
        offset_x,
        offset_y,
        pool,
        &mut active,
        coverage,
        fill,
    );
    while let Some(next) = pool.get(active).map(|edge| edge.next) {
        pool.free(active);
        active = next;
    }
    result
}

#[allow(clippy::too_many_arguments)]
fn sweep_rows(
    target: &mut BitmapMut,
    edges: &[Edge],
    offset_x: i32,
    offset_y: i32,
    pool: &mut impl EdgePool,
    active: &mut u32,
    coverage: &mut [f32],
    fill: &mut [f32],
) -> Result<(), RasterError> {
    let mut pending = edges.iter().filter(|edge| edge.y0 != edge.y1).peekable();
    let mut activated = 0usize;
    let mut y = offset_y as f32;
    for j in 0..target.height() {
        let y_top = y;
        let y_bottom = y + 1.0;
        coverage.fill(0.0);
        fill.fill(0.0);
        // retire edges that end above this scanline
        let mut prev = NIL;
        let mut handle = *active;
        while let Some(edge) = pool.get(handle) {
            let (next, ey) = (edge.next, edge.ey);
            if ey <= y_top {
                if prev == NIL {
                    *active = next;
                } else if let Some(prev) = pool.get_mut(prev) {
                    prev.next = next;
                }
                pool.free(handle);
            } else {
                prev = handle;
            }
            handle = next;
        }
        // activate edges that start before the bottom of this scanline
        while let Some(edge) = pending.next_if(|edge| edge.y0 <= y_bottom) {
            let mut z = ActiveEdge::new(edge, offset_x, y_top);
            if j == 0 && offset_y != 0 && z.ey < y_top {
                // rounding from subpixel positioning can leave the edge
                // ending just above the first scanline
                z.ey = y_top;
            }
            if z.ey < y_top {
                // entirely above the bitmap
                continue;
            }
            z.next = *active;
            *active = pool.alloc(z)?;
            activated += 1;
        }
        if *active != NIL {
            fill::fill_active_edges(coverage, fill, &*pool, *active, y_top);
        }
        if let Some(row) = target.row_mut(j) {
            let mut sum = 0.0;
            for ((pixel, coverage), fill) in row.iter_mut().zip(coverage.iter()).zip(fill.iter()) {
                sum += *fill;
                let k = (*coverage + sum).abs() * 255.0 + 0.5;
                *pixel = (k as i32).min(255) as u8;
            }
        }
        // step every active edge down to the next scanline
        let mut handle = *active;
        while let Some(edge) = pool.get_mut(handle) {
            edge.fx += edge.fdx;
            handle = edge.next;
        }
        y += 1.0;
    }
    log::trace!(
        "swept {} rows: {} of {} edges activated",
        target.height(),
        activated,
        edges.len()
    );
    Ok(())
}

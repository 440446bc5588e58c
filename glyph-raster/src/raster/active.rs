//! Active edges and the pools they are allocated from.

use crate::{Arena, Edge, RasterError};

/// Handle value terminating an active edge list.
pub(crate) const NIL: u32 = u32::MAX;

/// An edge that intersects the scanline currently being processed.
///
/// Active edges form a singly linked list through `next`, which holds the
/// pool handle of the following edge or `u32::MAX` at the end.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ActiveEdge {
    /// X coordinate where the edge crosses the top of the current scanline,
    /// relative to the left of the bitmap.
    pub fx: f32,
    /// Change in x per unit of y.
    pub fdx: f32,
    /// Change in y per unit of x, or zero for vertical edges.
    pub fdy: f32,
    /// Winding direction, `1.0` or `-1.0`.
    pub direction: f32,
    /// Top of the edge.
    pub sy: f32,
    /// Bottom of the edge.
    pub ey: f32,
    /// Pool handle of the next active edge, or `u32::MAX` at the end of
    /// the list.
    pub next: u32,
}

impl ActiveEdge {
    /// Activates `edge` for a sweep whose current scanline starts at
    /// `start_point`, with the bitmap origin at `offset_x`.
    pub fn new(edge: &Edge, offset_x: i32, start_point: f32) -> Self {
        let dxdy = (edge.x1 - edge.x0) / (edge.y1 - edge.y0);
        Self {
            fx: edge.x0 + dxdy * (start_point - edge.y0) - offset_x as f32,
            fdx: dxdy,
            fdy: if dxdy != 0.0 { 1.0 / dxdy } else { 0.0 },
            direction: edge.direction(),
            sy: edge.y0,
            ey: edge.y1,
            next: NIL,
        }
    }
}

/// Storage for the active edges of one sweep.
pub(crate) trait EdgePool {
    fn alloc(&mut self, edge: ActiveEdge) -> Result<u32, RasterError>;
    fn free(&mut self, handle: u32);
    fn get(&self, handle: u32) -> Option<&ActiveEdge>;
    fn get_mut(&mut self, handle: u32) -> Option<&mut ActiveEdge>;
}

impl EdgePool for Arena<ActiveEdge> {
    fn alloc(&mut self, edge: ActiveEdge) -> Result<u32, RasterError> {
        Arena::alloc(self, edge)
    }

    fn free(&mut self, handle: u32) {
        Arena::free(self, handle);
    }

    fn get(&self, handle: u32) -> Option<&ActiveEdge> {
        Arena::get(self, handle)
    }

    fn get_mut(&mut self, handle: u32) -> Option<&mut ActiveEdge> {
        Arena::get_mut(self, handle)
    }
}

/// A fixed capacity pool over a bound scratch slice.
///
/// Slots are handed out in order, and freed slots are chained through
/// their `next` field.
pub(crate) struct ScratchPool<'a> {
    edges: &'a mut [ActiveEdge],
    used: usize,
    free: u32,
}

impl<'a> ScratchPool<'a> {
    pub fn new(edges: &'a mut [ActiveEdge]) -> Self {
        Self {
            edges,
            used: 0,
            free: NIL,
        }
    }
}

impl EdgePool for ScratchPool<'_> {
    fn alloc(&mut self, edge: ActiveEdge) -> Result<u32, RasterError> {
        if let Some(slot) = self.edges.get_mut(self.free as usize) {
            let handle = self.free;
            self.free = slot.next;
            *slot = edge;
            return Ok(handle);
        }
        let handle = u32::try_from(self.used).map_err(|_| RasterError::OutOfMemory)?;
        let slot = self
            .edges
            .get_mut(self.used)
            .ok_or(RasterError::OutOfMemory)?;
        *slot = edge;
        self.used += 1;
        Ok(handle)
    }

    fn free(&mut self, handle: u32) {
        if let Some(slot) = self.edges.get_mut(handle as usize) {
            slot.next = self.free;
            self.free = handle;
        }
    }

    fn get(&self, handle: u32) -> Option<&ActiveEdge> {
        self.edges.get(handle as usize)
    }

    fn get_mut(&mut self, handle: u32) -> Option<&mut ActiveEdge> {
        self.edges.get_mut(handle as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(x0: f32, y0: f32, x1: f32, y1: f32) -> Edge {
        Edge {
            x0,
            y0,
            x1,
            y1,
            winding: -1,
        }
    }

    #[test]
    fn active_edge_size() {
        assert_eq!(std::mem::size_of::<ActiveEdge>(), 28);
    }

    #[test]
    fn activate_sloped_edge() {
        let active = ActiveEdge::new(&edge(2.0, 1.0, 6.0, 3.0), 1, 2.0);
        assert_eq!(active.fdx, 2.0);
        assert_eq!(active.fdy, 0.5);
        // x at y = 2 is 4, minus the origin
        assert_eq!(active.fx, 3.0);
        assert_eq!(active.direction, -1.0);
        assert_eq!((active.sy, active.ey), (1.0, 3.0));
        assert_eq!(active.next, NIL);
    }

    #[test]
    fn activate_vertical_edge() {
        let active = ActiveEdge::new(&edge(2.5, 0.0, 2.5, 4.0), 0, 0.0);
        assert_eq!(active.fdx, 0.0);
        assert_eq!(active.fdy, 0.0);
        assert_eq!(active.fx, 2.5);
    }

    #[test]
    fn scratch_pool_reuses_freed_slots() {
        let mut edges = [ActiveEdge::default(); 3];
        let mut pool = ScratchPool::new(&mut edges);
        let a = pool.alloc(ActiveEdge::default()).unwrap();
        let b = pool.alloc(ActiveEdge::default()).unwrap();
        assert_eq!((a, b), (0, 1));
        pool.free(a);
        assert_eq!(pool.alloc(ActiveEdge::default()).unwrap(), a);
        assert_eq!(pool.alloc(ActiveEdge::default()).unwrap(), 2);
        assert_eq!(
            pool.alloc(ActiveEdge::default()),
            Err(RasterError::OutOfMemory)
        );
        assert!(pool.get(NIL).is_none());
    }
}

//! Mutable sets of rectangular areas.
use crate::{
    backend,
    geometry::{PointF, RectangleF},
    iface::{self, Backend as _, Region as _},
};

/// A mutable set of rectangular areas, used for hit testing and
/// invalidation tracking.
#[derive(Debug)]
pub struct Region {
    handler: Box<dyn iface::Region>,
}

impl Region {
    /// An empty region.
    pub fn new() -> Region {
        Region {
            handler: backend::backend().new_region(),
        }
    }

    /// Add a rectangle to the region.
    pub fn union_rect(&mut self, rect: RectangleF) {
        self.handler.union_rect(rect);
    }

    /// Restrict the region to its intersection with a rectangle.
    pub fn intersect_rect(&mut self, rect: RectangleF) {
        self.handler.intersect_rect(rect);
    }

    /// Displace the region.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.handler.translate(dx, dy);
    }

    /// Check whether the region contains a point.
    pub fn contains(&self, point: PointF) -> bool {
        self.handler.contains(point)
    }

    /// The bounding rectangle of the region. Empty for an empty region.
    pub fn bounds(&self) -> RectangleF {
        self.handler.bounds()
    }

    pub fn is_empty(&self) -> bool {
        self.handler.is_empty()
    }
}

impl Default for Region {
    fn default() -> Region {
        Region::new()
    }
}

//! Brushes and regions for the headless backend.
//!
//! Nothing is rasterized here; every object simply stores its parameters
//! and hands them back on request.
use std::sync::Arc;

use super::super::{
    color::Color,
    geometry::{PointF, RectangleF, SizeF},
    iface::{self, GradientStop, GradientWrapMode},
};

#[derive(Debug)]
pub struct SolidBrush {
    color: Color,
}

impl SolidBrush {
    pub(super) fn new(color: Color) -> Self {
        Self { color }
    }
}

impl iface::SolidBrush for SolidBrush {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

#[derive(Debug)]
pub struct LinearGradientBrush {
    start: PointF,
    end: PointF,
    stops: Vec<GradientStop>,
    wrap: GradientWrapMode,
}

impl LinearGradientBrush {
    pub(super) fn new(start: PointF, end: PointF, stops: &[GradientStop]) -> Self {
        Self {
            start,
            end,
            stops: stops.to_vec(),
            wrap: GradientWrapMode::default(),
        }
    }
}

impl iface::LinearGradientBrush for LinearGradientBrush {
    fn start(&self) -> PointF {
        self.start
    }

    fn end(&self) -> PointF {
        self.end
    }

    fn stops(&self) -> Vec<GradientStop> {
        self.stops.clone()
    }

    fn wrap(&self) -> GradientWrapMode {
        self.wrap
    }

    fn set_wrap(&mut self, wrap: GradientWrapMode) {
        self.wrap = wrap;
    }
}

#[derive(Debug)]
pub struct RadialGradientBrush {
    center: PointF,
    gradient_origin: PointF,
    radius: SizeF,
    stops: Vec<GradientStop>,
    wrap: GradientWrapMode,
}

impl RadialGradientBrush {
    pub(super) fn new(
        center: PointF,
        gradient_origin: PointF,
        radius: SizeF,
        stops: &[GradientStop],
    ) -> Self {
        Self {
            center,
            gradient_origin,
            radius,
            stops: stops.to_vec(),
            wrap: GradientWrapMode::default(),
        }
    }
}

impl iface::RadialGradientBrush for RadialGradientBrush {
    fn center(&self) -> PointF {
        self.center
    }

    fn gradient_origin(&self) -> PointF {
        self.gradient_origin
    }

    fn radius(&self) -> SizeF {
        self.radius
    }

    fn stops(&self) -> Vec<GradientStop> {
        self.stops.clone()
    }

    fn wrap(&self) -> GradientWrapMode {
        self.wrap
    }

    fn set_wrap(&mut self, wrap: GradientWrapMode) {
        self.wrap = wrap;
    }
}

#[derive(Debug)]
pub struct TextureBrush {
    image: Arc<dyn iface::Bitmap>,
    opacity: f32,
}

impl TextureBrush {
    pub(super) fn new(image: &Arc<dyn iface::Bitmap>, opacity: f32) -> Self {
        Self {
            image: Arc::clone(image),
            opacity: opacity.max(0.0).min(1.0),
        }
    }
}

impl iface::TextureBrush for TextureBrush {
    fn image(&self) -> Arc<dyn iface::Bitmap> {
        Arc::clone(&self.image)
    }

    fn opacity(&self) -> f32 {
        self.opacity
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.max(0.0).min(1.0);
    }
}

/// A region stored as a plain rectangle list.
///
/// The representation is not canonical. Overlapping rectangles are kept
/// as given; `contains` and `bounds` scan the list on each call.
#[derive(Debug)]
pub struct Region {
    rects: Vec<RectangleF>,
}

impl Region {
    pub(super) fn new() -> Self {
        Self { rects: Vec::new() }
    }
}

impl iface::Region for Region {
    fn union_rect(&mut self, rect: RectangleF) {
        if !rect.is_empty() {
            self.rects.push(rect);
        }
    }

    fn intersect_rect(&mut self, rect: RectangleF) {
        for r in &mut self.rects {
            *r = r.intersect(&rect);
        }
        self.rects.retain(|r| !r.is_empty());
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        for r in &mut self.rects {
            *r = r.translate(dx, dy);
        }
    }

    fn contains(&self, point: PointF) -> bool {
        self.rects.iter().any(|r| r.contains(point))
    }

    fn bounds(&self) -> RectangleF {
        let mut rects = self.rects.iter();
        let first = match rects.next() {
            Some(rect) => *rect,
            None => return RectangleF::default(),
        };
        rects.fold(first, |acc, rect| acc.union(rect))
    }

    fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

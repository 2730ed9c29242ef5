//! Paint sources.
use std::cmp::Ordering;

use crate::{
    backend,
    color::Color,
    geometry::{PointF, SizeF},
    iface::{
        self, Backend as _, GradientStop, GradientWrapMode, LinearGradientBrush as _,
        RadialGradientBrush as _, SolidBrush as _, TextureBrush as _,
    },
    image::Bitmap,
};

/// A single-color paint source.
#[derive(Debug)]
pub struct SolidBrush {
    handler: Box<dyn iface::SolidBrush>,
}

impl SolidBrush {
    pub fn new(color: Color) -> SolidBrush {
        SolidBrush {
            handler: backend::backend().new_solid_brush(color),
        }
    }

    pub fn color(&self) -> Color {
        self.handler.color()
    }

    pub fn set_color(&mut self, color: Color) {
        self.handler.set_color(color);
    }
}

/// A paint source interpolating colors along a line segment.
#[derive(Debug)]
pub struct LinearGradientBrush {
    handler: Box<dyn iface::LinearGradientBrush>,
}

impl LinearGradientBrush {
    /// A two-stop gradient from `start_color` at `start` to `end_color`
    /// at `end`.
    pub fn new(start_color: Color, end_color: Color, start: PointF, end: PointF) -> Self {
        Self::with_stops(
            &[
                GradientStop::new(0.0, start_color),
                GradientStop::new(1.0, end_color),
            ],
            start,
            end,
        )
    }

    /// A gradient with arbitrary stops. The stops are sorted by ascending
    /// offset before the backend sees them.
    pub fn with_stops(stops: &[GradientStop], start: PointF, end: PointF) -> Self {
        Self {
            handler: backend::backend().new_linear_gradient_brush(start, end, &sorted_stops(stops)),
        }
    }

    pub fn start(&self) -> PointF {
        self.handler.start()
    }

    pub fn end(&self) -> PointF {
        self.handler.end()
    }

    /// The color stops, ordered by ascending offset.
    pub fn stops(&self) -> Vec<GradientStop> {
        self.handler.stops()
    }

    pub fn wrap(&self) -> GradientWrapMode {
        self.handler.wrap()
    }

    pub fn set_wrap(&mut self, wrap: GradientWrapMode) {
        self.handler.set_wrap(wrap);
    }
}

/// A paint source interpolating colors radially around an origin point.
///
/// The gradient runs from `gradient_origin` outwards to the ellipse
/// defined by `center` and `radius`.
#[derive(Debug)]
pub struct RadialGradientBrush {
    handler: Box<dyn iface::RadialGradientBrush>,
}

impl RadialGradientBrush {
    /// A two-stop gradient from `start_color` at the origin to
    /// `end_color` at the rim.
    pub fn new(
        start_color: Color,
        end_color: Color,
        center: PointF,
        gradient_origin: PointF,
        radius: SizeF,
    ) -> Self {
        Self::with_stops(
            &[
                GradientStop::new(0.0, start_color),
                GradientStop::new(1.0, end_color),
            ],
            center,
            gradient_origin,
            radius,
        )
    }

    /// A gradient with arbitrary stops. The stops are sorted by ascending
    /// offset before the backend sees them.
    pub fn with_stops(
        stops: &[GradientStop],
        center: PointF,
        gradient_origin: PointF,
        radius: SizeF,
    ) -> Self {
        Self {
            handler: backend::backend().new_radial_gradient_brush(
                center,
                gradient_origin,
                radius,
                &sorted_stops(stops),
            ),
        }
    }

    pub fn center(&self) -> PointF {
        self.handler.center()
    }

    pub fn gradient_origin(&self) -> PointF {
        self.handler.gradient_origin()
    }

    pub fn radius(&self) -> SizeF {
        self.handler.radius()
    }

    /// The color stops, ordered by ascending offset.
    pub fn stops(&self) -> Vec<GradientStop> {
        self.handler.stops()
    }

    pub fn wrap(&self) -> GradientWrapMode {
        self.handler.wrap()
    }

    pub fn set_wrap(&mut self, wrap: GradientWrapMode) {
        self.handler.set_wrap(wrap);
    }
}

/// A paint source tiling a bitmap image.
#[derive(Debug)]
pub struct TextureBrush {
    handler: Box<dyn iface::TextureBrush>,
}

impl TextureBrush {
    /// A brush tiling `image` with the given opacity. The backend clamps
    /// the opacity to `0.0..=1.0`.
    pub fn new(image: &Bitmap, opacity: f32) -> Self {
        Self {
            handler: backend::backend().new_texture_brush(image.handler(), opacity),
        }
    }

    pub fn image(&self) -> Bitmap {
        Bitmap::from_handler(self.handler.image())
    }

    pub fn opacity(&self) -> f32 {
        self.handler.opacity()
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.handler.set_opacity(opacity);
    }
}

/// Sort stops by ascending offset. Stops with equal offsets keep their
/// given order.
fn sorted_stops(stops: &[GradientStop]) -> Vec<GradientStop> {
    let mut stops = stops.to_vec();
    stops.sort_by(|a, b| a.offset.partial_cmp(&b.offset).unwrap_or(Ordering::Equal));
    stops
}

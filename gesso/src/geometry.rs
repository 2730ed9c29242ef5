//! Geometry value types and their literal formats.
//!
//! All types are plain `Copy` data. The literal formats accepted by the
//! `FromStr` implementations are comma-separated component lists:
//! `"w,h"` for [`SizeF`], `"x,y,w,h"` for [`Rectangle`]/[`RectangleF`],
//! and one, two, or four components for [`Padding`]. Whitespace around
//! components is ignored.
use arrayvec::ArrayVec;
use derive_more::{Add, From, Mul, Neg, Sub};
use std::{fmt, str::FromStr};

/// A 2D location with integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Add, Sub, Neg, From)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// A 2D location with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Add, Sub, Neg, Mul, From)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for PointF {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// A 2D extent with integer components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Add, Sub, From)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.width, self.height)
    }
}

/// A 2D extent with floating-point components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Add, Sub, Mul, From)]
pub struct SizeF {
    pub width: f32,
    pub height: f32,
}

impl SizeF {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl fmt::Display for SizeF {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.width, self.height)
    }
}

impl FromStr for SizeF {
    type Err = ParseGeometryError;

    /// Parse a `"w,h"` literal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match *parse_components::<f32>(s)? {
            [width, height] => Ok(SizeF::new(width, height)),
            _ => Err(ParseGeometryError::BadComponentCount),
        }
    }
}

/// An axis-aligned rectangle with integer coordinates.
///
/// Rectangles are half-open: a point on the right or bottom edge is
/// outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_location_size(location: Point, size: Size) -> Self {
        Self::new(location.x, location.y, size.width, size.height)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    #[inline]
    pub fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.y >= self.y && p.x < self.right() && p.y < self.bottom()
    }

    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// The smallest rectangle covering both operands.
    pub fn union(&self, other: &Rectangle) -> Rectangle {
        let left = self.x.min(other.x);
        let top = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rectangle::new(left, top, right - left, bottom - top)
    }

    /// The overlap of both operands. The result is empty when they are
    /// disjoint.
    pub fn intersect(&self, other: &Rectangle) -> Rectangle {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rectangle::new(left, top, (right - left).max(0), (bottom - top).max(0))
    }

    pub fn translate(self, dx: i32, dy: i32) -> Rectangle {
        Rectangle::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.width, self.height)
    }
}

impl FromStr for Rectangle {
    type Err = ParseGeometryError;

    /// Parse an `"x,y,w,h"` literal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match *parse_components::<i32>(s)? {
            [x, y, width, height] => Ok(Rectangle::new(x, y, width, height)),
            _ => Err(ParseGeometryError::BadComponentCount),
        }
    }
}

/// An axis-aligned rectangle with floating-point coordinates.
///
/// Rectangles are half-open: a point on the right or bottom edge is
/// outside.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectangleF {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectangleF {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_location_size(location: PointF, size: SizeF) -> Self {
        Self::new(location.x, location.y, size.width, size.height)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn location(&self) -> PointF {
        PointF::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> SizeF {
        SizeF::new(self.width, self.height)
    }

    pub fn center(&self) -> PointF {
        PointF::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn contains(&self, p: PointF) -> bool {
        p.x >= self.x && p.y >= self.y && p.x < self.right() && p.y < self.bottom()
    }

    pub fn intersects(&self, other: &RectangleF) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// The smallest rectangle covering both operands.
    pub fn union(&self, other: &RectangleF) -> RectangleF {
        let left = self.x.min(other.x);
        let top = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        RectangleF::new(left, top, right - left, bottom - top)
    }

    /// The overlap of both operands. The result is empty when they are
    /// disjoint.
    pub fn intersect(&self, other: &RectangleF) -> RectangleF {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        RectangleF::new(left, top, (right - left).max(0.0), (bottom - top).max(0.0))
    }

    pub fn translate(self, dx: f32, dy: f32) -> RectangleF {
        RectangleF::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

impl From<Rectangle> for RectangleF {
    fn from(r: Rectangle) -> Self {
        RectangleF::new(r.x as f32, r.y as f32, r.width as f32, r.height as f32)
    }
}

impl fmt::Display for RectangleF {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.width, self.height)
    }
}

impl FromStr for RectangleF {
    type Err = ParseGeometryError;

    /// Parse an `"x,y,w,h"` literal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match *parse_components::<f32>(s)? {
            [x, y, width, height] => Ok(RectangleF::new(x, y, width, height)),
            _ => Err(ParseGeometryError::BadComponentCount),
        }
    }
}

/// Space around the edges of a rectangular area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Add, Sub)]
pub struct Padding {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Padding {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The same padding on all four edges.
    pub const fn uniform(all: i32) -> Self {
        Self::new(all, all, all, all)
    }

    /// `horizontal` on the left/right edges and `vertical` on the
    /// top/bottom edges.
    pub const fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    #[inline]
    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    #[inline]
    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }

    /// The total extent the padding adds to a rectangular area.
    pub fn total_size(&self) -> Size {
        Size::new(self.horizontal(), self.vertical())
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.left, self.top, self.right, self.bottom
        )
    }
}

impl FromStr for Padding {
    type Err = ParseGeometryError;

    /// Parse a padding literal: one component for all edges, two for
    /// horizontal/vertical, or four for left/top/right/bottom.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match *parse_components::<i32>(s)? {
            [all] => Ok(Padding::uniform(all)),
            [horizontal, vertical] => Ok(Padding::symmetric(horizontal, vertical)),
            [left, top, right, bottom] => Ok(Padding::new(left, top, right, bottom)),
            _ => Err(ParseGeometryError::BadComponentCount),
        }
    }
}

/// Returned when a geometry literal cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseGeometryError {
    /// The literal has a component count not valid for the target type.
    BadComponentCount,
    /// A component is not a valid number.
    BadComponent,
}

impl fmt::Display for ParseGeometryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseGeometryError::BadComponentCount => {
                write!(f, "wrong number of components in a geometry literal")
            }
            ParseGeometryError::BadComponent => {
                write!(f, "malformed numeric component in a geometry literal")
            }
        }
    }
}

impl std::error::Error for ParseGeometryError {}

/// Split a comma-separated literal into at most four numeric components.
fn parse_components<T: FromStr>(s: &str) -> Result<ArrayVec<[T; 4]>, ParseGeometryError> {
    let mut components = ArrayVec::new();
    for part in s.split(',') {
        let value = part
            .trim()
            .parse()
            .map_err(|_| ParseGeometryError::BadComponent)?;
        components
            .try_push(value)
            .map_err(|_| ParseGeometryError::BadComponentCount)?;
    }
    Ok(components)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        assert_eq!(Point::new(1, 2) + Point::new(3, 4), Point::new(4, 6));
        assert_eq!(Point::new(3, 4) - Point::new(1, 2), Point::new(2, 2));
        assert_eq!(-Point::new(1, -2), Point::new(-1, 2));
        assert_eq!(Point::from((7, 8)), Point::new(7, 8));
    }

    #[test]
    fn pointf_scaling() {
        assert_eq!(PointF::new(1.0, 2.5) * 2.0, PointF::new(2.0, 5.0));
        assert_eq!(
            PointF::new(1.0, 2.0) + PointF::new(0.5, 0.5),
            PointF::new(1.5, 2.5)
        );
    }

    #[test]
    fn rectangle_edges() {
        let r = Rectangle::new(10, 20, 30, 40);
        assert_eq!(r.left(), 10);
        assert_eq!(r.top(), 20);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.location(), Point::new(10, 20));
        assert_eq!(r.size(), Size::new(30, 40));
        assert_eq!(r.center(), Point::new(25, 40));
    }

    #[test]
    fn rectangle_contains_is_half_open() {
        let r = Rectangle::new(0, 0, 10, 10);
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(9, 9)));
        assert!(!r.contains(Point::new(10, 0)));
        assert!(!r.contains(Point::new(0, 10)));
        assert!(!r.contains(Point::new(-1, 5)));
    }

    #[test]
    fn rectangle_union_intersect() {
        let a = Rectangle::new(0, 0, 10, 10);
        let b = Rectangle::new(5, 5, 10, 10);
        assert_eq!(a.union(&b), Rectangle::new(0, 0, 15, 15));
        assert_eq!(a.intersect(&b), Rectangle::new(5, 5, 5, 5));
        assert!(a.intersects(&b));

        let c = Rectangle::new(20, 20, 5, 5);
        assert!(!a.intersects(&c));
        assert!(a.intersect(&c).is_empty());
    }

    #[test]
    fn rectanglef_intersect_clamps() {
        let a = RectangleF::new(0.0, 0.0, 4.0, 4.0);
        let b = RectangleF::new(6.0, 6.0, 1.0, 1.0);
        let empty = a.intersect(&b);
        assert!(empty.is_empty());
        assert_eq!(empty.width, 0.0);
        assert_eq!(empty.height, 0.0);
    }

    #[test]
    fn rectangle_translate() {
        assert_eq!(
            Rectangle::new(1, 2, 3, 4).translate(10, 20),
            Rectangle::new(11, 22, 3, 4)
        );
    }

    #[test]
    fn padding_expansion() {
        let p = Padding::new(1, 2, 3, 4);
        assert_eq!(p.horizontal(), 4);
        assert_eq!(p.vertical(), 6);
        assert_eq!(p.total_size(), Size::new(4, 6));
        assert_eq!(Padding::uniform(5), Padding::new(5, 5, 5, 5));
        assert_eq!(Padding::symmetric(2, 7), Padding::new(2, 7, 2, 7));
    }

    #[test]
    fn parse_sizef() {
        assert_eq!("3,4".parse(), Ok(SizeF::new(3.0, 4.0)));
        assert_eq!(" 3.5 , 4 ".parse(), Ok(SizeF::new(3.5, 4.0)));
        assert_eq!(
            "3".parse::<SizeF>(),
            Err(ParseGeometryError::BadComponentCount)
        );
        assert_eq!(
            "3,4,5".parse::<SizeF>(),
            Err(ParseGeometryError::BadComponentCount)
        );
        assert_eq!(
            "3,x".parse::<SizeF>(),
            Err(ParseGeometryError::BadComponent)
        );
    }

    #[test]
    fn parse_rectangle() {
        assert_eq!("1,2,3,4".parse(), Ok(Rectangle::new(1, 2, 3, 4)));
        assert_eq!("-5, 0, 10, 10".parse(), Ok(Rectangle::new(-5, 0, 10, 10)));
        assert_eq!(
            "1,2,3".parse::<Rectangle>(),
            Err(ParseGeometryError::BadComponentCount)
        );
        assert_eq!(
            "1,2,3,4,5".parse::<Rectangle>(),
            Err(ParseGeometryError::BadComponentCount)
        );
        assert_eq!(
            "1,2,3,4.5".parse::<Rectangle>(),
            Err(ParseGeometryError::BadComponent)
        );
    }

    #[test]
    fn parse_rectanglef() {
        assert_eq!(
            "0.5,1,2,2.5".parse(),
            Ok(RectangleF::new(0.5, 1.0, 2.0, 2.5))
        );
        assert_eq!(
            "".parse::<RectangleF>(),
            Err(ParseGeometryError::BadComponent)
        );
    }

    #[test]
    fn parse_padding() {
        assert_eq!("5".parse(), Ok(Padding::uniform(5)));
        assert_eq!("2,7".parse(), Ok(Padding::symmetric(2, 7)));
        assert_eq!("1,2,3,4".parse(), Ok(Padding::new(1, 2, 3, 4)));
        assert_eq!(
            "1,2,3".parse::<Padding>(),
            Err(ParseGeometryError::BadComponentCount)
        );
        assert_eq!(
            "1,2,3,4,5".parse::<Padding>(),
            Err(ParseGeometryError::BadComponentCount)
        );
    }

    #[test]
    fn display_matches_literal_format() {
        assert_eq!(Rectangle::new(1, 2, 3, 4).to_string(), "1,2,3,4");
        assert_eq!(Padding::new(1, 2, 3, 4).to_string(), "1,2,3,4");
        assert_eq!(SizeF::new(3.5, 4.0).to_string(), "3.5,4");
        let rt: Rectangle = Rectangle::new(9, -8, 7, 6).to_string().parse().unwrap();
        assert_eq!(rt, Rectangle::new(9, -8, 7, 6));
    }
}

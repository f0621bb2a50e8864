use crate::color::{encode, Color, PackedColor};

use alloc::vec::Vec;

use Kind::*;

/// Canvas coordinate. Values outside the canvas are legal.
pub type Point = vek::vec::repr_c::vec2::Vec2<i16>;

/// Wire value of `radius_or_closure` for a filled path.
pub const PATH_CLOSED: i16 = 0;
/// Wire value written for an open path. Any non-zero value reads as open.
pub const PATH_OPEN: i16 = 1;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Kind {
    Path,
    Circle,
}

pub const KINDS: [Kind; 2] = [Path, Circle];

impl Kind {
    pub fn tag(self) -> u8 {
        match self {
            Path => 0,
            Circle => 1,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        KINDS.get(tag as usize).copied()
    }
}

/// What a command draws, along with its kind-dependent parameter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Geometry {
    /// A closed path is filled with the fill color; an open one is
    /// only stroked, whatever its point count.
    Path { closed: bool },
    /// Disc centered on the first point.
    Circle { radius: u16 },
}

impl Geometry {
    pub fn kind(self) -> Kind {
        match self {
            Geometry::Path { .. } => Path,
            Geometry::Circle { .. } => Circle,
        }
    }

    /// Rebuilds the geometry from the overloaded `radius_or_closure` field.
    ///
    /// For circles the field is reinterpreted as unsigned.
    pub fn from_raw(kind: Kind, radius_or_closure: i16) -> Self {
        match kind {
            Path => Geometry::Path {
                closed: radius_or_closure == PATH_CLOSED,
            },
            Circle => Geometry::Circle {
                radius: radius_or_closure as u16,
            },
        }
    }

    pub fn radius_or_closure(self) -> i16 {
        match self {
            Geometry::Path { closed: true } => PATH_CLOSED,
            Geometry::Path { closed: false } => PATH_OPEN,
            Geometry::Circle { radius } => radius as i16,
        }
    }

    pub fn is_filled(self) -> bool {
        match self {
            Geometry::Path { closed } => closed,
            Geometry::Circle { .. } => true,
        }
    }
}

/// One path or circle, with its styling.
///
/// Colors are quantized when the command is built; reading them back
/// returns the packed value, not the color passed to [`DrawCommand::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawCommand {
    pub geometry: Geometry,
    pub hidden: bool,
    pub stroke_color: PackedColor,
    /// 0 disables the stroke. The fill is unaffected.
    pub stroke_width: u8,
    pub fill_color: PackedColor,
    points: Vec<Point>,
}

impl DrawCommand {
    pub fn new(geometry: Geometry, hidden: bool, stroke_color: Color, stroke_width: u8, fill_color: Color) -> Self {
        Self::from_packed(geometry, hidden, encode(stroke_color), stroke_width, encode(fill_color))
    }

    pub fn from_packed(
        geometry: Geometry,
        hidden: bool,
        stroke_color: PackedColor,
        stroke_width: u8,
        fill_color: PackedColor,
    ) -> Self {
        Self {
            geometry,
            hidden,
            stroke_color,
            stroke_width,
            fill_color,
            points: Vec::new(),
        }
    }

    /// Same as [`DrawCommand::new`], with the kind tag and the overloaded
    /// field passed separately.
    pub fn from_raw(
        kind: Kind,
        hidden: bool,
        stroke_color: Color,
        stroke_width: u8,
        fill_color: Color,
        radius_or_closure: i16,
    ) -> Self {
        let geometry = Geometry::from_raw(kind, radius_or_closure);
        Self::new(geometry, hidden, stroke_color, stroke_width, fill_color)
    }

    pub fn path(closed: bool, stroke_color: Color, stroke_width: u8, fill_color: Color) -> Self {
        Self::new(Geometry::Path { closed }, false, stroke_color, stroke_width, fill_color)
    }

    pub fn circle(center: Point, radius: u16, stroke_color: Color, stroke_width: u8, fill_color: Color) -> Self {
        let mut command = Self::new(Geometry::Circle { radius }, false, stroke_color, stroke_width, fill_color);
        command.add_point(center);
        command
    }

    pub fn with_points<I: IntoIterator<Item = Point>>(mut self, points: I) -> Self {
        self.points.extend(points);
        self
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Points in insertion order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn kind(&self) -> Kind {
        self.geometry.kind()
    }

    /// The center of a circle. Further points are kept but never drawn.
    pub fn center(&self) -> Option<Point> {
        match self.geometry {
            Geometry::Circle { .. } => self.points.first().copied(),
            Geometry::Path { .. } => None,
        }
    }

    pub fn is_stroked(&self) -> bool {
        self.stroke_width > 0
    }
}

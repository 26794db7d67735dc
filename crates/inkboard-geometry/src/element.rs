//! Board elements as seen by the geometry core.
//!
//! An [`Element`] is an immutable snapshot of one shape on the board: its
//! bounding box, rotation, corner rounding and (for linear kinds) its points.
//! The editor owns and mutates elements; every query here only reads them.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use inkboard_core::{ElementId, GeometryError, Point};
use serde::{Deserialize, Serialize};

/// Fraction of the side length used by proportional rounding.
pub const DEFAULT_PROPORTIONAL_RADIUS: f64 = 0.25;

/// Fixed radius used by adaptive rounding when the element carries no value.
pub const DEFAULT_ADAPTIVE_RADIUS: f64 = 32.0;

/// Read-only lookup from id to element, used to resolve related geometry.
pub type ElementsMap = HashMap<ElementId, Element>;

/// Build an [`ElementsMap`] from a slice of elements.
pub fn to_elements_map(elements: &[Element]) -> ElementsMap {
    elements
        .iter()
        .map(|element| (element.id.clone(), element.clone()))
        .collect()
}

/// Element type tag, one per drawable kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Selection,
    Rectangle,
    Image,
    Text,
    Frame,
    MagicFrame,
    Embeddable,
    Iframe,
    /// Small icon-like marker pinned to the board
    Annotation,
    Diamond,
    Ellipse,
    Line,
    Arrow,
    Freedraw,
}

/// The shape families the distance core distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeCategory {
    /// Box-like shapes drawn as (possibly rounded) rectangles
    Rectanguloid,
    /// Rectanguloid marker with an enlarged hit target
    Annotation,
    Diamond,
    Ellipse,
    /// Polylines, arrows and freehand strokes
    Linear,
}

impl ElementType {
    pub const ALL: [ElementType; 14] = [
        ElementType::Selection,
        ElementType::Rectangle,
        ElementType::Image,
        ElementType::Text,
        ElementType::Frame,
        ElementType::MagicFrame,
        ElementType::Embeddable,
        ElementType::Iframe,
        ElementType::Annotation,
        ElementType::Diamond,
        ElementType::Ellipse,
        ElementType::Line,
        ElementType::Arrow,
        ElementType::Freedraw,
    ];

    pub fn category(&self) -> ShapeCategory {
        match self {
            ElementType::Selection
            | ElementType::Rectangle
            | ElementType::Image
            | ElementType::Text
            | ElementType::Frame
            | ElementType::MagicFrame
            | ElementType::Embeddable
            | ElementType::Iframe => ShapeCategory::Rectanguloid,
            ElementType::Annotation => ShapeCategory::Annotation,
            ElementType::Diamond => ShapeCategory::Diamond,
            ElementType::Ellipse => ShapeCategory::Ellipse,
            ElementType::Line | ElementType::Arrow | ElementType::Freedraw => {
                ShapeCategory::Linear
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Selection => "selection",
            ElementType::Rectangle => "rectangle",
            ElementType::Image => "image",
            ElementType::Text => "text",
            ElementType::Frame => "frame",
            ElementType::MagicFrame => "magicframe",
            ElementType::Embeddable => "embeddable",
            ElementType::Iframe => "iframe",
            ElementType::Annotation => "annotation",
            ElementType::Diamond => "diamond",
            ElementType::Ellipse => "ellipse",
            ElementType::Line => "line",
            ElementType::Arrow => "arrow",
            ElementType::Freedraw => "freedraw",
        }
    }

    pub fn is_linear(&self) -> bool {
        self.category() == ShapeCategory::Linear
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| GeometryError::invalid_category(s))
    }
}

/// Corner rounding mode of an element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Roundness {
    /// Older scenes; behaves like proportional rounding
    Legacy,
    /// Radius is a fixed fraction of the side length
    Proportional,
    /// Fixed radius, shrinking proportionally on small shapes
    Adaptive {
        #[serde(default)]
        value: Option<f64>,
    },
}

impl Roundness {
    /// Corner radius for a side of length `side`.
    pub fn corner_radius(&self, side: f64) -> f64 {
        match self {
            Roundness::Legacy | Roundness::Proportional => side * DEFAULT_PROPORTIONAL_RADIUS,
            Roundness::Adaptive { value } => {
                let fixed = value.unwrap_or(DEFAULT_ADAPTIVE_RADIUS);
                let cutoff = fixed / DEFAULT_PROPORTIONAL_RADIUS;
                if side <= cutoff {
                    side * DEFAULT_PROPORTIONAL_RADIUS
                } else {
                    fixed
                }
            }
        }
    }
}

/// Immutable snapshot of one board element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub element_type: ElementType,
    /// Top-left corner of the unrotated bounding box
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation about the element center, in radians
    #[serde(default)]
    pub angle: f64,
    #[serde(default)]
    pub roundness: Option<Roundness>,
    /// Path points of linear kinds, relative to `(x, y)`
    #[serde(default)]
    pub points: Vec<Point>,
    /// Container this element is bound to (text inside a shape or on an arrow)
    #[serde(default)]
    pub container_id: Option<ElementId>,
    /// True when the element has a non-transparent background
    #[serde(default)]
    pub filled: bool,
    #[serde(default)]
    pub is_deleted: bool,
}

impl Element {
    pub fn new(element_type: ElementType, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: ElementId::new(),
            element_type,
            x,
            y,
            width,
            height,
            angle: 0.0,
            roundness: None,
            points: Vec::new(),
            container_id: None,
            filled: false,
            is_deleted: false,
        }
    }

    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(ElementType::Rectangle, x, y, width, height)
    }

    pub fn diamond(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(ElementType::Diamond, x, y, width, height)
    }

    pub fn ellipse(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(ElementType::Ellipse, x, y, width, height)
    }

    pub fn text(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(ElementType::Text, x, y, width, height)
    }

    pub fn annotation(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(ElementType::Annotation, x, y, width, height)
    }

    /// Linear element anchored at `(x, y)`; the box size follows the points.
    pub fn linear(element_type: ElementType, x: f64, y: f64, points: Vec<Point>) -> Self {
        let mut element = Self::new(element_type, x, y, 0.0, 0.0);
        if let Some((min_x, min_y, max_x, max_y)) = bounds_of(&points) {
            element.width = max_x - min_x;
            element.height = max_y - min_y;
        }
        element.points = points;
        element
    }

    pub fn line(x: f64, y: f64, points: Vec<Point>) -> Self {
        Self::linear(ElementType::Line, x, y, points)
    }

    pub fn arrow(x: f64, y: f64, points: Vec<Point>) -> Self {
        Self::linear(ElementType::Arrow, x, y, points)
    }

    pub fn freedraw(x: f64, y: f64, points: Vec<Point>) -> Self {
        Self::linear(ElementType::Freedraw, x, y, points)
    }

    pub fn with_id(mut self, id: impl Into<ElementId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_roundness(mut self, roundness: Roundness) -> Self {
        self.roundness = Some(roundness);
        self
    }

    pub fn with_container(mut self, container_id: impl Into<ElementId>) -> Self {
        self.container_id = Some(container_id.into());
        self
    }

    pub fn with_fill(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    pub fn category(&self) -> ShapeCategory {
        self.element_type.category()
    }

    /// Center of the unrotated bounding box.
    pub fn box_center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Corner radius of a rectanguloid outline, clamped so opposite corners never overlap.
    pub fn rectanguloid_corner_radius(&self) -> f64 {
        let side = self.width.min(self.height).max(0.0);
        self.roundness
            .map(|r| r.corner_radius(side))
            .unwrap_or(0.0)
            .clamp(0.0, side / 2.0)
    }

    /// Points of a linear element in drawing space, before rotation.
    pub fn absolute_points(&self) -> Vec<Point> {
        self.points
            .iter()
            .map(|p| Point::new(self.x + p.x, self.y + p.y))
            .collect()
    }

    /// Unrotated bounds as `(min_x, min_y, max_x, max_y)`.
    ///
    /// Linear elements use their points; everything else uses the stored box.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        if self.element_type.is_linear() {
            if let Some(bounds) = bounds_of(&self.absolute_points()) {
                return bounds;
            }
        }
        (self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Validate that every coordinate the geometry core reads is finite.
    pub fn check_finite(&self) -> Result<(), GeometryError> {
        let scalars = [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
            ("angle", self.angle),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(GeometryError::non_finite(format!(
                    "element {} {}",
                    self.id, name
                )));
            }
        }
        if let Some(index) = self.points.iter().position(|p| !p.is_finite()) {
            return Err(GeometryError::non_finite(format!(
                "element {} point {}",
                self.id, index
            )));
        }
        Ok(())
    }
}

/// Axis-aligned bounds of a point list, `None` when empty.
pub(crate) fn bounds_of(points: &[Point]) -> Option<(f64, f64, f64, f64)> {
    let first = points.first()?;
    Some(points.iter().skip(1).fold(
        (first.x, first.y, first.x, first.y),
        |(min_x, min_y, max_x, max_y), p| {
            (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
        },
    ))
}

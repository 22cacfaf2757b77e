//! Labeled output geometry handed back to the caller

use crate::spatial::polygon::{Point, Polygon};

/// A polygon tagged with the index of the transform that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledPolygon {
    /// Index of the transform applied in the final subdivision round
    pub label: usize,
    /// Transformed polygon
    pub polygon: Polygon,
}

/// A chaos game point tagged with the index of the transform that produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledPoint {
    /// Index of the transform drawn for this step
    pub label: usize,
    /// Point after applying the drawn transform
    pub point: Point,
}

/// Output of one computation
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Polygons from discrete subdivision, in generation order
    Polygons(Vec<LabeledPolygon>),
    /// Points from the chaos game, in trajectory order
    Points(Vec<LabeledPoint>),
}

impl Geometry {
    /// Number of polygons or points
    pub const fn len(&self) -> usize {
        match self {
            Self::Polygons(polygons) => polygons.len(),
            Self::Points(points) => points.len(),
        }
    }

    /// Whether nothing was produced
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Labels in output order
    pub fn labels(&self) -> Vec<usize> {
        match self {
            Self::Polygons(polygons) => polygons.iter().map(|item| item.label).collect(),
            Self::Points(points) => points.iter().map(|item| item.label).collect(),
        }
    }

    /// Every vertex or point in output order
    pub fn vertices(&self) -> Vec<Point> {
        match self {
            Self::Polygons(polygons) => polygons
                .iter()
                .flat_map(|item| item.polygon.points())
                .collect(),
            Self::Points(points) => points.iter().map(|item| item.point).collect(),
        }
    }

    /// Smallest box containing all output coordinates
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::enclosing(self.vertices())
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum x (inclusive)
    pub min_x: f64,
    /// Minimum y (inclusive)
    pub min_y: f64,
    /// Maximum x (inclusive)
    pub max_x: f64,
    /// Maximum y (inclusive)
    pub max_y: f64,
}

impl Bounds {
    /// The unit square `[0, 1] × [0, 1]`
    pub const UNIT: Self = Self {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 1.0,
        max_y: 1.0,
    };

    /// Smallest box containing all finite points, or `None` if there are none
    pub fn enclosing(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        points
            .into_iter()
            .filter(|point| point.x.is_finite() && point.y.is_finite())
            .fold(None, |bounds: Option<Self>, point| {
                Some(bounds.map_or(
                    Self {
                        min_x: point.x,
                        min_y: point.y,
                        max_x: point.x,
                        max_y: point.y,
                    },
                    |b| Self {
                        min_x: b.min_x.min(point.x),
                        min_y: b.min_y.min(point.y),
                        max_x: b.max_x.max(point.x),
                        max_y: b.max_y.max(point.y),
                    },
                ))
            })
    }

    /// Horizontal extent
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Whether a point lies inside or on the boundary
    pub fn contains(&self, point: Point) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
    }

    /// Grow a degenerate box so both extents are positive
    pub fn padded(self) -> Self {
        let pad_x = if self.width() > 0.0 { 0.0 } else { 0.5 };
        let pad_y = if self.height() > 0.0 { 0.0 } else { 0.5 };
        Self {
            min_x: self.min_x - pad_x,
            min_y: self.min_y - pad_y,
            max_x: self.max_x + pad_x,
            max_y: self.max_y + pad_y,
        }
    }
}

/// Group polygons by label for per-transform coloring
///
/// Returns one group per transform index in `0..transform_count`, each
/// holding that label's polygons in output order. Labels outside the
/// range are dropped.
pub fn group_by_label(
    polygons: &[LabeledPolygon],
    transform_count: usize,
) -> Vec<Vec<&Polygon>> {
    let mut groups: Vec<Vec<&Polygon>> = vec![Vec::new(); transform_count];
    for item in polygons {
        if let Some(group) = groups.get_mut(item.label) {
            group.push(&item.polygon);
        }
    }
    groups
}

/// Group chaos game points by label for per-transform coloring
pub fn group_points_by_label(points: &[LabeledPoint], transform_count: usize) -> Vec<Vec<Point>> {
    let mut groups: Vec<Vec<Point>> = vec![Vec::new(); transform_count];
    for item in points {
        if let Some(group) = groups.get_mut(item.label) {
            group.push(item.point);
        }
    }
    groups
}

//! Tests for labeled geometry, bounds and label grouping

#[cfg(test)]
mod tests {
    use fractal_ifs::spatial::geometry::{
        Bounds, Geometry, LabeledPoint, LabeledPolygon, group_by_label, group_points_by_label,
    };
    use fractal_ifs::spatial::polygon::{Point, Polygon};

    fn labeled_points(items: &[(usize, f64, f64)]) -> Vec<LabeledPoint> {
        items
            .iter()
            .map(|&(label, x, y)| LabeledPoint {
                label,
                point: Point::new(x, y),
            })
            .collect()
    }

    // Tests length, labels and vertices of point geometry
    // Verified by reversing the output order
    #[test]
    fn test_point_geometry_accessors() {
        let geometry = Geometry::Points(labeled_points(&[(1, 0.5, 0.5), (0, 0.25, 0.75)]));

        assert_eq!(geometry.len(), 2);
        assert!(!geometry.is_empty());
        assert_eq!(geometry.labels(), vec![1, 0]);
        assert_eq!(
            geometry.vertices(),
            vec![Point::new(0.5, 0.5), Point::new(0.25, 0.75)]
        );
    }

    // Tests polygon geometry flattens vertices in order
    // Verified by counting polygons instead of vertices
    #[test]
    fn test_polygon_geometry_vertices() {
        let geometry = Geometry::Polygons(vec![
            LabeledPolygon {
                label: 2,
                polygon: Polygon::from_pairs(&[(0.0, 0.0), (1.0, 0.0)]),
            },
            LabeledPolygon {
                label: 0,
                polygon: Polygon::from_pairs(&[(2.0, 3.0)]),
            },
        ]);

        assert_eq!(geometry.len(), 2);
        assert_eq!(geometry.vertices().len(), 3);
        assert_eq!(geometry.labels(), vec![2, 0]);
    }

    // Tests bounds of empty geometry are absent
    // Verified by returning the unit square for empty input
    #[test]
    fn test_empty_bounds() {
        let geometry = Geometry::Points(Vec::new());
        assert!(geometry.is_empty());
        assert_eq!(geometry.bounds(), None);
    }

    // Tests enclosing bounds skip non-finite points
    // Verified by letting NaN propagate through min/max
    #[test]
    fn test_enclosing_bounds() {
        let bounds = Bounds::enclosing([
            Point::new(-1.0, 2.0),
            Point::new(f64::NAN, 100.0),
            Point::new(3.0, -4.0),
            Point::new(f64::INFINITY, 0.0),
        ])
        .unwrap();

        assert_eq!(
            bounds,
            Bounds {
                min_x: -1.0,
                min_y: -4.0,
                max_x: 3.0,
                max_y: 2.0,
            }
        );
        assert_eq!(bounds.width(), 4.0);
        assert_eq!(bounds.height(), 6.0);
        assert!(bounds.contains(Point::new(3.0, 2.0)));
        assert!(!bounds.contains(Point::new(3.5, 0.0)));
    }

    // Tests degenerate boxes get positive extents
    // Verified by padding only the x axis
    #[test]
    fn test_padded() {
        let single = Bounds::enclosing([Point::new(1.0, 1.0)]).unwrap().padded();
        assert_eq!(single.width(), 1.0);
        assert_eq!(single.height(), 1.0);

        assert_eq!(Bounds::UNIT.padded(), Bounds::UNIT);
    }

    // Tests grouping keeps one bucket per transform and drops stray labels
    // Verified by growing the group list for out-of-range labels
    #[test]
    fn test_group_by_label() {
        let square = Polygon::unit_square();
        let polygons = vec![
            LabeledPolygon {
                label: 1,
                polygon: square.clone(),
            },
            LabeledPolygon {
                label: 1,
                polygon: square.clone(),
            },
            LabeledPolygon {
                label: 5,
                polygon: square,
            },
        ];

        let groups = group_by_label(&polygons, 3);
        let sizes: Vec<usize> = groups.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![0, 2, 0]);
    }

    // Tests point grouping preserves trajectory order within a label
    // Verified by sorting points inside each group
    #[test]
    fn test_group_points_by_label() {
        let points = labeled_points(&[(0, 0.9, 0.9), (1, 0.5, 0.5), (0, 0.1, 0.1)]);
        let groups = group_points_by_label(&points, 2);

        assert_eq!(groups[0], vec![Point::new(0.9, 0.9), Point::new(0.1, 0.1)]);
        assert_eq!(groups[1], vec![Point::new(0.5, 0.5)]);
    }
}

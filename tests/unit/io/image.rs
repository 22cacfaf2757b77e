//! Tests for viewport mapping, rasterization and PNG export

#[cfg(test)]
mod tests {
    use fractal_ifs::io::configuration::{BACKGROUND_COLOR, MAX_IMAGE_SIZE};
    use fractal_ifs::io::image::{Viewport, export_png, label_color, render};
    use fractal_ifs::io::progress::ProgressManager;
    use fractal_ifs::spatial::geometry::{Bounds, Geometry, LabeledPoint, LabeledPolygon};
    use fractal_ifs::spatial::polygon::{Point, Polygon};
    use image::Rgba;
    use tempfile::TempDir;

    // Tests palette wraps around
    // Verified by clamping to the last color
    #[test]
    fn test_label_color_wraps() {
        assert_eq!(label_color(0), label_color(10));
        assert_ne!(label_color(0), label_color(1));
    }

    // Tests world to pixel mapping with y pointing up
    // Verified by leaving the y axis unflipped
    #[test]
    fn test_to_pixel() {
        let viewport = Viewport::new(Bounds::UNIT, 100).unwrap();

        assert_eq!(viewport.to_pixel(Point::new(0.0, 0.0)), (0.0, 100.0));
        assert_eq!(viewport.to_pixel(Point::new(1.0, 1.0)), (100.0, 0.0));
        assert_eq!(viewport.to_pixel(Point::new(0.25, 0.75)), (25.0, 25.0));
    }

    // Tests image size limits
    // Verified by accepting a zero size
    #[test]
    fn test_viewport_size_limits() {
        assert!(Viewport::new(Bounds::UNIT, 0).is_err());
        assert!(Viewport::new(Bounds::UNIT, MAX_IMAGE_SIZE + 1).is_err());
        assert_eq!(Viewport::new(Bounds::UNIT, 16).unwrap().size(), 16);
    }

    // Tests fitting falls back to the unit square and pads degenerate bounds
    // Verified by dividing by a zero extent
    #[test]
    fn test_viewport_fit() {
        let empty = Viewport::fit(&Geometry::Points(Vec::new()), 10).unwrap();
        assert_eq!(empty.bounds(), Bounds::UNIT);

        let single = Geometry::Points(vec![LabeledPoint {
            label: 0,
            point: Point::new(2.0, 2.0),
        }]);
        let fitted = Viewport::fit(&single, 10).unwrap();
        assert!(fitted.bounds().width() > 0.0);
        assert_eq!(fitted.to_pixel(Point::new(2.0, 2.0)), (5.0, 5.0));
    }

    // Tests a filled polygon tints covered pixels and leaves others white
    // Verified by filling the bounding box instead of the polygon
    #[test]
    fn test_render_polygon() {
        let viewport = Viewport::new(Bounds::UNIT, 10).unwrap();
        let lower_left = Polygon::from_pairs(&[(0.0, 0.0), (0.0, 0.5), (0.5, 0.5), (0.5, 0.0)]);
        let geometry = Geometry::Polygons(vec![LabeledPolygon {
            label: 1,
            polygon: lower_left,
        }]);

        let image = render(&geometry, &viewport, &mut ProgressManager::hidden());

        assert_eq!((image.width(), image.height()), (10, 10));
        assert_ne!(*image.get_pixel(2, 7), Rgba(BACKGROUND_COLOR));
        assert_eq!(*image.get_pixel(7, 2), Rgba(BACKGROUND_COLOR));
        assert_eq!(*image.get_pixel(2, 2), Rgba(BACKGROUND_COLOR));
    }

    // Tests points are plotted opaque in their label color and clipped outside
    // Verified by blending points like polygons
    #[test]
    fn test_render_points() {
        let viewport = Viewport::new(Bounds::UNIT, 10).unwrap();
        let geometry = Geometry::Points(vec![
            LabeledPoint {
                label: 2,
                point: Point::new(0.55, 0.55),
            },
            LabeledPoint {
                label: 0,
                point: Point::new(5.0, -3.0),
            },
        ]);

        let mut progress = ProgressManager::hidden();
        let image = render(&geometry, &viewport, &mut progress);

        let [r, g, b] = label_color(2);
        assert_eq!(*image.get_pixel(5, 4), Rgba([r, g, b, 255]));
        assert_eq!(progress.position(), 2);
    }

    // Tests export creates missing directories and writes a PNG
    // Verified by writing into the parent directory only
    #[test]
    fn test_export_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("out.png");
        let viewport = Viewport::new(Bounds::UNIT, 8).unwrap();
        let image = render(
            &Geometry::Points(Vec::new()),
            &viewport,
            &mut ProgressManager::hidden(),
        );

        export_png(&image, &path).unwrap();
        let loaded = image::open(&path).unwrap();
        assert_eq!(loaded.width(), 8);
    }
}

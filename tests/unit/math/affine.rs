//! Tests for affine transforms, their matrix form and parameter access

#[cfg(test)]
mod tests {
    use fractal_ifs::math::affine::{AffineTransform, Parameter};
    use fractal_ifs::spatial::polygon::{Point, Polygon};
    use ndarray::array;

    // Tests the homogeneous matrix layout [[a,b,e],[c,d,f],[0,0,1]]
    // Verified by swapping the translation column with b/d
    #[test]
    fn test_matrix_layout() {
        let transform = AffineTransform::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 0.5);

        assert_eq!(
            transform.matrix(),
            array![[1.0, 2.0, 5.0], [3.0, 4.0, 6.0], [0.0, 0.0, 1.0]]
        );
    }

    // Tests point application matches the matrix product
    // Verified by dropping the translation term
    #[test]
    fn test_apply_point() {
        let transform = AffineTransform::new(0.5, 0.25, -0.5, 1.0, 0.1, -0.2, 1.0);
        let mapped = transform.apply(Point::new(2.0, 4.0));

        assert!((mapped.x - (0.5 * 2.0 + 0.25 * 4.0 + 0.1)).abs() < 1e-12);
        assert!((mapped.y - (-0.5 * 2.0 + 1.0 * 4.0 - 0.2)).abs() < 1e-12);
        assert_eq!(mapped.homogeneous()[2], 1.0);
    }

    // Tests that the origin maps onto the translation
    // Verified by starting from (1, 1) instead
    #[test]
    fn test_origin_maps_to_translation() {
        let transform = AffineTransform::new(0.3, -1.2, 0.7, 0.9, 0.25, 0.5, 0.0);
        assert_eq!(transform.apply(Point::ORIGIN), Point::new(0.25, 0.5));
    }

    // Tests polygon mapping keeps vertex order and the homogeneous row
    // Verified by transposing the matrix product
    #[test]
    fn test_apply_polygon_scale() {
        let transform = AffineTransform::new(0.5, 0.0, 0.0, 0.5, 0.0, 0.0, 1.0);
        let mapped = transform.apply_polygon(&Polygon::unit_square());

        assert_eq!(
            mapped.to_pairs(),
            vec![(0.0, 0.0), (0.0, 0.5), (0.5, 0.5), (0.5, 0.0)]
        );
        assert!(mapped.homogeneous().row(2).iter().all(|&w| w == 1.0));
    }

    // Tests polygon and point application agree
    // Verified by using mul_add ordering that changes the result beyond tolerance
    #[test]
    fn test_polygon_and_point_agree() {
        let transform = AffineTransform::new(0.85, 0.04, -0.04, 0.85, 0.0, 1.6, 0.85);
        let polygon = Polygon::from_pairs(&[(0.3, -0.7), (1.5, 2.0), (-1.0, 0.25)]);
        let mapped = transform.apply_polygon(&polygon);

        for (original, result) in polygon.points().zip(mapped.points()) {
            let expected = transform.apply(original);
            assert!((expected.x - result.x).abs() < 1e-12);
            assert!((expected.y - result.y).abs() < 1e-12);
        }
    }

    // Tests get/set address the named field only
    // Verified by mapping E and F to the same field
    #[test]
    fn test_get_and_set() {
        let mut transform = AffineTransform::IDENTITY;

        for (offset, parameter) in Parameter::ALL.into_iter().enumerate() {
            transform.set(parameter, offset as f64 + 10.0);
        }

        for (offset, parameter) in Parameter::ALL.into_iter().enumerate() {
            assert_eq!(transform.get(parameter), offset as f64 + 10.0);
        }
        assert_eq!(transform.p, 16.0);
    }

    // Tests coefficients are listed a..f without the weight
    // Verified by including p in the coefficient list
    #[test]
    fn test_coefficients_exclude_weight() {
        let transform = AffineTransform::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0);
        let names: Vec<&str> = transform
            .coefficients()
            .iter()
            .map(|(parameter, _)| parameter.name())
            .collect();

        assert_eq!(names, vec!["a", "b", "c", "d", "e", "f"]);
        assert!(transform.coefficients().iter().all(|(_, value)| *value < 7.0));
        assert!(!Parameter::P.is_coefficient());
        assert!(Parameter::E.is_coefficient());
    }

    // Tests the default transform is the identity with zero weight
    // Verified by defaulting p to one
    #[test]
    fn test_default_is_identity() {
        let transform = AffineTransform::default();
        assert_eq!(transform, AffineTransform::IDENTITY);
        assert_eq!(transform.p, 0.0);
        assert_eq!(transform.apply(Point::new(0.3, 0.4)), Point::new(0.3, 0.4));
    }

    // Tests parsing with and without weight
    // Verified by requiring exactly seven values
    #[test]
    fn test_parse_transform() {
        let with_weight: AffineTransform = "0.5, 0, 0, 0.5, 0.25, 0.5, 0.3".parse().unwrap();
        assert_eq!(
            with_weight,
            AffineTransform::new(0.5, 0.0, 0.0, 0.5, 0.25, 0.5, 0.3)
        );

        let without_weight: AffineTransform = "-1,0,0,-1,0,0".parse().unwrap();
        assert_eq!(without_weight.a, -1.0);
        assert_eq!(without_weight.p, 0.0);
    }

    // Tests malformed transforms are rejected
    // Verified by ignoring extra fields
    #[test]
    fn test_parse_transform_errors() {
        assert!("1,2,3".parse::<AffineTransform>().is_err());
        assert!("1,2,3,4,5,6,7,8".parse::<AffineTransform>().is_err());
        assert!("1,2,x,4,5,6".parse::<AffineTransform>().is_err());
    }

    // Tests parameter names round-trip through FromStr
    // Verified by making the lookup case sensitive
    #[test]
    fn test_parameter_from_str() {
        for parameter in Parameter::ALL {
            assert_eq!(parameter.name().parse::<Parameter>().unwrap(), parameter);
        }
        assert_eq!("E".parse::<Parameter>().unwrap(), Parameter::E);
        assert!("g".parse::<Parameter>().is_err());
        assert_eq!(Parameter::D.to_string(), "d");
    }
}

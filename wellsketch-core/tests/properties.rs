use proptest::prelude::*;
use wellsketch_core::{
    calculate_ranges, casing_shapes, hole_points, ElementConfig, LinearScale, Scales,
};

proptest! {
    #[test]
    fn scale_hits_endpoints_and_is_monotonic(
        d0 in -1e4f64..1e4,
        width in 1e-2f64..1e4,
        r0 in -1e3f64..1e3,
        r1 in -1e3f64..1e3,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
    ) {
        prop_assume!((r1 - r0).abs() > 1e-3);
        let d1 = d0 + width;
        let scale = LinearScale::new((d0, d1), (r0, r1));
        prop_assert!((scale.map(d0) - r0).abs() < 1e-6);
        prop_assert!((scale.map(d1) - r1).abs() < 1e-6);

        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        prop_assume!(hi - lo > 1e-3);
        let (vlo, vhi) = (scale.map(d0 + lo * width), scale.map(d0 + hi * width));
        if r0 < r1 {
            prop_assert!(vlo < vhi);
        } else {
            prop_assert!(vlo > vhi);
        }
    }

    #[test]
    fn hole_contour_order(
        hole_size in 1.0f64..40.0,
        extra in 0.0f64..10.0,
        hole_md in 300.0f64..6000.0,
    ) {
        let wider = ElementConfig::open_hole(hole_size + extra, 250.0);
        let hole = ElementConfig::open_hole(hole_size, hole_md);
        let elements = [wider, hole.clone()];
        let ranges = calculate_ranges(&elements, 0.0).unwrap();
        let scales = Scales::for_content(&ranges, 300.0, 760.0).unwrap();
        let pts = hole_points(&scales, &hole, &ranges);

        prop_assert!(pts[0].x < pts[2].x);
        prop_assert!(pts[0].y <= pts[1].y);
        prop_assert_eq!(pts[0].x, pts[1].x);
        prop_assert_eq!(pts[2].x, pts[3].x);
        prop_assert_eq!(pts[1].y, pts[2].y);
    }

    #[test]
    fn casing_incisions_are_mirror_images(
        hole_size in 6.0f64..36.0,
        od_ratio in 0.3f64..1.0,
        start_md in 0.0f64..1000.0,
        run in 50.0f64..4000.0,
        width in 100.0f64..1200.0,
        height in 100.0f64..1200.0,
    ) {
        let od = hole_size * od_ratio;
        let end_md = start_md + run;
        let config = ElementConfig::casing(hole_size, end_md, od, start_md, end_md);
        let ranges = calculate_ranges(std::slice::from_ref(&config), 0.0).unwrap();
        let scales = Scales::for_content(&ranges, width, height).unwrap();
        let casing = casing_shapes(&scales, &config, &ranges).unwrap();

        let axis = (casing.fill[0].x + casing.fill[2].x) / 2.0;
        for (l, r) in casing.left_incision.iter().zip(casing.right_incision.iter()) {
            prop_assert!((l.mirror_x(axis).x - r.x).abs() < 1e-6);
            prop_assert_eq!(l.y, r.y);
        }
    }
}

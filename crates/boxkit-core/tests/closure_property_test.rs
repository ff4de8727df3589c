//! Property-based closure and length checks over the parameter space.

use boxkit_core::{generate_panels, BoxParameters};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_panels_close_for_any_valid_parameters(
        width in 20.0f64..400.0,
        height in 20.0f64..400.0,
        depth in 20.0f64..400.0,
        thickness in 1.0f64..10.0,
        finger_width in 4.0f64..19.0,
        finger_spacing in 0.0f64..10.0,
        kerf in 0.0f64..0.5,
    ) {
        let params = BoxParameters {
            width,
            height,
            depth,
            thickness,
            finger_width,
            finger_spacing,
            kerf,
        };
        let panels = generate_panels(&params).unwrap();
        let max_dim = width.max(height).max(depth);

        for panel in &panels {
            let (dx, dy) = panel.segments.iter().fold((0.0, 0.0), |(x, y), s| {
                let (sx, sy) = s.displacement();
                (x + sx, y + sy)
            });
            prop_assert!(dx.abs() <= 1e-9 * max_dim, "{}: dx = {:e}", panel.id, dx);
            prop_assert!(dy.abs() <= 1e-9 * max_dim, "{}: dy = {:e}", panel.id, dy);

            let total: f64 = panel.segments.iter().map(|s| s.run_length().abs()).sum();
            let perimeter = 2.0 * (panel.w + panel.h);
            prop_assert!((total - perimeter).abs() < 1e-6 * perimeter);
        }
    }
}

//! Integration tests for the animation primitives.

use acursor_core::animation::*;
use acursor_core::css::Rgba;
use proptest::prelude::*;
use std::time::Duration;

const MS_200: Duration = Duration::from_millis(200);

#[test]
fn fade_duration_tracking() {
    let mut fade = Fade::new(MS_200);
    for _ in 0..200 {
        fade.tick(Duration::from_millis(1));
    }
    assert!(fade.is_complete(), "200x1ms should complete a 200ms fade");
}

#[test]
fn easing_functions_are_monotonic() {
    for easing in [linear, ease_in, ease_out, ease_in_out, ease_in_cubic, ease_out_cubic] {
        let mut prev = 0.0f32;
        for i in 0..=100 {
            let t = i as f32 / 100.0;
            let v = easing(t);
            assert!(v >= prev - 0.001, "easing should be monotonic at t={t}");
            prev = v;
        }
    }
}

proptest! {
    #[test]
    fn fade_value_stays_in_unit_interval(steps in proptest::collection::vec(0u64..80, 0..40)) {
        let mut fade = Fade::new(MS_200).easing(ease_out);
        for ms in steps {
            fade.tick(Duration::from_millis(ms));
            let v = fade.value();
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn color_lerp_hits_endpoints(a in 0.0f32..=1.0, b in 0.0f32..=1.0) {
        let from = Rgba::new(0.0, 0.0, 0.0, a);
        let to = Rgba::new(255.0, 255.0, 255.0, b);
        prop_assert_eq!(from.lerp(&to, 0.0), from);
        let end = from.lerp(&to, 1.0);
        prop_assert!((end.a - b).abs() < 1e-6);
        prop_assert!((end.r - 255.0).abs() < 1e-3);
    }
}

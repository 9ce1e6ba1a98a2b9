//! Morph Evaluator
//!
//! Blends two surface functions with a smoothstep-eased weight.
//! Pure functions, no state.

use crate::surface::{get_function, FunctionId, Point3, SurfaceFunction};

/// Cubic smoothstep 3p² - 2p³, progress clamped to [0, 1]
#[inline]
pub fn ease(progress: f32) -> f32 {
    let p = progress.clamp(0.0, 1.0);
    p * p * (3.0 - 2.0 * p)
}

/// Unclamped per-axis linear interpolation
#[inline]
pub fn lerp_unclamped(from: Point3, to: Point3, weight: f32) -> Point3 {
    from + (to - from) * weight
}

/// Evaluate both functions and blend them by eased progress
#[allow(clippy::too_many_arguments)]
pub fn morph(
    u: f32,
    v: f32,
    t: f32,
    a: f32,
    f: f32,
    from: SurfaceFunction,
    to: SurfaceFunction,
    progress: f32,
) -> Point3 {
    lerp_unclamped(from(u, v, t, a, f), to(u, v, t, a, f), ease(progress))
}

/// Same as [`morph`], resolving the functions from the registry
#[allow(clippy::too_many_arguments)]
pub fn morph_by_id(
    u: f32,
    v: f32,
    t: f32,
    a: f32,
    f: f32,
    from: FunctionId,
    to: FunctionId,
    progress: f32,
) -> Point3 {
    morph(u, v, t, a, f, get_function(from), get_function(to), progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::all_functions;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const EPSILON: f32 = 1e-5;

    fn assert_points_close(a: Point3, b: Point3) {
        assert!(
            (a - b).abs().max_element() < EPSILON,
            "expected {:?}, got {:?}",
            b,
            a
        );
    }

    /// Random (u, v, t, a, f); amplitude kept small so absolute tolerances hold
    fn sample_parameters(rng: &mut StdRng) -> (f32, f32, f32, f32, f32) {
        (
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(0.0..20.0),
            rng.gen_range(0.1..2.0),
            rng.gen_range(0.1..10.0),
        )
    }

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(1.0), 1.0);
        assert!((ease(0.5) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_ease_clamps_out_of_range_progress() {
        assert_eq!(ease(-0.25), 0.0);
        assert_eq!(ease(1.25), 1.0);
    }

    #[test]
    fn test_ease_is_monotonic() {
        let mut previous = ease(0.0);
        for i in 1..=100 {
            let current = ease(i as f32 / 100.0);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_morph_boundaries_match_endpoints() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let (u, v, t, a, f) = sample_parameters(&mut rng);
            let from = all_functions()[rng.gen_range(0..all_functions().len())];
            let to = all_functions()[rng.gen_range(0..all_functions().len())];

            let start = morph_by_id(u, v, t, a, f, from, to, 0.0);
            let end = morph_by_id(u, v, t, a, f, from, to, 1.0);

            assert_points_close(start, get_function(from)(u, v, t, a, f));
            assert_points_close(end, get_function(to)(u, v, t, a, f));
        }
    }

    #[test]
    fn test_morph_is_symmetric_under_progress_reversal() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let (u, v, t, a, f) = sample_parameters(&mut rng);
            let p: f32 = rng.gen_range(0.0..1.0);
            let from = all_functions()[rng.gen_range(0..all_functions().len())];
            let to = all_functions()[rng.gen_range(0..all_functions().len())];

            let forward = morph_by_id(u, v, t, a, f, from, to, p);
            let reverse = morph_by_id(u, v, t, a, f, to, from, 1.0 - p);
            assert_points_close(forward, reverse);
        }
    }

    #[test]
    fn test_morph_midpoint_is_average() {
        let from = get_function(FunctionId::Wave);
        let to = get_function(FunctionId::Sphere);
        let mid = morph(0.2, 0.4, 1.0, 1.0, 1.0, from, to, 0.5);
        let expected = (from(0.2, 0.4, 1.0, 1.0, 1.0) + to(0.2, 0.4, 1.0, 1.0, 1.0)) * 0.5;
        assert_points_close(mid, expected);
    }
}

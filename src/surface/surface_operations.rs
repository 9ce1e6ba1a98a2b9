//! Surface Function Operations - Pure DOP Functions
//!
//! All functions are pure: take data, return results, no side effects.
//! The registry is a constant dispatch table indexed by FunctionId.

use super::surface_data::{
    FunctionId, Point3, SurfaceFunction, FUNCTION_COUNT, FUNCTION_IDS, FUNCTION_NAMES,
};
use crate::error::{GraphError, GraphResult};
use std::f32::consts::PI;

// ============================================================================
// SURFACE FORMULAS
// ============================================================================

/// Sine wave travelling along u
pub fn wave(u: f32, v: f32, t: f32, a: f32, f: f32) -> Point3 {
    Point3::new(u, (PI * (u + t) * f).sin() * a, v)
}

/// Sine wave travelling diagonally across the grid
pub fn cross_wave(u: f32, v: f32, t: f32, a: f32, f: f32) -> Point3 {
    Point3::new(u, (PI * (u + v + t) * f).sin() * a, v)
}

/// Two stacked waves: a slow base plus a half-height wave at double frequency
pub fn multi_wave(u: f32, v: f32, t: f32, a: f32, f: f32) -> Point3 {
    let mut y = wave(u, v, t * 0.5, a, f).y;
    y += wave(u, v, t, a * 0.5, f * 2.0).y;
    y *= 2.0 / 3.0;
    Point3::new(u, y, v)
}

/// Summed waves modulated by a slow diagonal wave
pub fn multi_cross_wave(u: f32, v: f32, t: f32, a: f32, f: f32) -> Point3 {
    let mut y = wave(u, v, t * 0.5, a, f).y;
    y += wave(v, v, t, a * 0.5, f * 2.0).y;
    y *= wave(u + v, v, t * 0.25, a, f).y;
    y *= 1.0 / 2.5;
    Point3::new(u, y, v)
}

/// Ripple spreading out from the u = 0 line, damped with distance
pub fn ripple(u: f32, v: f32, t: f32, a: f32, f: f32) -> Point3 {
    let d = u.abs();
    let mut y = (PI * (f * d - t)).sin() * a;
    y /= 1.0 + 10.0 * d;
    Point3::new(u, y, v)
}

/// Radial ripple around the grid center
pub fn cross_ripple(u: f32, v: f32, t: f32, a: f32, f: f32) -> Point3 {
    let d = (u * u + v * v).sqrt();
    let mut y = wave(d, v, t, a, f).y;
    y /= 1.0 + 10.0 * d;
    Point3::new(u, y, v)
}

/// Sphere with a rippling radius; frequency controls how far it wraps
pub fn sphere(u: f32, v: f32, t: f32, a: f32, f: f32) -> Point3 {
    let r = 0.9 + a / 100.0 * (PI * (6.0 * u + 4.0 * v + t)).sin();
    let s = r * (0.5 * PI * v).cos();

    Point3::new(
        s * (f * PI * u).sin(),
        r * (f * PI * 0.5 * v).sin(),
        s * (f * PI * u).cos(),
    )
}

/// Sphere displaced sideways by a travelling wave
pub fn ripple_sphere(u: f32, v: f32, t: f32, a: f32, f: f32) -> Point3 {
    let mut p = sphere(u, v, t, a, f);

    let x_offset = wave(p.x, v, t, 0.5, 1.0).y;
    // Evaluated but never applied: both axes take the x offset.
    let _z_offset = wave(p.z, v, t, 0.25, 1.0).y;

    p.x += x_offset;
    p.z += x_offset;
    p
}

/// Torus whose major radius follows amplitude and minor radius follows frequency
pub fn torus(u: f32, v: f32, t: f32, a: f32, f: f32) -> Point3 {
    let r1 = 0.7 + (a - 0.1) * 0.1 * (PI * (6.0 * u + 0.5 * t)).sin();
    let r2 = 0.15 + (f - 0.1) * 0.05 * (PI * (8.0 * u + 4.0 * v + 2.0 * t)).sin();
    let s = r1 + r2 * (0.5 * PI * v).cos();

    Point3::new(
        s * (PI * u).sin(),
        r2 * (PI * v).sin(),
        s * (PI * u).cos(),
    )
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Formula table, same order as FUNCTION_IDS
static FUNCTION_TABLE: [SurfaceFunction; FUNCTION_COUNT] = [
    wave,
    cross_wave,
    multi_wave,
    multi_cross_wave,
    ripple,
    cross_ripple,
    sphere,
    ripple_sphere,
    torus,
];

/// Look up the formula for a function id
#[inline]
pub fn get_function(id: FunctionId) -> SurfaceFunction {
    FUNCTION_TABLE[function_index(id) as usize]
}

/// Evaluate a registered function at one surface parameter
#[inline]
pub fn evaluate(id: FunctionId, u: f32, v: f32, t: f32, a: f32, f: f32) -> Point3 {
    get_function(id)(u, v, t, a, f)
}

/// Next function in registration order, wrapping to the first
pub fn next_function(id: FunctionId) -> FunctionId {
    let index = function_index(id) as usize;
    FUNCTION_IDS[(index + 1) % FUNCTION_COUNT]
}

/// Previous function in registration order, wrapping to the last
pub fn previous_function(id: FunctionId) -> FunctionId {
    let index = function_index(id) as usize;
    FUNCTION_IDS[(index + FUNCTION_COUNT - 1) % FUNCTION_COUNT]
}

/// Registry index of a function id
#[inline]
pub fn function_index(id: FunctionId) -> u32 {
    id as u32
}

/// Resolve a registry index, failing for anything outside the table
pub fn function_from_index(index: u32) -> GraphResult<FunctionId> {
    FUNCTION_IDS
        .get(index as usize)
        .copied()
        .ok_or(GraphError::InvalidSelection {
            index: i64::from(index),
            count: FUNCTION_COUNT as u32,
        })
}

/// Stable snake_case name of a function
pub fn function_name(id: FunctionId) -> &'static str {
    FUNCTION_NAMES[function_index(id) as usize]
}

/// Resolve a function by name (case-insensitive, '-' and ' ' accepted for '_')
pub fn function_from_name(name: &str) -> GraphResult<FunctionId> {
    let normalized: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect();

    FUNCTION_NAMES
        .iter()
        .position(|candidate| *candidate == normalized)
        .map(|index| FUNCTION_IDS[index])
        .ok_or_else(|| GraphError::UnknownFunction {
            name: name.to_string(),
        })
}

/// All registered functions in cycling order
pub fn all_functions() -> &'static [FunctionId] {
    &FUNCTION_IDS
}

/// Number of registered functions
pub fn function_count() -> usize {
    FUNCTION_COUNT
}

/// True for the closed parametric surfaces, false for height fields
pub fn is_closed_surface(id: FunctionId) -> bool {
    matches!(
        id,
        FunctionId::Sphere | FunctionId::RippleSphere | FunctionId::Torus
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const EPSILON: f32 = 1e-5;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_next_wraps_to_first() {
        let last = *all_functions().last().expect("registry is not empty");
        assert_eq!(last, FunctionId::Torus);
        assert_eq!(next_function(last), FunctionId::Wave);
    }

    #[test]
    fn test_next_is_injective() {
        let successors: HashSet<FunctionId> =
            all_functions().iter().map(|id| next_function(*id)).collect();
        assert_eq!(successors.len(), function_count());
    }

    #[test]
    fn test_full_cycle_visits_every_function() {
        let mut id = FunctionId::Wave;
        let mut visited = Vec::new();
        for _ in 0..function_count() {
            visited.push(id);
            id = next_function(id);
        }
        assert_eq!(id, FunctionId::Wave);
        assert_eq!(visited, all_functions());
    }

    #[test]
    fn test_previous_inverts_next() {
        for id in all_functions() {
            assert_eq!(previous_function(next_function(*id)), *id);
        }
    }

    #[test]
    fn test_function_from_index() {
        assert_eq!(
            function_from_index(6).expect("index 6 is registered"),
            FunctionId::Sphere
        );
        assert!(matches!(
            function_from_index(9),
            Err(GraphError::InvalidSelection { index: 9, count: 9 })
        ));
    }

    #[test]
    fn test_function_names() {
        for id in all_functions() {
            let name = function_name(*id);
            assert_eq!(function_from_name(name).expect("name resolves"), *id);
        }
        assert_eq!(
            function_from_name("Multi-Cross Wave").expect("loose name resolves"),
            FunctionId::MultiCrossWave
        );
        assert!(function_from_name("klein_bottle").is_err());
    }

    #[test]
    fn test_wave_values() {
        let p = wave(-0.75, -0.75, 0.0, 1.0, 1.0);
        assert_close(p.x, -0.75);
        assert_close(p.y, -std::f32::consts::FRAC_1_SQRT_2);
        assert_close(p.z, -0.75);

        let p = cross_wave(0.25, 0.25, 0.0, 2.0, 1.0);
        assert_close(p.y, 2.0);
    }

    #[test]
    fn test_height_fields_keep_grid_position() {
        for id in all_functions().iter().filter(|id| !is_closed_surface(**id)) {
            let p = evaluate(*id, 0.3, -0.6, 1.7, 1.5, 2.0);
            assert_close(p.x, 0.3);
            assert_close(p.z, -0.6);
        }
    }

    #[test]
    fn test_multi_wave_combines_components() {
        let (u, v, t, a, f) = (0.1, 0.2, 0.7, 1.0, 1.0);
        let expected =
            (wave(u, v, t * 0.5, a, f).y + wave(u, v, t, a * 0.5, f * 2.0).y) * (2.0 / 3.0);
        assert_close(multi_wave(u, v, t, a, f).y, expected);
    }

    #[test]
    fn test_multi_cross_wave_uses_v_for_second_term() {
        let (u, v, t, a, f) = (0.4, -0.3, 1.1, 1.0, 1.0);
        let expected = (wave(u, v, t * 0.5, a, f).y + wave(v, v, t, a * 0.5, f * 2.0).y)
            * wave(u + v, v, t * 0.25, a, f).y
            / 2.5;
        assert_close(multi_cross_wave(u, v, t, a, f).y, expected);
    }

    #[test]
    fn test_ripple_is_flat_at_origin_line() {
        assert_close(ripple(0.0, 0.5, 0.0, 1.0, 1.0).y, 0.0);
        // Damping: 1 / (1 + 10 * 0.5) of the undamped sine
        let undamped = (PI * (0.5 - 0.0)).sin();
        assert_close(ripple(0.5, 0.0, 0.0, 1.0, 1.0).y, undamped / 6.0);
    }

    #[test]
    fn test_cross_ripple_is_radially_symmetric() {
        let a = cross_ripple(0.3, 0.4, 0.2, 1.0, 1.0);
        let b = cross_ripple(-0.4, -0.3, 0.2, 1.0, 1.0);
        assert_close(a.y, b.y);
    }

    #[test]
    fn test_sphere_radius_stays_near_point_nine() {
        for i in 0..20 {
            let u = -1.0 + i as f32 * 0.1;
            let v = 1.0 - i as f32 * 0.1;
            let length = sphere(u, v, 0.3, 1.0, 1.0).length();
            assert!((0.89 - EPSILON..=0.91 + EPSILON).contains(&length), "{}", length);
        }
    }

    #[test]
    fn test_ripple_sphere_applies_x_offset_to_both_axes() {
        let (u, v, t, a, f) = (0.35, -0.2, 0.9, 1.0, 1.0);
        let base = sphere(u, v, t, a, f);
        let rippled = ripple_sphere(u, v, t, a, f);
        let offset = wave(base.x, v, t, 0.5, 1.0).y;

        assert_close(rippled.x - base.x, offset);
        assert_close(rippled.z - base.z, offset);
        assert_close(rippled.y, base.y);
    }

    #[test]
    fn test_torus_reference_point() {
        // a = f = 0.1 removes both radius perturbations
        let p = torus(0.0, 0.0, 0.0, 0.1, 0.1);
        assert_close(p.x, 0.0);
        assert_close(p.y, 0.0);
        assert_close(p.z, 0.85);
    }

    #[test]
    fn test_functions_are_deterministic() {
        for id in all_functions() {
            let a = evaluate(*id, 0.123, -0.456, 3.21, 1.3, 1.7);
            let b = evaluate(*id, 0.123, -0.456, 3.21, 1.3, 1.7);
            assert_eq!(a, b);
        }
    }
}

//! Surface Function Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in surface_operations.rs

use serde::{Deserialize, Serialize};

/// A point on the animated surface
pub type Point3 = glam::Vec3;

/// Closed-form surface: (u, v, time, amplitude, frequency) -> point
///
/// Must be pure and deterministic; it is re-evaluated for every grid cell
/// on every tick.
pub type SurfaceFunction = fn(f32, f32, f32, f32, f32) -> Point3;

/// Registered surface functions, in registration (cycling) order
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum FunctionId {
    // Height fields over the flat grid
    #[default]
    Wave = 0,
    CrossWave = 1,
    MultiWave = 2,
    MultiCrossWave = 3,
    Ripple = 4,
    CrossRipple = 5,

    // Closed parametric surfaces
    Sphere = 6,
    RippleSphere = 7,
    Torus = 8,
}

/// Number of registered functions
pub const FUNCTION_COUNT: usize = 9;

/// Every id, indexed by its discriminant
pub const FUNCTION_IDS: [FunctionId; FUNCTION_COUNT] = [
    FunctionId::Wave,
    FunctionId::CrossWave,
    FunctionId::MultiWave,
    FunctionId::MultiCrossWave,
    FunctionId::Ripple,
    FunctionId::CrossRipple,
    FunctionId::Sphere,
    FunctionId::RippleSphere,
    FunctionId::Torus,
];

/// Stable names, indexed by discriminant (matches the serde representation)
pub const FUNCTION_NAMES: [&str; FUNCTION_COUNT] = [
    "wave",
    "cross_wave",
    "multi_wave",
    "multi_cross_wave",
    "ripple",
    "cross_ripple",
    "sphere",
    "ripple_sphere",
    "torus",
];

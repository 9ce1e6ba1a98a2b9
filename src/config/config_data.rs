//! Graph Configuration Data - Pure DOP
//!
//! NO METHODS. Just data.
//! Validation and loading happen in config_operations.rs

use crate::constants::{resolution, schedule, shape};
use crate::surface::FunctionId;
use serde::{Deserialize, Serialize};

/// How the rendering side backs each grid point; decides the resolution ceiling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridBackend {
    /// One scene object per point
    #[default]
    PointObjects,
    /// Instanced draw over a GPU-resident position buffer
    Instanced,
}

/// Grid sampling parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Points per grid side; the grid holds resolution² points
    pub resolution: u32,
    pub amplitude: f32,
    pub frequency: f32,
    /// Divisor applied to animation time before it reaches the surface
    pub time_dilation: f32,
    /// Scale applied to every output z coordinate (flattening control)
    pub z_range: f32,
    pub backend: GridBackend,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            resolution: resolution::DEFAULT_RESOLUTION,
            amplitude: shape::DEFAULT_AMPLITUDE,
            frequency: shape::DEFAULT_FREQUENCY,
            time_dilation: shape::DEFAULT_TIME_DILATION,
            z_range: shape::DEFAULT_Z_RANGE,
            backend: GridBackend::default(),
        }
    }
}

/// Function cycling schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub hold_duration: f32,
    pub transition_duration: f32,
    pub auto_advance: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            hold_duration: schedule::DEFAULT_HOLD_DURATION,
            transition_duration: schedule::DEFAULT_TRANSITION_DURATION,
            auto_advance: schedule::DEFAULT_AUTO_ADVANCE,
        }
    }
}

/// Complete graph configuration
///
/// Parsed through [`RawGraphConfig`] so that the initial function is resolved
/// by the surface registry rather than by serde.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphConfig {
    pub initial_function: FunctionId,
    pub grid: GridConfig,
    pub schedule: ScheduleConfig,
}

/// How a config file names a surface function: registry index or name
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FunctionSelector {
    Index(i64),
    Name(String),
}

/// Graph configuration exactly as read from TOML, before resolution
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawGraphConfig {
    pub initial_function: Option<FunctionSelector>,
    pub grid: GridConfig,
    pub schedule: ScheduleConfig,
}

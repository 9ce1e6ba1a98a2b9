//! Graph Configuration Operations - Pure DOP Functions
//!
//! Validation, TOML loading and saving. Nothing here touches a running graph.

use super::config_data::{
    FunctionSelector, GraphConfig, GridBackend, GridConfig, RawGraphConfig, ScheduleConfig,
};
use crate::constants::{resolution, shape};
use crate::error::{invalid_config, GraphError, GraphResult, PathContext};
use crate::surface::{function_from_index, function_from_name, FunctionId, FUNCTION_COUNT};
use std::path::Path;

// ============================================================================
// LIMITS
// ============================================================================

/// Largest supported grid side for a backend
pub fn max_resolution(backend: GridBackend) -> u32 {
    match backend {
        GridBackend::PointObjects => resolution::MAX_POINT_OBJECT_RESOLUTION,
        GridBackend::Instanced => resolution::MAX_INSTANCED_RESOLUTION,
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Validate grid parameters
pub fn validate_grid_config(grid: &GridConfig) -> GraphResult<()> {
    let max = max_resolution(grid.backend);
    if grid.resolution < resolution::MIN_RESOLUTION {
        return Err(invalid_config(
            "grid.resolution",
            grid.resolution,
            format!("below minimum of {}", resolution::MIN_RESOLUTION),
        ));
    }
    if grid.resolution > max {
        return Err(invalid_config(
            "grid.resolution",
            grid.resolution,
            format!("exceeds maximum of {} for {:?} backend", max, grid.backend),
        ));
    }

    check_positive_range("grid.amplitude", grid.amplitude, shape::MAX_AMPLITUDE)?;
    check_positive_range("grid.frequency", grid.frequency, shape::MAX_FREQUENCY)?;

    if !grid.time_dilation.is_finite()
        || grid.time_dilation == 0.0
        || !(shape::MIN_TIME_DILATION..=shape::MAX_TIME_DILATION).contains(&grid.time_dilation)
    {
        return Err(invalid_config(
            "grid.time_dilation",
            grid.time_dilation,
            format!(
                "must be non-zero and within [{}, {}]",
                shape::MIN_TIME_DILATION,
                shape::MAX_TIME_DILATION
            ),
        ));
    }

    if !(shape::MIN_Z_RANGE..=shape::MAX_Z_RANGE).contains(&grid.z_range) {
        return Err(invalid_config(
            "grid.z_range",
            grid.z_range,
            format!("must be within [{}, {}]", shape::MIN_Z_RANGE, shape::MAX_Z_RANGE),
        ));
    }

    Ok(())
}

/// Validate schedule timings
pub fn validate_schedule_config(schedule: &ScheduleConfig) -> GraphResult<()> {
    check_duration("schedule.hold_duration", schedule.hold_duration)?;
    check_duration("schedule.transition_duration", schedule.transition_duration)?;
    Ok(())
}

/// Validate a complete configuration
pub fn validate_config(config: &GraphConfig) -> GraphResult<()> {
    validate_grid_config(&config.grid)?;
    validate_schedule_config(&config.schedule)?;

    log::debug!(
        "[GraphConfig] Validation: resolution={}, points={}, backend={:?}",
        config.grid.resolution,
        config.grid.resolution as u64 * config.grid.resolution as u64,
        config.grid.backend
    );
    Ok(())
}

fn check_positive_range(field: &str, value: f32, max: f32) -> GraphResult<()> {
    // NaN fails the comparison and is rejected
    if value > 0.0 && value <= max {
        Ok(())
    } else {
        Err(invalid_config(
            field,
            value,
            format!("must be within (0, {}]", max),
        ))
    }
}

fn check_duration(field: &str, value: f32) -> GraphResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid_config(field, value, "must be a finite duration >= 0"))
    }
}

// ============================================================================
// LOADING / SAVING
// ============================================================================

/// Look up a configured function through the surface registry
pub fn resolve_function_selector(selector: &FunctionSelector) -> GraphResult<FunctionId> {
    match selector {
        FunctionSelector::Index(index) => match u32::try_from(*index) {
            Ok(index) => function_from_index(index),
            Err(_) => Err(GraphError::InvalidSelection {
                index: *index,
                count: FUNCTION_COUNT as u32,
            }),
        },
        FunctionSelector::Name(name) => function_from_name(name),
    }
}

/// Resolve a parsed configuration into a [`GraphConfig`]
pub fn resolve_raw_config(raw: RawGraphConfig) -> GraphResult<GraphConfig> {
    let initial_function = match &raw.initial_function {
        Some(selector) => resolve_function_selector(selector)?,
        None => FunctionId::default(),
    };

    Ok(GraphConfig {
        initial_function,
        grid: raw.grid,
        schedule: raw.schedule,
    })
}

/// Parse and validate a TOML configuration; missing fields take defaults
///
/// `initial_function` accepts a registry index or a name. Unknown entries
/// fail with [`GraphError::InvalidSelection`] or [`GraphError::UnknownFunction`].
pub fn load_config_from_str(source: &str) -> GraphResult<GraphConfig> {
    let raw: RawGraphConfig = toml::from_str(source)?;
    let config = resolve_raw_config(raw)?;
    validate_config(&config)?;
    Ok(config)
}

/// Read, parse and validate a TOML configuration file
pub fn load_config_from_file(path: impl AsRef<Path>) -> GraphResult<GraphConfig> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).path_context(path)?;
    let config = load_config_from_str(&source)?;

    log::info!("[GraphConfig] Loaded configuration from {}", path.display());
    Ok(config)
}

/// Serialize a configuration to TOML
pub fn config_to_toml_string(config: &GraphConfig) -> GraphResult<String> {
    Ok(toml::to_string_pretty(config)?)
}

/// Write a configuration as TOML
pub fn save_config_to_file(config: &GraphConfig, path: impl AsRef<Path>) -> GraphResult<()> {
    let path = path.as_ref();
    let contents = config_to_toml_string(config)?;
    std::fs::write(path, contents).path_context(path)?;
    Ok(())
}

/// Configuration Module
///
/// - config_data.rs: GraphConfig, GridConfig, ScheduleConfig (serde)
/// - config_operations.rs: function resolution, validation and TOML load/save

pub mod config_data;
pub mod config_operations;

pub use config_data::{
    FunctionSelector, GraphConfig, GridBackend, GridConfig, RawGraphConfig, ScheduleConfig,
};

pub use config_operations::{
    config_to_toml_string, load_config_from_file, load_config_from_str, max_resolution,
    resolve_function_selector, resolve_raw_config, save_config_to_file, validate_config,
    validate_grid_config, validate_schedule_config,
};

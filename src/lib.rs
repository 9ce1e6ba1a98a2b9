// Surface Graph - Data-Oriented Programming (DOP) Architecture
//
// Animates a parametric 3D surface by sampling closed-form functions over a
// grid and morphing between them on a schedule.
// - *_data.rs files hold plain data, no methods
// - *_operations.rs files hold pure functions over that data
//
// Per tick: transition scheduler -> grid sampler -> surface registry / morph

// Constants module
pub mod constants;

// Core modules
pub mod error;
pub mod morph;
pub mod surface;
pub mod transition;

// Sampling and orchestration
pub mod config;
pub mod graph;
pub mod grid;

// Utilities
pub mod frame_stats;

pub use config::{GraphConfig, GridBackend, GridConfig, ScheduleConfig};
pub use error::{GraphError, GraphResult};
pub use graph::{create_graph, tick_graph, GraphData, GraphFrame, GraphUniform};
pub use grid::{GridBounds, GridSamples};
pub use morph::{ease, morph, morph_by_id};
pub use surface::{FunctionId, Point3, SurfaceFunction};
pub use transition::{TickDecision, TransitionState};

/// Graph Module - per-tick orchestration of the animated surface
///
/// - graph_data.rs: GraphData, GraphFrame
/// - graph_operations.rs: create, tick, select, reconfigure
/// - gpu_params.rs: uniform record for the instanced GPU variant

pub mod gpu_params;
pub mod graph_data;
pub mod graph_operations;

pub use gpu_params::{
    build_graph_uniform, dispatch_groups, points_as_bytes, position_buffer_size, GraphUniform,
    POSITION_STRIDE,
};
pub use graph_data::{GraphData, GraphFrame};
pub use graph_operations::{
    animation_time, create_graph, graph_decision, reconfigure_graph, select_function,
    select_function_index, tick_graph,
};

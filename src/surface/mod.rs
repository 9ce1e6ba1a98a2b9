/// Surface Function Registry
///
/// - surface_data.rs: FunctionId, Point3 and the id/name tables
/// - surface_operations.rs: the formulas and registry lookups

pub mod surface_data;
pub mod surface_operations;

pub use surface_data::{FunctionId, Point3, SurfaceFunction, FUNCTION_COUNT};

pub use surface_operations::{
    // Registry
    all_functions,
    evaluate,
    function_count,
    function_from_index,
    function_from_name,
    function_index,
    function_name,
    get_function,
    is_closed_surface,
    next_function,
    previous_function,

    // Formulas
    cross_ripple,
    cross_wave,
    multi_cross_wave,
    multi_wave,
    ripple,
    ripple_sphere,
    sphere,
    torus,
    wave,
};

/// Transition Scheduler
///
/// Decides each tick whether to hold the current function, start a morph,
/// or advance to the next function in cycling order.
/// - transition_data.rs: TransitionState, TickDecision
/// - transition_operations.rs: the per-tick state machine

pub mod transition_data;
pub mod transition_operations;

pub use transition_data::{TickDecision, TransitionState};

pub use transition_operations::{
    create_transition_state, current_decision, request_function, reset_transition,
    set_schedule, tick_transition, transition_progress,
};

//! Transition Scheduler Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in transition_operations.rs

use crate::surface::FunctionId;

/// Function-selection state, mutated exactly once per tick
///
/// While holding, `current_function == target_function`. While
/// transitioning, `current_function` is the morph source and
/// `target_function` the destination.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionState {
    pub current_function: FunctionId,
    pub target_function: FunctionId,

    /// Externally selected function (manual override input).
    /// Auto-advance moves it along with the target.
    pub requested_function: FunctionId,

    /// Seconds spent in the current phase (hold or transition)
    pub elapsed_in_phase: f32,
    pub is_transitioning: bool,

    /// Configuration
    pub hold_duration: f32,
    pub transition_duration: f32,
    pub auto_advance: bool,
}

/// What to evaluate this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickDecision {
    /// One function, no blending
    Steady { function: FunctionId },

    /// Blend `from` into `to`; progress is linear (ease is applied by the morph)
    Morphing {
        from: FunctionId,
        to: FunctionId,
        progress: f32,
    },
}

//! Transition Scheduler Operations - Pure DOP Functions
//!
//! All functions take the state explicitly; no methods, no self.
//! `tick_transition` is the only place time advances.

use super::transition_data::{TickDecision, TransitionState};
use crate::surface::{function_name, next_function, FunctionId};

/// Create scheduler state holding `initial`
pub fn create_transition_state(
    initial: FunctionId,
    hold_duration: f32,
    transition_duration: f32,
    auto_advance: bool,
) -> TransitionState {
    TransitionState {
        current_function: initial,
        target_function: initial,
        requested_function: initial,
        elapsed_in_phase: 0.0,
        is_transitioning: false,
        hold_duration,
        transition_duration,
        auto_advance,
    }
}

/// Advance the scheduler by `delta_time` seconds and decide what to draw
///
/// Exactly one phase change can happen per tick. Leftover time is carried
/// into the next phase instead of being dropped.
pub fn tick_transition(state: &mut TransitionState, delta_time: f32) -> TickDecision {
    state.elapsed_in_phase += sanitize_delta(delta_time);

    if state.is_transitioning {
        if state.elapsed_in_phase >= state.transition_duration {
            state.elapsed_in_phase -= state.transition_duration.max(0.0);
            complete_transition(state);
        }
    } else if state.elapsed_in_phase > state.hold_duration && state.auto_advance {
        state.elapsed_in_phase -= state.hold_duration;
        let next = next_function(state.current_function);
        begin_transition(state, next);
        state.requested_function = next;
    } else if state.requested_function != state.current_function {
        state.elapsed_in_phase = 0.0;
        let requested = state.requested_function;
        begin_transition(state, requested);
    }

    // Zero-length transitions finish on the tick that starts them
    if state.is_transitioning && state.transition_duration <= 0.0 {
        complete_transition(state);
    }

    current_decision(state)
}

/// Decision for the state as it stands, without advancing time
pub fn current_decision(state: &TransitionState) -> TickDecision {
    match transition_progress(state) {
        Some(progress) => TickDecision::Morphing {
            from: state.current_function,
            to: state.target_function,
            progress,
        },
        None => TickDecision::Steady {
            function: state.current_function,
        },
    }
}

/// Linear progress through the active transition in [0, 1], None while holding
///
/// Carried-over time past the end of the transition reports 1.0 until the
/// next tick completes it.
pub fn transition_progress(state: &TransitionState) -> Option<f32> {
    if state.is_transitioning && state.transition_duration > 0.0 {
        Some((state.elapsed_in_phase / state.transition_duration).clamp(0.0, 1.0))
    } else {
        None
    }
}

/// Manual selection; picked up on the next holding tick
pub fn request_function(state: &mut TransitionState, function: FunctionId) {
    if state.requested_function != function {
        log::debug!(
            "[transition] requested '{}' (current '{}')",
            function_name(function),
            function_name(state.current_function)
        );
    }
    state.requested_function = function;
}

/// Drop any transition in flight and hold `function` from zero
pub fn reset_transition(state: &mut TransitionState, function: FunctionId) {
    state.current_function = function;
    state.target_function = function;
    state.requested_function = function;
    state.elapsed_in_phase = 0.0;
    state.is_transitioning = false;
}

/// Update schedule timings without disturbing the active phase
pub fn set_schedule(
    state: &mut TransitionState,
    hold_duration: f32,
    transition_duration: f32,
    auto_advance: bool,
) {
    state.hold_duration = hold_duration;
    state.transition_duration = transition_duration;
    state.auto_advance = auto_advance;
}

fn begin_transition(state: &mut TransitionState, target: FunctionId) {
    log::debug!(
        "[transition] morphing '{}' -> '{}'",
        function_name(state.current_function),
        function_name(target)
    );
    state.target_function = target;
    state.is_transitioning = true;
}

fn complete_transition(state: &mut TransitionState) {
    log::debug!(
        "[transition] holding '{}'",
        function_name(state.target_function)
    );
    state.current_function = state.target_function;
    state.is_transitioning = false;
}

fn sanitize_delta(delta_time: f32) -> f32 {
    if delta_time.is_finite() && delta_time >= 0.0 {
        delta_time
    } else {
        log::warn!(
            "[transition] ignoring invalid delta time {}, treating as 0",
            delta_time
        );
        0.0
    }
}

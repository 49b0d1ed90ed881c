//! Hysteretic obstacle-avoidance controller.
//!
//! Two behaviors, re-evaluated once per scan: drive straight when the
//! near field is clear, rotate in place when it is not. The dwell counter
//! keeps the controller committed to one turn direction long enough to
//! escape symmetric obstacles without flapping.

use crate::scan_filter;
use crate::types::constants::{
    DWELL_FLIP_THRESHOLD, DWELL_RESET, GO_STRAIGHT_SPEED_MPS, INITIAL_TURN_MAGNITUDE, TURN_KP,
};
use crate::types::scan::FilteredScan;

/// Velocity command for the platform. Axes not listed are zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    pub linear_x: f32,
    pub angular_z: f32,
}

/// Persistent controller state; the only state the controller carries.
///
/// `turn` is the signed turn magnitude, `dwell` counts consecutive turning
/// cycles. Together they encode the hysteresis: after `dwell` passes the
/// flip threshold the sign of `turn` reverses and `dwell` restarts from a
/// negative value, so later flips take twice as long as the first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerState {
    pub turn: f32,
    pub dwell: i32,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self {
            turn: INITIAL_TURN_MAGNITUDE,
            dwell: 0,
        }
    }
}

/// Advance the controller by one scan cycle.
///
/// The turning command is computed from the pre-flip turn magnitude; the
/// flip (when it happens) only affects later cycles.
pub fn step(state: ControllerState, obstacle_ahead: bool) -> (ControllerState, Velocity) {
    if !obstacle_ahead {
        let command = Velocity {
            linear_x: GO_STRAIGHT_SPEED_MPS,
            angular_z: 0.0,
        };
        return (state, command);
    }

    let mut next = state;
    next.dwell += 1;
    let command = Velocity {
        linear_x: 0.0,
        angular_z: -TURN_KP * next.turn,
    };
    if next.dwell > DWELL_FLIP_THRESHOLD {
        next.turn = -next.turn;
        next.dwell = DWELL_RESET;
    }
    (next, command)
}

/// Run the near-field obstacle test on a filtered scan, then `step`.
pub fn step_scan(state: ControllerState, scan: &FilteredScan) -> (ControllerState, Velocity) {
    step(state, scan_filter::obstacle_ahead(&scan.ranges))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn clear_path_goes_straight() {
        let state = ControllerState::default();
        let (next, command) = step(state, false);
        assert_eq!(command.linear_x, GO_STRAIGHT_SPEED_MPS);
        assert_eq!(command.angular_z, 0.0);
        // Dwell is untouched while driving straight.
        assert_eq!(next, state);
    }

    #[test]
    fn obstacle_turns_in_place() {
        let (next, command) = step(ControllerState::default(), true);
        assert_eq!(command.linear_x, 0.0);
        assert_relative_eq!(command.angular_z, -0.3);
        assert_eq!(next.dwell, 1);
        assert_eq!(next.turn, INITIAL_TURN_MAGNITUDE);
    }

    #[test]
    fn straight_cycles_do_not_reset_dwell() {
        let state = ControllerState {
            turn: INITIAL_TURN_MAGNITUDE,
            dwell: 30,
        };
        let (next, _) = step(state, false);
        assert_eq!(next.dwell, 30);
    }

    #[test]
    fn turn_flips_on_the_51st_cycle() {
        let mut state = ControllerState::default();
        for cycle in 1..=50 {
            let (next, command) = step(state, true);
            assert_eq!(next.dwell, cycle);
            assert_eq!(next.turn, INITIAL_TURN_MAGNITUDE);
            assert_relative_eq!(command.angular_z, -0.3);
            state = next;
        }

        // 51st cycle: dwell crosses the threshold. The command still uses
        // the pre-flip magnitude; the state flips afterwards.
        let (next, command) = step(state, true);
        assert_relative_eq!(command.angular_z, -0.3);
        assert_eq!(next.turn, -INITIAL_TURN_MAGNITUDE);
        assert_eq!(next.dwell, DWELL_RESET);
    }

    #[test]
    fn second_flip_takes_one_hundred_cycles() {
        let mut state = ControllerState {
            turn: -INITIAL_TURN_MAGNITUDE,
            dwell: DWELL_RESET,
        };
        for _ in 0..100 {
            assert_eq!(state.turn, -INITIAL_TURN_MAGNITUDE);
            let (next, command) = step(state, true);
            assert_relative_eq!(command.angular_z, 0.3);
            state = next;
        }
        // dwell went -50 -> 50 without flipping; the 101st cycle flips.
        assert_eq!(state.dwell, 50);
        let (next, _) = step(state, true);
        assert_eq!(next.turn, INITIAL_TURN_MAGNITUDE);
        assert_eq!(next.dwell, DWELL_RESET);
    }
}

/// Rays preserved unmasked at each end of a scan.
pub const SCAN_EDGE_KEEP: usize = 10;

/// Strict upper bound of the near-field obstacle test (meters).
pub const OBSTACLE_NEAR_M: f32 = 0.5;

/// `range_max` stamped on the republished scan (meters).
pub const REPUBLISH_RANGE_MAX_M: f32 = 0.4;

pub const GO_STRAIGHT_SPEED_MPS: f32 = 0.2;
pub const TURN_KP: f32 = 0.6;
pub const INITIAL_TURN_MAGNITUDE: f32 = 0.5;

/// Turning cycles accumulated before the turn direction flips.
pub const DWELL_FLIP_THRESHOLD: i32 = 50;
/// Dwell counter value immediately after a flip. The negative reset means
/// every flip after the first needs 100 more turning cycles, not 50.
pub const DWELL_RESET: i32 = -50;

/// Height off the ground plane above which the pose is degraded (meters).
pub const GROUND_PLANE_TOLERANCE_M: f32 = 0.05;
/// Roll/pitch magnitude above which the pose is degraded (radians).
pub const TILT_TOLERANCE_RAD: f32 = 0.1;

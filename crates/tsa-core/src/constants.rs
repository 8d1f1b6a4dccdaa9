//! Display and simulation constants.

// --- Simulation clock ---

/// Default tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 2000;

/// Smallest accepted tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 1;

/// Milliseconds per hour (knots × hours = nautical miles).
pub const MS_PER_HOUR: f64 = 3_600_000.0;

/// Milliseconds per second.
pub const MS_PER_SECOND: f64 = 1000.0;

// --- Initial kinematics ---

/// Own ship initial course (degrees true).
pub const OWN_SHIP_INITIAL_COURSE: f64 = 0.0;

/// Own ship initial speed (knots).
pub const OWN_SHIP_INITIAL_SPEED: f64 = 10.0;

/// Target initial course (degrees true), heading East.
pub const TARGET_INITIAL_COURSE: f64 = 90.0;

/// Target initial speed (knots).
pub const TARGET_INITIAL_SPEED: f64 = 8.0;

/// Target initial position relative to own ship (nautical miles, x = East, y = North).
pub const TARGET_INITIAL_POSITION: (f64, f64) = (3.0, 3.0);

// --- World / viewport ---

/// Default world bounds (nautical miles): min x, min y, max x, max y.
pub const DEFAULT_WORLD_BOUNDS: (f64, f64, f64, f64) = (-10.0, -10.0, 10.0, 10.0);

/// Default viewport width in pixels.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 800.0;

/// Default viewport height in pixels.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 600.0;

/// Smallest viewport dimension in pixels; smaller sizes are clamped.
pub const MIN_VIEWPORT_DIMENSION: f64 = 1.0;

// --- Geometry tolerances ---

/// Tolerance used to deduplicate line/rectangle intersection points.
pub const INTERSECTION_DEDUP_EPSILON: f64 = 1e-6;

/// Segments shorter than this are treated as degenerate.
pub const DEGENERATE_LENGTH_EPSILON: f64 = 1e-12;

// --- Shaded region ---

/// Default clearance between the bearing line and the hatch (pixels).
pub const DEFAULT_SAFETY_MARGIN_PX: f64 = 5.0;

/// Hatch fill opacity (0.0 - 1.0).
pub const HATCH_OPACITY: f64 = 150.0 / 255.0;

// --- Sensor layout ---

/// Distance the towed sensor trails astern of own ship (nautical miles).
pub const SENSOR_TRAIL_DISTANCE_NM: f64 = 0.5;

// --- Vector presentation ---

/// Lead time represented by own-ship and adopted-track vectors (minutes).
pub const VECTOR_LEAD_MINUTES: f64 = 6.0;

/// Lead time represented by the trial-course vector (minutes).
pub const TRIAL_VECTOR_MINUTES: f64 = 5.5;

/// Trial course offset from own course (degrees).
pub const TRIAL_COURSE_OFFSET_DEG: f64 = 20.0;

/// Bearing-rate indicator length per degree/second of rate (nautical miles).
pub const BEARING_RATE_SCALE_NM: f64 = 20.0;

/// Maximum bearing-rate indicator length (nautical miles).
pub const BEARING_RATE_MAX_NM: f64 = 3.0;

/// Rates below this magnitude draw no bearing-rate indicator (degrees/second).
pub const BEARING_RATE_EPSILON: f64 = 1e-9;

/// Default arrowhead length (pixels).
pub const DEFAULT_HEAD_LENGTH: f64 = 12.0;

/// Default arrowhead half-angle (degrees).
pub const DEFAULT_HEAD_ANGLE_DEG: f64 = 25.0;

/// Bearing-rate arrowhead length (pixels).
pub const RATE_HEAD_LENGTH: f64 = 8.0;

/// Bearing-rate arrowhead half-angle (degrees).
pub const RATE_HEAD_ANGLE_DEG: f64 = 30.0;

/// Default tactical vector line width (pixels).
pub const DEFAULT_VECTOR_WIDTH: f64 = 2.0;

/// Default sonar beam width (degrees).
pub const DEFAULT_BEAM_WIDTH_DEG: f64 = 2.0;

/// Default bearing line stroke width (pixels).
pub const DEFAULT_BEAM_LINE_WIDTH: f64 = 4.0;

/// Ship / sensor / contact marker radius (pixels).
pub const MARKER_RADIUS_PX: f64 = 6.0;

// --- Grid ---

/// Coordinate grid spacing (nautical miles).
pub const GRID_SPACING_NM: f64 = 2.0;

/// Coordinate grid line width (pixels).
pub const GRID_LINE_WIDTH: f64 = 1.0;

/// Most grid lines drawn along one axis; finer spacing is coarsened.
pub const MAX_GRID_LINES_PER_AXIS: usize = 100;

// Tuning defaults shared by the engine and the web front-end.

pub const FULL_TURN_DEG: f64 = 360.0;

// Spin
pub const DEFAULT_SPIN_DURATION_MS: f64 = 6000.0;
pub const DEFAULT_BASE_ROTATION_DEG: f64 = 1102.5; // 3 turns + half-segment alignment for 8 slices
pub const ALT_BASE_ROTATION_DEG: f64 = 1350.0; // ~3.75 turns, the slower tuning
pub const MAX_BASE_ROTATION_DEG: f64 = 36_000.0; // 100 turns; keeps per-frame tick bursts bounded

// Loading screen
pub const MIN_LOADING_SCREEN_MS: f64 = 1800.0;
pub const MIN_LOADING_ICON_MS: f64 = 1800.0;
pub const LOADER_FADE_MS: f64 = 400.0; // matches the CSS opacity transition

// Ticker pulse length (CSS `.tick` animation)
pub const TICK_PULSE_MS: f64 = 100.0;

pub const DEFAULT_CLAIM_URL: &str = "https://freespinking.com";
pub const DEFAULT_PRE_SPIN_TEXT: &str = "Claim up to 500 Free Spins. No deposit required!";

// Promotional table: everything lands on "500".
pub const DEFAULT_SEGMENTS: [(&str, f64); 8] = [
    ("500", 100.0),
    ("20", 0.0),
    ("10", 0.0),
    ("200", 0.0),
    ("50", 0.0),
    ("100", 0.0),
    ("10", 0.0),
    ("50", 0.0),
];

use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose guards and binding logs when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info  // Production
}

/// Viewport width from which the process timeline pins and scrolls sideways.
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;

/// Viewport width from which the custom cursor is rendered.
pub const CURSOR_MIN_WIDTH: f64 = 768.0;

/// Media query a device must match to get the custom cursor.
pub const FINE_POINTER_QUERY: &str = "(pointer: fine)";

/// Elements the cursor treats as interactive when it mounts.
pub const INTERACTIVE_SELECTOR: &str = "a, button, input, select, textarea, .interactive-hover";

/// Nav bar switches to its solid style past this scroll offset.
pub const NAV_SCROLLED_OFFSET: f64 = 50.0;

/// Delay before the process pin is measured, so fonts and images have laid out.
pub const PIN_SETUP_DELAY_MS: u32 = 100;

/// Quiet period after the last scroll event before the pin snaps to a panel.
pub const SNAP_IDLE_MS: u32 = 150;

pub const SNAP_MIN_MS: f64 = 200.0;
pub const SNAP_MAX_MS: f64 = 800.0;

/// Catch-up lag of the pinned panels behind raw scroll progress.
pub const PIN_SCRUB_LAG_MS: f64 = 1000.0;

pub const COUNTER_DURATION_MS: f64 = 3000.0;

/// Share of the pointer-to-centre vector a magnetic button moves by.
pub const MAGNETIC_DAMPING: f64 = 0.4;

/// Extra margin around a magnetic button inside which it still follows the pointer.
pub const MAGNETIC_PROXIMITY_PX: f64 = 24.0;

//! # Rendering
//!
//! egui rendering split the usual way:
//!
//! - `screens`: one module per screen (connect, account, staking, NFTs,
//!   history, admin)
//! - `widgets`: reusable components (forms, tables, layouts, icons, nav bar,
//!   status bar, toasts)
//! - `theme`: color palette and visuals
//!
//! Screens read a cloned [`crate::app::AppState`] snapshot and route user
//! actions through `&mut App`; they never hold the state lock while drawing.

pub mod screens;
pub mod theme;
pub mod widgets;

/// Format a unix timestamp for display in local ISO-ish form.
pub fn format_timestamp(timestamp: i64) -> String {
    chrono::DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Format a second count as a compact countdown, e.g. `1h 02m 05s`.
pub fn format_countdown(total_secs: i64) -> String {
    let total_secs = total_secs.max(0);
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{hours}h {minutes:02}m {seconds:02}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds:02}s")
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_render_in_utc() {
        assert_eq!(format_timestamp(0), "1970-01-01 00:00:00 UTC");
        assert_eq!(format_timestamp(i64::MIN), "unknown");
    }

    #[test]
    fn countdown_scales_units() {
        assert_eq!(format_countdown(5), "5s");
        assert_eq!(format_countdown(65), "1m 05s");
        assert_eq!(format_countdown(3725), "1h 02m 05s");
        assert_eq!(format_countdown(-10), "0s");
    }
}

//! Unified color system for the four workflow zones.
//!
//! Every file name, commit and section header is colored by the zone it is
//! shown in, so the same item always looks the same wherever it is printed.
//!
//! # Color Scheme
//! - **Working tree**: Cyan, like untracked files in `git status`
//! - **Staging area**: Green
//! - **Local history**: Yellow, work that has not left the machine yet
//! - **Remote history**: Blue

use crate::core::state::Zone;
use colored::*;

/// Single function to apply color styling based on zone
/// Returns a closure that can be applied to any text to get the appropriate color
pub fn get_zone_color_style(zone: Zone) -> Box<dyn Fn(&str) -> ColoredString> {
    match zone {
        Zone::WorkingTree => Box::new(|text: &str| text.cyan()),
        Zone::StagingArea => Box::new(|text: &str| text.green()),
        Zone::LocalHistory => Box::new(|text: &str| text.yellow()),
        Zone::RemoteHistory => Box::new(|text: &str| text.blue()),
    }
}

/// Get a colored item name using the zone color
pub fn get_colored_name(zone: Zone, name: &str) -> ColoredString {
    let color_fn = get_zone_color_style(zone);
    color_fn(name)
}

/// Colored `➤ <title>:` section header
pub fn get_zone_header(zone: Zone) -> String {
    let color_fn = get_zone_color_style(zone);
    format!("{} {}", color_fn("➤"), color_fn(&format!("{}:", zone.title())))
}

/// Disable ANSI colors globally; when enabled, `colored` keeps its own terminal detection
pub fn set_color_enabled(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}

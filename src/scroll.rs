use log::warn;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::config;

/// The CSS selector an in-page link points at, if it points anywhere.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(href),
        _ => None,
    }
}

pub fn nav_is_raised(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SHADOW_THRESHOLD
}

/// Transition for the `index`-th revealed card; later cards lag a little.
pub fn reveal_transition(index: usize) -> String {
    let delay = index as f64 * config::REVEAL_STAGGER_SECS;
    format!(
        "opacity {d}s ease {delay}s, transform {d}s ease {delay}s",
        d = config::REVEAL_DURATION_SECS,
        delay = format_secs(delay),
    )
}

fn format_secs(secs: f64) -> String {
    // 0.30000000000000004 -> 0.3
    let rounded = (secs * 1000.0).round() / 1000.0;
    rounded.to_string()
}

/// Smoothly brings the element `href` refers to into view.
/// Returns false when there is nothing to scroll to.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(selector) = anchor_target(href) else {
        return false;
    };
    let Some(document) = window().and_then(|w| w.document()) else {
        warn!("No document to scroll in");
        return false;
    };
    match document.query_selector(selector) {
        Ok(Some(target)) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        Ok(None) => false,
        Err(_) => {
            warn!("Invalid anchor selector {}", selector);
            false
        }
    }
}

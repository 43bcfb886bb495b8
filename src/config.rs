use log::Level;

/// Pause between consecutive beats of the assistant's script.
pub const MESSAGE_PAUSE_MS: u32 = 300;
/// Delay between a user's pick and the next step.
pub const SELECTION_DELAY_MS: u32 = 500;
/// Delay between clearing the chat and greeting again.
pub const RESET_DELAY_MS: u32 = 500;
/// How long the farewell stays up before the chat starts over.
pub const FAREWELL_RESTART_MS: u32 = 3000;

/// Scroll offset (px) past which the navbar gets its shadow.
pub const NAV_SHADOW_THRESHOLD: f64 = 100.0;

pub const REVEAL_SELECTOR: &str = ".service-card, .benefit-card, .pricing-card, .testimonial-card";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_DURATION_SECS: f64 = 0.6;
pub const REVEAL_STAGGER_SECS: f64 = 0.1;
pub const REVEAL_OFFSET_PX: u32 = 20;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

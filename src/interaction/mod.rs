//! Pointer, viewport and visibility behaviors shared by every page.

pub mod breakpoint;
pub mod cursor;
pub mod glow;
pub mod lifecycle;
pub mod reveal;

pub use breakpoint::{use_media_query, DESKTOP_BREAKPOINT, MOBILE_BREAKPOINT};
pub use cursor::CustomCursor;
pub use glow::{use_focus_glow, use_hover_glow, GlowOverlay};
pub use reveal::{use_reveal, DIVIDER_THRESHOLD, TITLE_THRESHOLD};

//! A multi-step progress indicator component for GPUI.
//!
//! The widget renders one circular marker per step, connected by separators
//! and laid out horizontally or vertically. Markers up to the current step
//! are filled with the complete color, the current marker shows a pulsing
//! ring. It is bound to a [`StepsProgressState`] entity owned by the host
//! application.

mod button;
mod geometry;
mod steps_progress;
mod styled;
pub mod theme;

use gpui::App;

pub use button::*;
pub use geometry::*;
pub use steps_progress::*;
pub use styled::*;
pub use theme::{ActiveTheme, Colorize, Theme, ThemeColor, ThemeMode};

/// Initialize the components.
///
/// Call this once on application startup, before opening any window.
pub fn init(cx: &mut App) {
    theme::init(cx);
}

//! Claymorphism widgets for egui.
//!
//! - [`widgets::ProgressIndicator`]: a track with a filled bar and an optional
//!   `label … 42%` header. Stateless, rebuilt every frame.
//! - [`widgets::ToggleSwitch`]: an on/off switch that owns its checked state and
//!   notifies an optional observer when the user flips it.
//!
//! The look comes from [`themes`], which derives per-widget styles from the
//! active `egui::Style`. Install the clay styles with
//! [`themes::ThemeChoice::install`] or build your own from [`themes::ClayPalette`].

pub mod prelude;
pub mod themes;
pub mod widgets;

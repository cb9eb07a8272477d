// Preludes: re-export commonly used items for convenience
pub use crate::themes::{Styled, ThemeChoice};
pub use crate::widgets::{ProgressColor, ProgressIndicator, SwitchState, ToggleSwitch};

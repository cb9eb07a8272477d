mod progress;
mod toggle;

pub use progress::{
    ProgressColor, ProgressIndicator, ProgressLayout, TRACK_STYLE_ID as PROGRESS_TRACK_STYLE_ID,
};
pub use toggle::{SwitchState, ToggleSwitch, TRACK_STYLE_ID as TOGGLE_TRACK_STYLE_ID};

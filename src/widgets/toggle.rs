use std::fmt;

use eframe::egui::{
    self, pos2, Rect, Response, Sense, Stroke, StrokeKind, Ui, Vec2, Widget, WidgetInfo,
    WidgetText, WidgetType,
};

use crate::themes::{blend, paint_clay_inset, paint_clay_raised, ClayToggleStyle};

/// Style identifier of the pill behind the thumb.
pub const TRACK_STYLE_ID: &str = "toggle-track";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SwitchState {
    #[default]
    Unchecked,
    Checked,
}

impl SwitchState {
    pub fn is_checked(self) -> bool {
        self == Self::Checked
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Unchecked => Self::Checked,
            Self::Checked => Self::Unchecked,
        }
    }

    pub fn thumb_style_id(self) -> &'static str {
        match self {
            Self::Unchecked => "toggle-thumb-off",
            Self::Checked => "toggle-thumb-on",
        }
    }
}

impl From<bool> for SwitchState {
    fn from(checked: bool) -> Self {
        if checked {
            Self::Checked
        } else {
            Self::Unchecked
        }
    }
}

type ChangeHandler = Box<dyn FnMut(bool)>;

/// An on/off switch that owns its checked state.
///
/// Unlike most egui widgets this one is retained: create it once, keep it in
/// your app state and add it every frame with `ui.add(&mut switch)`. The state
/// lives exactly as long as the value.
///
/// ```no_run
/// # use clay_widgets::widgets::ToggleSwitch;
/// # fn show(ui: &mut egui::Ui, switch: &mut ToggleSwitch) {
/// if ui.add(switch).changed() {
///     // the switch was flipped this frame
/// }
/// # }
/// ```
#[must_use = "You should keep this widget and add it with `ui.add(&mut switch);`"]
pub struct ToggleSwitch {
    label: Option<WidgetText>,
    state: SwitchState,
    on_change: Option<ChangeHandler>,
    clay_style: Option<ClayToggleStyle>,
}

impl Default for ToggleSwitch {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ToggleSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleSwitch")
            .field("label", &self.label.as_ref().map(|label| label.text()))
            .field("state", &self.state)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl ToggleSwitch {
    pub fn new() -> Self {
        Self {
            label: None,
            state: SwitchState::Unchecked,
            on_change: None,
            clay_style: None,
        }
    }

    /// Text shown to the left of the switch.
    pub fn label(mut self, label: impl Into<WidgetText>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Seeds the initial state. Only meaningful while building the switch.
    pub fn default_checked(mut self, checked: bool) -> Self {
        self.state = SwitchState::from(checked);
        self
    }

    /// Called with the new state after every activation.
    pub fn on_change(mut self, on_change: impl FnMut(bool) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    pub fn state(&self) -> SwitchState {
        self.state
    }

    pub fn is_checked(&self) -> bool {
        self.state.is_checked()
    }

    /// Flip the switch and notify the observer. Returns the new checked state.
    ///
    /// The new state is committed before `on_change` runs. A panic inside the
    /// observer is not caught.
    pub fn activate(&mut self) -> bool {
        self.state = self.state.toggled();
        let checked = self.state.is_checked();
        log::debug!(
            "toggle switch {:?} -> {:?} (observer: {})",
            self.label.as_ref().map(|label| label.text()).unwrap_or_default(),
            self.state,
            self.on_change.is_some()
        );
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(checked);
        }
        checked
    }

    /// What assistive technology sees: a binary control whose `selected`
    /// field is the current checked state.
    pub fn accessibility_info(&self, enabled: bool) -> WidgetInfo {
        let label = self
            .label
            .as_ref()
            .map(|label| label.text().to_string())
            .unwrap_or_default();
        WidgetInfo::selected(WidgetType::Checkbox, enabled, self.is_checked(), label)
    }
}

impl crate::themes::Styled for ToggleSwitch {
    type Style = ClayToggleStyle;

    fn styled(mut self, style: Self::Style) -> Self {
        self.clay_style = Some(style);
        self
    }
}

impl Widget for &mut ToggleSwitch {
    fn ui(self, ui: &mut Ui) -> Response {
        let gstyle = self
            .clay_style
            .clone()
            .unwrap_or_else(|| ClayToggleStyle::from(ui.style().as_ref()));

        ui.horizontal(|ui| {
            if let Some(label) = &self.label {
                ui.label(label.clone());
            }

            let (rect, mut response) = ui.allocate_exact_size(gstyle.size, Sense::click());
            if response.clicked() {
                self.activate();
                response.mark_changed();
            }

            let info = self.accessibility_info(ui.is_enabled());
            response.widget_info(move || info.clone());

            if ui.is_rect_visible(rect) {
                let _paint_span = tracing::trace_span!("toggle_switch_paint").entered();
                let how_on = ui.ctx().animate_bool(response.id, self.is_checked());
                let radius = rect.height() / 2.0;
                let painter = ui.painter();

                let track_fill = blend(gstyle.track_off, gstyle.track_on, how_on);
                paint_clay_inset(
                    painter,
                    rect,
                    radius,
                    track_fill,
                    gstyle.shadow,
                    gstyle.highlight,
                );

                let thumb_radius = (radius - gstyle.thumb_inset).max(1.0);
                let thumb_x = egui::lerp((rect.left() + radius)..=(rect.right() - radius), how_on);
                let center = pos2(thumb_x, rect.center().y);
                let offset = gstyle.shadow_offset;
                paint_clay_raised(
                    painter,
                    Rect::from_center_size(center, Vec2::splat(thumb_radius * 2.0)),
                    thumb_radius,
                    gstyle.thumb,
                    gstyle.shadow,
                    gstyle.highlight,
                    offset,
                );

                if response.has_focus() {
                    painter.rect_stroke(
                        rect.expand(2.0),
                        radius + 2.0,
                        Stroke::new(1.5, gstyle.accent),
                        StrokeKind::Outside,
                    );
                }
            }

            response
        })
        .inner
    }
}

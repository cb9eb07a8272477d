use eframe::egui::{
    pos2, vec2, Align2, Color32, NumExt as _, Rect, Response, Sense, TextStyle, TextWrapMode, Ui,
    Widget, WidgetInfo, WidgetText, WidgetType,
};

use crate::themes::{paint_clay_inset, ClayProgressStyle};

/// Style identifier of the track behind every progress bar.
pub const TRACK_STYLE_ID: &str = "progress-track";

/// The closed set of bar colors. Each key maps to exactly one style identifier
/// and one palette color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProgressColor {
    #[default]
    Purple,
    Pink,
    Blue,
    Cyan,
}

impl ProgressColor {
    pub const ALL: [ProgressColor; 4] = [Self::Purple, Self::Pink, Self::Blue, Self::Cyan];

    pub fn style_id(self) -> &'static str {
        match self {
            Self::Purple => "progress-bar-purple",
            Self::Pink => "progress-bar-pink",
            Self::Blue => "progress-bar-blue",
            Self::Cyan => "progress-bar-cyan",
        }
    }

    pub fn fill(self, style: &ClayProgressStyle) -> Color32 {
        match self {
            Self::Purple => style.purple,
            Self::Pink => style.pink,
            Self::Blue => style.blue,
            Self::Cyan => style.cyan,
        }
    }
}

/// Where the pieces of a progress indicator go inside its allocated rect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressLayout {
    /// Row holding the label and the percent text. Only present with a label.
    pub header: Option<Rect>,
    pub track: Rect,
    /// Anchored at the left edge of the track. Its width is not limited to the
    /// track: negative values give a negative width, values above 100 overflow.
    pub bar: Rect,
}

#[must_use = "You should put this widget in a ui with `ui.add(widget);`"]
pub struct ProgressIndicator {
    value: f32,
    color: ProgressColor,
    label: Option<WidgetText>,
    desired_width: Option<f32>,
    clay_style: Option<ClayProgressStyle>,
}

impl ProgressIndicator {
    /// Progress in percent, where `100` means "completed".
    ///
    /// The value is used as given. Nothing is clamped or rounded, so `-5` or
    /// `140` end up as a bar of that many percent of the track.
    pub fn new(value: f32) -> Self {
        Self {
            value,
            color: ProgressColor::default(),
            label: None,
            desired_width: None,
            clay_style: None,
        }
    }

    /// The bar color. Defaults to [`ProgressColor::Purple`].
    pub fn color(mut self, color: ProgressColor) -> Self {
        self.color = color;
        self
    }

    /// Show a header row with this label on the left and the percent on the right.
    pub fn label(mut self, label: impl Into<WidgetText>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The desired width of the indicator. Will use all horizontal space if not set.
    pub fn desired_width(mut self, desired_width: f32) -> Self {
        self.desired_width = Some(desired_width);
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn bar_color(&self) -> ProgressColor {
        self.color
    }

    pub fn percent_text(&self) -> String {
        format!("{}%", self.value)
    }

    pub fn fill_fraction(&self) -> f32 {
        self.value / 100.0
    }

    pub fn layout(&self, outer: Rect, header_height: f32, style: &ClayProgressStyle) -> ProgressLayout {
        let (header, track_top) = if self.label.is_some() {
            let header = Rect::from_min_size(outer.min, vec2(outer.width(), header_height));
            (Some(header), header.bottom() + style.header_gap)
        } else {
            (None, outer.top())
        };

        let track = Rect::from_min_size(
            pos2(outer.left(), track_top),
            vec2(outer.width(), style.track_height),
        );
        let bar = Rect::from_min_size(
            track.min,
            vec2(track.width() * self.fill_fraction(), track.height()),
        );

        ProgressLayout { header, track, bar }
    }
}

impl crate::themes::Styled for ProgressIndicator {
    type Style = ClayProgressStyle;

    fn styled(mut self, style: Self::Style) -> Self {
        self.clay_style = Some(style);
        self
    }
}

impl Widget for ProgressIndicator {
    fn ui(self, ui: &mut Ui) -> Response {
        let gstyle = self
            .clay_style
            .clone()
            .unwrap_or_else(|| ClayProgressStyle::from(ui.style().as_ref()));

        if !(0.0..=100.0).contains(&self.value) {
            log::trace!("progress value {} outside 0..=100, drawn as is", self.value);
        }

        let font_id = TextStyle::Body.resolve(ui.style());
        let header_height = if self.label.is_some() {
            ui.text_style_height(&TextStyle::Body)
        } else {
            0.0
        };
        let desired_width = self
            .desired_width
            .unwrap_or_else(|| ui.available_size_before_wrap().x.at_least(96.0));
        let header_total = if self.label.is_some() {
            header_height + gstyle.header_gap
        } else {
            0.0
        };
        let height = header_total + gstyle.track_height;

        let (outer_rect, response) =
            ui.allocate_exact_size(vec2(desired_width, height), Sense::hover());
        let layout = self.layout(outer_rect, header_height, &gstyle);

        let enabled = ui.is_enabled();
        let value = self.value;
        let label_text = self.label.as_ref().map(|label| label.text().to_string());
        response.widget_info(move || {
            let mut info = if let Some(label_text) = label_text.as_deref() {
                WidgetInfo::labeled(WidgetType::ProgressIndicator, enabled, label_text)
            } else {
                WidgetInfo::new(WidgetType::ProgressIndicator)
            };
            info.value = Some(value as f64);
            info
        });

        if !ui.is_rect_visible(outer_rect) {
            return response;
        }

        let _paint_span = tracing::trace_span!("progress_indicator_paint").entered();
        let percent_text = self.percent_text();
        let Self { color, label, .. } = self;

        if let (Some(header), Some(label)) = (layout.header, label) {
            let percent_width = ui
                .painter()
                .layout_no_wrap(percent_text.clone(), font_id.clone(), gstyle.weak_text)
                .size()
                .x;
            let label_max_width =
                (header.width() - percent_width - ui.spacing().item_spacing.x).at_least(0.0);
            let galley = label.into_galley(
                ui,
                Some(TextWrapMode::Truncate),
                label_max_width,
                TextStyle::Body,
            );

            let painter = ui.painter();
            let label_pos = pos2(header.left(), header.center().y - galley.size().y / 2.0);
            painter.galley(label_pos, galley, gstyle.text);
            painter.text(
                header.right_center(),
                Align2::RIGHT_CENTER,
                percent_text,
                font_id,
                gstyle.weak_text,
            );
        }

        let painter = ui.painter();
        paint_clay_inset(
            painter,
            layout.track,
            gstyle.rounding,
            gstyle.track,
            gstyle.track_shadow,
            gstyle.track_highlight,
        );
        if layout.bar.width() > 0.0 {
            painter.rect_filled(layout.bar, gstyle.rounding, color.fill(&gstyle));
        }

        response
    }
}

use egui::style::{Selection, WidgetVisuals, Widgets};
use egui::{vec2, Color32, Painter, Rect, Stroke, Style, Vec2, Visuals};

mod choice;
mod style;
pub use choice::{ThemeChoice, UnknownTheme};
pub use style::Styled;

/// Base tokens of the clay look. Every widget style is derived from one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClayPalette {
    pub foreground: Color32,
    pub background: Color32,
    pub surface: Color32,
    pub shadow: Color32,
    pub highlight: Color32,
    pub purple: Color32,
    pub pink: Color32,
    pub blue: Color32,
    pub cyan: Color32,
}

impl ClayPalette {
    pub const fn light() -> Self {
        Self {
            foreground: Color32::from_rgb(49, 46, 72),
            background: Color32::from_rgb(238, 240, 247),
            surface: Color32::from_rgb(246, 247, 251),
            shadow: Color32::from_rgb(190, 195, 214),
            highlight: Color32::from_rgb(255, 255, 255),
            purple: Color32::from_rgb(139, 92, 246),
            pink: Color32::from_rgb(236, 72, 153),
            blue: Color32::from_rgb(59, 130, 246),
            cyan: Color32::from_rgb(6, 182, 212),
        }
    }

    pub const fn dark() -> Self {
        Self {
            foreground: Color32::from_rgb(232, 230, 245),
            background: Color32::from_rgb(42, 44, 58),
            surface: Color32::from_rgb(52, 54, 70),
            shadow: Color32::from_rgb(24, 25, 34),
            highlight: Color32::from_rgb(66, 69, 88),
            purple: Color32::from_rgb(167, 139, 250),
            pink: Color32::from_rgb(244, 114, 182),
            blue: Color32::from_rgb(96, 165, 250),
            cyan: Color32::from_rgb(34, 211, 238),
        }
    }

    pub fn for_style(style: &Style) -> Self {
        if style.visuals.dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Clay-specific semantic style for the `ProgressIndicator` widget.
#[derive(Clone, Debug)]
pub struct ClayProgressStyle {
    pub track: Color32,
    pub track_shadow: Color32,
    pub track_highlight: Color32,
    pub purple: Color32,
    pub pink: Color32,
    pub blue: Color32,
    pub cyan: Color32,
    pub text: Color32,
    pub weak_text: Color32,
    pub track_height: f32,
    pub header_gap: f32,
    pub rounding: f32,
}

/// Clay-specific semantic style for the `ToggleSwitch` widget.
#[derive(Clone, Debug)]
pub struct ClayToggleStyle {
    pub track_off: Color32,
    pub track_on: Color32,
    pub thumb: Color32,
    pub shadow: Color32,
    pub highlight: Color32,
    pub accent: Color32,
    pub size: Vec2,
    pub thumb_inset: f32,
    pub shadow_offset: Vec2,
}

impl From<&Style> for ClayProgressStyle {
    fn from(style: &Style) -> Self {
        let palette = ClayPalette::for_style(style);
        Self {
            track: palette.background,
            track_shadow: palette.shadow,
            track_highlight: palette.highlight,
            purple: palette.purple,
            pink: palette.pink,
            blue: palette.blue,
            cyan: palette.cyan,
            text: palette.foreground,
            weak_text: blend(palette.foreground, palette.background, 0.45),
            track_height: 14.0,
            header_gap: 6.0,
            rounding: 7.0,
        }
    }
}

impl From<&Style> for ClayToggleStyle {
    fn from(style: &Style) -> Self {
        let palette = ClayPalette::for_style(style);
        Self {
            track_off: blend(palette.background, palette.shadow, 0.35),
            track_on: palette.purple,
            thumb: palette.surface,
            shadow: palette.shadow,
            highlight: palette.highlight,
            accent: style.visuals.selection.stroke.color,
            size: vec2(52.0, 28.0),
            thumb_inset: 3.0,
            shadow_offset: vec2(2.0, 2.0),
        }
    }
}

// Color utilities: simple sRGB linear interpolation for quick palette derivation
pub fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let mix = |x: u8, y: u8| (x as f32 * (1.0 - t) + y as f32 * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

/// Paint a soft surface that bulges out of the background: a highlight up-left,
/// a shadow down-right and the body on top.
pub fn paint_clay_raised(
    painter: &Painter,
    rect: Rect,
    rounding: f32,
    fill: Color32,
    shadow: Color32,
    highlight: Color32,
    offset: Vec2,
) {
    painter.rect_filled(rect.translate(-offset), rounding, highlight);
    painter.rect_filled(rect.translate(offset), rounding, shadow);
    painter.rect_filled(rect, rounding, fill);
}

/// Paint a surface pressed into the background. The shadow shows along the
/// top and left edges, the highlight along the bottom and right.
pub fn paint_clay_inset(
    painter: &Painter,
    rect: Rect,
    rounding: f32,
    fill: Color32,
    shadow: Color32,
    highlight: Color32,
) {
    let lip = (rect.height() * 0.12).clamp(1.0, 3.0);
    painter.rect_filled(rect, rounding, shadow);
    painter.rect_filled(
        Rect::from_min_max(rect.min + vec2(lip, lip), rect.max),
        rounding,
        highlight,
    );
    painter.rect_filled(
        Rect::from_min_max(rect.min + vec2(lip, lip), rect.max - vec2(lip * 0.5, lip * 0.5)),
        rounding,
        fill,
    );
}

/// Build visuals from a clay palette: pill shaped controls, soft drop shadows
/// and no hard outlines.
pub fn clay(palette: ClayPalette, mut base_visuals: Visuals) -> Visuals {
    let control_radius = 12.0;
    let container_radius = 18.0;
    let control_fill = palette.surface;
    let control_fill_hover = blend(palette.surface, palette.highlight, 0.5);
    let control_fill_active = blend(palette.surface, palette.shadow, 0.25);
    let soft_stroke = Stroke::new(1.0, blend(palette.background, palette.shadow, 0.6));
    let accent_stroke = Stroke::new(1.5, palette.purple);
    let text_stroke = Stroke::new(1.0, palette.foreground);

    base_visuals.window_fill = palette.background;
    base_visuals.panel_fill = palette.background;
    base_visuals.faint_bg_color = palette.surface;
    base_visuals.extreme_bg_color = blend(palette.background, palette.shadow, 0.3);
    base_visuals.weak_text_color = Some(blend(palette.foreground, palette.background, 0.45));
    base_visuals.selection = Selection {
        bg_fill: blend(palette.background, palette.purple, 0.3),
        stroke: accent_stroke,
    };
    base_visuals.hyperlink_color = palette.blue;
    base_visuals.window_corner_radius = container_radius.into();
    base_visuals.menu_corner_radius = control_radius.into();

    let widget = |bg_fill: Color32, bg_stroke: Stroke, corner_radius: f32| WidgetVisuals {
        bg_fill,
        weak_bg_fill: bg_fill,
        bg_stroke,
        fg_stroke: text_stroke,
        corner_radius: corner_radius.into(),
        expansion: 0.0,
    };
    base_visuals.widgets = Widgets {
        noninteractive: widget(palette.surface, soft_stroke, container_radius),
        inactive: widget(control_fill, soft_stroke, control_radius),
        hovered: widget(control_fill_hover, soft_stroke, control_radius),
        active: widget(control_fill_active, accent_stroke, control_radius),
        open: widget(control_fill_hover, accent_stroke, control_radius),
    };

    base_visuals.window_shadow = egui::epaint::Shadow {
        offset: [6, 6],
        blur: 18,
        spread: 0,
        color: palette.shadow,
    };
    base_visuals.popup_shadow = egui::epaint::Shadow {
        offset: [4, 4],
        blur: 12,
        spread: 0,
        color: palette.shadow,
    };

    base_visuals
}

fn clay_style(palette: ClayPalette, base_visuals: Visuals) -> Style {
    let mut style = Style::default();
    style.spacing.item_spacing = vec2(12.0, 10.0);
    style.spacing.button_padding = vec2(14.0, 8.0);
    style.spacing.interact_size = vec2(40.0, 28.0);
    style.animation_time = 0.15;
    style.visuals = clay(palette, base_visuals);
    style
}

pub fn clay_light() -> Style {
    clay_style(ClayPalette::light(), Visuals::light())
}

pub fn clay_dark() -> Style {
    clay_style(ClayPalette::dark(), Visuals::dark())
}

//! Drive the widgets through a headless `egui::Context` the way a host app would.

use clay_widgets::prelude::*;
use clay_widgets::themes::{ClayPalette, ClayProgressStyle};
use egui::output::OutputEvent;
use egui::{
    vec2, CentralPanel, Context, Event, FullOutput, Modifiers, PointerButton, Pos2, RawInput,
    Rect, Shape, Ui,
};

fn headless_ctx() -> Context {
    let ctx = Context::default();
    ThemeChoice::Light.install(&ctx);
    ctx
}

fn run_frame(
    ctx: &Context,
    events: Vec<Event>,
    mut add_contents: impl FnMut(&mut Ui),
) -> FullOutput {
    let raw_input = RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0))),
        events,
        ..Default::default()
    };
    ctx.run(raw_input, |ctx| {
        CentralPanel::default().show(ctx, |ui| add_contents(ui));
    })
}

fn button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::default(),
    }
}

/// Lay the switch out once, then press and release on its center.
/// Returns the output of the release frame.
fn click_switch(ctx: &Context, switch: &mut ToggleSwitch) -> (FullOutput, bool) {
    let mut rect = Rect::NOTHING;
    run_frame(ctx, Vec::new(), |ui| rect = ui.add(&mut *switch).rect);
    let center = rect.center();

    run_frame(ctx, vec![Event::PointerMoved(center), button(center, true)], |ui| {
        ui.add(&mut *switch);
    });

    let mut changed = false;
    let output = run_frame(ctx, vec![button(center, false)], |ui| {
        changed = ui.add(&mut *switch).changed();
    });
    (output, changed)
}

fn texts(output: &FullOutput) -> Vec<String> {
    output
        .shapes
        .iter()
        .filter_map(|clipped| match &clipped.shape {
            Shape::Text(text) => Some(text.galley.text().to_owned()),
            _ => None,
        })
        .collect()
}

fn filled_rects(output: &FullOutput, fill: egui::Color32) -> Vec<Rect> {
    output
        .shapes
        .iter()
        .filter_map(|clipped| match &clipped.shape {
            Shape::Rect(rect) if rect.fill == fill => Some(rect.rect),
            _ => None,
        })
        .collect()
}

#[test]
fn loading_indicator_paints_header_and_cyan_bar() {
    let ctx = headless_ctx();
    let output = run_frame(&ctx, Vec::new(), |ui| {
        ui.add(
            ProgressIndicator::new(42.0)
                .color(ProgressColor::Cyan)
                .label("Loading")
                .desired_width(300.0),
        );
    });

    let texts = texts(&output);
    assert!(texts.iter().any(|text| text == "Loading"), "{texts:?}");
    assert!(texts.iter().any(|text| text == "42%"), "{texts:?}");

    let bars = filled_rects(&output, ClayPalette::light().cyan);
    assert_eq!(bars.len(), 1);
    assert!((bars[0].width() - 126.0).abs() < 0.01, "bar {:?}", bars[0]);
}

#[test]
fn unlabeled_indicator_has_no_header() {
    let ctx = headless_ctx();
    let output = run_frame(&ctx, Vec::new(), |ui| {
        ui.add(ProgressIndicator::new(75.0).desired_width(200.0));
    });

    assert!(!texts(&output).iter().any(|text| text.ends_with('%')));
    let bars = filled_rects(&output, ClayPalette::light().purple);
    assert_eq!(bars.len(), 1);
    assert!((bars[0].width() - 150.0).abs() < 0.01);
}

#[test]
fn clicking_the_switch_flips_it_and_notifies() {
    let ctx = headless_ctx();
    let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = seen.clone();
    let mut switch = ToggleSwitch::new()
        .label("Notifications")
        .on_change(move |checked| sink.borrow_mut().push(checked));

    let (_, changed) = click_switch(&ctx, &mut switch);
    assert!(changed);
    assert!(switch.is_checked());
    assert_eq!(*seen.borrow(), vec![true]);

    let (_, changed) = click_switch(&ctx, &mut switch);
    assert!(changed);
    assert!(!switch.is_checked());
    assert_eq!(*seen.borrow(), vec![true, false]);
}

#[test]
fn click_reports_new_state_to_accessibility() {
    let ctx = headless_ctx();
    let mut switch = ToggleSwitch::new().default_checked(true);

    let (output, _) = click_switch(&ctx, &mut switch);
    assert_eq!(switch.state(), SwitchState::Unchecked);

    let selected: Vec<_> = output
        .platform_output
        .events
        .iter()
        .filter_map(|event| match event {
            OutputEvent::Clicked(info) => info.selected,
            _ => None,
        })
        .collect();
    assert_eq!(selected, vec![false]);
}

#[test]
fn rerendering_does_not_reseed_state() {
    let ctx = headless_ctx();
    let mut switch = ToggleSwitch::new().default_checked(true);
    switch.activate();

    for _ in 0..3 {
        run_frame(&ctx, Vec::new(), |ui| {
            ui.add(&mut switch);
        });
    }
    assert!(!switch.is_checked());
}

#[test]
fn styled_override_replaces_theme_colors() {
    let ctx = headless_ctx();
    let mut style = ClayProgressStyle::from(&clay_widgets::themes::clay_light());
    style.pink = egui::Color32::from_rgb(1, 2, 3);

    let output = run_frame(&ctx, Vec::new(), |ui| {
        ui.add(
            ProgressIndicator::new(50.0)
                .color(ProgressColor::Pink)
                .desired_width(100.0)
                .styled(style.clone()),
        );
    });

    let bars = filled_rects(&output, egui::Color32::from_rgb(1, 2, 3));
    assert_eq!(bars.len(), 1);
    assert!((bars[0].width() - 50.0).abs() < 0.01);
}

use std::sync::Arc;

use clay_widgets::prelude::*;
use eframe::egui;
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

const EVENT_LOG_LEN: usize = 8;

struct Gallery {
    progress: f32,
    notifications: ToggleSwitch,
    dark_mode: ToggleSwitch,
    events: Arc<Mutex<Vec<String>>>,
}

impl Gallery {
    fn new(ctx: &egui::Context) -> Self {
        let events = Arc::new(Mutex::new(Vec::new()));

        let log = events.clone();
        let notifications = ToggleSwitch::new()
            .label("Notifications")
            .on_change(move |checked| log.lock().push(format!("notifications: {checked}")));

        let log = events.clone();
        let theme_ctx = ctx.clone();
        let dark_mode = ToggleSwitch::new()
            .label("Dark mode")
            .default_checked(ctx.style().visuals.dark_mode)
            .on_change(move |checked| {
                let choice = if checked {
                    ThemeChoice::Dark
                } else {
                    ThemeChoice::Light
                };
                theme_ctx.set_theme(choice.preference());
                log.lock().push(format!("dark mode: {checked}"));
            });

        Self {
            progress: 42.0,
            notifications,
            dark_mode,
            events,
        }
    }
}

impl eframe::App for Gallery {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Progress");
            ui.add(egui::Slider::new(&mut self.progress, -10.0..=110.0).text("value"));
            let value = self.progress.round();
            for color in ProgressColor::ALL {
                ui.add(
                    ProgressIndicator::new(value)
                        .color(color)
                        .label(format!("{color:?}")),
                );
            }
            ui.add(ProgressIndicator::new(value));

            ui.separator();
            ui.heading("Toggles");
            ui.add(&mut self.notifications);
            ui.add(&mut self.dark_mode);

            ui.separator();
            ui.label("Events");
            for line in self.events.lock().iter().rev().take(EVENT_LOG_LEN) {
                ui.monospace(line);
            }
        });
    }
}

fn main() -> eframe::Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let theme = ThemeChoice::from_env();
    log::info!("starting clay gallery with theme {theme:?}");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Clay gallery")
            .with_inner_size([440.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "clay-gallery",
        native_options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            if let Err(err) =
                ctrlc::set_handler(move || ctx.send_viewport_cmd(egui::ViewportCommand::Close))
            {
                log::warn!("failed to set exit signal handler: {err}");
            }

            theme.install(&cc.egui_ctx);
            Ok(Box::new(Gallery::new(&cc.egui_ctx)))
        }),
    )
}

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::{sync::Arc, time::Duration};

use chrono::Local;
use config::Config;
use crop::{Crop, sample_crops};
use crop_selection::CropSelectionState;
use eframe::{
    egui::{self, Id, Layout, ScrollArea},
    emath::Align,
};
use flexi_logger::{Logger, WriteMode};
use log::{info, warn};
use modal::{Modal, ModalVariant};
use string_log::{ArcStringLog, StringLog};
use strum::IntoEnumIterator;
use toast::{EguiToastRenderer, Toast, ToastPosition, ToastProvider};

mod config;
mod crop;
mod crop_selection;
mod dirs;
mod id;
mod modal;
mod string_log;
mod theme;
mod toast;

fn main() -> anyhow::Result<()> {
    let log: Arc<StringLog> = Arc::new(StringLog::new());

    let _logger = Logger::try_with_str("info, cropboard=debug")?
        .log_to_writer(Box::new(ArcStringLog::new(Arc::clone(&log))))
        .write_mode(WriteMode::Direct)
        .start()?;

    let config = Config::load().unwrap_or_else(|err| {
        warn!("Falling back to default config: {}", err);
        Config::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 700.0]),
        ..Default::default()
    };

    let app_log = Arc::clone(&log);
    eframe::run_native(
        "Cropboard",
        options,
        Box::new(|_cc| Ok(Box::new(CropBoardApp::new(config, app_log)))),
    )
    .map_err(|e| anyhow::anyhow!("Error running native app: {}", e))
}

struct CropBoardApp {
    crops: Vec<Crop>,
    config: Config,
    log: Arc<StringLog>,
    toasts: ToastProvider,
}

impl CropBoardApp {
    fn new(config: Config, log: Arc<StringLog>) -> Self {
        let toasts = ToastProvider::new(EguiToastRenderer::default(), config.toast_options());
        info!("Starting with {:?} modals", config.modal_variant);
        Self {
            crops: sample_crops(),
            config,
            log,
            toasts,
        }
    }

    fn selection_id() -> Id {
        Id::new("crop_selection")
    }

    fn settings_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("settings").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mut changed = false;

                egui::ComboBox::from_label("Modal")
                    .selected_text(self.config.modal_variant.to_string())
                    .show_ui(ui, |ui| {
                        for variant in ModalVariant::iter() {
                            changed |= ui
                                .selectable_value(
                                    &mut self.config.modal_variant,
                                    variant,
                                    variant.to_string(),
                                )
                                .changed();
                        }
                    });

                egui::ComboBox::from_label("Notifications")
                    .selected_text(self.config.toast_position.to_string())
                    .show_ui(ui, |ui| {
                        for position in ToastPosition::iter() {
                            changed |= ui
                                .selectable_value(
                                    &mut self.config.toast_position,
                                    position,
                                    position.to_string(),
                                )
                                .changed();
                        }
                    });

                if changed {
                    self.toasts.set_options(self.config.toast_options());
                }

                if ui.button("Save settings").clicked() {
                    let toast = match self.config.save() {
                        Ok(()) => Toast::success("Settings saved"),
                        Err(err) => {
                            warn!("Failed to save config: {}", err);
                            Toast::error("Could not save settings").description(err.to_string())
                        }
                    };
                    self.toasts.push(toast);
                }

                if !self.toasts.is_empty()
                    && ui
                        .button(format!("Clear notifications ({})", self.toasts.len()))
                        .clicked()
                {
                    self.toasts.clear();
                }
            });
        });
    }

    fn log_panel(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("log")
            .resizable(true)
            .show(ctx, |ui| {
                ui.label(format!("Log ({} lines)", self.log.len()));
                ui.with_layout(Layout::top_down_justified(Align::Min), |ui| {
                    ScrollArea::vertical()
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            self.log.for_each(|line| {
                                ui.label(line);
                            });
                        });
                });
            });
    }

    fn crop_list(&self, ui: &mut egui::Ui) {
        ui.heading("Crops");
        ui.add_space(8.0);

        let today = Local::now().date_naive();
        for crop in &self.crops {
            ui.push_id(crop.id, |ui| {
                ui.horizontal(|ui| {
                    if ui.button(&crop.name).clicked() {
                        CropSelectionState::open_modal_in(
                            ui.ctx(),
                            Self::selection_id(),
                            crop.clone(),
                        );
                    }
                    ui.label(format!(
                        "{} · {} days in the ground",
                        crop.variety,
                        crop.days_since_planting(today)
                    ));
                });
            });
        }
    }

    fn crop_modal(&mut self, ui: &mut egui::Ui) {
        let id = Self::selection_id();
        let selection = CropSelectionState::<Crop>::load(ui.ctx(), id);

        let Some(crop) = selection.selected_crop() else {
            return;
        };

        let mut close = false;
        let action = Modal::new("crop_details")
            .variant(self.config.modal_variant)
            .title(crop.label())
            .show_with_close(
                ui,
                selection.is_modal_open(),
                || close = true,
                |ui| {
                    ui.label(format!("Planted on {}", crop.planted_on.format("%B %-d, %Y")));
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        let harvested = ui.button("Mark harvested").clicked();
                        let blight = ui.button("Report blight").clicked();
                        match (harvested, blight) {
                            (true, _) => Some("success"),
                            (_, true) => Some("error"),
                            _ => None,
                        }
                    })
                    .inner
                },
            )
            .inner
            .flatten();

        if let Some(tag) = action {
            let toast = match tag {
                "success" => Toast::from_tag(Some(tag), format!("{} harvested", crop.name)),
                _ => Toast::from_tag(Some(tag), format!("Blight reported on {}", crop.name))
                    .duration(Duration::from_secs(10)),
            };
            self.toasts.push(toast.description(crop.variety.clone()));
            close = true;
        }

        if close {
            CropSelectionState::<Crop>::close_modal_in(ui.ctx(), id);
        }
    }
}

impl eframe::App for CropBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.settings_panel(ctx);
        self.log_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.crop_list(ui);
            self.crop_modal(ui);
        });

        self.toasts.show(ctx);
    }
}

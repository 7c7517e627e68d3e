#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use log::{info, warn};
use std::{fs, path::Path};
use process_unit_converter::{
    config,
    form::{Form, Outcome, Panel},
};

const SUCCESS_COLOR: egui::Color32 = egui::Color32::from_rgb(0x2e, 0x9d, 0x4f);
const FAILURE_COLOR: egui::Color32 = egui::Color32::from_rgb(0xd0, 0x3b, 0x3b);

/// 압력/온도/밀도 단위 변환기 (데스크톱).
#[derive(Debug, Parser)]
#[command(name = "process_unit_converter", version)]
struct GuiArgs {
    #[command(flatten)]
    config: config::ConfigArgs,
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    let args = GuiArgs::parse();
    let config_path = args.config.config;

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([560.0, 640.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let app_cfg = config::load_or_default(&config_path).unwrap_or_else(|e| {
        warn!("config load failed, using defaults: {e}");
        config::Config::default()
    });
    eframe::run_native(
        "Unit Converter",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(&app_cfg))),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    info!("window icon loaded from {path}");
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

struct GuiApp {
    form: Form,
}

impl GuiApp {
    fn new(config: &config::Config) -> Self {
        Self {
            form: Form::new(config),
        }
    }
}

/// 패널 하나(값/입력 단위/출력 단위 + 버튼 + 결과)를 그린다.
fn panel_ui(ui: &mut egui::Ui, panel: &mut Panel) {
    ui.heading(panel.title());
    ui.add_space(6.0);
    let id = panel.domain.name();
    let units = panel.domain.units();
    egui::Grid::new(format!("{id}_grid"))
        .num_columns(3)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            ui.label(panel.value_label());
            ui.label("From Unit:");
            ui.label("To Unit:");
            ui.end_row();

            ui.add(egui::DragValue::new(&mut panel.value).speed(0.1));
            unit_combo(ui, format!("{id}_from"), &mut panel.from_unit, &units);
            unit_combo(ui, format!("{id}_to"), &mut panel.to_unit, &units);
            ui.end_row();
        });
    ui.add_space(6.0);
    if ui.button(panel.button_label()).clicked() {
        panel.submit();
    }
    match &panel.outcome {
        Some(Outcome::Success(msg)) => {
            ui.colored_label(SUCCESS_COLOR, msg);
        }
        Some(Outcome::Failure(msg)) => {
            ui.colored_label(FAILURE_COLOR, msg);
        }
        None => {}
    }
}

fn unit_combo(ui: &mut egui::Ui, id: String, value: &mut String, options: &[&str]) {
    egui::ComboBox::from_id_source(id)
        .selected_text(value.as_str())
        .show_ui(ui, |ui| {
            for code in options {
                ui.selectable_value(value, code.to_string(), *code);
            }
        });
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("Unit Converter");
                });
                ui.add_space(8.0);
                let panels = self.form.panels_mut();
                let last = panels.len() - 1;
                for (idx, panel) in panels.into_iter().enumerate() {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        panel_ui(ui, panel);
                    });
                    if idx < last {
                        ui.separator();
                    }
                }
            });
        });
    }
}

use crate::theme;
use crate::views::{chart_view, indicator_view};
use cmp_charts::{resolve, ChartLibrary, LegendToggles};
use cmp_data::{DatasetStore, LoadMessage, LoadWorker};
use cmp_model::{Hierarchy, SelectionState};
use egui::{Button, RichText};
use std::path::PathBuf;
use std::sync::mpsc::TryRecvError;

/// Width below which the measures sidebar collapses behind a toggle button.
const COMPACT_WIDTH: f32 = 900.0;

pub struct DashboardApp {
    hierarchy: Hierarchy,
    selection: SelectionState,
    library: ChartLibrary,
    datasets: DatasetStore,
    toggles: LegendToggles,
    load_worker: Option<LoadWorker>,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let hierarchy = Hierarchy::standard();
        let selection = SelectionState::new(&hierarchy);
        let data_dir = std::env::current_dir()
            .map(|dir| dir.join("data"))
            .unwrap_or_else(|_| PathBuf::from("data"));

        Self {
            hierarchy,
            selection,
            library: ChartLibrary::standard(),
            datasets: DatasetStore::new(),
            toggles: LegendToggles::new(),
            load_worker: Some(LoadWorker::start(data_dir)),
        }
    }

    /// Applies any datasets the loader has finished since the last frame.
    fn poll_loader(&mut self) {
        let mut finished = false;

        if let Some(worker) = &self.load_worker {
            loop {
                match worker.rx.try_recv() {
                    Ok(LoadMessage::Loaded { measure, rows }) => {
                        self.datasets.insert(&measure, rows);
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        finished = true;
                        break;
                    }
                }
            }
        }

        if finished {
            self.load_worker = None;
        }
    }

    fn goal_tabs(&mut self, ui: &mut egui::Ui) {
        let mut clicked = None;

        ui.horizontal_wrapped(|ui| {
            for (index, goal) in self.hierarchy.goals.iter().enumerate() {
                let active = self.selection.active_goal() == Some(goal.name.as_str());
                let color = theme::goal_color32(index);
                let button = if active {
                    Button::new(RichText::new(&goal.name).strong().color(egui::Color32::WHITE))
                        .fill(color)
                } else {
                    Button::new(RichText::new(&goal.name).color(color))
                };
                let response = ui
                    .add(button)
                    .on_hover_text(&goal.measures_summary);
                if response.clicked() {
                    clicked = Some(goal.name.clone());
                }
            }
        });

        if let Some(name) = clicked {
            if let Err(e) = self.selection.select_goal(&self.hierarchy, &name) {
                tracing::error!(error = %e, "goal selection rejected");
            }
        }
    }

    fn measure_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.heading("Measures");
        ui.separator();

        let mut clicked = None;
        for measure in self.selection.measures(&self.hierarchy) {
            let active = self.selection.active_measure() == Some(measure.name.as_str());
            if ui
                .selectable_label(active, &measure.description)
                .on_hover_text(&measure.name)
                .clicked()
            {
                clicked = Some(measure.name.clone());
            }
        }

        if let Some(name) = clicked {
            if let Err(e) = self.selection.select_measure(&self.hierarchy, &name) {
                tracing::error!(error = %e, "measure selection rejected");
            }
        }
    }

    fn content(&mut self, ui: &mut egui::Ui) {
        let Some(measure_name) = self.selection.active_measure().map(str::to_string) else {
            ui.label("Select a measure to see its details.");
            return;
        };

        let toggled_key = match resolve(&self.library, &self.datasets, &self.toggles, &measure_name)
        {
            Some(config) => chart_view::show(ui, &config),
            None => {
                if let Some(measure) = self.selection.current_measure(&self.hierarchy) {
                    indicator_view::show(ui, measure);
                }
                None
            }
        };

        if let Some(key) = toggled_key {
            self.toggles.toggle(&measure_name, &key);
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loader();
        if self.load_worker.is_some() {
            // Keep polling until every dataset has arrived.
            ctx.request_repaint();
        }

        let compact = ctx.screen_rect().width() < COMPACT_WIDTH;
        if !compact {
            // The overlay only exists in compact mode.
            self.selection.close_sidebar_overlay();
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(6.0);
                ui.heading("CMP Performance Measures");
                ui.add_space(6.0);
            });
        });

        egui::TopBottomPanel::top("goal_tabs").show(ctx, |ui| {
            ui.add_space(4.0);
            self.goal_tabs(ui);
            if compact {
                let label = if self.selection.sidebar_open() {
                    "Hide Measures"
                } else {
                    "Show Measures"
                };
                if ui.button(label).clicked() {
                    self.selection.toggle_sidebar();
                }
            }
            ui.add_space(4.0);
        });

        let sidebar_visible = !compact || self.selection.sidebar_open();
        egui::SidePanel::left("measures")
            .default_width(260.0)
            .show_animated(ctx, sidebar_visible, |ui| {
                self.measure_sidebar(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.content(ui);
        });
    }
}

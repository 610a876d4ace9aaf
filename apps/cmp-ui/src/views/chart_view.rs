//! Chart rendering: one dispatch point over the chart kind tag, with a
//! clickable legend strip and a hover tooltip listing visible series values.

use crate::theme;
use cmp_charts::{AxisSide, ChartConfig, ChartKind, ResolvedSeries, SeriesRole};
use cmp_data::{Row, Value};
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, GridMark, Line, Plot, PlotPoints};
use std::cmp::Ordering;

/// Renders the chart for the resolved configuration. Returns the series key
/// whose legend entry was clicked, if any; the caller owns the toggle state.
pub fn show(ui: &mut egui::Ui, config: &ChartConfig<'_>) -> Option<String> {
    let template = config.template;

    ui.horizontal(|ui| {
        ui.heading(&template.title);
        if let Some(right) = &template.y_label_right {
            ui.weak(format!("(right axis: {right})"));
        }
    });

    let clicked = legend_strip(ui, config);
    ui.add_space(4.0);

    match config.rows {
        None => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading data...");
            });
        }
        Some([]) => {
            ui.label("No data available for this measure");
        }
        Some(rows) => draw_plot(ui, config, rows),
    }

    clicked
}

/// Legend entries come from the full template so hidden series stay on offer
/// for re-toggling; they render dimmed and struck through.
fn legend_strip(ui: &mut egui::Ui, config: &ChartConfig<'_>) -> Option<String> {
    let mut clicked = None;

    ui.horizontal_wrapped(|ui| {
        for desc in &config.template.series {
            let visible = config
                .series
                .iter()
                .any(|s| s.desc.key == desc.key && !s.muted);
            let text = if visible {
                RichText::new(&desc.display_name)
                    .color(theme::color32(desc.color))
                    .strong()
            } else {
                RichText::new(&desc.display_name).weak().strikethrough()
            };
            if ui.selectable_label(false, text).clicked() {
                clicked = Some(desc.key.clone());
            }
        }
    });

    clicked
}

fn draw_plot(ui: &mut egui::Ui, config: &ChartConfig<'_>, rows: &[Row]) {
    let template = config.template;
    let xs = x_positions(rows, &template.x_field);
    let labels = x_labels(rows, &template.x_field);
    let categorical = rows
        .iter()
        .any(|r| r.get(&template.x_field).and_then(Value::as_number).is_none());

    let bars: Vec<&ResolvedSeries<'_>> = config
        .series
        .iter()
        .filter(|s| s.desc.role == SeriesRole::Bar)
        .collect();
    let lines: Vec<&ResolvedSeries<'_>> = config
        .series
        .iter()
        .filter(|s| s.desc.role == SeriesRole::Line)
        .collect();

    // egui_plot draws a single Y axis; right-axis lines are rescaled into the
    // left-axis range for display while the tooltip reads raw row values.
    let right_scale = right_axis_scale(template.kind, rows, &bars, &lines);

    let mut plot = Plot::new(template.measure.clone())
        .x_axis_label(template.x_axis_label())
        .y_axis_label(template.y_label.clone())
        .show_x(false)
        .show_y(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false);

    if !bars.is_empty() {
        plot = plot.include_y(0.0);
    }

    if categorical {
        let tick_labels = labels.clone();
        plot = plot.x_axis_formatter(move |mark: GridMark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() < 0.01 && idx >= 0.0 {
                tick_labels.get(idx as usize).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        });
    }

    let response = plot.show(ui, |plot_ui| {
        match template.kind {
            ChartKind::Line => draw_lines(plot_ui, &lines, rows, &xs, 1.0),
            ChartKind::Bar | ChartKind::StackedBar => {
                draw_bars(plot_ui, template.kind, &bars, rows, &xs);
            }
            ChartKind::Composed => {
                draw_bars(plot_ui, template.kind, &bars, rows, &xs);
                draw_lines(plot_ui, &lines, rows, &xs, right_scale);
            }
        }
        plot_ui.pointer_coordinate().map(|p| p.x)
    });

    if let Some(hover_x) = response.inner {
        if let Some(idx) = nearest_index(&xs, hover_x) {
            response.response.on_hover_ui_at_pointer(|ui| {
                tooltip(ui, config, rows, idx, &labels[idx]);
            });
        }
    }
}

fn draw_lines(
    plot_ui: &mut egui_plot::PlotUi,
    series: &[&ResolvedSeries<'_>],
    rows: &[Row],
    xs: &[f64],
    right_scale: f64,
) {
    for s in series {
        let factor = match s.desc.axis {
            AxisSide::Left => 1.0,
            AxisSide::Right => right_scale,
        };
        let points: Vec<[f64; 2]> = rows
            .iter()
            .enumerate()
            .filter_map(|(i, row)| {
                let y = row.get(&s.desc.key)?.as_number()?;
                Some([xs[i], y * factor])
            })
            .collect();
        if points.is_empty() {
            continue;
        }

        let plot_points: PlotPoints = points.into();
        plot_ui.line(
            Line::new(plot_points)
                .color(theme::color32(s.desc.color))
                .name(&s.desc.display_name)
                .width(2.0),
        );
    }
}

/// Bars render grouped per stack: each group gets its own X slot and its
/// members stack on one another. Muted members keep their stack slot with a
/// transparent fill.
fn draw_bars(
    plot_ui: &mut egui_plot::PlotUi,
    kind: ChartKind,
    series: &[&ResolvedSeries<'_>],
    rows: &[Row],
    xs: &[f64],
) {
    let mut groups: Vec<(String, Vec<&ResolvedSeries<'_>>)> = Vec::new();
    for s in series {
        let group = match kind {
            // Plain bar charts sit side by side, one group per series.
            ChartKind::Bar => s.desc.key.clone(),
            // A stacked bar chart is one implicit stack.
            ChartKind::StackedBar => String::new(),
            _ => s
                .desc
                .stack_group
                .clone()
                .unwrap_or_else(|| s.desc.key.clone()),
        };
        match groups.iter_mut().find(|(name, _)| *name == group) {
            Some((_, members)) => members.push(s),
            None => groups.push((group, vec![s])),
        }
    }

    let count = groups.len().max(1);
    let slot = 0.8 / count as f64;
    let width = slot * 0.9;

    for (gi, (_, members)) in groups.iter().enumerate() {
        let offset = (gi as f64 - (count as f64 - 1.0) / 2.0) * slot;
        let mut drawn: Vec<BarChart> = Vec::new();

        for s in members {
            let fill = if s.muted {
                Color32::TRANSPARENT
            } else {
                theme::color32(s.desc.color)
            };
            let bars: Vec<Bar> = rows
                .iter()
                .enumerate()
                .filter_map(|(i, row)| {
                    let y = row.get(&s.desc.key)?.as_number()?;
                    Some(Bar::new(xs[i] + offset, y).width(width).fill(fill))
                })
                .collect();

            let mut chart = BarChart::new(bars)
                .color(fill)
                .name(&s.desc.display_name);
            let prior: Vec<&BarChart> = drawn.iter().collect();
            if !prior.is_empty() {
                chart = chart.stack_on(&prior);
            }
            drawn.push(chart);
        }

        for chart in drawn {
            plot_ui.bar_chart(chart);
        }
    }
}

/// Tooltip for the nearest row: all visible series values at a fixed
/// precision. Muted series are hidden from the readout as well.
fn tooltip(ui: &mut egui::Ui, config: &ChartConfig<'_>, rows: &[Row], idx: usize, x_label: &str) {
    ui.strong(format!("{}: {}", config.template.x_axis_label(), x_label));
    for s in &config.series {
        if s.muted {
            continue;
        }
        if let Some(v) = rows[idx].get(&s.desc.key).and_then(Value::as_number) {
            ui.colored_label(
                theme::color32(s.desc.color),
                format!("{}: {:.2}", s.desc.display_name, v),
            );
        }
    }
}

/// X position per row: the field's numeric value, or the row index for
/// non-numeric fields.
fn x_positions(rows: &[Row], x_field: &str) -> Vec<f64> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            row.get(x_field)
                .and_then(Value::as_number)
                .unwrap_or(i as f64)
        })
        .collect()
}

fn x_labels(rows: &[Row], x_field: &str) -> Vec<String> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| match row.get(x_field) {
            Some(v) => v.to_string(),
            None => i.to_string(),
        })
        .collect()
}

fn nearest_index(xs: &[f64], x: f64) -> Option<usize> {
    xs.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            let da = (*a - x).abs();
            let db = (*b - x).abs();
            da.partial_cmp(&db).unwrap_or(Ordering::Equal)
        })
        .map(|(i, _)| i)
}

/// Factor mapping right-axis values into the left-axis range of a composed
/// chart: the largest stack total (or left line value) over the largest
/// right-axis value.
fn right_axis_scale(
    kind: ChartKind,
    rows: &[Row],
    bars: &[&ResolvedSeries<'_>],
    lines: &[&ResolvedSeries<'_>],
) -> f64 {
    if kind != ChartKind::Composed {
        return 1.0;
    }

    let mut left_max = 0.0_f64;
    for row in rows {
        let mut totals: Vec<(Option<&str>, f64)> = Vec::new();
        for s in bars {
            let Some(y) = row.get(&s.desc.key).and_then(Value::as_number) else {
                continue;
            };
            let group = s.desc.stack_group.as_deref();
            match totals.iter_mut().find(|(g, _)| *g == group) {
                Some((_, total)) => *total += y,
                None => totals.push((group, y)),
            }
        }
        for (_, total) in totals {
            left_max = left_max.max(total);
        }
    }
    for s in lines.iter().filter(|s| s.desc.axis == AxisSide::Left) {
        for row in rows {
            if let Some(y) = row.get(&s.desc.key).and_then(Value::as_number) {
                left_max = left_max.max(y);
            }
        }
    }

    let mut right_max = 0.0_f64;
    for s in lines.iter().filter(|s| s.desc.axis == AxisSide::Right) {
        for row in rows {
            if let Some(y) = row.get(&s.desc.key).and_then(Value::as_number) {
                right_max = right_max.max(y);
            }
        }
    }

    if left_max > 0.0 && right_max > 0.0 {
        left_max / right_max
    } else {
        1.0
    }
}

//! Fallback content for measures without a chart template: the measure's
//! indicators as a plain list.

use cmp_model::Measure;

pub fn show(ui: &mut egui::Ui, measure: &Measure) {
    ui.heading(format!("{} - Performance Measures", measure.description));
    ui.add_space(6.0);

    for indicator in &measure.children {
        ui.label(format!("• {}", indicator.name));
    }

    ui.add_space(6.0);
    ui.weak("Chart coming soon");
}

//! Static chart templates per configurable measure.

use crate::series::{Rgb, SeriesDesc, SeriesRole};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const LIME: Rgb = Rgb::new(0xb6, 0xcb, 0x1a);
const ORANGE: Rgb = Rgb::new(0xf8, 0x7c, 0x01);
const BLUE: Rgb = Rgb::new(0x04, 0x81, 0xf7);
const TEAL: Rgb = Rgb::new(0x3c, 0xbc, 0xb6);
const VERMILION: Rgb = Rgb::new(0xe3, 0x4c, 0x00);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Line,
    Bar,
    StackedBar,
    Composed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTemplate {
    pub measure: String,
    pub kind: ChartKind,
    pub title: String,
    pub series: Vec<SeriesDesc>,
    pub x_field: String,
    pub y_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_label_right: Option<String>,
}

impl ChartTemplate {
    /// X axis label: the field name, capitalized.
    pub fn x_axis_label(&self) -> String {
        let mut chars = self.x_field.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }

    /// Stacking bar series keep their stack slot when toggled off (drawn with
    /// a transparent fill) so the stack geometry stays put.
    pub fn is_stacking(&self, series: &SeriesDesc) -> bool {
        series.role == SeriesRole::Bar
            && (self.kind == ChartKind::StackedBar || series.stack_group.is_some())
    }
}

/// All chart templates, keyed by measure name. Measures without a template
/// are unconfigured and fall back to their indicator list.
#[derive(Debug, Clone)]
pub struct ChartLibrary {
    templates: HashMap<String, ChartTemplate>,
}

impl ChartLibrary {
    pub fn template(&self, measure: &str) -> Option<&ChartTemplate> {
        self.templates.get(measure)
    }

    pub fn is_configured(&self, measure: &str) -> bool {
        self.templates.contains_key(measure)
    }

    pub fn standard() -> Self {
        let templates = [
            ChartTemplate {
                measure: "Travel Times".to_string(),
                kind: ChartKind::Line,
                title: "Average Travel Time Index (TTI)".to_string(),
                series: vec![
                    SeriesDesc::line("am_peak", "AM Peak", BLUE),
                    SeriesDesc::line("pm_peak", "PM Peak", VERMILION),
                ],
                x_field: "year".to_string(),
                y_label: "Travel Time Index".to_string(),
                y_label_right: None,
            },
            ChartTemplate {
                measure: "Delay".to_string(),
                kind: ChartKind::Bar,
                title: "Annual Peak Hours of Excessive Delay".to_string(),
                series: vec![SeriesDesc::bar("delay", "Excessive Delay", ORANGE)],
                x_field: "year".to_string(),
                y_label: "Hours".to_string(),
                y_label_right: None,
            },
            ChartTemplate {
                measure: "Non-SOV Travel".to_string(),
                kind: ChartKind::Bar,
                title: "Percent of Non-SOV Travel".to_string(),
                series: vec![SeriesDesc::bar("percent", "Non-SOV Share", TEAL)],
                x_field: "year".to_string(),
                y_label: "Percentage (%)".to_string(),
                y_label_right: None,
            },
            ChartTemplate {
                measure: "Travel Time Reliability".to_string(),
                kind: ChartKind::Line,
                title: "Planning Time Index".to_string(),
                series: vec![SeriesDesc::line("index", "Planning Time Index", LIME)],
                x_field: "year".to_string(),
                y_label: "PTI".to_string(),
                y_label_right: None,
            },
            ChartTemplate {
                measure: "Freight Reliability".to_string(),
                kind: ChartKind::Line,
                title: "Truck Travel Time Reliability Index".to_string(),
                series: vec![
                    SeriesDesc::line("am_peak", "AM Peak", LIME),
                    SeriesDesc::line("midday", "Midday", ORANGE),
                    SeriesDesc::line("pm_peak", "PM Peak", BLUE),
                    SeriesDesc::line("evening", "Evening", TEAL),
                    SeriesDesc::line("weekend", "Weekend", VERMILION),
                ],
                x_field: "year".to_string(),
                y_label: "TTTRI".to_string(),
                y_label_right: None,
            },
            ChartTemplate {
                measure: "Interstate Reliability".to_string(),
                kind: ChartKind::Line,
                title: "Reliable Person-Miles, Interstate".to_string(),
                series: vec![SeriesDesc::line("percent_reliable", "Reliable Person-Miles", BLUE)],
                x_field: "year".to_string(),
                y_label: "Percentage (%)".to_string(),
                y_label_right: None,
            },
            ChartTemplate {
                measure: "Non-Interstate Reliability".to_string(),
                kind: ChartKind::Line,
                title: "Reliable Person-Miles, Non-Interstate".to_string(),
                series: vec![SeriesDesc::line("percent_reliable", "Reliable Person-Miles", TEAL)],
                x_field: "year".to_string(),
                y_label: "Percentage (%)".to_string(),
                y_label_right: None,
            },
            ChartTemplate {
                measure: "Trip Length".to_string(),
                kind: ChartKind::Composed,
                title: "Trips and Average Trip Length".to_string(),
                series: vec![
                    SeriesDesc::bar("work_auto", "Work - Auto", BLUE).in_stack("work"),
                    SeriesDesc::bar("work_transit", "Work - Transit", TEAL).in_stack("work"),
                    SeriesDesc::bar("nonwork_auto", "Non-Work - Auto", ORANGE).in_stack("nonwork"),
                    SeriesDesc::bar("nonwork_transit", "Non-Work - Transit", LIME)
                        .in_stack("nonwork"),
                    SeriesDesc::line("avg_length", "Average Trip Length", VERMILION)
                        .on_right_axis(),
                ],
                x_field: "year".to_string(),
                y_label: "Trips (thousands)".to_string(),
                y_label_right: Some("Average Trip Length (mi)".to_string()),
            },
            ChartTemplate {
                measure: "Job Access".to_string(),
                kind: ChartKind::StackedBar,
                title: "Jobs Accessible within 30 Mins".to_string(),
                series: vec![
                    SeriesDesc::bar("transit", "By Transit", LIME),
                    SeriesDesc::bar("walking", "By Walking", ORANGE),
                    SeriesDesc::bar("biking", "By Biking", BLUE),
                ],
                x_field: "year".to_string(),
                y_label: "Number of Jobs".to_string(),
                y_label_right: None,
            },
            ChartTemplate {
                measure: "Fatalities".to_string(),
                kind: ChartKind::Composed,
                title: "Fatalities and Serious Injuries".to_string(),
                series: vec![
                    SeriesDesc::bar("fatalities", "Fatalities", VERMILION).in_stack("incidents"),
                    SeriesDesc::bar("serious_injuries", "Serious Injuries", ORANGE)
                        .in_stack("incidents"),
                    SeriesDesc::line("rate", "Rate per 100M VMT", BLUE).on_right_axis(),
                ],
                x_field: "year".to_string(),
                y_label: "People".to_string(),
                y_label_right: Some("Rate per 100M VMT".to_string()),
            },
        ];

        Self {
            templates: templates
                .into_iter()
                .map(|t| (t.measure.clone(), t))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::AxisSide;

    #[test]
    fn x_axis_label_is_capitalized_field() {
        let library = ChartLibrary::standard();
        let template = library.template("Delay").unwrap();
        assert_eq!(template.x_axis_label(), "Year");
    }

    #[test]
    fn stacking_classification() {
        let library = ChartLibrary::standard();

        let stacked = library.template("Job Access").unwrap();
        assert!(stacked.series.iter().all(|s| stacked.is_stacking(s)));

        let composed = library.template("Trip Length").unwrap();
        let bars: Vec<_> = composed
            .series
            .iter()
            .filter(|s| s.role == SeriesRole::Bar)
            .collect();
        assert_eq!(bars.len(), 4);
        assert!(bars.iter().all(|s| composed.is_stacking(s)));
        let line = composed.series.last().unwrap();
        assert!(!composed.is_stacking(line));
        assert_eq!(line.axis, AxisSide::Right);

        let plain = library.template("Delay").unwrap();
        assert!(!plain.is_stacking(&plain.series[0]));
    }
}

use cmp_charts::{resolve, ChartKind, ChartLibrary, LegendToggles, SeriesRole};
use cmp_data::{read_rows, DatasetStore};

fn freight_store() -> DatasetStore {
    let csv = "year,am_peak,midday,pm_peak,evening,weekend\n\
               2020,1.42,1.18,1.51,1.10,1.04\n\
               2021,1.45,1.20,1.55,1.12,1.05\n\
               2022,1.48,1.22,1.60,1.13,1.06\n";
    let mut store = DatasetStore::new();
    store.insert("Freight Reliability", read_rows(csv.as_bytes()).unwrap());
    store
}

#[test]
fn unconfigured_measure_resolves_to_none() {
    let library = ChartLibrary::standard();
    let store = DatasetStore::new();
    let toggles = LegendToggles::new();

    assert!(resolve(&library, &store, &toggles, "EJ Access").is_none());
    assert!(resolve(&library, &store, &toggles, "Accessibility").is_none());
    assert!(!library.is_configured("EJ Access"));
}

#[test]
fn pending_dataset_yields_config_without_rows() {
    let library = ChartLibrary::standard();
    let store = DatasetStore::new();
    let toggles = LegendToggles::new();

    let config = resolve(&library, &store, &toggles, "Travel Times").unwrap();
    assert!(config.rows.is_none());
    assert_eq!(config.series.len(), 2);
}

#[test]
fn loaded_empty_dataset_is_not_pending() {
    let library = ChartLibrary::standard();
    let mut store = DatasetStore::new();
    store.insert("Delay", Vec::new());
    let toggles = LegendToggles::new();

    let config = resolve(&library, &store, &toggles, "Delay").unwrap();
    assert_eq!(config.rows, Some(&[][..]));
}

#[test]
fn hidden_line_series_is_removed_in_template_order() {
    let library = ChartLibrary::standard();
    let store = freight_store();
    let mut toggles = LegendToggles::new();

    toggles.toggle("Freight Reliability", "midday");
    let config = resolve(&library, &store, &toggles, "Freight Reliability").unwrap();

    let keys: Vec<&str> = config.series.iter().map(|s| s.desc.key.as_str()).collect();
    assert_eq!(keys, vec!["am_peak", "pm_peak", "evening", "weekend"]);
    assert!(config.series.iter().all(|s| !s.muted));

    // The template still offers the hidden series to the legend.
    assert_eq!(config.template.series.len(), 5);
    assert!(config.template.series.iter().any(|s| s.key == "midday"));
}

#[test]
fn hidden_stacked_bar_stays_muted() {
    let library = ChartLibrary::standard();
    let mut store = DatasetStore::new();
    store.insert(
        "Job Access",
        read_rows("year,transit,walking,biking\n2022,5000,3000,2500\n".as_bytes()).unwrap(),
    );
    let mut toggles = LegendToggles::new();

    toggles.toggle("Job Access", "walking");
    let config = resolve(&library, &store, &toggles, "Job Access").unwrap();

    // All three bars keep their stack slots; only the fill changes.
    assert_eq!(config.series.len(), 3);
    let walking = config
        .series
        .iter()
        .find(|s| s.desc.key == "walking")
        .unwrap();
    assert!(walking.muted);
    assert!(config
        .series
        .iter()
        .filter(|s| s.desc.key != "walking")
        .all(|s| !s.muted));
}

#[test]
fn composed_chart_drops_hidden_lines_but_mutes_hidden_bars() {
    let library = ChartLibrary::standard();
    let store = DatasetStore::new();
    let mut toggles = LegendToggles::new();

    toggles.toggle("Trip Length", "avg_length");
    toggles.toggle("Trip Length", "work_transit");
    let config = resolve(&library, &store, &toggles, "Trip Length").unwrap();

    assert_eq!(config.template.kind, ChartKind::Composed);
    assert!(!config.series.iter().any(|s| s.desc.key == "avg_length"));
    let work_transit = config
        .series
        .iter()
        .find(|s| s.desc.key == "work_transit")
        .unwrap();
    assert!(work_transit.muted);
    assert_eq!(work_transit.desc.role, SeriesRole::Bar);
}

#[test]
fn toggles_persist_per_measure_across_switches() {
    let library = ChartLibrary::standard();
    let store = freight_store();
    let mut toggles = LegendToggles::new();

    toggles.toggle("Freight Reliability", "weekend");

    // Resolving a different measure leaves the stored toggles untouched.
    let other = resolve(&library, &store, &toggles, "Travel Times").unwrap();
    assert_eq!(other.series.len(), 2);

    let back = resolve(&library, &store, &toggles, "Freight Reliability").unwrap();
    assert!(!back.series.iter().any(|s| s.desc.key == "weekend"));
}

#[test]
fn templates_round_trip_through_json() {
    let library = ChartLibrary::standard();
    let template = library.template("Trip Length").unwrap();

    let json = serde_json::to_string(template).unwrap();
    let loaded: cmp_charts::ChartTemplate = serde_json::from_str(&json).unwrap();

    assert_eq!(*template, loaded);
    assert_eq!(loaded.kind, ChartKind::Composed);
    assert_eq!(loaded.series.len(), 5);
    assert_eq!(
        loaded.y_label_right.as_deref(),
        Some("Average Trip Length (mi)")
    );

    // Plain line templates omit the optional fields entirely.
    let line = library.template("Travel Times").unwrap();
    let json = serde_json::to_string(line).unwrap();
    assert!(!json.contains("y_label_right"));
    assert!(!json.contains("stack_group"));
}

#[test]
fn freight_reliability_end_to_end() {
    let library = ChartLibrary::standard();
    let store = freight_store();
    let mut toggles = LegendToggles::new();

    let config = resolve(&library, &store, &toggles, "Freight Reliability").unwrap();
    assert_eq!(config.template.kind, ChartKind::Line);
    assert_eq!(config.series.len(), 5);
    assert_eq!(config.rows.unwrap().len(), 3);
    let keys: Vec<&str> = config.series.iter().map(|s| s.desc.key.as_str()).collect();
    assert_eq!(keys, vec!["am_peak", "midday", "pm_peak", "evening", "weekend"]);

    toggles.toggle("Freight Reliability", "weekend");
    let config = resolve(&library, &store, &toggles, "Freight Reliability").unwrap();
    assert_eq!(config.series.len(), 4);
    assert!(!config.series.iter().any(|s| s.desc.key == "weekend"));
    assert!(config.template.series.iter().any(|s| s.key == "weekend"));

    toggles.toggle("Freight Reliability", "weekend");
    let config = resolve(&library, &store, &toggles, "Freight Reliability").unwrap();
    assert_eq!(config.series.len(), 5);
}

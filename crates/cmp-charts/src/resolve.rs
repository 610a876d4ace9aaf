//! Chart configuration resolution: template + loaded rows + legend toggles.

use crate::template::{ChartLibrary, ChartTemplate};
use crate::toggles::LegendToggles;
use crate::SeriesDesc;
use cmp_data::{DatasetStore, Row};

/// One series as it will render this frame.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedSeries<'t> {
    pub desc: &'t SeriesDesc,
    /// Toggled-off stacking bar: keeps its stack slot, drawn with a
    /// transparent fill.
    pub muted: bool,
}

/// Per-frame chart input. `rows` is `None` while the measure's dataset has
/// not arrived, which the renderer shows as a loading placeholder.
#[derive(Debug, Clone)]
pub struct ChartConfig<'a> {
    pub template: &'a ChartTemplate,
    pub series: Vec<ResolvedSeries<'a>>,
    pub rows: Option<&'a [Row]>,
}

/// Resolves the active measure into a chart configuration, or `None` for an
/// unconfigured measure. Hidden series are dropped from the active list in
/// template order, except stacking bars which stay muted; the template keeps
/// offering the full series list to the legend.
pub fn resolve<'a>(
    library: &'a ChartLibrary,
    store: &'a DatasetStore,
    toggles: &LegendToggles,
    measure: &str,
) -> Option<ChartConfig<'a>> {
    let template = library.template(measure)?;
    let rows = store.rows(measure);

    let series = template
        .series
        .iter()
        .filter_map(|desc| {
            let hidden = toggles.is_hidden(measure, &desc.key);
            if hidden && !template.is_stacking(desc) {
                return None;
            }
            Some(ResolvedSeries {
                desc,
                muted: hidden,
            })
        })
        .collect();

    Some(ChartConfig {
        template,
        series,
        rows,
    })
}

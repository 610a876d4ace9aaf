pub mod chart_view;
pub mod indicator_view;

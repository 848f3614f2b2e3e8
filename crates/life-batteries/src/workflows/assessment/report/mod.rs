mod summary;
pub mod views;

pub use views::{BatteryScoreView, ReportSection, ResultsSummary};

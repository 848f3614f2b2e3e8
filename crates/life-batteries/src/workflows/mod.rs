pub mod answer_sheet;
pub mod assessment;

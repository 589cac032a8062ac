pub mod aggregate;
pub mod estimate;
pub mod report;

pub use aggregate::{collect_statistics, language_summary, LanguageSummary, StatisticsTable};
pub use estimate::{predict_rub_salary, predict_salary};
pub use report::render_table;

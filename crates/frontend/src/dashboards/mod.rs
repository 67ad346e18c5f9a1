pub mod d100_sales_analytics;
pub mod d101_sample_data;

pub use d100_sales_analytics::ui::SalesAnalyticsDashboard;
pub use d101_sample_data::ui::SampleDataDashboard;

mod charts;
mod dashboard;
mod recent_table;

pub use dashboard::SalesAnalyticsDashboard;

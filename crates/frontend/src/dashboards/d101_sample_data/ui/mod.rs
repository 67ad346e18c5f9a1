mod dashboard;

pub use dashboard::SampleDataDashboard;

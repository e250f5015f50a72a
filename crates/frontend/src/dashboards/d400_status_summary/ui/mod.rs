mod dashboard;

pub use dashboard::StatusSummaryDashboard;

pub mod d400_status_summary;

pub use d400_status_summary::ui::StatusSummaryDashboard;

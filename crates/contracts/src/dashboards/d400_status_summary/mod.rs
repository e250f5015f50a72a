pub mod dto;

pub use dto::StatusSummaryResponse;

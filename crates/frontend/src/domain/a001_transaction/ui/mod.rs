pub mod create;
pub mod details;
pub mod edit;
pub mod list;
pub mod status_widgets;
pub mod tracking;

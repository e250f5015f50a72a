mod view;
mod view_model;

pub use view::TrackingPage;
pub use view_model::TrackingViewModel;

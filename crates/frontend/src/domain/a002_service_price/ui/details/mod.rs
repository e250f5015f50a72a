//! Service price form: create and edit share one view model
//!
//! - view_model.rs: form state and commands
//! - view.rs: Leptos components (form and route pages)

mod view;
mod view_model;

pub use view::{ServicePriceCreatePage, ServicePriceDetails, ServicePriceDetailsPage};
pub use view_model::ServicePriceDetailsViewModel;

//! New transaction form
//!
//! - lines.rs: item rows and their pricing
//! - view_model.rs: form state and commands
//! - view.rs: Leptos component

mod lines;
mod view;
mod view_model;

pub use lines::{ItemLine, OrderLines};
pub use view::TransactionCreatePage;
pub use view_model::TransactionCreateViewModel;

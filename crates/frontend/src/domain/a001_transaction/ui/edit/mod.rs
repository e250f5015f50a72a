//! Edit customer data, notes and payment of an existing transaction

mod view;
mod view_model;

pub use view::{TransactionEdit, TransactionEditPage};
pub use view_model::TransactionEditViewModel;

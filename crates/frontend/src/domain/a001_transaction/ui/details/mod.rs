mod view;
mod view_model;

pub use view::{TransactionDetails, TransactionDetailsPage};
pub use view_model::TransactionDetailsViewModel;

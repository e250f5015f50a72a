//! Price list of the laundry: one unit price per service type and item

pub mod aggregate;
pub mod catalog;
pub mod request;

pub use aggregate::ServicePriceDto;
pub use catalog::PriceCatalog;
pub use request::{CreateServicePriceRequest, UpdateServicePriceRequest};

//! Domain models for the storefront.
//!
//! These types represent validated domain objects. Raw form input lives in
//! [`crate::registration`]; the catalog file format is the serde form of
//! [`Product`].

mod customer;
mod product;

pub use customer::Customer;
pub use product::Product;

//! Core types for ShopCo.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod contact;
pub mod id;
pub mod price;
pub mod rating;

pub use category::{Category, ParseCategoryError};
pub use contact::{NameError, PersonName, PhoneError, PhoneNumber};
pub use id::*;
pub use price::{CurrencyCode, ParseCurrencyError, Price};
pub use rating::{Rating, RatingError};

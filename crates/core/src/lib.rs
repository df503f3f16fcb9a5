//! ShopCo Core - Shared types library.
//!
//! This crate provides the domain types used across all ShopCo components:
//! - `storefront` - Catalog, cart and session logic
//! - `cli` - Terminal front end for browsing and scripted sessions
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no async
//! runtime, no logging. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, categories, ratings and contact details

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

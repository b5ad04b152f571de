//! Domain foundation: the product model and its validation rules.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod product;

pub use error::{DomainError, DomainResult};
pub use product::{Barcode, Product, ProductPatch, RawRecord, is_truthy};

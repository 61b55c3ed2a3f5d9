//! Catalog domain module: purchasable packages and their pricing rules.
//!
//! This crate contains business rules for package pricing, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod package;
pub mod pricing;

pub use package::{
    BEST_VALUE_QUANTITY, DEFAULT_INSTALLMENTS, ECONOMIC_QUANTITY, NewPackage, Package, PackageId,
};
pub use pricing::{best_offer, recommended_package};

//! Arithmetic utility library.
//!
//! Exposes two pure operations, [`add`] and [`subtract`], over a small
//! numeric operand model. An [`Operand`] is either a 64-bit integer or an
//! IEEE 754 double; callers holding untyped JSON values go through the
//! fallible [`try_add`]/[`try_subtract`] forms, which reject non-numeric
//! input with an [`OperandError`].

mod error;
mod operand;
mod ops;

pub use error::OperandError;
pub use operand::Operand;
pub use ops::{add, subtract, try_add, try_subtract};

/// Package version string, sourced from Cargo metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

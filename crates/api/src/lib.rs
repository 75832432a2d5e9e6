//! Public error surface for the weierstrass library
//!
//! This crate provides the error taxonomy shared by every layer of the
//! arithmetic stack, together with the small guard functions used to raise
//! those errors consistently.

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result};

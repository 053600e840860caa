//! Miscellaneous math functions for general use

/// Free functions for handling and converting between
/// different representations of angles.
pub mod angular;
pub use angular::parse_angle;

/// Polynomial evaluation
pub mod series;
pub use series::horner;

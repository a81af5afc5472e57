//! A double-precision complex number type.
//!
//! [`Complex`](complex::Complex) supports the usual field arithmetic, integer,
//! real and complex powers, inversion, magnitude, and a small text format:
//!
//! ```
//! use complexkit::prelude::*;
//!
//! let z: Complex = "1 + 1i".parse().unwrap();
//! assert_eq!((z * z).to_string(), "2i");
//! assert_eq!(z / Complex::ZERO, Err(ComplexError::DivisionByZero));
//! ```
pub mod complex;
pub mod error;
pub mod math;
pub mod prelude;

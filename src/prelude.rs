//! complexkit prelude.
//!
//! This module contains the most used types, traits and functions that you
//! can import easily as a group.
//!
//! ```
//! use complexkit::prelude::*;
//!
//! ```

#[doc(no_inline)]
pub use crate::complex::Complex;

#[doc(no_inline)]
pub use crate::error::ComplexError;

#[doc(no_inline)]
pub use crate::math::approx_eq;

#[doc(no_inline)]
pub use num_traits::{One, Pow, Zero};

//! # motion_profile
//!
//! Setpoint profiles for motion control loops. A profile fits a low degree
//! polynomial between two boundary states and is then sampled at arbitrary
//! times; queries outside the segment clamp to the boundary values.
//!
//! This library provides the following modules:
//! - `profile` for the `Linear` and `Cubic` profiles and their query traits.
//! - `segment` for the boundary state and time clamping.
//! - `solver` for the closed-form boundary fits.
//! - `polynomial` for coefficient storage and basis-row evaluation.
//! - `error` for the checked setters.
//!
//! ```
//! use motion_profile::{Cubic, Position, Velocity};
//!
//! let mut mp = Cubic::<f64>::new();
//! mp.set((1.0, 2.0), (3.0, 4.0), (5.0, 6.0));
//! assert!((mp.q_at(1.0) - 3.0).abs() < 1e-9);
//! assert!((mp.v_at(2.0) - 6.0).abs() < 1e-9);
//! assert_eq!(mp.q_at(3.0), mp.q_at(2.0));
//! ```
//!
//! Without the default `std` feature the crate is `no_std`; enable `libm`
//! instead so `num-traits` can provide the float operations.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod error;
pub mod polynomial;
pub mod profile;
pub mod segment;
pub mod solver;

// Re-export main structs for convenience:
pub use error::*;
pub use polynomial::*;
pub use profile::*;
pub use segment::*;

/// Scalar types a profile can be computed in, in practice `f32` and `f64`.
pub trait Real: num_traits::Float + core::fmt::Debug {}

impl<T: num_traits::Float + core::fmt::Debug> Real for T {}

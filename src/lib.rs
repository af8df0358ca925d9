/*
    Top-level
*/

mod error;
mod number;
mod round;
mod util;

pub mod complex;
pub mod convert;
pub mod ops;
pub mod rational;

pub use complex::ComplexNumber;
pub use error::NumError;
pub use number::*;
pub use ops::{Op, Value};
pub use rational::RationalNumber;
pub use round::*;

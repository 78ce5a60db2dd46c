pub mod matrix;
pub mod rational;

pub use matrix::Matrix;
pub use rational::{canonicalize, clean_token, format_rational, parse_rational, Rational};

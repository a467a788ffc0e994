//! Expression decoding and evaluation

pub mod codec;
pub mod evaluator;

pub mod prelude {
    pub use super::codec::*;
    pub use super::evaluator::*;
}

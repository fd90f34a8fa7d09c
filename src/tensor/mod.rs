//! Implements small fixed-dimension tensor primitives

mod functions;
mod tensor2;
pub use crate::tensor::functions::*;
pub use crate::tensor::tensor2::*;

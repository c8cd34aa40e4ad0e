//! Concrete implementations of the payment ports.

pub mod legacy;
pub mod modern;

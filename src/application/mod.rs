//! Application layer containing the payment dispatch orchestration.
//!
//! This module defines the `PaymentProcessor`, the primary entry point for
//! submitting payments. It works purely in terms of the `PaymentHandler` port
//! and never sees which concrete implementation is behind a call.

pub mod processor;

use crate::domain::amount::Amount;
use crate::domain::ports::PaymentHandler;
use crate::error::Result;

/// Decouples callers from the concrete payment implementation.
///
/// `PaymentProcessor` accepts any implementation of the `PaymentHandler` port
/// and invokes it. It adds no behavior of its own: errors raised by the
/// handler surface to the caller unchanged.
#[derive(Default)]
pub struct PaymentProcessor;

impl PaymentProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Submits a payment to the given handler.
    pub async fn process_payment(
        &self,
        handler: &dyn PaymentHandler,
        amount: Amount,
    ) -> Result<()> {
        handler.execute_payment(amount).await
    }
}

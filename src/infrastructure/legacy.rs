use crate::domain::amount::Amount;
use crate::domain::ports::{LegacyPaymentSystem, LegacySystemBox, PaymentHandler};
use crate::error::Result;
use async_trait::async_trait;

/// The demonstration legacy backend.
///
/// Stands in for the real pre-existing system: it receives the amount already
/// rendered as a two-decimal string and prints a confirmation in the legacy
/// format.
#[derive(Default, Clone)]
pub struct ConsoleLegacySystem;

impl ConsoleLegacySystem {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LegacyPaymentSystem for ConsoleLegacySystem {
    async fn make_payment(&self, formatted_amount: &str) -> Result<()> {
        println!("Legacy system processed payment of {formatted_amount}");
        Ok(())
    }
}

/// Adapts the legacy payment contract to the `PaymentHandler` port.
///
/// The adapter holds the wrapped backend and nothing else. Each call renders
/// the amount with [`Amount::to_legacy_format`] and forwards the resulting
/// string; failures raised by the backend propagate unchanged.
pub struct LegacyPaymentAdapter {
    legacy: LegacySystemBox,
}

impl LegacyPaymentAdapter {
    pub fn new(legacy: LegacySystemBox) -> Self {
        Self { legacy }
    }
}

#[async_trait]
impl PaymentHandler for LegacyPaymentAdapter {
    async fn execute_payment(&self, amount: Amount) -> Result<()> {
        let formatted = amount.to_legacy_format();
        self.legacy.make_payment(&formatted).await
    }
}

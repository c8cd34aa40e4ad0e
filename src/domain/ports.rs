use super::amount::Amount;
use crate::error::Result;
use async_trait::async_trait;

/// The modern payment capability: one method, many implementations.
#[async_trait]
pub trait PaymentHandler: Send + Sync {
    async fn execute_payment(&self, amount: Amount) -> Result<()>;
}

/// The pre-existing payment backend. Its call contract takes the amount
/// already rendered as a fixed-point string with two decimal places.
#[async_trait]
pub trait LegacyPaymentSystem: Send + Sync {
    async fn make_payment(&self, formatted_amount: &str) -> Result<()>;
}

pub type PaymentHandlerBox = Box<dyn PaymentHandler>;
pub type LegacySystemBox = Box<dyn LegacyPaymentSystem>;

pub type PaymentHandlerFactory = Box<dyn Fn() -> PaymentHandlerBox + Send + Sync>;

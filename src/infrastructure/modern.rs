use crate::domain::amount::Amount;
use crate::domain::ports::PaymentHandler;
use crate::error::Result;
use async_trait::async_trait;

/// A payment gateway that speaks the modern capability natively.
///
/// Executes payments directly and prints a confirmation. It has no
/// relationship with any legacy collaborator.
#[derive(Default, Clone)]
pub struct ModernPaymentGateway;

impl ModernPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentHandler for ModernPaymentGateway {
    async fn execute_payment(&self, amount: Amount) -> Result<()> {
        println!("Modern gateway executed payment of {amount}");
        Ok(())
    }
}

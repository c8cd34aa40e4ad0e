use async_trait::async_trait;
use paybridge::domain::amount::Amount;
use paybridge::domain::ports::{LegacyPaymentSystem, PaymentHandler};
use paybridge::error::{PaymentError, Result};
use std::fs::File;
use std::io::Error;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Legacy backend double that records every formatted string it receives.
#[derive(Default, Clone)]
pub struct RecordingLegacySystem {
    payments: Arc<RwLock<Vec<String>>>,
}

impl RecordingLegacySystem {
    pub async fn payments(&self) -> Vec<String> {
        self.payments.read().await.clone()
    }
}

#[async_trait]
impl LegacyPaymentSystem for RecordingLegacySystem {
    async fn make_payment(&self, formatted_amount: &str) -> Result<()> {
        self.payments.write().await.push(formatted_amount.to_string());
        Ok(())
    }
}

/// Legacy backend double that fails every call with a fixed message.
pub struct FailingLegacySystem(pub &'static str);

#[async_trait]
impl LegacyPaymentSystem for FailingLegacySystem {
    async fn make_payment(&self, _formatted_amount: &str) -> Result<()> {
        Err(PaymentError::LegacyBackend(self.0.to_string()))
    }
}

/// Modern handler double that records every amount it executes.
#[derive(Default, Clone)]
pub struct RecordingPaymentHandler {
    amounts: Arc<RwLock<Vec<Amount>>>,
}

impl RecordingPaymentHandler {
    pub async fn amounts(&self) -> Vec<Amount> {
        self.amounts.read().await.clone()
    }
}

#[async_trait]
impl PaymentHandler for RecordingPaymentHandler {
    async fn execute_payment(&self, amount: Amount) -> Result<()> {
        self.amounts.write().await.push(amount);
        Ok(())
    }
}

pub fn generate_payments_csv(path: &Path, rows: usize) -> std::result::Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["route", "amount"])?;

    for i in 1..=rows {
        let route = if i % 2 == 0 { "legacy" } else { "modern" };
        wtr.write_record([route, "1.0"])?;
    }

    wtr.flush()?;
    Ok(())
}

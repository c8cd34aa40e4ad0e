use rust_decimal::Decimal;
use serde::Deserialize;

/// Which implementation of the payment capability a payment is dispatched to.
#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentRoute {
    Modern,
    Legacy,
}

/// A single payment instruction as read from the input stream.
///
/// The amount is kept as a raw `Decimal` here; it is validated into an
/// [`Amount`](super::amount::Amount) when the payment is dispatched.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentInstruction {
    pub route: PaymentRoute,
    pub amount: Decimal,
}

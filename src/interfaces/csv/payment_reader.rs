use crate::domain::payment::PaymentInstruction;
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Reads payment instructions from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<PaymentInstruction>`. It handles whitespace trimming and flexible
/// record lengths automatically.
pub struct PaymentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentReader<R> {
    /// Creates a new `PaymentReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes instructions.
    ///
    /// A malformed row yields an `Err` item without stopping the stream, so
    /// callers can report it and keep going.
    pub fn instructions(self) -> impl Iterator<Item = Result<PaymentInstruction>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}

use crate::domain::payment::Payment;
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Reads payments from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<Payment>`. It handles whitespace trimming and flexible record
/// lengths automatically.
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

    /// Returns an iterator that lazily reads and deserializes payments.
    ///
    /// This allows processing large files in a streaming fashion without
    /// loading the entire dataset into memory.
    pub fn payments(self) -> impl Iterator<Item = Result<Payment>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}

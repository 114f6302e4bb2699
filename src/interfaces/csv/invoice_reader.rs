use crate::domain::invoice::{Invoice, InvoiceId};
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One row of an invoice seed file, before the type tag is validated.
#[derive(Debug, Deserialize)]
struct InvoiceRecord {
    id: InvoiceId,
    r#type: String,
    amount: Decimal,
    #[serde(default)]
    amount_paid: Decimal,
    #[serde(default)]
    tax_amount: Decimal,
}

impl TryFrom<InvoiceRecord> for Invoice {
    type Error = PaymentError;

    fn try_from(record: InvoiceRecord) -> Result<Invoice> {
        Ok(Invoice {
            id: record.id,
            r#type: record.r#type.parse()?,
            amount: record.amount,
            amount_paid: record.amount_paid,
            tax_amount: record.tax_amount,
        })
    }
}

/// Reads invoices from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<Invoice>`. It handles whitespace trimming and flexible record
/// lengths automatically; the `amount_paid` and `tax_amount` columns may be
/// omitted entirely, in which case they default to zero.
pub struct InvoiceReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> InvoiceReader<R> {
    /// Creates a new `InvoiceReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes invoices.
    ///
    /// An unknown invoice type tag surfaces as
    /// [`PaymentError::UnsupportedInvoiceType`] for that row.
    pub fn invoices(self) -> impl Iterator<Item = Result<Invoice>> {
        self.reader.into_deserialize::<InvoiceRecord>().map(|result| {
            result
                .map_err(PaymentError::from)
                .and_then(Invoice::try_from)
        })
    }
}

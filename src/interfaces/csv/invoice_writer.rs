use crate::domain::invoice::Invoice;
use crate::error::Result;
use std::io::Write;

/// Writes final invoice states as CSV to any `Write` destination.
pub struct InvoiceWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> InvoiceWriter<W> {
    /// Creates a new `InvoiceWriter` targeting the given destination.
    pub fn new(target: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(target),
        }
    }

    /// Serializes the invoices sorted by id and flushes the destination.
    pub fn write_invoices(&mut self, mut invoices: Vec<Invoice>) -> Result<()> {
        invoices.sort_by_key(|invoice| invoice.id);
        for invoice in invoices {
            self.writer.serialize(invoice)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::invoice::InvoiceType;
    use rust_decimal_macros::dec;

    #[test]
    fn test_writer_sorts_by_id() {
        let mut later = Invoice::new(2, InvoiceType::Commercial, dec!(50.00));
        later.amount_paid = dec!(50.00);
        later.tax_amount = dec!(7.00);
        let earlier = Invoice::new(1, InvoiceType::Standard, dec!(10.00));

        let mut buffer = Vec::new();
        {
            let mut writer = InvoiceWriter::new(&mut buffer);
            writer.write_invoices(vec![later, earlier]).unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("id,type,amount,amount_paid,tax_amount"));
        assert_eq!(lines.next(), Some("1,standard,10.00,0,0"));
        assert_eq!(lines.next(), Some("2,commercial,50.00,50.00,7.00"));
    }
}

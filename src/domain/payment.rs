use super::invoice::InvoiceId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment identifier.
pub type PaymentId = u32;

/// A single monetary application against one invoice.
///
/// Payments are immutable once persisted; the stores expose no update or
/// delete operation for them.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Payment {
    pub id: PaymentId,
    pub invoice_id: InvoiceId,
    pub amount: Decimal,
    /// Free-text reference supplied by the payer, if any.
    pub reference: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_payment_csv_row() {
        let data = "id,invoice_id,amount,reference\n7,3,12.50,march rent";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let payment: Payment = reader.deserialize().next().unwrap().unwrap();

        assert_eq!(payment.id, 7);
        assert_eq!(payment.invoice_id, 3);
        assert_eq!(payment.amount, dec!(12.50));
        assert_eq!(payment.reference.as_deref(), Some("march rent"));
    }

    #[test]
    fn test_payment_blank_reference_is_none() {
        let data = "id,invoice_id,amount,reference\n7,3,12.50,";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let payment: Payment = reader.deserialize().next().unwrap().unwrap();

        assert_eq!(payment.reference, None);
    }
}

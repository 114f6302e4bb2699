use crate::error::PaymentError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Invoice identifier. Supports ids from 0 to 4,294,967,295.
pub type InvoiceId = u32;

/// Flat tax rate applied when a payment is recorded against an invoice.
pub const TAX_RATE: Decimal = dec!(0.14);

/// The closed set of invoice categories.
///
/// Matching on this enum is always exhaustive. Data sources that carry the
/// type as free text go through [`FromStr`], where an unknown tag becomes
/// [`PaymentError::UnsupportedInvoiceType`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceType {
    Standard,
    Commercial,
}

impl FromStr for InvoiceType {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "commercial" => Ok(Self::Commercial),
            other => Err(PaymentError::UnsupportedInvoiceType(other.to_string())),
        }
    }
}

/// A billable record tracking the total owed and the cumulative amounts paid
/// and taxed against it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Invoice {
    pub id: InvoiceId,
    pub r#type: InvoiceType,
    /// Total invoice value.
    pub amount: Decimal,
    /// Cumulative amount paid so far.
    pub amount_paid: Decimal,
    /// Cumulative tax accrued from recorded payments.
    pub tax_amount: Decimal,
}

impl Invoice {
    /// Creates a fresh, unpaid invoice.
    pub fn new(id: InvoiceId, r#type: InvoiceType, amount: Decimal) -> Self {
        Self {
            id,
            r#type,
            amount,
            amount_paid: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
        }
    }

    /// Amount still owed: `amount - amount_paid`.
    pub fn remaining_due(&self) -> Decimal {
        self.amount - self.amount_paid
    }

    /// Records the first payment taken against this invoice.
    ///
    /// `amount_paid` is assigned rather than incremented, and tax accrues
    /// for both invoice types.
    pub fn record_first_payment(&mut self, amount: Decimal) {
        self.amount_paid = amount;
        self.tax_amount = amount * TAX_RATE;
    }

    /// Records a payment on an invoice that already has payment history.
    ///
    /// Standard invoices accrue tax only on their first payment while
    /// commercial invoices accrue tax on every payment.
    pub fn record_additional_payment(&mut self, amount: Decimal) {
        self.amount_paid += amount;
        match self.r#type {
            InvoiceType::Standard => {}
            InvoiceType::Commercial => self.tax_amount += amount * TAX_RATE,
        }
    }
}

use std::fmt;

/// The decision produced for one submitted payment.
///
/// The first four variants are rejections: the payment is not recorded and
/// no invoice state changes, so resubmitting the same payment yields the
/// same outcome. The remaining four report an applied payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// The invoice has a zero amount and nothing to settle.
    NoPaymentNeeded,
    /// Recorded payments already cover the invoice amount.
    AlreadyFullyPaid,
    /// The payment is larger than what remains on a partially paid invoice.
    ExceedsRemainingPartial,
    /// The payment is larger than the full invoice amount.
    ExceedsInvoiceAmount,
    /// This payment settled the remainder of a partially paid invoice.
    FinalPartialPayment,
    /// Applied on top of earlier payments, with a balance still owing.
    PartialPaymentReceived,
    /// A first payment settled the invoice in full.
    FullyPaid,
    /// A first payment covered part of the invoice.
    PartiallyPaid,
}

impl fmt::Display for PaymentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::NoPaymentNeeded => "no payment needed",
            Self::AlreadyFullyPaid => "invoice was already fully paid",
            Self::ExceedsRemainingPartial => {
                "the payment is greater than the partial amount remaining"
            }
            Self::ExceedsInvoiceAmount => "the payment is greater than the invoice amount",
            Self::FinalPartialPayment => {
                "final partial payment received, invoice is now fully paid"
            }
            Self::PartialPaymentReceived => {
                "another partial payment received, still not fully paid"
            }
            Self::FullyPaid => "invoice is now fully paid",
            Self::PartiallyPaid => "invoice is now partially paid",
        };
        f.write_str(message)
    }
}

use crate::domain::invoice::{Invoice, InvoiceId};
use crate::domain::outcome::PaymentOutcome;
use crate::domain::payment::Payment;
use crate::domain::ports::{InvoiceStoreBox, PaymentStoreBox};
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The main entry point for recording payments against invoices.
///
/// `PaymentProcessor` owns the storage backends and decides, for each
/// submitted payment, whether it applies to its invoice and what the
/// invoice's monetary fields become. Submissions against the same invoice
/// are serialized through a per-invoice lock so concurrent payments cannot
/// both read the same stale state; payments against distinct invoices
/// proceed independently.
pub struct PaymentProcessor {
    invoice_store: InvoiceStoreBox,
    payment_store: PaymentStoreBox,
    // One lock per invoice id, allocated on first use and kept for the
    // processor's lifetime.
    invoice_locks: Mutex<HashMap<InvoiceId, Arc<Mutex<()>>>>,
}

impl PaymentProcessor {
    /// Creates a new `PaymentProcessor` instance.
    ///
    /// # Arguments
    ///
    /// * `invoice_store` - The store for invoice state.
    /// * `payment_store` - The store for recorded payments.
    pub fn new(invoice_store: InvoiceStoreBox, payment_store: PaymentStoreBox) -> Self {
        Self {
            invoice_store,
            payment_store,
            invoice_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Submits a payment for processing against the invoice it references.
    ///
    /// The payment is validated against the invoice's current state and
    /// either applied and persisted, or rejected. Rejections come back as
    /// `Ok` outcomes; only a missing invoice, a zero-amount invoice with
    /// payment history, or a storage failure is an error.
    ///
    /// When a payment is accepted, the payment record is persisted first
    /// and the updated invoice second. There is no rollback if the second
    /// write fails.
    pub async fn process_payment(&self, payment: Payment) -> Result<PaymentOutcome> {
        let invoice_id = payment.invoice_id;
        let lock = self.invoice_lock(invoice_id).await;
        let _guard = lock.lock().await;

        let mut invoice = self
            .invoice_store
            .get(invoice_id)
            .await?
            .ok_or(PaymentError::InvoiceNotFound(invoice_id))?;

        let history = self.payment_store.get_by_invoice(invoice_id).await?;

        if invoice.amount.is_zero() {
            if history.is_empty() {
                return Ok(PaymentOutcome::NoPaymentNeeded);
            }
            return Err(PaymentError::InvalidInvoiceState(invoice_id));
        }

        let historical_sum: Decimal = history.iter().map(|p| p.amount).sum();

        if !historical_sum.is_zero() {
            if invoice.amount == historical_sum {
                return Ok(PaymentOutcome::AlreadyFullyPaid);
            }

            let due_before = invoice.remaining_due();
            if payment.amount > due_before {
                return Ok(PaymentOutcome::ExceedsRemainingPartial);
            }

            let settles_remainder = payment.amount == due_before;
            invoice.record_additional_payment(payment.amount);
            self.payment_store.create(payment).await?;
            self.invoice_store.update(invoice).await?;

            if settles_remainder {
                Ok(PaymentOutcome::FinalPartialPayment)
            } else {
                Ok(PaymentOutcome::PartialPaymentReceived)
            }
        } else {
            if payment.amount > invoice.amount {
                return Ok(PaymentOutcome::ExceedsInvoiceAmount);
            }

            let settles_in_full = payment.amount == invoice.amount;
            invoice.record_first_payment(payment.amount);
            self.payment_store.create(payment).await?;
            self.invoice_store.update(invoice).await?;

            if settles_in_full {
                Ok(PaymentOutcome::FullyPaid)
            } else {
                Ok(PaymentOutcome::PartiallyPaid)
            }
        }
    }

    /// Consumes the processor and returns the final state of all invoices.
    pub async fn into_results(self) -> Result<Vec<Invoice>> {
        self.invoice_store.all().await
    }

    async fn invoice_lock(&self, invoice_id: InvoiceId) -> Arc<Mutex<()>> {
        let mut locks = self.invoice_locks.lock().await;
        locks.entry(invoice_id).or_default().clone()
    }
}

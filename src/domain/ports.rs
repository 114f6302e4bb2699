use super::invoice::{Invoice, InvoiceId};
use super::payment::Payment;
use crate::error::Result;
use async_trait::async_trait;

/// Read/write access to invoice state.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    async fn get(&self, id: InvoiceId) -> Result<Option<Invoice>>;
    /// Persists the given snapshot, inserting it if the id is new, and
    /// returns the stored value.
    async fn update(&self, invoice: Invoice) -> Result<Invoice>;
    async fn all(&self) -> Result<Vec<Invoice>>;
}

/// Append-only access to recorded payments.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Returns the payments recorded against one invoice, ordered by id.
    async fn get_by_invoice(&self, invoice_id: InvoiceId) -> Result<Vec<Payment>>;
    async fn create(&self, payment: Payment) -> Result<Payment>;
}

pub type InvoiceStoreBox = Box<dyn InvoiceStore>;
pub type PaymentStoreBox = Box<dyn PaymentStore>;

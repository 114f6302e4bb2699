use crate::domain::invoice::{Invoice, InvoiceId};
use crate::domain::payment::Payment;
use crate::domain::ports::{InvoiceStore, PaymentStore};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for invoices.
///
/// Uses `Arc<RwLock<HashMap<InvoiceId, Invoice>>>` to allow shared concurrent
/// access. Ideal for testing or one-shot runs where persistence is not
/// required. `Clone` hands out another handle onto the same map.
#[derive(Default, Clone)]
pub struct InMemoryInvoiceStore {
    invoices: Arc<RwLock<HashMap<InvoiceId, Invoice>>>,
}

impl InMemoryInvoiceStore {
    /// Creates a new, empty in-memory invoice store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InvoiceStore for InMemoryInvoiceStore {
    async fn get(&self, id: InvoiceId) -> Result<Option<Invoice>> {
        let invoices = self.invoices.read().await;
        Ok(invoices.get(&id).cloned())
    }

    async fn update(&self, invoice: Invoice) -> Result<Invoice> {
        let mut invoices = self.invoices.write().await;
        invoices.insert(invoice.id, invoice.clone());
        Ok(invoice)
    }

    async fn all(&self) -> Result<Vec<Invoice>> {
        let invoices = self.invoices.read().await;
        Ok(invoices.values().cloned().collect())
    }
}

/// A thread-safe in-memory store for payments, indexed by invoice.
///
/// Payment lookup during processing is always per invoice, so records are
/// bucketed under their invoice id rather than kept in one flat map.
#[derive(Default, Clone)]
pub struct InMemoryPaymentStore {
    payments: Arc<RwLock<HashMap<InvoiceId, Vec<Payment>>>>,
}

impl InMemoryPaymentStore {
    /// Creates a new, empty in-memory payment store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn get_by_invoice(&self, invoice_id: InvoiceId) -> Result<Vec<Payment>> {
        let payments = self.payments.read().await;
        let mut matching = payments.get(&invoice_id).cloned().unwrap_or_default();
        matching.sort_by_key(|payment| payment.id);
        Ok(matching)
    }

    async fn create(&self, payment: Payment) -> Result<Payment> {
        let mut payments = self.payments.write().await;
        payments
            .entry(payment.invoice_id)
            .or_default()
            .push(payment.clone());
        Ok(payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::invoice::InvoiceType;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_in_memory_invoice_store() {
        let store = InMemoryInvoiceStore::new();
        let invoice = Invoice::new(1, InvoiceType::Standard, dec!(100.0));

        store.update(invoice.clone()).await.unwrap();
        let retrieved = store.get(1).await.unwrap().unwrap();
        assert_eq!(retrieved, invoice);

        assert!(store.get(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_in_memory_invoice_store_all() {
        let store = InMemoryInvoiceStore::new();
        store
            .update(Invoice::new(1, InvoiceType::Standard, dec!(10.0)))
            .await
            .unwrap();
        store
            .update(Invoice::new(2, InvoiceType::Commercial, dec!(20.0)))
            .await
            .unwrap();

        let all = store.all().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_in_memory_payment_store_filters_by_invoice() {
        let store = InMemoryPaymentStore::new();
        let by_id = |id: u32, invoice_id: u32| Payment {
            id,
            invoice_id,
            amount: dec!(1.0),
            reference: None,
        };

        store.create(by_id(3, 1)).await.unwrap();
        store.create(by_id(1, 1)).await.unwrap();
        store.create(by_id(2, 2)).await.unwrap();

        let for_one = store.get_by_invoice(1).await.unwrap();
        assert_eq!(for_one.len(), 2);
        // Ordered by payment id regardless of insertion order
        assert_eq!(for_one[0].id, 1);
        assert_eq!(for_one[1].id, 3);

        assert!(store.get_by_invoice(9).await.unwrap().is_empty());
    }
}

use crate::domain::invoice::{Invoice, InvoiceId};
use crate::domain::payment::{Payment, PaymentId};
use crate::domain::ports::{InvoiceStore, PaymentStore};
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, Direction, IteratorMode, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing invoice states.
pub const CF_INVOICES: &str = "invoices";
/// Column Family for storing recorded payments.
pub const CF_PAYMENTS: &str = "payments";

/// A persistent store implementation using RocksDB.
///
/// Handles storage for both `Invoice` and `Payment` entities using separate
/// Column Families with big-endian ids as keys and JSON-encoded values.
/// Payments are keyed by `(invoice_id, payment_id)` so one invoice's history
/// is a contiguous key range.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDbStore {
    db: Arc<DB>,
}

impl RocksDbStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the required column families ("invoices" and "payments")
    /// exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_invoices = ColumnFamilyDescriptor::new(CF_INVOICES, Options::default());
        let cf_payments = ColumnFamilyDescriptor::new(CF_PAYMENTS, Options::default());

        let db = DB::open_cf_descriptors(&opts, path, vec![cf_invoices, cf_payments])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn cf(&self, name: &str) -> Result<&ColumnFamily> {
        self.db.cf_handle(name).ok_or_else(|| {
            PaymentError::Io(std::io::Error::other(format!(
                "column family '{}' not found",
                name
            )))
        })
    }
}

fn payment_key(invoice_id: InvoiceId, payment_id: PaymentId) -> [u8; 8] {
    let mut key = [0u8; 8];
    key[..4].copy_from_slice(&invoice_id.to_be_bytes());
    key[4..].copy_from_slice(&payment_id.to_be_bytes());
    key
}

#[async_trait]
impl InvoiceStore for RocksDbStore {
    async fn get(&self, id: InvoiceId) -> Result<Option<Invoice>> {
        let cf = self.cf(CF_INVOICES)?;
        match self.db.get_cf(cf, id.to_be_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, invoice: Invoice) -> Result<Invoice> {
        let cf = self.cf(CF_INVOICES)?;
        let value = serde_json::to_vec(&invoice)?;
        self.db.put_cf(cf, invoice.id.to_be_bytes(), value)?;
        Ok(invoice)
    }

    async fn all(&self) -> Result<Vec<Invoice>> {
        let cf = self.cf(CF_INVOICES)?;
        let mut invoices = Vec::new();
        for item in self.db.iterator_cf(cf, IteratorMode::Start) {
            let (_key, value) = item?;
            invoices.push(serde_json::from_slice(&value)?);
        }
        Ok(invoices)
    }
}

#[async_trait]
impl PaymentStore for RocksDbStore {
    async fn get_by_invoice(&self, invoice_id: InvoiceId) -> Result<Vec<Payment>> {
        let cf = self.cf(CF_PAYMENTS)?;
        let prefix = invoice_id.to_be_bytes();
        let iter = self
            .db
            .iterator_cf(cf, IteratorMode::From(&prefix, Direction::Forward));

        // Big-endian composite keys keep one invoice's payments contiguous
        // and ordered by payment id.
        let mut payments = Vec::new();
        for item in iter {
            let (key, value) = item?;
            if !key.starts_with(&prefix) {
                break;
            }
            payments.push(serde_json::from_slice(&value)?);
        }
        Ok(payments)
    }

    async fn create(&self, payment: Payment) -> Result<Payment> {
        let cf = self.cf(CF_PAYMENTS)?;
        let key = payment_key(payment.invoice_id, payment.id);
        let value = serde_json::to_vec(&payment)?;
        self.db.put_cf(cf, key, value)?;
        Ok(payment)
    }
}

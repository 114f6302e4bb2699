use crate::domain::invoice::InvoiceId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaymentError>;

#[derive(Error, Debug)]
pub enum PaymentError {
    /// The payment references an invoice id with no stored invoice.
    #[error("there is no invoice matching this payment (invoice {0})")]
    InvoiceNotFound(InvoiceId),
    /// A zero-amount invoice carries payment records, which should never
    /// happen for well-formed data.
    #[error("invoice {0} is in an invalid state: it has an amount of 0 and existing payments")]
    InvalidInvoiceState(InvoiceId),
    /// An invoice type tag outside the supported set reached a parse boundary.
    #[error("unsupported invoice type '{0}'")]
    UnsupportedInvoiceType(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "storage-rocksdb")]
    #[error("storage error: {0}")]
    Storage(#[from] rocksdb::Error),
    #[cfg(feature = "storage-rocksdb")]
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

use clap::Parser;
use invopay::application::processor::PaymentProcessor;
use invopay::domain::ports::{InvoiceStoreBox, PaymentStoreBox};
use invopay::infrastructure::in_memory::{InMemoryInvoiceStore, InMemoryPaymentStore};
#[cfg(feature = "storage-rocksdb")]
use invopay::infrastructure::rocksdb::RocksDbStore;
use invopay::interfaces::csv::invoice_reader::InvoiceReader;
use invopay::interfaces::csv::invoice_writer::InvoiceWriter;
use invopay::interfaces::csv::payment_reader::PaymentReader;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Invoice seed CSV file
    invoices: PathBuf,

    /// Payments CSV file to process
    payments: PathBuf,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (invoice_store, payment_store) = open_stores(cli.db_path)?;

    // Seed invoices. Ids already present in the store keep their stored
    // state, so a persistent database survives re-seeding.
    let file = File::open(&cli.invoices).into_diagnostic()?;
    for result in InvoiceReader::new(file).invoices() {
        let invoice = result.into_diagnostic()?;
        if invoice_store.get(invoice.id).await.into_diagnostic()?.is_none() {
            invoice_store.update(invoice).await.into_diagnostic()?;
        }
    }

    let processor = PaymentProcessor::new(invoice_store, payment_store);

    // Process payments
    let file = File::open(&cli.payments).into_diagnostic()?;
    for result in PaymentReader::new(file).payments() {
        match result {
            Ok(payment) => {
                let (payment_id, invoice_id) = (payment.id, payment.invoice_id);
                match processor.process_payment(payment).await {
                    Ok(outcome) => {
                        eprintln!(
                            "payment {} against invoice {}: {}",
                            payment_id, invoice_id, outcome
                        );
                    }
                    Err(e) => {
                        eprintln!("Error processing payment: {}", e);
                    }
                }
            }
            Err(e) => {
                eprintln!("Error reading payment: {}", e);
            }
        }
    }

    // Collect final state and write it out
    let invoices = processor.into_results().await.into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = InvoiceWriter::new(stdout.lock());
    writer.write_invoices(invoices).into_diagnostic()?;

    Ok(())
}

#[cfg(feature = "storage-rocksdb")]
fn open_stores(db_path: Option<PathBuf>) -> Result<(InvoiceStoreBox, PaymentStoreBox)> {
    match db_path {
        Some(path) => {
            // Use persistent storage (RocksDB); one store serves both traits
            let store = RocksDbStore::open(path).into_diagnostic()?;
            let invoice_store: InvoiceStoreBox = Box::new(store.clone());
            let payment_store: PaymentStoreBox = Box::new(store);
            Ok((invoice_store, payment_store))
        }
        None => {
            let invoice_store: InvoiceStoreBox = Box::new(InMemoryInvoiceStore::new());
            let payment_store: PaymentStoreBox = Box::new(InMemoryPaymentStore::new());
            Ok((invoice_store, payment_store))
        }
    }
}

#[cfg(not(feature = "storage-rocksdb"))]
fn open_stores(db_path: Option<PathBuf>) -> Result<(InvoiceStoreBox, PaymentStoreBox)> {
    if db_path.is_some() {
        eprintln!(
            "WARNING: Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
        );
    }
    let invoice_store: InvoiceStoreBox = Box::new(InMemoryInvoiceStore::new());
    let payment_store: PaymentStoreBox = Box::new(InMemoryPaymentStore::new());
    Ok((invoice_store, payment_store))
}

use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Seed file with `count` standard invoices of 100.00 each, ids 1..=count.
pub fn generate_invoices(path: &Path, count: u32) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["id", "type", "amount"])?;

    for i in 1..=count {
        let id = i.to_string();
        wtr.write_record([id.as_str(), "standard", "100.00"])?;
    }

    wtr.flush()?;
    Ok(())
}

/// One full settling payment per invoice, ids mirroring the invoice ids.
pub fn generate_settling_payments(path: &Path, count: u32) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["id", "invoice_id", "amount", "reference"])?;

    for i in 1..=count {
        let id = i.to_string();
        wtr.write_record([id.as_str(), id.as_str(), "100.00", ""])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Grows a payment file until it reaches `size_mb`, cycling 10.00 payments
/// across `invoice_count` invoices. Once an invoice is settled, further
/// payments against it are rejections and keep its history from growing.
pub fn generate_large_payments(path: &Path, size_mb: usize, invoice_count: u32) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(["id", "invoice_id", "amount", "reference"])?;

    let target_size = (size_mb * 1024 * 1024) as u64;
    let mut payment_id: u32 = 1;

    // Check size every 5000 rows to avoid syscall overhead
    loop {
        for _ in 0..5000 {
            let invoice_id = 1 + (payment_id - 1) % invoice_count;
            let id = payment_id.to_string();
            let invoice = invoice_id.to_string();
            wtr.write_record([id.as_str(), invoice.as_str(), "10.00", ""])?;
            payment_id += 1;
        }
        wtr.flush()?; // Flush to ensure file size is updated
        if std::fs::metadata(path)?.len() >= target_size {
            break;
        }
    }
    Ok(())
}

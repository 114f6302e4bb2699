//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `PaymentProcessor`, the primary entry point for
//! applying payments to invoices. It owns the storage ports and serializes
//! concurrent submissions per invoice.

pub mod processor;

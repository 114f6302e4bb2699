//! Domain entities, processing outcomes and the store ports they flow through.

pub mod invoice;
pub mod outcome;
pub mod payment;
pub mod ports;

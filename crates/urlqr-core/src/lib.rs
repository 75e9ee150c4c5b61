//! urlqr core: turn URLs, or CSV files listing URLs, into QR-code PNG files.

pub mod config;
pub mod logging;

pub mod batch;
pub mod csv_rows;
pub mod filename;
pub mod input;
pub mod qr;
pub mod storage;

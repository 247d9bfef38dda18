//! Core library for retail receipt-text extraction.
//!
//! This crate provides:
//! - Section-aware parsing of point-of-sale and home-delivery sales receipts
//! - Numeric field extraction tolerant of OCR noise
//! - Branch identity extraction, normalization and fuzzy matching
//! - The combined extraction response consumed by submission endpoints
//!
//! The input is always a UTF-8 transcript of a receipt photo, produced by an
//! external OCR or vision call. Nothing in this crate performs recognition,
//! touches the network, or persists anything.

pub mod branch;
pub mod error;
pub mod extract;
pub mod models;
pub mod receipt;

pub use branch::{branch_matches, extract_branch_name, normalize_branch_name};
pub use error::{Result, TillscanError};
pub use extract::extract_receipt;
pub use models::config::TillscanConfig;
pub use models::receipt::{
    BranchNameCandidate, BranchStrategy, CategoryLine, ParsedSalesSummary, ReceiptExtraction,
    ReceiptKind,
};
pub use receipt::{ParserSection, SectionScanner};

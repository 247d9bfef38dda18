//! Rule-based field extractors shared by both receipt formats.

pub mod dates;
pub mod guests;
pub mod numbers;
pub mod patterns;

pub use dates::extract_receipt_date;
pub use guests::{first_order_count, largest_guest_count};
pub use numbers::{NumericToken, first_decimal, numeric_tokens};

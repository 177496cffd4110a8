//! Contact form parsing, trimming and validation

pub mod contact;
pub mod interest;

pub use contact::{validation_message, ContactForm};
pub use interest::interest_label;

//! Email backends
//!
//! [`SmtpBackend`] delivers over SMTP in production; [`ConsoleBackend`]
//! logs messages locally for development.

mod console;
mod smtp;

pub use console::ConsoleBackend;
pub use smtp::{SmtpBackend, SmtpConfig};

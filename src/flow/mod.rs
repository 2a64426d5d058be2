//! Flow access API types, client and display formatting.

pub mod account;
pub mod address;
pub mod client;
pub mod format;

pub use account::Account;
pub use address::{Address, AddressError, with_prefix};
pub use client::AccessClient;
pub use format::{decode_code, format_balance};

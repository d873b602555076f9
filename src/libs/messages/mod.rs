//! User-facing message texts and the `msg_*!` output macros.
//!
//! All text a command prints goes through the [`Message`] enum so wording
//! lives in one place ([`display`]). The macros in [`macros`] route output to
//! `tracing` when debug mode is on and to plain stdout/stderr otherwise.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

//! # Shiftgrid - day grid for shift and break planning
//!
//! Lays a day's work shifts on a grid of fixed-width time slots, overlays
//! planned and actual breaks and counts the staff present in every slot.
//!
//! ## Features
//!
//! - **Time Base**: Lenient timestamp parsing into minute offsets from the selected day
//! - **Grid**: Padded, snapped visible range split into equal slots
//! - **Breaks**: Merging of standalone and embedded breaks, per-slot attendance
//! - **Selection**: Two-click break authoring on a shift row
//! - **Output**: Console tables and CSV, JSON and Excel attendance export
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftgrid::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;

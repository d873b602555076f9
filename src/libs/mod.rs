//! Core library modules for shiftgrid.
//!
//! ## Layers
//!
//! - **Records**: [`record`] wire types, [`timebase`] minute offsets, [`input`] file loading
//! - **Grid**: [`shift`] rows, [`timeline`] visible range and slots
//! - **Breaks**: [`overlap`] merging and attendance, [`selection`] break authoring
//! - **View**: [`day`] ties everything to one selected date
//! - **Output**: [`view`] tables, [`export`] files, [`formatter`] labels, [`messages`]
//! - **Infrastructure**: [`config`], [`data_storage`], [`error`]

pub mod config;
pub mod data_storage;
pub mod day;
pub mod error;
pub mod export;
pub mod formatter;
pub mod input;
pub mod messages;
pub mod overlap;
pub mod record;
pub mod selection;
pub mod shift;
pub mod timebase;
pub mod timeline;
pub mod view;

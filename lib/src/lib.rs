#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::correctness)]
#![warn(rust_2018_idioms)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

//! Read, write and edit the ID3v2 tag at the start of mp3 files.
//!
//! Only six text frames are understood: `TIT2`, `TPE1`, `TALB`, `TYER`,
//! `COMM` and `TCON`. Their payload is kept as raw bytes, no text encoding,
//! unsynchronisation, compression or extended header handling is done.
//!
//! ```rust,no_run
//! use mp3taglib::{edit_path, read_from_path, TagOptions};
//!
//! let options = TagOptions::default();
//! edit_path("song.mp3", "title", "New title", &options).unwrap();
//!
//! let tag = read_from_path("song.mp3", &options).unwrap();
//! assert_eq!(tag.title().as_deref(), Some("New title"));
//! ```

pub mod config;
pub mod edit;
pub mod error;
pub mod frame;
pub mod header;
pub mod read;
pub mod tag;
pub mod utils;
pub mod write;

pub use config::{Settings, TagOptions};
pub use edit::{edit_field, edit_path};
pub use error::{Result, TagError};
pub use read::{read_from, read_from_path, read_or_empty};
pub use tag::{Id3Tag, TagField};
pub use write::{write_to, write_to_path};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
extern crate log;

//! `wall-input` — reading, writing and generating wall layout files.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`loader`]    | `InputFormat`, `load_layout_file`, `load_layout_reader`  |
//! | [`writer`]    | `write_layout`, `write_layout_file`                      |
//! | [`generator`] | `GeneratorParams`, `generate_layout`                     |
//! | [`error`]     | `InputError`, `InputResult<T>`                           |
//!
//! # File format
//!
//! One profile per line, initial section heights separated by a single
//! space:
//!
//! ```text
//! 21 25 28
//! 17
//! 17 22 17 19 17
//! ```
//!
//! Line `n` is profile `n`; the `m`-th height on it is section `m`.

pub mod error;
pub mod generator;
pub mod loader;
pub mod writer;


pub use error::{InputError, InputResult};
pub use generator::{GeneratorParams, generate_layout};
pub use loader::{InputFormat, load_layout_file, load_layout_reader, load_layout_str, load_layout_with};
pub use writer::{write_layout, write_layout_file};

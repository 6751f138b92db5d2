//! Layout file loader.
//!
//! The file is read with a headerless, flexible `csv` reader whose field
//! delimiter is the section delimiter, so every record is one profile and
//! every field one section height.
//!
//! Leading, trailing and repeated delimiters produce empty fields; these are
//! skipped.  Lines with no heights at all are ignored and do not consume a
//! profile number.

use std::io::Read;
use std::path::Path;

use tracing::debug;
use wall_core::{Height, WallLayout};

use crate::{InputError, InputResult};

/// Delimiters of the layout file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputFormat {
    /// Byte separating section heights on a line.  Default: `b' '`.
    pub section_delimiter: u8,
}

impl Default for InputFormat {
    fn default() -> Self {
        Self { section_delimiter: b' ' }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a layout from a file in the default format.
pub fn load_layout_file(path: &Path) -> InputResult<WallLayout> {
    let file = std::fs::File::open(path)?;
    let layout = load_layout_reader(file)?;
    debug!(
        path = %path.display(),
        profiles = layout.profile_count(),
        sections = layout.section_count(),
        "loaded wall layout"
    );
    Ok(layout)
}

/// Like [`load_layout_file`] but accepts any `Read` source.
pub fn load_layout_reader<R: Read>(reader: R) -> InputResult<WallLayout> {
    load_layout_with(reader, &InputFormat::default())
}

/// Load a layout held in memory.
pub fn load_layout_str(s: &str) -> InputResult<WallLayout> {
    load_layout_reader(s.as_bytes())
}

/// Load a layout from `reader` using explicit delimiters.
pub fn load_layout_with<R: Read>(reader: R, format: &InputFormat) -> InputResult<WallLayout> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(format.section_delimiter)
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut profiles: Vec<Vec<Height>> = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());

        let heights = record
            .iter()
            .filter(|field| !field.is_empty())
            .map(|field| parse_height(field, line))
            .collect::<InputResult<Vec<Height>>>()?;

        if !heights.is_empty() {
            profiles.push(heights);
        }
    }

    Ok(WallLayout::new(profiles))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_height(field: &str, line: u64) -> InputResult<Height> {
    field.parse::<Height>().map_err(|_| InputError::Parse {
        line,
        message: format!("invalid section height {field:?}: expected a non-negative integer"),
    })
}

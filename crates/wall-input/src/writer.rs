//! Layout file writer — the inverse of [`crate::loader`].

use std::io::Write;
use std::path::Path;

use wall_core::{CoreError, ProfileNumber, WallLayout};

use crate::{InputError, InputFormat, InputResult};

/// Write `layout` to `writer`, one profile per line.
///
/// Fails with [`InputError::EmptyProfile`] if a profile has no sections,
/// since an empty line would be skipped on reload and shift every later
/// profile number.
pub fn write_layout<W: Write>(layout: &WallLayout, writer: W, format: &InputFormat) -> InputResult<()> {
    if let Some(pos) = layout.profiles().iter().position(Vec::is_empty) {
        let profile = ProfileNumber::from_position(pos).ok_or(CoreError::TooLarge { what: "profiles" })?;
        return Err(InputError::EmptyProfile(profile));
    }

    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(format.section_delimiter)
        .has_headers(false)
        .flexible(true)
        .from_writer(writer);

    for heights in layout.profiles() {
        csv_writer.write_record(heights.iter().map(|h| h.to_string()))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write `layout` in the default format.
pub fn write_layout_file(layout: &WallLayout, path: &Path) -> InputResult<()> {
    let file = std::fs::File::create(path)?;
    write_layout(layout, file, &InputFormat::default())
}

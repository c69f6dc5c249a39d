//! Merged-document writing.
//!
//! [`emit`] consumes an ordered list of source paths and writes one block per
//! file to the destination: an absolute-path header, the file's lines tagged
//! with 1-based indices, and a blank separator line.

use crate::error::FlatcatError;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Writes the merged document for `files`, in order, to `output`.
///
/// The destination is created if absent and truncated if it already exists.
/// Any source file that cannot be opened or read aborts the run; content
/// already flushed for earlier files is not rolled back.
///
/// Returns the total number of numbered lines written.
pub fn emit(files: &[impl AsRef<Path>], output: &Path) -> Result<u64, FlatcatError> {
    let dest = File::create(output).map_err(|e| FlatcatError::write(output, e))?;
    let mut writer = BufWriter::new(dest);
    let mut lines = 0u64;
    for path in files {
        lines += write_block(&mut writer, path.as_ref(), output)?;
    }
    writer.flush().map_err(|e| FlatcatError::write(output, e))?;
    Ok(lines)
}

fn write_block(
    writer: &mut impl Write,
    path: &Path,
    output: &Path,
) -> Result<u64, FlatcatError> {
    let absolute = fs::canonicalize(path).map_err(|e| FlatcatError::read(path, e))?;
    writeln!(writer, "Full Path::{}", absolute.display())
        .map_err(|e| FlatcatError::write(output, e))?;
    let file = File::open(path).map_err(|e| FlatcatError::read(path, e))?;
    let reader = BufReader::new(file);
    let mut count = 0u64;
    for (i, line) in reader.lines().enumerate() {
        // Only the line terminator is stripped; invalid UTF-8 is fatal.
        let line = line.map_err(|e| FlatcatError::read(path, e))?;
        writeln!(writer, "{}::{}", i + 1, line).map_err(|e| FlatcatError::write(output, e))?;
        count += 1;
    }
    writeln!(writer).map_err(|e| FlatcatError::write(output, e))?;
    Ok(count)
}

use std::path::PathBuf;

/// Summary of a completed merge run.
#[derive(Debug)]
pub struct MergeReport {
    /// The matched source files, in the order their blocks were written.
    pub files: Vec<PathBuf>,
    /// Total numbered lines written across all blocks.
    pub lines: u64,
}

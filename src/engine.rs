use crate::error::FlatcatError;
use crate::options::FlatcatOptions;
use crate::output::emit;
use crate::types::MergeReport;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &FlatcatOptions) -> Self {
        let mut builder = WalkBuilder::new(&options.root);
        // A raw scan: hidden files included, no gitignore handling.
        builder.standard_filters(false);
        Self {
            inner: builder.build(),
        }
    }
    fn into_iter(self) -> impl Iterator<Item = PathBuf> {
        // Unreadable entries (including a missing root) are skipped, not fatal.
        self.inner
            .filter_map(|result| result.ok().map(|entry| entry.into_path()))
    }
}
fn matches_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(extension))
}
/// Recursively collects every regular file under `options.root` whose name
/// ends with `options.extension`, in traversal order.
///
/// A root that does not exist or cannot be read yields an empty list.
pub fn collect(options: &FlatcatOptions) -> Vec<PathBuf> {
    #[cfg(feature = "logging")]
    tracing::debug!("Collecting from root: {}", options.root.display());
    let files: Vec<PathBuf> = Walker::new(options)
        .into_iter()
        .filter(|path| path.is_file() && matches_extension(path, &options.extension))
        .collect();
    #[cfg(feature = "logging")]
    tracing::debug!("Collected {} matching files", files.len());
    files
}
/// Runs the full pipeline: collect matching files under `options.root`, then
/// merge them into `output`.
pub fn flatcat(
    options: FlatcatOptions,
    output: impl AsRef<Path>,
) -> Result<MergeReport, FlatcatError> {
    let files = collect(&options);
    let lines = emit(files.as_slice(), output.as_ref())?;
    Ok(MergeReport { files, lines })
}

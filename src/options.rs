use std::path::PathBuf;

/// The extension matched when none is configured.
pub const DEFAULT_EXTENSION: &str = ".dart";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatcatOptions {
    pub root: PathBuf,
    /// Exact, case-sensitive filename suffix, e.g. `.dart`.
    pub extension: String,
}
impl Default for FlatcatOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}
#[derive(Debug, Default)]
pub struct FlatcatBuilder {
    options: FlatcatOptions,
}
impl FlatcatBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: FlatcatOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn extension(mut self, suffix: impl Into<String>) -> Self {
        self.options.extension = suffix.into();
        self
    }
    pub fn build(self) -> FlatcatOptions {
        self.options
    }
}

//! # Flatcat
//!
//! `flatcat` is a library for recursively scanning a directory tree for files
//! matching a single extension suffix and merging their contents into one
//! line-numbered text document.
//!
//! Each matched file contributes a block to the output: a header line of the
//! form `Full Path::<absolute path>`, one `<n>::<content>` line per source
//! line (1-based, reset for every file), and a single blank separator line.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use flatcat::{FlatcatBuilder, flatcat};
//!
//! let options = FlatcatBuilder::new("./my_project")
//!     .extension(".dart")
//!     .build();
//!
//! let report = flatcat(options, "merged.txt").expect("Failed to merge files");
//!
//! println!("Merged {} files ({} lines)", report.files.len(), report.lines);
//! ```

mod engine;
mod error;
mod options;
mod output;
mod types;

pub use engine::{collect, flatcat};
pub use error::FlatcatError;
pub use options::{DEFAULT_EXTENSION, FlatcatBuilder, FlatcatOptions};
pub use output::emit;
pub use types::MergeReport;

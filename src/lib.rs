/*!
 * srcdump - Concatenate source files of a directory tree into one text file
 *
 * Walks a directory, skips dependency, VCS and build directories, and
 * writes every matching source file into a single output preceded by a
 * header naming its relative path.
 */

pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::Config;
pub use error::{Result, SrcDumpError};
pub use report::{ReportFormat, Reporter};
pub use scanner::Scanner;
pub use types::{ReadFailure, RunState, ScanOutcome, ScanStatistics};
pub use writer::DumpWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

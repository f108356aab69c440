#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod engine;
pub mod fixture;
pub mod natural;
pub mod output;
pub mod prefix;
pub mod progress;
pub mod siblings;
pub mod walker;

pub use config::Config;
pub use engine::{rename_tree, Error};
pub use fixture::create_sample_tree;
pub use natural::{natural_cmp, natural_key, NaturalKey};
pub use output::{FixtureResult, OutputFormat, OutputFormatter, RunResult};
pub use prefix::{prefix_files_in_dir, safe_rename};
pub use progress::{FnSink, NullSink, ProgressSink};
pub use siblings::sibling_index;
pub use walker::subdirectories;

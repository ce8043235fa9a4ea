pub mod cli;
pub mod constants;
pub mod encode;
pub mod error;
pub mod formats;
pub mod logger;
pub mod reexport;
pub mod report;
pub mod utils;

pub use encode::reencode_in_place;
pub use error::{ReexportError, Result};
pub use formats::{is_image_file, ImageKind};
pub use reexport::{preview, reexport, PreviewEntry, PreviewStatus};
pub use report::{BatchReport, EntryOutcome, FileResult};
pub use utils::{format_size, read_paths_from_file, resolve_path};

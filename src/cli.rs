use crate::constants::DEFAULT_COMPRESS_LEVEL;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "img-reexport",
    about = "Re-encode PNG/JPEG images in place for smaller files with no visual loss",
    long_about = "img-reexport takes a list of image paths, re-encodes each PNG or JPEG in \
                  place while keeping its original format, and reports per-file and total \
                  size savings. PNG re-encoding is lossless (oxipng); JPEG is re-encoded at \
                  maximum quality with no chroma subsampling.",
    version = "0.1.0",
    after_help = "EXAMPLES:\n  \
    img-reexport run photo.png scan.jpg -c 9\n  \
    img-reexport run -l paths.txt -b ./assets\n  \
    img-reexport preview -l paths.txt -b ./assets"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Suppress normal output")]
    pub quiet: bool,

    #[arg(
        short,
        long,
        global = true,
        help = "Print each resolved path while processing"
    )]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Re-encode the listed images in place",
        long_about = "Re-encode every listed PNG/JPEG file in place. Each file is written to \
                      a temporary sibling first and only renamed over the original once the \
                      new encoding is complete, so a failed file is never corrupted. Missing \
                      paths and unsupported formats (GIF, BMP, anything else) are reported as \
                      skipped; one bad file never aborts the batch."
    )]
    Run {
        #[arg(help = "Image file paths (absolute, or relative to --base-path)")]
        paths: Vec<String>,

        #[arg(
            short = 'l',
            long,
            help = "Text file with one image path per line",
            long_help = "Import additional paths from a UTF-8 text file, one path per line. \
                         Blank lines are ignored. Imported paths are appended after the \
                         positional ones."
        )]
        list: Option<PathBuf>,

        #[arg(
            short = 'b',
            long,
            default_value = "",
            help = "Prefix joined in front of relative paths"
        )]
        base_path: String,

        #[arg(
            short = 'c',
            long,
            default_value_t = DEFAULT_COMPRESS_LEVEL,
            value_parser = clap::value_parser!(u8).range(0..=9),
            help = "PNG compression level (0-9)",
            long_help = "PNG encoder effort from 0 (fastest, largest) to 9 (slowest, \
                         smallest). Does not affect image quality and is ignored for JPEG."
        )]
        compress_level: u8,
    },

    #[command(
        about = "Show what a batch would do without writing anything",
        long_about = "Resolve and classify every listed path: ready to re-encode, missing, \
                      an image format that is left as-is (GIF/BMP), or not an image at all. \
                      No file is opened or modified."
    )]
    Preview {
        #[arg(help = "Image file paths (absolute, or relative to --base-path)")]
        paths: Vec<String>,

        #[arg(short = 'l', long, help = "Text file with one image path per line")]
        list: Option<PathBuf>,

        #[arg(
            short = 'b',
            long,
            default_value = "",
            help = "Prefix joined in front of relative paths"
        )]
        base_path: String,
    },
}

use clap::Parser;
use img_reexport::cli::{Args, Commands};
use img_reexport::error::Result;
use img_reexport::reexport::{preview, reexport};
use img_reexport::utils::{format_size, read_paths_from_file};
use img_reexport::{error, info, logger, warn};
use std::path::PathBuf;

fn main() {
    let args = Args::parse();
    logger::set_quiet_mode(args.quiet);
    logger::set_verbose_mode(args.verbose);

    let result = match args.command {
        Commands::Run {
            paths,
            list,
            base_path,
            compress_level,
        } => run_batch(paths, list, &base_path, compress_level),
        Commands::Preview {
            paths,
            list,
            base_path,
        } => run_preview(paths, list, &base_path),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn gather_paths(mut paths: Vec<String>, list: Option<PathBuf>) -> Result<Vec<String>> {
    if let Some(list_path) = list {
        paths.extend(read_paths_from_file(&list_path)?);
    }
    Ok(paths)
}

fn run_batch(
    paths: Vec<String>,
    list: Option<PathBuf>,
    base_path: &str,
    compress_level: u8,
) -> Result<()> {
    let paths = gather_paths(paths, list)?;
    if paths.is_empty() {
        warn!("No image paths given. Pass paths as arguments or use --list.");
        return Ok(());
    }

    info!("🚀 Re-exporting {} entries in place...", paths.len());
    let report = reexport(base_path, &paths, compress_level)?;
    report.print_summary();
    Ok(())
}

fn run_preview(paths: Vec<String>, list: Option<PathBuf>, base_path: &str) -> Result<()> {
    let paths = gather_paths(paths, list)?;
    if paths.is_empty() {
        warn!("No image paths given. Pass paths as arguments or use --list.");
        return Ok(());
    }

    let entries = preview(base_path, &paths);
    info!("{:<20} {:>10}  path", "status", "size");
    for entry in &entries {
        info!(
            "{:<20} {:>10}  {}",
            entry.status.to_string(),
            format_size(entry.size),
            entry.path.display()
        );
    }
    Ok(())
}

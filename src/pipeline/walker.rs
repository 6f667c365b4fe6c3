use super::RunStats;
use crate::warehouse::{Loader, SqliteWarehouse};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const DATA_FILE_EXTENSION: &str = "json";

/// All `.json` files under `root`, subdirectories included. Entries are
/// sorted by file name within each directory. Hidden files are skipped and
/// symlinks to files are kept.
pub fn discover_json_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        bail!("{} is not a valid directory.", root.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        let is_hidden = entry.file_name().to_string_lossy().starts_with('.');
        let is_data_file = !is_hidden
            && entry.path().is_file()
            && entry.path().extension().and_then(|e| e.to_str()) == Some(DATA_FILE_EXTENSION);
        if is_data_file {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Runs `handler` over every data file under `root`, committing once per
/// file. The first failing file aborts the run with its transaction rolled
/// back; files before it stay committed.
pub fn process_data<F>(warehouse: &mut SqliteWarehouse, root: &Path, handler: F) -> Result<RunStats>
where
    F: Fn(&dyn Loader, &Path) -> Result<RunStats>,
{
    let files = discover_json_files(root)?;
    let num_files = files.len();
    println!("{} files found in {}", num_files, root.display());

    let stats = files
        .iter()
        .enumerate()
        .try_fold(RunStats::default(), |mut total, (index, file)| {
            let file_stats = warehouse
                .in_transaction(|loader| handler(loader, file))
                .with_context(|| format!("Failed to process {}", file.display()))?;
            total.merge(&file_stats);
            println!("{}/{} files processed.", index + 1, num_files);
            Ok::<_, anyhow::Error>(total)
        })?;

    println!("All {} files processed OK in {}", num_files, root.display());
    Ok(stats)
}

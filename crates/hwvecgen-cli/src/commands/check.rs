use std::fs;
use std::path::{Path, PathBuf};

use hwvecgen_core::DEFAULT_FAMILY;
use hwvecgen_emit::{Config, render_all, unit_file_name};

use super::UnitError;

pub struct CheckArgs {
    pub out_dir: PathBuf,
    pub config: Config,
}

pub fn run(args: CheckArgs) {
    let stale = stale_units(&args.out_dir, &args.config).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });

    if stale.is_empty() {
        println!("up to date");
        return;
    }

    for path in stale {
        eprintln!("stale: {}", path.display());
    }
    std::process::exit(1);
}

/// Paths whose on-disk content differs from a fresh rendering. Missing
/// files count as stale.
pub fn stale_units(out_dir: &Path, config: &Config) -> Result<Vec<PathBuf>, UnitError> {
    let units = render_all(DEFAULT_FAMILY, config)?;

    let mut stale = Vec::new();
    for (width, text) in units {
        let path = out_dir.join(unit_file_name(width));
        match fs::read_to_string(&path) {
            Ok(existing) if existing == text => {}
            _ => stale.push(path),
        }
    }
    Ok(stale)
}

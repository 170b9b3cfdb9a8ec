use std::fs;
use std::path::{Path, PathBuf};

use hwvecgen_core::DEFAULT_FAMILY;
use hwvecgen_emit::{Config, render_all, unit_file_name};

use super::UnitError;

pub struct GenerateArgs {
    pub out_dir: PathBuf,
    pub config: Config,
}

pub fn run(args: GenerateArgs) {
    let paths = write_units(&args.out_dir, &args.config).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });

    for path in paths {
        println!("wrote {}", path.display());
    }
}

/// Render every unit before writing any file: a run either produces
/// complete output for all widths or touches nothing.
pub fn write_units(out_dir: &Path, config: &Config) -> Result<Vec<PathBuf>, UnitError> {
    let units = render_all(DEFAULT_FAMILY, config)?;

    fs::create_dir_all(out_dir)?;
    let mut paths = Vec::with_capacity(units.len());
    for (width, text) in units {
        let path = out_dir.join(unit_file_name(width));
        fs::write(&path, text)?;
        paths.push(path);
    }
    Ok(paths)
}

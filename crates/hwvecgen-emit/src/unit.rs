//! Per-width output unit assembly.
//!
//! One unit per scalar width: the dimension-erased declaration followed by
//! the concrete declarations for dimensions 2, 3 and 4, in that order. The
//! order is fixed so regeneration stays diff-stable.

use hwvecgen_core::descriptor::{DIMS, Descriptor, DeriveError, WIDTHS, Width};

use crate::{Config, Renderer};

/// Render the complete output unit for one width.
pub fn render_unit(family: &str, width: Width, config: &Config) -> Result<String, DeriveError> {
    let tag = width.tag();
    let mut out = String::new();

    let erased = Descriptor::derive(&format!("{family}Any{tag}"))?;
    out.push_str(&Renderer::render(&erased, config));

    for dim in DIMS {
        let desc = Descriptor::derive(&format!("{family}{}{tag}", dim.digit()))?;
        out.push_str(&Renderer::render(&desc, config));
    }

    // Exactly one trailing newline
    out.truncate(out.trim_end().len());
    out.push('\n');
    Ok(out)
}

/// Render both output units, Single before Double.
pub fn render_all(family: &str, config: &Config) -> Result<Vec<(Width, String)>, DeriveError> {
    WIDTHS
        .into_iter()
        .map(|width| Ok((width, render_unit(family, width, config)?)))
        .collect()
}

/// Destination file name for one width's unit.
pub fn unit_file_name(width: Width) -> String {
    format!("raw_hwvector_types_{}.cs", width.tag())
}

use hwvecgen_core::{DEFAULT_FAMILY, DIMS, Descriptor, DeriveError, WIDTHS};

pub fn run() {
    let descriptors = stock_descriptors().unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });

    let json = serde_json::to_string_pretty(&descriptors).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });
    println!("{json}");
}

/// Descriptors for the closed identifier enumeration, in generation order:
/// erased then dimensions 2, 3, 4 within each width.
pub fn stock_descriptors() -> Result<Vec<Descriptor>, DeriveError> {
    let mut descriptors = Vec::new();
    for width in WIDTHS {
        let tag = width.tag();
        descriptors.push(Descriptor::derive(&format!("{DEFAULT_FAMILY}Any{tag}"))?);
        for dim in DIMS {
            descriptors.push(Descriptor::derive(&format!(
                "{DEFAULT_FAMILY}{}{tag}",
                dim.digit()
            ))?);
        }
    }
    Ok(descriptors)
}

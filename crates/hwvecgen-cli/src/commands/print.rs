use hwvecgen_core::{DEFAULT_FAMILY, WIDTHS, Width};
use hwvecgen_emit::{Config, render_unit};

pub struct PrintArgs {
    pub width: Option<Width>,
    pub config: Config,
}

pub fn run(args: PrintArgs) {
    let widths: Vec<Width> = match args.width {
        Some(width) => vec![width],
        None => WIDTHS.to_vec(),
    };

    for width in widths {
        let text = render_unit(DEFAULT_FAMILY, width, &args.config).unwrap_or_else(|e| {
            eprintln!("error: {e}");
            std::process::exit(1);
        });
        print!("{text}");
    }
}

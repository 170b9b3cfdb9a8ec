use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use hwvecgen_core::Width;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum WidthChoice {
    #[value(name = "s", alias = "single")]
    Single,
    #[value(name = "d", alias = "double")]
    Double,
}

impl From<WidthChoice> for Width {
    fn from(choice: WidthChoice) -> Self {
        match choice {
            WidthChoice::Single => Width::Single,
            WidthChoice::Double => Width::Double,
        }
    }
}

#[derive(Parser)]
#[command(name = "hwvecgen", bin_name = "hwvecgen")]
#[command(about = "Generator for the HwVector SIMD wrapper-type family")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render both width units and write them to a directory
    #[command(after_help = r#"EXAMPLES:
  hwvecgen generate --out-dir sources/
  hwvecgen generate --out-dir sources/ --no-inlining"#)]
    Generate {
        /// Destination directory for the generated files
        #[arg(long, short = 'o', value_name = "DIR")]
        out_dir: PathBuf,

        /// Skip [MethodImpl(AggressiveInlining)] attributes
        #[arg(long)]
        no_inlining: bool,
    },

    /// Verify that the generated files on disk are up to date
    Check {
        /// Directory holding the generated files
        #[arg(long, short = 'o', value_name = "DIR")]
        out_dir: PathBuf,

        /// Skip [MethodImpl(AggressiveInlining)] attributes
        #[arg(long)]
        no_inlining: bool,
    },

    /// Render one or both units to stdout
    Print {
        /// Restrict output to one scalar width
        #[arg(long, short = 'w', value_enum, value_name = "WIDTH")]
        width: Option<WidthChoice>,

        /// Skip [MethodImpl(AggressiveInlining)] attributes
        #[arg(long)]
        no_inlining: bool,
    },

    /// Dump the derived descriptors for the stock generation job as JSON
    Dump,
}

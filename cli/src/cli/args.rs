use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "chromakit",
    version,
    about = "Convert colors between device spaces and compare them perceptually",
    subcommand_help_heading = "COMMANDS"
)]
pub struct Cli {
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increases logging verbosity (repeatable)"
    )]
    pub verbose: u8,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert hex colors through sRGB, linear RGB, XYZ and LAB
    Convert(ConvertArgs),

    /// Print pairwise CIE94 distances between hex colors
    Diff(DiffArgs),

    /// Pick the pool color most distinct from the colors already taken
    Pick(PickArgs),
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input colors (#RRGGBB or #RGB)
    #[arg(value_name = "HEX", required = true)]
    pub colors: Vec<String>,
}

#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Input colors (#RRGGBB or #RGB), at least two
    #[arg(value_name = "HEX", required = true, num_args = 2..)]
    pub colors: Vec<String>,
}

#[derive(Args, Debug)]
pub struct PickArgs {
    /// Candidate label colors (comma-separated)
    #[arg(
        long,
        value_name = "HEX",
        value_delimiter = ',',
        required = true
    )]
    pub pool: Vec<String>,

    /// Colors already in use (comma-separated)
    #[arg(long, value_name = "HEX", value_delimiter = ',')]
    pub taken: Vec<String>,
}

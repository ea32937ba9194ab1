pub mod tour;

use clap::{Parser, Subcommand};
use menagerie_common::animal::Kind;
use menagerie_core::showcase::Section;

#[derive(Parser)]
#[command(name = "menagerie")]
#[command(about = "A guided tour of a small menagerie.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Only include these kinds, e.g. `--only dog,fish`
    #[arg(long, value_delimiter = ',', global = true)]
    pub only: Vec<Kind>,

    /// Add a summary; repeat to frame the tour with a banner and headers
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Do not print the banner when framing the tour
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Describe every creature
    #[command(alias = "d")]
    Describe,
    /// Let every creature speak
    #[command(alias = "c")]
    Chorus,
    /// Ask every creature for its trick
    #[command(alias = "t")]
    Tricks,
}

impl Commands {
    pub fn section(self) -> Section {
        match self {
            Commands::Describe => Section::Describe,
            Commands::Chorus => Section::Chorus,
            Commands::Tricks => Section::Tricks,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The sections to run: one for a subcommand, the full tour otherwise.
    pub fn sections(&self) -> Vec<Section> {
        match self.command {
            Some(command) => vec![command.section()],
            None => Section::ALL.to_vec(),
        }
    }
}

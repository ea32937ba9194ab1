mod commands;
mod terminal;

use commands::{CommandLine, tour};
use menagerie_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        no_banner: commands.no_banner,
        verbose: commands.verbose,
        no_color: commands.no_color,
    };

    logging::init(&cfg)?;
    print::banner(cfg.no_banner, cfg.verbose);

    tour::tour(&commands.sections(), &commands.only, &cfg);
    Ok(())
}

mod cli_args;
mod config;
mod error;
mod generate;
mod git;
mod github;
mod llm;
mod logging;
mod setup;

use clap::Parser;

use cli_args::{Cli, Command};
use config::Config;
use generate::GenerateOpts;

fn main() {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    if let Err(err) = run(&cli) {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> error::Result<()> {
    let cfg = Config::from_sources(cli)?;

    match cli.command {
        Command::Generate {
            combined,
            attribution,
        } => {
            let llm = setup::build_llm_client(&cfg, combined);
            let opts = GenerateOpts {
                combined,
                attribution,
            };
            generate::run(&cfg, opts, llm.as_ref())
        }
    }
}

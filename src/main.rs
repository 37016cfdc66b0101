mod app;
mod bmi;
mod catalog;
mod config;
mod error;
mod events;
mod logger;
mod state;
mod ui;
mod utils;

use anyhow::Result;
use app::App;
use clap::{crate_version, App as Cli, Arg};
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::new("vitrine-tui")
        .version(crate_version!())
        .about("Calculateur d'IMC et boutique de démonstration pour le terminal")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Use a custom configuration directory")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(cli.value_of("config"))?;

    App::start(config)
}

use clap::Parser;

use ebc_controller::{cli, config, ebc, APP_NAME};

pub fn main() {
    env_logger::Builder::new()
        .filter_module("ebc_controller", log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = cli::Cli::parse();
    let config = config::Config::from(cli.paths);
    log::debug!("{APP_NAME} using {config:?}");

    let driver = ebc::Driver::sysfs(config.locations(), config.redraw_command());
    cli.command.run(&driver);
}

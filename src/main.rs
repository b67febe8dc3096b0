use anyhow::Result;
use clap::Parser;
use roicast::cli::{Cli, Commands};
use roicast::commands;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Calculate {
            input,
            format,
            output,
            report_id,
            store,
            no_validate,
        } => {
            let config = commands::calculate::CalculateConfig {
                input,
                format,
                output,
                report_id,
                store,
                no_validate,
            };
            commands::calculate::handle_calculate(config)
        }
        Commands::Init { force } => commands::init::init_config(force),
        Commands::Templates { json } => commands::templates::list_templates(json),
    }
}

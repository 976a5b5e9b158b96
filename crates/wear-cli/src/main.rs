mod commands;

use anyhow::Result;
use commands::{CommandLine, Commands};

fn main() -> Result<()> {
    let commands = CommandLine::parse_args();

    wear_core::init()?;

    match commands.command {
        Commands::Classify { labels } => {
            for line in commands::classify_labels(&labels) {
                println!("{}", line);
            }
            Ok(())
        }
        Commands::Card { forecast, file } => {
            let body = commands::read_input(&file)?;
            println!("{}", commands::render_cards(&body, forecast)?);
            Ok(())
        }
        Commands::Config { city, unit, gender } => commands::show_config(city, unit, gender),
    }
}

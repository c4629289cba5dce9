use anyhow::Result;
use clap::Parser;
use wordwrap::config::{load_config, CliArgs};
use wordwrap::{app, io, logging};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = CliArgs::parse();

    // Load configuration
    let config = load_config(&args)?;

    if args.debug_config {
        println!("Configuration:");
        println!("{:#?}", config);
        return Ok(());
    }

    logging::init_logging(&config)?;

    let input = io::read_input(config.input.as_deref())?;
    let lines = app::wrap_input(&config, &input);
    log::info!("wrote {} lines at width {}", lines.len(), config.width);

    io::write_lines(std::io::stdout().lock(), &lines)?;

    Ok(())
}

use clap::Parser;
use checkout_qa::cli::commands::{cmd_catalog, cmd_generate, cmd_script};
use checkout_qa::cli::config::{Cli, Commands, load_config};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Catalog { page, json } => {
            cmd_catalog(page.as_deref(), json, &config)?;
        }
        Commands::Generate {
            prompt,
            page,
            docs,
            format,
            output_dir,
        } => {
            cmd_generate(
                &prompt,
                page.as_deref(),
                &docs,
                &format,
                output_dir.as_deref(),
                &config,
            )?;
        }
        Commands::Script {
            test_case,
            prompt,
            index,
            docs,
            base_url,
            page,
            output_dir,
        } => {
            cmd_script(
                test_case.as_deref(),
                prompt.as_deref(),
                index,
                &docs,
                base_url.as_deref(),
                page.as_deref(),
                output_dir.as_deref(),
                &config,
            )?;
        }
    }

    Ok(())
}

/// Logs go to stderr so generated output on stdout stays clean.
/// `RUST_LOG` overrides the level chosen by `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

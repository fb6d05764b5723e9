use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use md2map::{create_mindmap, read_content, Cli, Commands, MINDMAP_TEMPLATE};

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Create {
            input,
            filename,
            output_dir,
            template,
        } => {
            let markdown = read_input(input)?;
            let page_template = match template {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("cannot read template: {}", path.display()))?,
                None => MINDMAP_TEMPLATE.to_string(),
            };
            let written = create_mindmap(&markdown, filename, output_dir, &page_template)?;
            println!("{}", written.display());
        }
        Commands::Read { path } => {
            let content = read_content(path)?;
            print!("{content}");
        }
    }
    Ok(())
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut markdown = String::new();
        std::io::stdin()
            .read_to_string(&mut markdown)
            .context("cannot read markdown from stdin")?;
        Ok(markdown)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("cannot read markdown file: {}", input.display()))
    }
}

fn setup_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

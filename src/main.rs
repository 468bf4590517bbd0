use clap::{Parser, Subcommand};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use vitae::profile::{resolve_variant, LoadedProfile};
use vitae::{
    generate_all, generate_data_script, generate_portfolio, generate_readme, generate_resume, GeneratorConfig,
    PipelineError,
};

/// Render resume PDFs, a portfolio page and a profile README from one JSON document.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Profile document to read (defaults to $VITAE_DATA, then data.json)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Directory for generated files
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one resume variant (backend, ml, techlead, quant)
    Resume {
        variant: String,
        /// Output PDF path; defaults to <Name>_Resume_<Variant>.pdf in the output directory
        output: Option<PathBuf>,
    },
    /// Write index.html and data.js
    Portfolio { dir: Option<PathBuf> },
    /// Write the markdown profile page
    Readme { output: Option<PathBuf> },
    /// Write only data.js
    DataScript { dir: Option<PathBuf> },
    /// Render every resume variant, the portfolio and the README
    All,
}

fn run(cli: Cli) -> Result<(), PipelineError> {
    let mut builder = GeneratorConfig::builder();
    if let Some(data) = cli.data {
        builder = builder.with_data_path(data);
    }
    if let Some(dir) = cli.output_dir {
        builder = builder.with_output_dir(dir);
    }
    let config = builder.with_env().build()?;
    let load = || -> Result<LoadedProfile, PipelineError> { Ok(config.store().load()?) };

    match cli.command {
        Command::Resume { variant, output } => {
            let spec = resolve_variant(&variant)?;
            let profile = load()?;
            let path = match output {
                Some(path) => path,
                None => config.resume_path(&spec, profile.document().personal()?.display_name()),
            };
            generate_resume(&profile, &spec, &path)?;
        }
        Command::Portfolio { dir } => {
            let dir = dir.unwrap_or_else(|| config.portfolio_dir());
            let report = generate_portfolio(&load()?, &dir)?;
            if !report.warnings.is_empty() {
                log::info!("Portfolio written with {} warning(s)", report.warnings.len());
            }
        }
        Command::Readme { output } => {
            let path = output.unwrap_or_else(|| config.readme_path());
            generate_readme(&load()?, &path)?;
        }
        Command::DataScript { dir } => {
            let dir = dir.unwrap_or_else(|| config.portfolio_dir());
            generate_data_script(&load()?, &dir)?;
        }
        Command::All => {
            generate_all(&config)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "vitae=info");
        }
    }
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

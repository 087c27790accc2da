//! yank - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use yank::{
    api::YankApi,
    cli::{ask_selection, ask_url, Args},
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    output::{
        print_banner, print_error, print_info, print_success, print_summary, print_warning,
        ConsoleReporter,
    },
    pipeline::Pipeline,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Resolution { .. } => ExitCode::from(exit_codes::RESOLUTION_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<i32> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(&Config::default_path())?,
    };
    args.merge_into_config(&mut config);
    validate_config(&config)?;

    let url = match args.url.clone() {
        Some(url) => url,
        None => match ask_url()? {
            Some(url) => url,
            None => return Ok(exit_codes::ABORT),
        },
    };

    if url.trim().is_empty() {
        print_warning("No URL given, nothing to do");
        return Ok(exit_codes::ABORT);
    }

    let api = YankApi::new(&config.api)?;
    let pipeline = Pipeline::new(&api, &api, &config.retry);
    let mut reporter = ConsoleReporter::new(config.options.show_skipped);

    print_info("Fetching metadata...");
    let resolved = pipeline.resolve(&url, &mut reporter).await?;

    let selection = if resolved.link.kind.is_collection() {
        match args.preset_selection() {
            Some(selection) => selection,
            None => ask_selection()?,
        }
    } else {
        String::new()
    };

    let base_dir = config.download_directory();
    pipeline
        .download(&resolved, &selection, &base_dir, &mut reporter)
        .await?;

    print_summary(reporter.stats());
    print_success("Thank you for using yank!");

    Ok(exit_codes::SUCCESS)
}

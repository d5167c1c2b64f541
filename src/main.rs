use gh_sbom::adapters::outbound::console::StderrProgressReporter;
use gh_sbom::adapters::outbound::git::RepositoryResolver;
use gh_sbom::adapters::outbound::network::{ClearlyDefinedClient, GitHubClient};
use gh_sbom::application::dto::SbomRequest;
use gh_sbom::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use gh_sbom::application::read_models::SbomReadModelBuilder;
use gh_sbom::application::use_cases::GenerateSbomUseCase;
use gh_sbom::cli::Args;
use gh_sbom::config::{self, Settings};
use gh_sbom::shared::error::ExitCode;
use gh_sbom::shared::Result;
use owo_colors::{OwoColorize, Stream};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Argument errors exit with clap's own status (2)
    let args = Args::parse_args();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!(
            "\n{}\n",
            "❌ An error occurred:".if_supports_color(Stream::Stderr, |text| text.red())
        );
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// `RUST_LOG` wins; otherwise warnings only, or debug output for this crate with `--verbose`
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "warn,gh_sbom=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(args: Args) -> Result<()> {
    let working_dir = std::env::current_dir()?;

    // CLI > environment > config file > defaults
    let config_file = config::load_for_args(&args, &working_dir)?;
    let settings = Settings::resolve(&args, config_file, config::process_env)?;
    tracing::debug!(?settings, "resolved settings");

    let repository =
        RepositoryResolver::new(working_dir).resolve(settings.repository.as_deref())?;
    let token = config::resolve_token(config::process_env)?;

    // Create adapters (Dependency Injection)
    let github_client = GitHubClient::new(settings.endpoints_for(&repository), token)?;
    let license_repository = ClearlyDefinedClient::new(settings.clearlydefined_url.clone())?;
    let progress_reporter = StderrProgressReporter::new();

    let use_case = GenerateSbomUseCase::new(
        github_client.clone(),
        license_repository,
        github_client,
        progress_reporter,
    );

    let request = SbomRequest::new(repository, settings.fetch_licenses);
    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));

    let read_model = SbomReadModelBuilder::build(
        response.enriched_packages,
        &response.repository,
        response.repository_license.as_deref(),
        &response.metadata,
    )?;
    let formatted_output = FormatterFactory::create(settings.format).format(&read_model)?;

    let presenter = PresenterFactory::create(PresenterType::from(settings.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

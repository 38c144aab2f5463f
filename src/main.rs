//! tradeoff-advisor - compare two catalog options from the command line.
//!
//! Prints the comparison report (or the option list) as JSON on stdout.
//! Logs go to stderr.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tradeoff_advisor::adapters::{InMemoryOptionCatalog, JsonFileOptionCatalog, MockComparisonEnhancer};
use tradeoff_advisor::application::{
    CompareOptionsCommand, CompareOptionsHandler, ListOptionsHandler, ListOptionsQuery,
};
use tradeoff_advisor::config::{AppConfig, CatalogConfig, ConfigError, LoggingConfig};
use tradeoff_advisor::domain::analysis::Constraints;
use tradeoff_advisor::domain::foundation::{
    DomainError, IntegrationId, OptionId, ScalabilityPriority, ValidationError,
};
use tradeoff_advisor::ports::{CatalogError, OptionCatalog};

/// Compare two technical options under your constraints.
#[derive(Debug, Parser)]
#[command(name = "tradeoff-advisor", version)]
struct Cli {
    /// List catalog options grouped by category instead of comparing
    #[arg(long)]
    list: bool,

    /// Only list this category (with --list)
    #[arg(long, requires = "list")]
    category: Option<String>,

    /// First option id
    #[arg(required_unless_present = "list")]
    first: Option<String>,

    /// Second option id
    #[arg(required_unless_present = "list")]
    second: Option<String>,

    /// Scalability priority: low, medium or high
    #[arg(default_value = "medium")]
    priority: ScalabilityPriority,

    /// Minimum budget
    #[arg(long, default_value_t = 0)]
    budget_min: u64,

    /// Maximum budget
    #[arg(long, default_value_t = 10_000)]
    budget_max: u64,

    /// Integration every option must support (repeatable)
    #[arg(long = "require", value_name = "INTEGRATION")]
    required_integrations: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to initialize tracing subscriber: {0}")]
    Tracing(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Comparison(#[from] DomainError),

    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("tradeoff-advisor error: {error}");
            if let CliError::Comparison(domain) = &error {
                for (key, value) in sorted_details(domain) {
                    eprintln!("  {key}: {value}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = AppConfig::load_validated()?;
    init_tracing(&config.logging)?;

    let catalog = build_catalog(&config.catalog).await?;

    if cli.list {
        let groups = ListOptionsHandler::new(catalog)
            .handle(ListOptionsQuery {
                category: cli.category,
            })
            .await?;
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    let command = build_command(&cli)?;

    let mut handler = CompareOptionsHandler::new(catalog);
    if config.enhancement.enabled {
        let enhancer = Arc::new(MockComparisonEnhancer::new());
        info!(provider = "mock", timeout_secs = config.enhancement.timeout_secs, "Enhancement enabled");
        handler = handler.with_enhancer(enhancer, config.enhancement.timeout());
    }

    let report = handler.handle(command).await.map_err(DomainError::from)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn sorted_details(error: &DomainError) -> Vec<(&String, &String)> {
    let mut details: Vec<_> = error.details.iter().collect();
    details.sort();
    details
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|error| CliError::Tracing(error.to_string()))
}

async fn build_catalog(config: &CatalogConfig) -> Result<Arc<dyn OptionCatalog>, CatalogError> {
    match &config.seed_path {
        Some(path) => Ok(Arc::new(JsonFileOptionCatalog::load(path).await?)),
        None => Ok(Arc::new(InMemoryOptionCatalog::with_default_seed()?)),
    }
}

fn build_command(cli: &Cli) -> Result<CompareOptionsCommand, ValidationError> {
    let first = OptionId::new(cli.first.as_deref().unwrap_or_default())?;
    let second = OptionId::new(cli.second.as_deref().unwrap_or_default())?;

    let required = cli
        .required_integrations
        .iter()
        .map(|id| IntegrationId::new(id.as_str()))
        .collect::<Result<Vec<_>, _>>()?;

    let constraints = Constraints::new(cli.budget_min, cli.budget_max, cli.priority, required)?;

    Ok(CompareOptionsCommand::new(first, second, constraints))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tradeoff_advisor::application::ComparisonError;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_positional_ids_and_priority() {
        let cli = Cli::try_parse_from(["tradeoff-advisor", "postgresql", "dynamodb", "high"]).unwrap();
        let command = build_command(&cli).unwrap();

        assert_eq!(command.option_ids[0].as_str(), "postgresql");
        assert_eq!(command.option_ids[1].as_str(), "dynamodb");
        assert_eq!(command.constraints.scalability_priority(), ScalabilityPriority::High);
        assert_eq!(command.constraints.budget_max(), 10_000);
    }

    #[test]
    fn priority_defaults_to_medium() {
        let cli = Cli::try_parse_from(["tradeoff-advisor", "a", "b"]).unwrap();
        assert_eq!(cli.priority, ScalabilityPriority::Medium);
    }

    #[test]
    fn rejects_unknown_priority() {
        assert!(Cli::try_parse_from(["tradeoff-advisor", "a", "b", "urgent"]).is_err());
    }

    #[test]
    fn collects_required_integrations() {
        let cli = Cli::try_parse_from([
            "tradeoff-advisor", "a", "b", "--require", "kafka", "--require", "s3",
        ])
        .unwrap();
        let command = build_command(&cli).unwrap();

        assert_eq!(command.constraints.required_integrations().len(), 2);
    }

    #[test]
    fn inverted_budget_is_rejected() {
        let cli = Cli::try_parse_from([
            "tradeoff-advisor", "a", "b", "--budget-min", "500", "--budget-max", "100",
        ])
        .unwrap();
        assert!(build_command(&cli).is_err());
    }

    #[test]
    fn list_needs_no_ids() {
        let cli = Cli::try_parse_from(["tradeoff-advisor", "--list", "--category", "compute"]).unwrap();
        assert!(cli.list);
        assert_eq!(cli.category.as_deref(), Some("compute"));
    }

    #[test]
    fn comparison_error_reports_code_and_details() {
        let domain = DomainError::from(ComparisonError::InsufficientOptions { remaining: 1 });
        let error = CliError::from(domain);

        assert!(error.to_string().starts_with("[INSUFFICIENT_OPTIONS] "));
        let CliError::Comparison(domain) = &error else {
            panic!("expected comparison error");
        };
        let details = sorted_details(domain);
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].0, "remaining");
        assert_eq!(details[0].1, "1");
    }

    #[test]
    fn compare_requires_two_ids() {
        assert!(Cli::try_parse_from(["tradeoff-advisor", "a"]).is_err());
    }
}

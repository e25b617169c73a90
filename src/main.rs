use std::path::PathBuf;

use clap::{Parser, Subcommand};
use deadline_checker::checker::DeadlineChecker;
use deadline_checker::cleaner::extract_clean_text;
use deadline_checker::config::Config;
use deadline_checker::data_models::{
    CheckOutcome, DeadlineQuery, VerificationResult, default_queries, load_queries,
};
use deadline_checker::fetcher::{HttpFetcher, PageFetcher};
use deadline_checker::llm::OpenAiClient;
use deadline_checker::validation::{DateFormat, check_date_format};

#[derive(Parser, Debug)]
#[command(about = "Check recorded grant deadlines against the live grant pages")]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Verify one recorded deadline
    Check { url: String, given_date: String },
    /// Verify a list of recorded deadlines
    Batch {
        /// JSON array of {"url", "given_date"} objects; built-in list if omitted
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Pages checked at the same time
        #[arg(short, long, default_value_t = 1)]
        concurrency: usize,
    },
    /// Print the cleaned text of a page
    Extract { url: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Bridge log crate -> tracing, the library logs through `log`
    tracing_log::LogTracer::init()?;

    match cli.command {
        Command::Check { url, given_date } => {
            let checker = build_checker()?;
            let query = DeadlineQuery::new(url, given_date);
            match checker.check(&query).await {
                Ok(result) => {
                    warn_on_unrecognized(&query, &result);
                    println!("Model response:\n{}", result);
                }
                Err(e) => println!("An error occurred: {}", e.report()),
            }
        }
        Command::Batch { file, concurrency } => {
            let queries = match file {
                Some(path) => load_queries(&path)?,
                None => default_queries(),
            };
            let checker = build_checker()?;
            let outcomes = checker.check_all(queries, concurrency).await;
            for outcome in &outcomes {
                print_outcome(outcome);
            }
            let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
            tracing::info!("checked {} pages, {} failed", outcomes.len(), failed);
        }
        Command::Extract { url } => {
            let html = HttpFetcher::new().fetch(&url).await?;
            println!("{}", extract_clean_text(&html)?);
        }
    }
    Ok(())
}

fn build_checker() -> anyhow::Result<DeadlineChecker<HttpFetcher, OpenAiClient>> {
    let config = Config::from_env()?;
    tracing::debug!("using {:?}", config);
    Ok(DeadlineChecker::new(
        HttpFetcher::new(),
        OpenAiClient::new(&config),
    ))
}

fn warn_on_unrecognized(query: &DeadlineQuery, result: &VerificationResult) {
    if let VerificationResult::CorrectedDate(answer) = result {
        if check_date_format(answer) == DateFormat::Unrecognized {
            tracing::warn!(url = %query.url, answer = %answer, "answer is not MM/DD/YYYY");
        }
    }
}

fn print_outcome(outcome: &CheckOutcome) {
    println!("{} (recorded {})", outcome.query.url, outcome.query.given_date);
    match &outcome.result {
        Ok(result) => {
            warn_on_unrecognized(&outcome.query, result);
            println!("Model response:\n{}\n", result);
        }
        Err(e) => println!("An error occurred: {}\n", e.report()),
    }
}

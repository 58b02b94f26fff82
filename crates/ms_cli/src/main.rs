use clap::{Parser, Subcommand};
use ms_core::Result;
use ms_scraper::{CrawlDriver, MediumScraper};
use ms_storage::{CsvStore, FailureLog, LoadMode};
use ms_web::AppState;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::info;

const DEFAULT_CORPUS: &str = "scrapping_results.csv";
const DEFAULT_FAILURES: &str = "crawl_failures.log";
const DEFAULT_URLS_FILE: &str = "urls.txt";

#[derive(Parser, Debug)]
#[command(author, version, about = "Scrape Medium articles and search them by keyword", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scrape a list of article URLs and append them to the corpus
    Crawl {
        /// Article URLs to scrape; with none given, --urls-file is read instead
        urls: Vec<String>,
        /// File with one URL per line (blank lines and # comments skipped)
        #[arg(long, default_value = DEFAULT_URLS_FILE)]
        urls_file: String,
        /// Corpus CSV the scraped articles are appended to
        #[arg(long, default_value = DEFAULT_CORPUS)]
        output: String,
        /// Log receiving one line per failed URL
        #[arg(long, default_value = DEFAULT_FAILURES)]
        failures: String,
        /// Seconds to wait between requests
        #[arg(long, default_value_t = 1)]
        delay_secs: u64,
    },
    /// Serve the keyword search API over the scraped corpus
    Serve {
        /// Corpus CSV to load at startup
        #[arg(long, default_value = DEFAULT_CORPUS)]
        corpus: String,
        /// Port to bind; falls back to the PORT environment variable, then 5000
        #[arg(long)]
        port: Option<u16>,
        /// Abort startup on malformed corpus rows instead of skipping them
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Crawl {
            urls,
            urls_file,
            output,
            failures,
            delay_secs,
        } => {
            let urls = load_urls(&urls, &urls_file)?;
            info!("🕷️ crawling {} urls into {}", urls.len(), output);

            let store = CsvStore::new(&output);
            let failure_log = FailureLog::new(&failures);
            let extractor = MediumScraper::new();
            let driver = CrawlDriver::new(Duration::from_secs(delay_secs));

            let summary = driver.run(&urls, &extractor, &store, &failure_log).await?;
            println!(
                "crawl summary: {} attempted, {} succeeded, {} failed",
                summary.attempted, summary.succeeded, summary.failed
            );
        }
        Commands::Serve {
            corpus,
            port,
            strict,
        } => {
            let mode = if strict {
                LoadMode::Strict
            } else {
                LoadMode::Lenient
            };
            // Fatal if the corpus is missing or, in strict mode, damaged:
            // the service never starts over a corpus it cannot trust.
            let articles = CsvStore::new(&corpus).load_all(mode)?;
            info!("📚 loaded {} articles from {}", articles.len(), corpus);

            let addr = SocketAddr::from(([0, 0, 0, 0], resolve_port(port)));
            ms_web::serve(AppState::new(articles, corpus), addr).await?;
        }
    }

    Ok(())
}

fn load_urls(args: &[String], urls_file: &str) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }
    let raw = std::fs::read_to_string(urls_file)?;
    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

fn resolve_port(flag: Option<u16>) -> u16 {
    flag.or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()))
        .unwrap_or(ms_web::DEFAULT_PORT)
}

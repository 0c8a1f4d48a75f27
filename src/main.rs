use clap::Parser;
use restaurant_scout::config::load_scraper_config;
use restaurant_scout::{ScraperTrait, TimeoutScraper};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "restaurant-scout")]
#[command(about = "Scrape the Time Out best-restaurants list")]
struct Cli {
    /// Print the result envelope as JSON instead of a report
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = load_scraper_config()?;
    let scraper = TimeoutScraper::with_config(config)?;

    info!("🍽️ Restaurant Scout - {} scraper", scraper.source_name());

    let result = scraper.scrape().await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match result.error() {
        Some(error) => println!("Error: {}", error),
        None => {
            for (i, restaurant) in result.restaurants().iter().enumerate() {
                println!("{}. {} — {}", i + 1, restaurant.title, restaurant.price);
                println!("   Image: {}", restaurant.image.as_deref().unwrap_or("None"));
                println!("   Desc : {}", restaurant.description);
                println!();
            }
        }
    }

    Ok(())
}

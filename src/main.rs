use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::time::Duration;

use neo_scope::catalog::extract;
use neo_scope::feed::{FeedClient, FeedWindow};
use neo_scope::web::config::ConfigError;
use neo_scope::web::{self, Config};

#[derive(Parser)]
#[command(name = "neo-scope")]
#[command(about = "Near-Earth-object observation dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dashboard web server
    Serve {
        /// Path to a YAML config file; defaults apply without one
        #[arg(long)]
        config: Option<String>,
    },
    /// Fetch one observation window and print the table
    Fetch {
        /// Window length in days (1-7), ending today
        #[arg(long, default_value_t = 3)]
        days: u32,
        #[arg(long)]
        config: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(config).await,
        Commands::Fetch { days, config } => fetch(days, config).await,
    }
}

fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => Config::from_file(path),
        None => Ok(Config::default()),
    }
}

async fn serve(config_path: Option<String>) -> ExitCode {
    let config = match load_config(config_path.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = web::run_server(config).await {
        eprintln!("Server error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn fetch(days: u32, config_path: Option<String>) -> ExitCode {
    if !(1..=7).contains(&days) {
        eprintln!("days must be between 1 and 7");
        return ExitCode::FAILURE;
    }

    let config = match load_config(config_path.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = match FeedClient::new(
        config.feed.base_url.clone(),
        config.feed.resolved_api_key(),
        Duration::from_secs(config.feed.timeout_s),
    ) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error building feed client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let window = FeedWindow::ending_today(days);
    let feed = match client.fetch(&window).await {
        Ok(feed) => feed,
        Err(e) => {
            eprintln!("Feed unavailable: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let records = extract(&feed);
    println!(
        "{} bodies between {} and {}",
        records.len(),
        window.start_date,
        window.end_date
    );
    println!(
        "{:<28} {:>10} {:>14} {:>16} {:>12} {:>9}",
        "name", "date", "velocity km/s", "miss dist km", "diameter m", "hazardous"
    );
    for record in &records {
        println!(
            "{:<28} {:>10} {:>14.2} {:>16.0} {:>12.1} {:>9}",
            record.name,
            record.date.to_string(),
            record.relative_velocity_km_s,
            record.miss_distance_km,
            record.mean_diameter_m,
            if record.is_hazardous { "yes" } else { "no" }
        );
    }
    ExitCode::SUCCESS
}

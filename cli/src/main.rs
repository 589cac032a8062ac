mod config;
mod stats;

use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use salary_stats::render_table;

use crate::config::Config;

/// Average programmer salaries in Moscow by language, from HeadHunter and SuperJob.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Job sites to collect statistics from, defaults to all of them
    #[clap(long = "site", value_enum)]
    sites: Vec<Target>,

    /// Programming languages to search for, defaults to a list of popular ones
    #[clap(long = "language")]
    languages: Vec<String>,

    /// HeadHunter lookback period in days
    #[clap(long, default_value_t = 30)]
    period: u32,

    /// Exchange SuperJob login and password for a token before searching,
    /// SuperJob is skipped when this fails
    #[clap(long)]
    check_superjob_auth: bool,

    /// Print statistics as JSON instead of tables
    #[clap(long)]
    json: bool,
}

impl Cli {
    /// Selected sites in the order given, without duplicates.
    pub fn targets(&self) -> Vec<Target> {
        if self.sites.is_empty() {
            return Target::value_variants().to_vec();
        }
        let mut targets = Vec::with_capacity(self.sites.len());
        for site in &self.sites {
            if !targets.contains(site) {
                targets.push(*site);
            }
        }
        targets
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    #[value(name = "headhunter")]
    HeadHunter,
    #[value(name = "superjob")]
    SuperJob,
}

const LOCALITY: &str = "Moscow";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    let config = Config::from_env(&args)?;

    let mut reports = Vec::new();
    for target in args.targets() {
        if let Some(report) = stats::collect(target, &config).await? {
            reports.push(report);
        }
    }

    if args.json {
        let mut json = serde_json::Map::new();
        for (name, table) in reports {
            json.insert(format!("{} {}", name, LOCALITY), serde_json::to_value(table)?);
        }
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        for (name, table) in reports {
            println!("{}", render_table(&format!("{} {}", name, LOCALITY), &table));
            println!();
        }
    }
    Ok(())
}

use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use env_logger::Env;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::io::Read;
use std::path::PathBuf;

use trafficutils::algorithms::{mode, sort_descending, to_decimal_string};
use trafficutils::config_loader;
use trafficutils::utils::{dates, ip_utils, json, numbers, ApiClient};

/// Small string, number, date and rate-lookup helpers
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Path to an optional YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sort values into descending order
    Sort {
        values: Vec<String>,
    },

    /// Render an integer in base 10
    Itoa {
        #[arg(allow_hyphen_values = true)]
        value: i64,
    },

    /// Print the most frequent value
    Mode {
        values: Vec<String>,
    },

    /// Format a number with thousands separators
    Comma {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Re-render a YYYY-MM-DD date in long form
    Date {
        date: String,

        /// Use an ordinal day suffix ("January 2nd, 2006")
        #[arg(long)]
        suffix: bool,
    },

    /// Print the number of days in a month
    Days {
        /// English month name
        month: String,
        year: i32,
    },

    /// Format an amount with the currency symbol of a country
    Currency {
        country: String,
        #[arg(allow_hyphen_values = true)]
        amount: f64,
    },

    /// Re-indent JSON read from the argument or stdin
    Json {
        input: Option<String>,
    },

    /// Resolve the client address from a peer address and proxy headers
    ClientIp {
        /// Peer address of the connection (ip:port)
        remote_addr: String,

        /// Request header as "Name: value", may be repeated
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,
    },

    /// Look up a conversion rate from the keyed exchange-rate service
    ConversionRate {
        currency: String,

        /// Currency to convert into
        #[arg(long, default_value = "GBP")]
        target: String,

        #[arg(long)]
        api_key: String,

        /// Rate printed when the lookup fails
        #[arg(long, default_value_t = 1.0)]
        fallback: f64,
    },

    /// Look up an exchange rate from the public rates service
    ExchangeRate {
        currency: String,
        to_currency: String,
    },

    /// Resolve coordinates to a formatted address
    Road {
        #[arg(allow_hyphen_values = true)]
        lat: String,
        #[arg(allow_hyphen_values = true)]
        long: String,

        #[arg(long)]
        api_key: String,
    },

    /// Download a URL to a local file
    Download {
        url: String,
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    let config = config_loader::load_config_or_default(args.config.as_deref())?;

    // Command line beats configuration, default filter level is "info"
    let log_level = args
        .log_level
        .clone()
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| "info".to_string());
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    if let Some(path) = &args.config {
        info!("Using configuration file: {:?}", path);
    }
    debug!("Running command: {:?}", args.command);

    match args.command {
        Commands::Sort { mut values } => {
            for value in sort_descending(&mut values) {
                println!("{}", value);
            }
        }
        Commands::Itoa { value } => println!("{}", to_decimal_string(value)),
        Commands::Mode { values } => {
            if values.is_empty() {
                warn!("No values given, nothing to count");
            }
            println!("{}", mode(&values));
        }
        Commands::Comma { value } => match value.trim().parse::<i64>() {
            Ok(int) => println!("{}", numbers::comma(int)),
            Err(_) => println!("{}", numbers::commaf(numbers::parse_float_or_zero(&value))),
        },
        Commands::Date { date, suffix } => {
            let rendered = if suffix {
                dates::format_with_suffix(dates::parse_iso_date(&date)?)
            } else {
                dates::format_iso_date(&date)?
            };
            println!("{}", rendered);
        }
        Commands::Days { month, year } => {
            println!("{}", dates::days_in_named_month(&month, year));
        }
        Commands::Currency { country, amount } => {
            println!("{}", config.currency.format(&country, &numbers::format_float(amount)));
        }
        Commands::Json { input } => {
            let input = match input {
                Some(input) => input,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .wrap_err("Failed to read JSON from stdin")?;
                    buf
                }
            };
            println!("{}", json::pretty_print(&input));
        }
        Commands::ClientIp { remote_addr, headers } => {
            let headers = parse_headers(&headers)?;
            match ip_utils::client_addr(&remote_addr, &headers) {
                Some(addr) => println!("{}", addr),
                None => {
                    return Err(eyre!(
                        "Could not determine a client address from '{}'",
                        remote_addr
                    ))
                }
            }
        }
        Commands::ConversionRate { currency, target, api_key, fallback } => {
            let client = ApiClient::new(config.apis.clone())?;
            println!("{}", client.conversion_rate(&api_key, &currency, &target, fallback));
        }
        Commands::ExchangeRate { currency, to_currency } => {
            let client = ApiClient::new(config.apis.clone())?;
            println!("{}", client.exchange_rate_for(&currency, &to_currency));
        }
        Commands::Road { lat, long, api_key } => {
            let client = ApiClient::new(config.apis.clone())?;
            println!("{}", client.road_for(&lat, &long, &api_key));
        }
        Commands::Download { url, output } => {
            let client = ApiClient::new(config.apis.clone())?;
            let written = client
                .download_to_file(&url, &output)
                .wrap_err_with(|| format!("Failed to download {}", url))?;
            info!("Wrote {} bytes to {:?}", written, output);
        }
    }

    Ok(())
}

/// Split "Name: value" pairs into a header map
fn parse_headers(raw: &[String]) -> Result<HashMap<String, String>> {
    raw.iter()
        .map(|header| {
            header
                .split_once(':')
                .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
                .ok_or_else(|| eyre!("Malformed header '{}', expected 'Name: value'", header))
        })
        .collect()
}

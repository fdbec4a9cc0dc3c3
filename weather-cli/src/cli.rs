use anyhow::{Context, bail};
use chrono::{Datelike, Local, NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use inquire::Select;
use tracing::debug;
use weather_core::{
    Config, Geocoder, ProviderId, TemperatureUnit, Theme, WeatherFetcher, WeatherReport,
    calendar::{self, WorldZone},
    cities,
    provider::provider_from_config,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather CLI")]
pub struct Cli {
    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Provider to use for this run: "open-meteo" or "sample".
    #[arg(long, global = true)]
    pub provider: Option<String>,

    /// Temperature unit for this run ("f" or "c"); overrides the saved preference.
    #[arg(long, global = true)]
    pub unit: Option<TemperatureUnit>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show weather for one of the built-in cities.
    Show {
        /// City name, e.g. "Tokyo".
        city: String,
    },

    /// Look up any city by name and show its weather.
    Search {
        /// Free-text city name.
        query: String,
    },

    /// Show weather for every built-in city.
    All,

    /// List the built-in cities.
    Cities,

    /// Month calendar with the current time in a world timezone.
    Calendar {
        /// Timezone display name or IANA id, e.g. "Tokyo" or "Europe/Paris".
        #[arg(long, default_value = "New York")]
        zone: String,

        #[arg(long, requires = "month")]
        year: Option<i32>,

        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },

    /// Interactively choose unit, theme and provider.
    Configure,

    /// Flip a saved preference.
    Toggle {
        #[arg(value_enum)]
        what: ToggleTarget,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ToggleTarget {
    Unit,
    Theme,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;
        debug!(?config, "loaded config");

        let Cli { json, provider, unit, command } = self;

        let provider_id = match provider.as_deref() {
            Some(p) => ProviderId::try_from(p)?,
            None => config.default_provider_id()?,
        };
        let unit = unit.unwrap_or(config.temperature_unit);
        let today = Local::now().date_naive();

        match command {
            Command::Show { city } => {
                let fetcher = WeatherFetcher::new(provider_from_config(provider_id, &config));
                match fetcher.fetch_report(&city).await {
                    Some(report) => print_report(json, &report, unit, today)?,
                    None => bail!("Weather data unavailable for '{city}'"),
                }
            }
            Command::Search { query } => {
                let geocoder = Geocoder::new(config.geocoding_base_url());
                let Some(found) = geocoder.geocode(&query).await else {
                    bail!("City not found: {query}");
                };
                if !json {
                    println!("{}\n", render::geocoded(&found));
                }

                let fetcher = WeatherFetcher::new(provider_from_config(provider_id, &config));
                match fetcher.fetch_report_at(&found.name, found.latitude, found.longitude).await {
                    Some(report) => print_report(json, &report, unit, today)?,
                    None => bail!("Weather data unavailable for '{}'", found.name),
                }
            }
            Command::All => {
                let fetcher = WeatherFetcher::new(provider_from_config(provider_id, &config));
                let reports: Vec<WeatherReport> = fetcher
                    .fetch_many(&cities::all())
                    .await
                    .into_iter()
                    .filter_map(|(_, report)| report)
                    .collect();

                if json {
                    println!("{}", serde_json::to_string_pretty(&reports)?);
                } else {
                    for report in &reports {
                        println!("{}", render::weather_card(report, unit, today));
                    }
                }
            }
            Command::Cities => {
                let all = cities::all();
                if json {
                    println!("{}", serde_json::to_string_pretty(&all)?);
                } else {
                    print!("{}", render::city_list(&all));
                }
            }
            Command::Calendar { zone, year, month } => {
                let zone = WorldZone::find(&zone)?;
                let first = NaiveDate::from_ymd_opt(
                    year.unwrap_or(today.year()),
                    month.unwrap_or(today.month()),
                    1,
                )
                .context("Invalid year/month")?;
                let cells = calendar::month_grid(first.year(), first.month())?;
                let clock = calendar::clock(Utc::now(), zone)?;
                print!("{}", render::calendar(&cells, first, Some(today), &clock));
            }
            Command::Configure => {
                configure(&mut config)?;
                config.save()?;
                println!(
                    "Saved: unit {}, theme {}, provider {}",
                    config.temperature_unit.symbol(),
                    config.theme,
                    config.default_provider_id()?
                );
            }
            Command::Toggle { what } => {
                match what {
                    ToggleTarget::Unit => {
                        let unit = config.toggle_unit();
                        println!("Temperature unit: {}", unit.symbol());
                    }
                    ToggleTarget::Theme => {
                        let theme = config.toggle_theme();
                        println!("Theme: {theme}");
                    }
                }
                config.save()?;
            }
        }

        Ok(())
    }
}

fn print_report(json: bool, report: &WeatherReport, unit: TemperatureUnit, today: NaiveDate) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", render::weather_card(report, unit, today));
    }
    Ok(())
}

fn configure(config: &mut Config) -> anyhow::Result<()> {
    let units = vec![TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius];
    let start = units.iter().position(|u| *u == config.temperature_unit).unwrap_or(0);
    let labels: Vec<&str> = units.iter().map(|u| u.symbol()).collect();
    let picked = Select::new("Temperature unit:", labels.clone()).with_starting_cursor(start).prompt()?;
    if let Some(i) = labels.iter().position(|l| *l == picked) {
        config.temperature_unit = units[i];
    }

    let theme = if config.theme == Theme::Dark { 1 } else { 0 };
    let picked = Select::new("Theme:", vec!["light", "dark"]).with_starting_cursor(theme).prompt()?;
    config.theme = if picked == "dark" { Theme::Dark } else { Theme::Light };

    let providers: Vec<&str> = ProviderId::all().iter().map(|p| p.as_str()).collect();
    let current = config.default_provider_id()?;
    let start = ProviderId::all().iter().position(|p| *p == current).unwrap_or(0);
    let picked = Select::new("Weather provider:", providers).with_starting_cursor(start).prompt()?;
    config.set_default_provider(ProviderId::try_from(picked)?);

    Ok(())
}

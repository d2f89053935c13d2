pub mod cli;
pub mod toml_config;

use crate::core::pricing::PriceRates;
use crate::domain::ports::ConfigProvider;
use self::toml_config::AppConfig;

#[cfg(feature = "cli")]
use crate::domain::model::{FinishingLevel, QuotationRequest};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_COLLECTION: &str = "calculations";
pub const DEFAULT_CURRENCY: &str = "₪";

#[cfg(feature = "cli")]
#[derive(Debug, Parser)]
#[command(name = "paint-quote")]
#[command(about = "A pricing calculator for house-painting quotations")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the saved calculations
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute a quotation from the given inputs
    Quote(QuoteArgs),
    /// List saved calculations
    List,
    /// Show a saved calculation by its position (as printed by `list`)
    Show {
        position: usize,
    },
}

#[cfg(feature = "cli")]
#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Title for this quotation
    #[arg(long)]
    pub title: Option<String>,

    /// Number of rooms to paint
    #[arg(long, default_value = "1")]
    pub rooms: u32,

    /// Level of finishing
    #[arg(long, value_enum, default_value = "standard")]
    pub level: FinishingLevel,

    /// Include ceiling painting
    #[arg(long)]
    pub ceiling: bool,

    /// Number of window shades
    #[arg(long, default_value = "1")]
    pub shades: u32,

    /// Custom line item as TITLE=PRICE (repeatable)
    #[arg(long = "custom", value_name = "TITLE=PRICE")]
    pub custom: Vec<String>,

    /// Persist the calculation after computing it
    #[arg(long)]
    pub save: bool,
}

#[cfg(feature = "cli")]
impl QuoteArgs {
    /// Builds a validated request; the engine assumes these checks ran.
    pub fn to_request(&self) -> Result<QuotationRequest> {
        let mut request = QuotationRequest::new(self.rooms, self.level, self.shades)
            .with_ceiling(self.ceiling);

        if let Some(title) = &self.title {
            request = request.with_title(title.clone());
        }

        for raw in &self.custom {
            request = request.with_custom_item(validation::parse_custom_item(raw)?);
        }

        request.validate()?;
        Ok(request)
    }
}

/// Resolved runtime settings: CLI flags take precedence over the config
/// file, which takes precedence over the defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_dir: String,
    pub collection: String,
    pub currency: String,
    pub rates: PriceRates,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            rates: PriceRates::default(),
        }
    }
}

impl Settings {
    pub fn apply(&mut self, config: AppConfig) {
        if let Some(storage) = config.storage {
            if let Some(data_dir) = storage.data_dir {
                self.data_dir = data_dir;
            }
            if let Some(collection) = storage.collection {
                self.collection = collection;
            }
        }

        if let Some(display) = config.display {
            if let Some(currency) = display.currency {
                self.currency = currency;
            }
        }

        if let Some(rates) = config.rates {
            self.rates = rates.to_rates();
        }
    }

    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let mut settings = Settings::default();

        if let Some(path) = &cli.config {
            let config = AppConfig::from_file(path)?;
            config.validate()?;
            settings.apply(config);
        }

        if let Some(data_dir) = &cli.data_dir {
            settings.data_dir = data_dir.clone();
        }

        Ok(settings)
    }
}

impl ConfigProvider for Settings {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn collection(&self) -> &str {
        &self.collection
    }

    fn currency(&self) -> &str {
        &self.currency
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn quote_args() -> QuoteArgs {
        QuoteArgs {
            title: None,
            rooms: 1,
            level: FinishingLevel::Standard,
            ceiling: false,
            shades: 1,
            custom: vec![],
            save: false,
        }
    }

    #[test]
    fn test_to_request_builds_validated_request() {
        let mut args = quote_args();
        args.title = Some("Cohen apartment".to_string());
        args.rooms = 2;
        args.level = FinishingLevel::Luxury;
        args.ceiling = true;
        args.shades = 3;
        args.custom = vec!["Trim=150".to_string()];

        let request = args.to_request().unwrap();

        assert_eq!(request.title.as_deref(), Some("Cohen apartment"));
        assert_eq!(request.rooms, 2);
        assert_eq!(request.finishing_level, FinishingLevel::Luxury);
        assert!(request.ceiling);
        assert_eq!(request.shades, 3);
        assert_eq!(request.custom_items.len(), 1);
        assert_eq!(request.custom_items[0].price, dec!(150));
    }

    #[test]
    fn test_to_request_rejects_zero_rooms() {
        let mut args = quote_args();
        args.rooms = 0;
        assert!(args.to_request().is_err());
    }

    #[test]
    fn test_to_request_rejects_zero_shades() {
        let mut args = quote_args();
        args.shades = 0;
        assert!(args.to_request().is_err());
    }

    #[test]
    fn test_to_request_rejects_malformed_custom_item() {
        let mut args = quote_args();
        args.custom = vec!["Trim:150".to_string()];
        assert!(args.to_request().is_err());
    }

    #[test]
    fn test_settings_resolution_precedence() {
        let mut settings = Settings::default();
        assert_eq!(settings.data_dir, DEFAULT_DATA_DIR);
        assert_eq!(settings.collection, DEFAULT_COLLECTION);
        assert_eq!(settings.currency, DEFAULT_CURRENCY);

        let config = AppConfig::from_toml_str(
            r#"
[storage]
data_dir = "/var/quotes"

[rates]
vat_rate = 0.20
"#,
        )
        .unwrap();
        settings.apply(config);

        assert_eq!(settings.data_dir, "/var/quotes");
        assert_eq!(settings.collection, DEFAULT_COLLECTION);
        assert_eq!(settings.rates.vat_rate, dec!(0.20));
        assert_eq!(settings.rates.base_price_per_room, dec!(400));
    }
}

use crate::core::pricing::PriceRates;
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::{self, Validate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage: Option<StorageConfig>,
    pub display: Option<DisplayConfig>,
    pub rates: Option<RatesConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: Option<String>,
    pub collection: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesConfig {
    pub base_price_per_room: Option<Decimal>,
    pub per_level_increment: Option<Decimal>,
    pub ceiling_surcharge: Option<Decimal>,
    pub per_extra_shade_surcharge: Option<Decimal>,
    pub vat_rate: Option<Decimal>,
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(QuoteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| QuoteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Replaces ${VAR_NAME} with the environment value; unknown variables
    // are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(storage) = &self.storage {
            if let Some(data_dir) = &storage.data_dir {
                validation::validate_path("storage.data_dir", data_dir)?;
            }
            if let Some(collection) = &storage.collection {
                validation::validate_non_empty_string("storage.collection", collection)?;
            }
        }

        if let Some(display) = &self.display {
            if let Some(currency) = &display.currency {
                validation::validate_non_empty_string("display.currency", currency)?;
            }
        }

        if let Some(rates) = &self.rates {
            rates.validate()?;
        }

        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

impl RatesConfig {
    /// Overrides on top of the default tariff.
    pub fn to_rates(&self) -> PriceRates {
        let defaults = PriceRates::default();

        PriceRates {
            base_price_per_room: self.base_price_per_room.unwrap_or(defaults.base_price_per_room),
            per_level_increment: self.per_level_increment.unwrap_or(defaults.per_level_increment),
            ceiling_surcharge: self.ceiling_surcharge.unwrap_or(defaults.ceiling_surcharge),
            per_extra_shade_surcharge: self
                .per_extra_shade_surcharge
                .unwrap_or(defaults.per_extra_shade_surcharge),
            vat_rate: self.vat_rate.unwrap_or(defaults.vat_rate),
        }
    }
}

impl Validate for RatesConfig {
    fn validate(&self) -> Result<()> {
        let non_negative = [
            ("rates.base_price_per_room", &self.base_price_per_room),
            ("rates.per_level_increment", &self.per_level_increment),
            ("rates.ceiling_surcharge", &self.ceiling_surcharge),
            ("rates.per_extra_shade_surcharge", &self.per_extra_shade_surcharge),
        ];

        for (field, value) in non_negative {
            if let Some(value) = value {
                if *value < Decimal::ZERO {
                    return Err(QuoteError::InvalidConfigValueError {
                        field: field.to_string(),
                        value: value.to_string(),
                        reason: "Rate cannot be negative".to_string(),
                    });
                }
            }
        }

        if let Some(vat_rate) = self.vat_rate {
            if vat_rate < Decimal::ZERO || vat_rate > Decimal::ONE {
                return Err(QuoteError::InvalidConfigValueError {
                    field: "rates.vat_rate".to_string(),
                    value: vat_rate.to_string(),
                    reason: "VAT rate must be between 0 and 1".to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_config() {
        let toml_content = r#"
[storage]
data_dir = "./quotes"
collection = "calculations"

[display]
currency = "$"

[rates]
base_price_per_room = 450
vat_rate = 0.18
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());

        let storage = config.storage.unwrap();
        assert_eq!(storage.data_dir.as_deref(), Some("./quotes"));
        assert_eq!(config.display.unwrap().currency.as_deref(), Some("$"));

        let rates = config.rates.unwrap().to_rates();
        assert_eq!(rates.base_price_per_room, dec!(450));
        assert_eq!(rates.vat_rate, dec!(0.18));
        // Untouched rates keep their defaults
        assert_eq!(rates.per_extra_shade_surcharge, dec!(200));
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());
        assert!(config.storage.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("QUOTE_TEST_DATA_DIR", "/tmp/quote-data");

        let toml_content = r#"
[storage]
data_dir = "${QUOTE_TEST_DATA_DIR}"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.storage.unwrap().data_dir.as_deref(),
            Some("/tmp/quote-data")
        );

        std::env::remove_var("QUOTE_TEST_DATA_DIR");
    }

    #[test]
    fn test_negative_rate_fails_validation() {
        let toml_content = r#"
[rates]
ceiling_surcharge = -10
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_vat_rate_above_one_fails_validation() {
        let toml_content = r#"
[rates]
vat_rate = 17
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[storage]
collection = "jobs"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.storage.unwrap().collection.as_deref(), Some("jobs"));
    }

    #[test]
    fn test_invalid_toml_reports_parse_error() {
        let result = AppConfig::from_toml_str("[storage\ndata_dir = 1");
        assert!(matches!(
            result,
            Err(QuoteError::ConfigValidationError { .. })
        ));
    }
}

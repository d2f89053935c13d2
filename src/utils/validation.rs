use crate::domain::model::{CustomItem, QuotationRequest};
use crate::utils::error::{QuoteError, Result};
use rust_decimal::Decimal;
use std::str::FromStr;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min_value: T,
) -> Result<()> {
    if value < min_value {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_url(field_name: &str, url_str: &str, allowed_schemes: &[&str]) -> Result<()> {
    if url_str.is_empty() {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => {
            if allowed_schemes.contains(&url.scheme()) {
                Ok(())
            } else {
                Err(QuoteError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: url_str.to_string(),
                    reason: format!(
                        "Unsupported URL scheme: {}. Allowed schemes: {}",
                        url.scheme(),
                        allowed_schemes.join(", ")
                    ),
                })
            }
        }
        Err(e) => Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Parses a money amount, rejecting non-numeric and negative input.
pub fn parse_price(field_name: &str, raw: &str) -> Result<Decimal> {
    let price = Decimal::from_str(raw.trim()).map_err(|e| QuoteError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: raw.to_string(),
        reason: format!("Invalid price: {}", e),
    })?;

    if price < Decimal::ZERO {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Price cannot be negative".to_string(),
        });
    }

    Ok(price)
}

/// Parses a `TITLE=PRICE` custom item argument.
pub fn parse_custom_item(raw: &str) -> Result<CustomItem> {
    let (title, price) = raw
        .split_once('=')
        .ok_or_else(|| QuoteError::InvalidConfigValueError {
            field: "custom".to_string(),
            value: raw.to_string(),
            reason: "Expected TITLE=PRICE".to_string(),
        })?;

    validate_non_empty_string("custom.title", title)?;
    let price = parse_price("custom.price", price)?;

    Ok(CustomItem::new(title.trim(), price))
}

impl Validate for QuotationRequest {
    fn validate(&self) -> Result<()> {
        validate_positive_number("rooms", self.rooms, 1)?;
        validate_positive_number("shades", self.shades, 1)?;

        for (i, item) in self.custom_items.iter().enumerate() {
            validate_non_empty_string(&format!("customItems[{}].title", i), &item.title)?;
            if item.price < Decimal::ZERO {
                return Err(QuoteError::InvalidConfigValueError {
                    field: format!("customItems[{}].price", i),
                    value: item.price.to_string(),
                    reason: "Price cannot be negative".to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FinishingLevel;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("rooms", 1u32, 1).is_ok());
        assert!(validate_positive_number("rooms", 0u32, 1).is_err());
        assert!(validate_positive_number("index", 3usize, 1).is_ok());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("price", "150").unwrap(), dec!(150));
        assert_eq!(parse_price("price", " 99.50 ").unwrap(), dec!(99.50));
        assert_eq!(parse_price("price", "0").unwrap(), dec!(0));
        assert!(parse_price("price", "-5").is_err());
        assert!(parse_price("price", "abc").is_err());
        assert!(parse_price("price", "").is_err());
    }

    #[test]
    fn test_parse_custom_item() {
        let item = parse_custom_item("Trim=150").unwrap();
        assert_eq!(item.title, "Trim");
        assert_eq!(item.price, dec!(150));

        let spaced = parse_custom_item("Window frames = 75.25").unwrap();
        assert_eq!(spaced.title, "Window frames");
        assert_eq!(spaced.price, dec!(75.25));

        assert!(parse_custom_item("Trim").is_err());
        assert!(parse_custom_item("=150").is_err());
        assert!(parse_custom_item("Trim=-10").is_err());
        assert!(parse_custom_item("Trim=abc").is_err());
    }

    #[test]
    fn test_validate_url_schemes() {
        assert!(validate_url("db", "postgres://localhost/quotes", &["postgres", "postgresql"]).is_ok());
        assert!(validate_url("db", "mysql://localhost/quotes", &["postgres", "postgresql"]).is_err());
        assert!(validate_url("db", "", &["postgres"]).is_err());
        assert!(validate_url("db", "not a url", &["postgres"]).is_err());
    }

    #[test]
    fn test_quotation_request_validation() {
        let valid = QuotationRequest::new(1, FinishingLevel::Standard, 1);
        assert!(valid.validate().is_ok());

        let mut no_rooms = QuotationRequest::new(1, FinishingLevel::Standard, 1);
        no_rooms.rooms = 0;
        assert!(no_rooms.validate().is_err());

        let mut no_shades = QuotationRequest::new(1, FinishingLevel::Standard, 1);
        no_shades.shades = 0;
        assert!(no_shades.validate().is_err());

        let mut bad_item = QuotationRequest::new(1, FinishingLevel::Standard, 1);
        bad_item.custom_items.push(CustomItem::new("  ", dec!(10)));
        assert!(bad_item.validate().is_err());

        let mut negative_item = QuotationRequest::new(1, FinishingLevel::Standard, 1);
        negative_item.custom_items.push(CustomItem::new("Trim", dec!(-1)));
        assert!(negative_item.validate().is_err());
    }
}

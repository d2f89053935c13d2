use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Quality tier of the paint job. Each tier above `Standard` adds a flat
/// per-room increment to the base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum FinishingLevel {
    #[default]
    Standard,
    Premium,
    Luxury,
    Deluxe,
}

impl FinishingLevel {
    /// 0-based position in the standard..deluxe ordering.
    pub fn tier(&self) -> u32 {
        match self {
            FinishingLevel::Standard => 0,
            FinishingLevel::Premium => 1,
            FinishingLevel::Luxury => 2,
            FinishingLevel::Deluxe => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FinishingLevel::Standard => "standard",
            FinishingLevel::Premium => "premium",
            FinishingLevel::Luxury => "luxury",
            FinishingLevel::Deluxe => "deluxe",
        }
    }
}

impl std::fmt::Display for FinishingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-form line item added on top of the computed room price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomItem {
    pub title: String,
    pub price: Decimal,
}

impl CustomItem {
    pub fn new(title: impl Into<String>, price: Decimal) -> Self {
        Self {
            title: title.into(),
            price,
        }
    }
}

/// Inputs for one quotation. The input boundary validates field ranges
/// (rooms and shades at least 1, non-negative item prices) before this
/// reaches the price engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationRequest {
    pub title: Option<String>,
    pub rooms: u32,
    pub finishing_level: FinishingLevel,
    pub ceiling: bool,
    pub shades: u32,
    pub custom_items: Vec<CustomItem>,
}

impl QuotationRequest {
    pub fn new(rooms: u32, finishing_level: FinishingLevel, shades: u32) -> Self {
        Self {
            title: None,
            rooms,
            finishing_level,
            ceiling: false,
            shades,
            custom_items: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_ceiling(mut self, ceiling: bool) -> Self {
        self.ceiling = ceiling;
        self
    }

    pub fn with_custom_item(mut self, item: CustomItem) -> Self {
        self.custom_items.push(item);
        self
    }

    /// Sum of the custom item prices, in insertion order.
    pub fn custom_items_total(&self) -> Decimal {
        self.custom_items.iter().map(|item| item.price).sum()
    }
}

/// Computed price for one request. Derived once, never mutated;
/// `total_price` always equals `price_before_vat + vat_amount` exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    #[serde(rename = "priceBeforeVAT")]
    pub price_before_vat: Decimal,
    #[serde(rename = "vatAmount")]
    pub vat_amount: Decimal,
    #[serde(rename = "totalPrice")]
    pub total_price: Decimal,
}

/// One saved quotation: the request plus its computed breakdown.
/// Identified only by its position in the calculation store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCalculation {
    #[serde(flatten)]
    pub request: QuotationRequest,
    #[serde(flatten)]
    pub breakdown: PriceBreakdown,
    pub saved_at: DateTime<Utc>,
}

impl SavedCalculation {
    pub fn new(request: QuotationRequest, breakdown: PriceBreakdown) -> Self {
        Self {
            request,
            breakdown,
            saved_at: Utc::now(),
        }
    }

    /// Title for list rendering, falling back to the 1-based position.
    pub fn display_title(&self, position: usize) -> String {
        match self.request.title.as_deref().filter(|t| !t.trim().is_empty()) {
            Some(title) => title.to_string(),
            None => format!("Calculation {}", position + 1),
        }
    }
}

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{cli::LocalStorage, Settings};
pub use crate::core::pricing::{PriceEngine, PriceRates};
pub use crate::core::store::CalculationStore;
pub use crate::domain::model::{
    CustomItem, FinishingLevel, PriceBreakdown, QuotationRequest, SavedCalculation,
};
pub use crate::utils::error::{QuoteError, Result};

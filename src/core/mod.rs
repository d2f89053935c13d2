pub mod pricing;
pub mod store;

pub use crate::domain::model::{
    CustomItem, FinishingLevel, PriceBreakdown, QuotationRequest, SavedCalculation,
};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;

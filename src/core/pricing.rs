use crate::domain::model::{PriceBreakdown, QuotationRequest};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Tariff the engine computes against. `Default` carries the standard
/// tariff; a config file may override individual rates.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRates {
    pub base_price_per_room: Decimal,
    pub per_level_increment: Decimal,
    pub ceiling_surcharge: Decimal,
    pub per_extra_shade_surcharge: Decimal,
    pub vat_rate: Decimal,
}

impl Default for PriceRates {
    fn default() -> Self {
        Self {
            base_price_per_room: dec!(400),
            per_level_increment: dec!(100),
            ceiling_surcharge: dec!(100),
            per_extra_shade_surcharge: dec!(200),
            vat_rate: dec!(0.17),
        }
    }
}

/// Pure quotation pricing. No I/O, no side effects; assumes the input
/// boundary has already validated the request (rooms and shades at least
/// 1, non-negative item prices).
#[derive(Debug, Clone, Default)]
pub struct PriceEngine {
    rates: PriceRates,
}

impl PriceEngine {
    pub fn new(rates: PriceRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &PriceRates {
        &self.rates
    }

    pub fn compute(&self, request: &QuotationRequest) -> PriceBreakdown {
        let rooms = Decimal::from(request.rooms);
        let tier = Decimal::from(request.finishing_level.tier());

        let mut base = (self.rates.base_price_per_room + tier * self.rates.per_level_increment)
            * rooms;

        if request.ceiling {
            base += self.rates.ceiling_surcharge * rooms;
        }

        // The first shade is included in the base price.
        let extra_shades = Decimal::from(request.shades.saturating_sub(1));
        base += extra_shades * self.rates.per_extra_shade_surcharge * rooms;

        let price_before_vat = base + request.custom_items_total();
        let vat_amount = price_before_vat * self.rates.vat_rate;

        PriceBreakdown {
            price_before_vat,
            vat_amount,
            total_price: price_before_vat + vat_amount,
        }
    }
}

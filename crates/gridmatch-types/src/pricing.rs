//! Pricing terms attached to resource offers and deals.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants;

/// How a resource offer prices its capacity.
///
/// The deal-formation pathway requires a provider-fixed price;
/// `MarketPrice` offers are rejected by validation before matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricingMode {
    FixedPrice,
    MarketPrice,
}

impl fmt::Display for PricingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedPrice => write!(f, "FIXED_PRICE"),
            Self::MarketPrice => write!(f, "MARKET_PRICE"),
        }
    }
}

/// The money terms of a deal, all denominated in marketplace tokens.
///
/// Copied verbatim from the resource offer's declared defaults when a
/// deal is assembled; the provider's terms govern until a negotiation
/// layer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pricing {
    /// Price per instruction-unit of work.
    pub instruction_price: Decimal,
    /// Collateral the job creator posts against payment.
    pub payment_collateral: Decimal,
    /// Multiple of the instruction cost the provider posts against
    /// bad results.
    pub results_collateral_multiple: Decimal,
    /// Fee paid to a mediator if the deal goes to mediation.
    pub mediation_fee: Decimal,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            instruction_price: Decimal::new(constants::DEFAULT_INSTRUCTION_PRICE, 0),
            payment_collateral: Decimal::new(constants::DEFAULT_PAYMENT_COLLATERAL, 0),
            results_collateral_multiple: Decimal::new(
                constants::DEFAULT_RESULTS_COLLATERAL_MULTIPLE,
                0,
            ),
            mediation_fee: Decimal::new(constants::DEFAULT_MEDIATION_FEE, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pricing_mode_display() {
        assert_eq!(format!("{}", PricingMode::FixedPrice), "FIXED_PRICE");
        assert_eq!(format!("{}", PricingMode::MarketPrice), "MARKET_PRICE");
    }

    #[test]
    fn default_pricing_uses_constants() {
        let pricing = Pricing::default();
        assert_eq!(
            pricing.instruction_price,
            Decimal::new(constants::DEFAULT_INSTRUCTION_PRICE, 0)
        );
        assert_eq!(
            pricing.mediation_fee,
            Decimal::new(constants::DEFAULT_MEDIATION_FEE, 0)
        );
    }

    #[test]
    fn pricing_serde_roundtrip() {
        let pricing = Pricing::default();
        let json = serde_json::to_string(&pricing).unwrap();
        let back: Pricing = serde_json::from_str(&json).unwrap();
        assert_eq!(pricing, back);
    }
}

//! Capacity-dependent price tiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use seathub_core::config::PricingConfig;

/// The three price tiers, keyed on seats remaining.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceTier {
    /// More than the threshold remain.
    EarlyBird,
    /// Between one and the threshold remain.
    Standard,
    /// Nothing left.
    SoldOut,
}

impl PriceTier {
    /// Label shown to attendees.
    pub fn label(&self) -> &'static str {
        match self {
            Self::EarlyBird => "Early Bird Price",
            Self::Standard => "Standard Price",
            Self::SoldOut => "Sold Out",
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A tier with its resolved price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Tier in effect.
    pub tier: PriceTier,
    /// Price in whole currency units; zero when sold out.
    pub price: u32,
}

impl PriceQuote {
    /// Label of the tier in effect.
    pub fn label(&self) -> &'static str {
        self.tier.label()
    }
}

/// Pure pricing function over seats remaining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingRules {
    early_bird: u32,
    standard: u32,
    early_bird_threshold: u32,
}

impl PricingRules {
    /// Build rules from the pricing configuration.
    pub fn new(config: &PricingConfig) -> Self {
        Self {
            early_bird: config.early_bird,
            standard: config.standard,
            early_bird_threshold: config.early_bird_threshold,
        }
    }

    /// Tier for a given number of remaining seats.
    pub fn tier_for(&self, seats_remaining: u32) -> PriceTier {
        if seats_remaining > self.early_bird_threshold {
            PriceTier::EarlyBird
        } else if seats_remaining >= 1 {
            PriceTier::Standard
        } else {
            PriceTier::SoldOut
        }
    }

    /// Tier and price for a given number of remaining seats.
    pub fn quote(&self, seats_remaining: u32) -> PriceQuote {
        let tier = self.tier_for(seats_remaining);
        let price = match tier {
            PriceTier::EarlyBird => self.early_bird,
            PriceTier::Standard => self.standard,
            PriceTier::SoldOut => 0,
        };
        PriceQuote { tier, price }
    }
}

impl Default for PricingRules {
    fn default() -> Self {
        Self::new(&PricingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_points() {
        let rules = PricingRules::default();

        let early = rules.quote(15);
        assert_eq!(early.tier, PriceTier::EarlyBird);
        assert_eq!(early.price, 2499);
        assert_eq!(early.label(), "Early Bird Price");

        let standard = rules.quote(5);
        assert_eq!(standard.tier, PriceTier::Standard);
        assert_eq!(standard.price, 4499);
        assert_eq!(standard.label(), "Standard Price");

        let sold_out = rules.quote(0);
        assert_eq!(sold_out.tier, PriceTier::SoldOut);
        assert_eq!(sold_out.price, 0);
        assert_eq!(sold_out.label(), "Sold Out");
    }

    #[test]
    fn test_threshold_boundaries() {
        let rules = PricingRules::default();
        assert_eq!(rules.tier_for(20), PriceTier::EarlyBird);
        assert_eq!(rules.tier_for(11), PriceTier::EarlyBird);
        assert_eq!(rules.tier_for(10), PriceTier::Standard);
        assert_eq!(rules.tier_for(1), PriceTier::Standard);
        assert_eq!(rules.tier_for(0), PriceTier::SoldOut);
    }

    #[test]
    fn test_custom_prices() {
        let rules = PricingRules::new(&PricingConfig {
            early_bird: 100,
            standard: 200,
            early_bird_threshold: 3,
        });
        assert_eq!(rules.quote(4).price, 100);
        assert_eq!(rules.quote(3).price, 200);
        assert_eq!(rules.quote(0).price, 0);
    }
}

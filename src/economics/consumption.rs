//! Pure food-demand and army-support calculations for the upkeep economy.
//!
//! Everything here is side-effect free and callable independently, so the
//! presentation layer can recompute demand for display without touching the
//! ledger.

use serde::Serialize;

use crate::model::{ARMY_FOOD_UPKEEP, Army, Settlement};

/// Food demand for one upkeep turn, split by source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FoodConsumption {
    pub settlement_food: u32,
    pub army_food: u32,
    /// Always `settlement_food + army_food`.
    pub total_food: u32,
}

/// Total food demand for the given settlements and armies.
pub fn calculate_consumption(settlements: &[Settlement], armies: &[Army]) -> FoodConsumption {
    let settlement_food: u32 = settlements.iter().map(|s| s.tier.food_consumption()).sum();
    let army_food = armies.len() as u32 * ARMY_FOOD_UPKEEP;
    FoodConsumption {
        settlement_food,
        army_food,
        total_food: settlement_food + army_food,
    }
}

/// Number of armies the kingdom's settlements can sustain before shortage.
pub fn army_support_capacity(settlements: &[Settlement]) -> u32 {
    settlements.iter().map(|s| s.tier.army_support()).sum()
}

/// Armies beyond what the settlements can sustain.
pub fn unsupported_armies(armies: &[Army], settlements: &[Settlement]) -> u32 {
    (armies.len() as u32).saturating_sub(army_support_capacity(settlements))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SettlementTier;

    fn settlements(tiers: &[SettlementTier]) -> Vec<Settlement> {
        tiers
            .iter()
            .enumerate()
            .map(|(i, &tier)| Settlement::new(format!("settlement-{i}"), tier))
            .collect()
    }

    fn armies(count: usize) -> Vec<Army> {
        (0..count).map(|i| Army::new(format!("army-{i}"))).collect()
    }

    #[test]
    fn empty_kingdom_consumes_nothing() {
        let consumption = calculate_consumption(&[], &[]);
        assert_eq!(consumption, FoodConsumption::default());
    }

    #[test]
    fn total_is_sum_of_parts() {
        let settlements = settlements(&[
            SettlementTier::Village,
            SettlementTier::Town,
            SettlementTier::City,
        ]);
        let armies = armies(4);
        let consumption = calculate_consumption(&settlements, &armies);
        assert_eq!(consumption.settlement_food, 1 + 4 + 8);
        assert_eq!(consumption.army_food, 4);
        assert_eq!(
            consumption.total_food,
            consumption.settlement_food + consumption.army_food
        );
    }

    #[test]
    fn support_capacity_sums_tiers() {
        let settlements = settlements(&[
            SettlementTier::Village,
            SettlementTier::Metropolis,
        ]);
        assert_eq!(army_support_capacity(&settlements), 1 + 4);
    }

    #[test]
    fn unsupported_is_clamped_at_zero() {
        let settlements = settlements(&[SettlementTier::City]);
        assert_eq!(unsupported_armies(&armies(1), &settlements), 0);
        assert_eq!(unsupported_armies(&armies(5), &settlements), 2);
        assert_eq!(unsupported_armies(&[], &[]), 0);
    }
}

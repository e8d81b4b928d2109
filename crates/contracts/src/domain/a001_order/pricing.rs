//! Pricing of a configured drink
//!
//! The cashier UI and the backend both price a selection the same way: base
//! price of the drink plus the deltas of the selected modifiers. Single-choice
//! groups contribute exactly one modifier (the group default when nothing was
//! picked), multi-choice groups zero or more. Unknown modifier ids are ignored.

use crate::catalog::{Drink, SelectionType};

/// Result of pricing one configured drink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedSelection {
    /// Final price in rubles: base + selected modifier deltas
    pub final_price: i64,
    /// Resolved modifier ids, one per single group plus all picked multi options
    pub modifier_ids: Vec<String>,
    /// Human-readable summary, e.g. "Овсяное молоко, Корица"
    pub customizations: String,
}

pub fn price_selection(drink: &Drink, selected: &[String]) -> PricedSelection {
    let mut final_price = drink.price;
    let mut resolved: Vec<String> = Vec::new();
    let mut names: Vec<String> = Vec::new();

    for group in &drink.modifier_groups {
        match group.selection {
            SelectionType::Single => {
                // First listed option wins if several were sent; the group
                // default (first item) applies when nothing was picked.
                let chosen = group
                    .items
                    .iter()
                    .find(|m| selected.iter().any(|s| s == &m.id))
                    .or_else(|| group.items.first());
                if let Some(m) = chosen {
                    final_price += m.price;
                    resolved.push(m.id.clone());
                    let is_default = group.items.first().map(|d| d.id == m.id).unwrap_or(false);
                    if !is_default {
                        names.push(m.name.clone());
                    }
                }
            }
            SelectionType::Multiple => {
                for m in &group.items {
                    if selected.iter().any(|s| s == &m.id) {
                        final_price += m.price;
                        resolved.push(m.id.clone());
                        names.push(m.name.clone());
                    }
                }
            }
        }
    }

    PricedSelection {
        final_price,
        modifier_ids: resolved,
        customizations: names.join(", "),
    }
}

/// Deterministic cart-line id for a (drink, modifier selection) pair.
///
/// Two configurations with the same drink and the same resolved modifiers get
/// the same signature, so adding the second one bumps the quantity of the
/// first instead of creating a new line.
pub fn item_signature(drink_id: &str, modifier_ids: &[String]) -> String {
    let mut ids: Vec<&str> = modifier_ids.iter().map(|s| s.as_str()).collect();
    ids.sort_unstable();
    if ids.is_empty() {
        drink_id.to_string()
    } else {
        format!("{}:{}", drink_id, ids.join("+"))
    }
}

/// Change for a cash payment: `Some(received - total)` only when the received
/// amount covers the total; otherwise the order cannot be finalized.
pub fn change_due(received: i64, total: i64) -> Option<i64> {
    if received >= total {
        Some(received - total)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_drink;

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn base_price_with_defaults() {
        // No explicit selection: single milk group falls back to whole milk (+0)
        let latte = find_drink("latte").unwrap();
        let priced = price_selection(latte, &[]);
        assert_eq!(priced.final_price, 280);
        assert_eq!(priced.customizations, "");
        assert!(priced.modifier_ids.contains(&"whole-milk".to_string()));
    }

    #[test]
    fn single_group_contributes_exactly_one() {
        let latte = find_drink("latte").unwrap();
        // Two milk options sent; the first listed in the group wins
        let priced = price_selection(latte, &ids(&["almond-milk", "oat-milk"]));
        assert_eq!(priced.final_price, 280 + 50);
        assert_eq!(priced.customizations, "Овсяное молоко");
    }

    #[test]
    fn multi_group_sums_all_selected() {
        let cappuccino = find_drink("cappuccino").unwrap();
        let priced = price_selection(cappuccino, &ids(&["oat-milk", "vanilla", "cinnamon"]));
        assert_eq!(priced.final_price, 250 + 50 + 40 + 20);
        assert_eq!(priced.customizations, "Овсяное молоко, Ванильный, Корица");
    }

    #[test]
    fn unknown_modifiers_are_ignored() {
        let espresso = find_drink("espresso").unwrap();
        let priced = price_selection(espresso, &ids(&["oat-milk", "bogus"]));
        assert_eq!(priced.final_price, 150);
    }

    #[test]
    fn signature_is_order_independent() {
        let a = item_signature("latte", &ids(&["vanilla", "oat-milk"]));
        let b = item_signature("latte", &ids(&["oat-milk", "vanilla"]));
        assert_eq!(a, b);
        assert_ne!(a, item_signature("latte", &ids(&["oat-milk"])));
        assert_eq!(item_signature("espresso", &[]), "espresso");
    }

    #[test]
    fn change_requires_full_payment() {
        assert_eq!(change_due(500, 320), Some(180));
        assert_eq!(change_due(320, 320), Some(0));
        assert_eq!(change_due(300, 320), None);
    }
}

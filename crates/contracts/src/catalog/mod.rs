//! Static drink catalog
//!
//! The assortment is fixed and loaded from code; there is no admin UI and no
//! persistence for it. Prices are integer rubles.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// How many options a modifier group allows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionType {
    /// Exactly one option, defaults to the first item
    Single,
    /// Zero or more options
    Multiple,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Modifier {
    pub id: String,
    pub name: String,
    /// Price delta in rubles
    pub price: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifierGroup {
    pub id: String,
    pub name: String,
    pub selection: SelectionType,
    pub items: Vec<Modifier>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drink {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Base price in rubles
    pub price: i64,
    /// Preparation time in minutes
    #[serde(rename = "prepMinutes")]
    pub prep_minutes: i64,
    #[serde(rename = "modifierGroups")]
    pub modifier_groups: Vec<ModifierGroup>,
}

fn modifier(id: &str, name: &str, price: i64) -> Modifier {
    Modifier {
        id: id.to_string(),
        name: name.to_string(),
        price,
    }
}

fn milk_group() -> ModifierGroup {
    ModifierGroup {
        id: "milk".to_string(),
        name: "Молоко".to_string(),
        selection: SelectionType::Single,
        items: vec![
            modifier("whole-milk", "Обычное молоко", 0),
            modifier("oat-milk", "Овсяное молоко", 50),
            modifier("soy-milk", "Соевое молоко", 50),
            modifier("almond-milk", "Миндальное молоко", 60),
        ],
    }
}

fn syrup_group() -> ModifierGroup {
    ModifierGroup {
        id: "syrup".to_string(),
        name: "Сироп".to_string(),
        selection: SelectionType::Multiple,
        items: vec![
            modifier("no-syrup", "Без сиропа", 0),
            modifier("vanilla", "Ванильный", 40),
            modifier("caramel", "Карамельный", 40),
            modifier("hazelnut", "Ореховый", 40),
        ],
    }
}

fn extras_group() -> ModifierGroup {
    ModifierGroup {
        id: "extras".to_string(),
        name: "Добавки".to_string(),
        selection: SelectionType::Multiple,
        items: vec![
            modifier("extra-shot", "Доп. шот эспрессо", 70),
            modifier("cinnamon", "Корица", 20),
            modifier("whipped-cream", "Взбитые сливки", 60),
        ],
    }
}

fn drink(
    id: &str,
    name: &str,
    category: &str,
    price: i64,
    prep_minutes: i64,
    modifier_groups: Vec<ModifierGroup>,
) -> Drink {
    Drink {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price,
        prep_minutes,
        modifier_groups,
    }
}

static CATALOG: Lazy<Vec<Drink>> = Lazy::new(|| {
    vec![
        drink("cappuccino", "Капучино", "Кофе", 250, 3, vec![milk_group(), syrup_group(), extras_group()]),
        drink("latte", "Латте", "Кофе", 280, 4, vec![milk_group(), syrup_group(), extras_group()]),
        drink("espresso", "Эспрессо", "Кофе", 150, 2, vec![extras_group()]),
        drink("americano", "Американо", "Кофе", 180, 2, vec![extras_group()]),
        drink("mocha", "Мокка", "Кофе", 320, 5, vec![milk_group(), extras_group()]),
        drink("flat-white", "Флэт Уайт", "Кофе", 260, 3, vec![milk_group()]),
        drink("iced-coffee", "Холодный кофе", "Холодные напитки", 220, 3, vec![syrup_group()]),
        drink("herbal-tea", "Травяной чай", "Чай", 120, 2, vec![]),
        drink("black-tea", "Черный чай", "Чай", 120, 2, vec![]),
        drink("green-tea", "Зеленый чай", "Чай", 120, 2, vec![]),
    ]
});

/// The full assortment
pub fn catalog() -> &'static [Drink] {
    &CATALOG
}

pub fn find_drink(id: &str) -> Option<&'static Drink> {
    CATALOG.iter().find(|d| d.id == id)
}

/// Categories in catalog order, each with its drinks
pub fn categories() -> Vec<(String, Vec<&'static Drink>)> {
    let mut result: Vec<(String, Vec<&'static Drink>)> = Vec::new();
    for d in CATALOG.iter() {
        match result.iter_mut().find(|(c, _)| *c == d.category) {
            Some((_, drinks)) => drinks.push(d),
            None => result.push((d.category.clone(), vec![d])),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drink_ids_are_unique() {
        let mut ids: Vec<&str> = catalog().iter().map(|d| d.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn single_groups_have_items() {
        // A single-choice group defaults to its first item, so it must not be empty
        for d in catalog() {
            for g in &d.modifier_groups {
                if g.selection == SelectionType::Single {
                    assert!(!g.items.is_empty(), "empty single group {} in {}", g.id, d.id);
                }
            }
        }
    }

    #[test]
    fn categories_keep_catalog_order() {
        let cats = categories();
        let names: Vec<&str> = cats.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(names, vec!["Кофе", "Холодные напитки", "Чай"]);
        assert_eq!(cats[0].1.len(), 6);
    }

    #[test]
    fn syrup_group_offers_an_explicit_no_syrup_option() {
        let latte = find_drink("latte").unwrap();
        let syrup = latte.modifier_groups.iter().find(|g| g.id == "syrup").unwrap();
        assert_eq!(syrup.selection, SelectionType::Multiple);
        let none = syrup.items.iter().find(|m| m.id == "no-syrup").unwrap();
        assert_eq!(none.price, 0);
    }

    #[test]
    fn find_drink_by_id() {
        assert_eq!(find_drink("latte").unwrap().price, 280);
        assert!(find_drink("unknown").is_none());
    }
}

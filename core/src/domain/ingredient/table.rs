use std::collections::HashMap;

use crate::domain::{common::normalize_ingredient_name, ingredient::entities::IngredientRecord};

/// In-memory ingredient knowledge base keyed by normalized ingredient name.
#[derive(Debug, Clone, Default)]
pub struct IngredientTable {
    entries: HashMap<String, IngredientRecord>,
}

impl IngredientTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from records in load order; later duplicates replace
    /// earlier ones.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = IngredientRecord>,
    {
        let mut table = Self::new();
        for record in records {
            table.insert(record);
        }
        table
    }

    pub fn insert(&mut self, record: IngredientRecord) {
        let key = normalize_ingredient_name(&record.ingredient);
        self.entries.insert(key, record);
    }

    pub fn get(&self, name: &str) -> Option<&IngredientRecord> {
        self.entries.get(&normalize_ingredient_name(name))
    }

    /// Looks a name up, falling back to the "not found" record on a miss
    pub fn lookup(&self, name: &str) -> IngredientRecord {
        self.get(name)
            .cloned()
            .unwrap_or_else(|| IngredientRecord::not_found(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ingredient: &str, category: &str, concern: &str) -> IngredientRecord {
        IngredientRecord {
            ingredient: ingredient.to_string(),
            category: category.to_string(),
            comedogenic_score: "4".to_string(),
            note: String::new(),
            concern: concern.to_string(),
        }
    }

    #[test]
    fn test_lookup_ignores_case_and_whitespace() {
        let table = IngredientTable::from_records([record(
            "Dimethicone",
            "Silicone",
            "Pore-clogging, Silicone",
        )]);

        let found = table.lookup("  DIMETHICONE ");
        assert_eq!(found.ingredient, "Dimethicone");
        assert_eq!(found.category, "Silicone");
        assert_eq!(found.concern, "Pore-clogging, Silicone");
    }

    #[test]
    fn test_lookup_miss_returns_fallback() {
        let table = IngredientTable::new();

        let found = table.lookup(" Snail Mucin ");
        assert_eq!(found, IngredientRecord::not_found("Snail Mucin"));
        assert_eq!(found.category, "Unknown");
        assert_eq!(found.note, "Not found in database");
    }

    #[test]
    fn test_duplicate_rows_last_write_wins() {
        let table = IngredientTable::from_records([
            record("Glycerin", "Humectant", "None"),
            record("glycerin ", "Solvent", "None"),
        ]);

        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("Glycerin").category, "Solvent");
    }
}

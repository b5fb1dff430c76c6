use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use serde::Deserialize;
use tracing::instrument;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::{IngredientRecord, NO_CONCERN},
        ports::IngredientRepository,
        table::IngredientTable,
    },
};

pub const INGREDIENT_COLUMN: &str = "Ingredient";

/// Raw CSV row; absent columns and empty fields deserialize to `None`
#[derive(Debug, Deserialize)]
struct IngredientRow {
    #[serde(rename = "Ingredient")]
    ingredient: String,
    #[serde(rename = "Category", default)]
    category: Option<String>,
    #[serde(rename = "ComedogenicScore", default)]
    comedogenic_score: Option<String>,
    #[serde(rename = "Note", default)]
    note: Option<String>,
    #[serde(rename = "Concern", default)]
    concern: Option<String>,
}

impl From<IngredientRow> for IngredientRecord {
    fn from(row: IngredientRow) -> Self {
        Self {
            ingredient: row.ingredient,
            category: row.category.unwrap_or_default(),
            comedogenic_score: row.comedogenic_score.unwrap_or_default(),
            note: row.note.unwrap_or_default(),
            concern: row.concern.unwrap_or_else(|| NO_CONCERN.to_string()),
        }
    }
}

/// Parse an ingredient table from CSV text with a header row
pub fn read_ingredient_table<R: Read>(reader: R) -> Result<IngredientTable, CoreError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| CoreError::IngredientDatabase(format!("Failed to read header: {}", e)))?;
    if !headers.iter().any(|h| h == INGREDIENT_COLUMN) {
        return Err(CoreError::IngredientDatabase(format!(
            "Missing '{}' column",
            INGREDIENT_COLUMN
        )));
    }

    let mut table = IngredientTable::new();
    for (index, row) in csv_reader.deserialize::<IngredientRow>().enumerate() {
        match row {
            Ok(row) => table.insert(row.into()),
            Err(e) => {
                tracing::warn!(row = index + 2, error = %e, "Skipping malformed ingredient row");
            }
        }
    }

    Ok(table)
}

/// Load the ingredient table from disk. A missing file yields an empty table.
pub fn load_ingredient_table(path: &Path) -> Result<IngredientTable, CoreError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Ingredient database not found, starting empty");
            return Ok(IngredientTable::new());
        }
        Err(e) => {
            return Err(CoreError::IngredientDatabase(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )));
        }
    };

    read_ingredient_table(file)
}

/// CSV-backed ingredient repository holding an immutable, swappable table
#[derive(Debug, Clone)]
pub struct CsvIngredientRepository {
    path: PathBuf,
    table: Arc<RwLock<Arc<IngredientTable>>>,
}

impl CsvIngredientRepository {
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref().to_path_buf();
        let table = load_ingredient_table(&path)?;

        tracing::info!(count = table.len(), "Ingredient database loaded");

        Ok(Self {
            path,
            table: Arc::new(RwLock::new(Arc::new(table))),
        })
    }

    fn snapshot(&self) -> Arc<IngredientTable> {
        let guard = self.table.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }
}

impl IngredientRepository for CsvIngredientRepository {
    fn lookup(&self, name: &str) -> IngredientRecord {
        self.snapshot().lookup(name)
    }

    fn count(&self) -> usize {
        self.snapshot().len()
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn reload(&self) -> Result<usize, CoreError> {
        let table = load_ingredient_table(&self.path)?;
        let count = table.len();
        if table.is_empty() {
            tracing::warn!("Reloaded ingredient database is empty");
        }

        let mut guard = self.table.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::new(table);

        Ok(count)
    }
}

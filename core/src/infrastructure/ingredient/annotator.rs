use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use tracing::instrument;

use crate::{
    domain::{common::entities::app_errors::CoreError, ingredient::classifier::classify},
    infrastructure::ingredient::csv_repository::INGREDIENT_COLUMN,
};

pub const CONCERN_COLUMN: &str = "Concern";
pub const SCORE_COLUMN: &str = "ComedogenicScore";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotationSummary {
    pub rows: usize,
    pub flagged: usize,
}

/// Copy a CSV table, filling the `Concern` column from the classifier.
///
/// Every column is preserved. `Concern` is overwritten when present and
/// appended otherwise.
pub fn annotate_ingredients<R: Read, W: Write>(
    reader: R,
    writer: W,
) -> Result<AnnotationSummary, CoreError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut headers = csv_reader
        .headers()
        .map_err(|e| CoreError::IngredientDatabase(format!("Failed to read header: {}", e)))?
        .clone();

    let ingredient_index = headers
        .iter()
        .position(|h| h == INGREDIENT_COLUMN)
        .ok_or_else(|| {
            CoreError::IngredientDatabase(format!("Missing '{}' column", INGREDIENT_COLUMN))
        })?;
    let score_index = headers.iter().position(|h| h == SCORE_COLUMN);
    let concern_index = match headers.iter().position(|h| h == CONCERN_COLUMN) {
        Some(index) => index,
        None => {
            headers.push_field(CONCERN_COLUMN);
            headers.len() - 1
        }
    };

    csv_writer.write_record(&headers).map_err(write_error)?;

    let mut summary = AnnotationSummary::default();
    for record in csv_reader.records() {
        let record = record.map_err(|e| {
            CoreError::IngredientDatabase(format!("Failed to read row: {}", e))
        })?;

        let name = record.get(ingredient_index).unwrap_or_default();
        let score = score_index.and_then(|index| record.get(index));
        let concerns = classify(name, score);

        let mut fields: Vec<String> = record.iter().map(str::to_string).collect();
        fields.resize(headers.len(), String::new());
        fields[concern_index] = concerns.to_string();

        csv_writer.write_record(&fields).map_err(write_error)?;

        summary.rows += 1;
        if !concerns.is_empty() {
            summary.flagged += 1;
        }
    }

    csv_writer
        .flush()
        .map_err(|e| CoreError::IngredientDatabase(format!("Failed to flush output: {}", e)))?;

    Ok(summary)
}

#[instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn annotate_ingredient_file(
    input: &Path,
    output: &Path,
) -> Result<AnnotationSummary, CoreError> {
    let source = File::open(input).map_err(|e| {
        CoreError::IngredientDatabase(format!("Failed to open {}: {}", input.display(), e))
    })?;
    let target = File::create(output).map_err(|e| {
        CoreError::IngredientDatabase(format!("Failed to create {}: {}", output.display(), e))
    })?;

    let summary = annotate_ingredients(source, target)?;
    tracing::info!(
        rows = summary.rows,
        flagged = summary.flagged,
        "Annotated ingredient table"
    );

    Ok(summary)
}

fn write_error(e: csv::Error) -> CoreError {
    CoreError::IngredientDatabase(format!("Failed to write row: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ingredient::csv_repository::read_ingredient_table;

    fn annotate(input: &str) -> (String, AnnotationSummary) {
        let mut output = Vec::new();
        let summary = annotate_ingredients(input.as_bytes(), &mut output).unwrap();
        (String::from_utf8(output).unwrap(), summary)
    }

    #[test]
    fn test_appends_concern_column() {
        let (output, summary) = annotate(
            "Ingredient,Category,ComedogenicScore,Note\n\
             Dimethicone,Silicone,4,Occlusive\n\
             Glycerin,Humectant,0,\n",
        );

        assert_eq!(summary, AnnotationSummary { rows: 2, flagged: 1 });
        assert_eq!(
            output,
            "Ingredient,Category,ComedogenicScore,Note,Concern\n\
             Dimethicone,Silicone,4,Occlusive,\"Pore-clogging, Silicone\"\n\
             Glycerin,Humectant,0,,None\n"
        );
    }

    #[test]
    fn test_overwrites_existing_concern_column() {
        let (output, _) = annotate("Ingredient,Concern,Note\nParfum,stale,keep me\n");

        assert_eq!(output, "Ingredient,Concern,Note\nParfum,Irritant,keep me\n");
    }

    #[test]
    fn test_missing_ingredient_column_is_rejected() {
        let mut output = Vec::new();
        let result = annotate_ingredients("Name,Note\nWater,\n".as_bytes(), &mut output);

        assert!(matches!(result, Err(CoreError::IngredientDatabase(_))));
    }

    #[test]
    fn test_annotated_output_feeds_lookup_table() {
        let (output, _) = annotate(
            "Ingredient,Category,ComedogenicScore,Note\nDimethicone,Silicone,4,Occlusive\n",
        );

        let table = read_ingredient_table(output.as_bytes()).unwrap();
        let record = table.lookup("DIMETHICONE ");

        assert!(record.concern.contains("Pore-clogging"));
        assert!(record.concern.contains("Silicone"));
        assert!(record.has_concerns());
    }

    #[test]
    fn test_annotate_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("acne_ingredients.csv");
        let output = dir.path().join("acne_ingredients_with_concern.csv");
        std::fs::write(&input, "Ingredient,ComedogenicScore\nMineral Oil,2\n").unwrap();

        let summary = annotate_ingredient_file(&input, &output).unwrap();

        assert_eq!(summary.rows, 1);
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "Ingredient,ComedogenicScore,Concern\nMineral Oil,2,Petroleum-based\n"
        );
    }
}

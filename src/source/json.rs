use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use super::Grid;

pub(super) fn load_file(path: &Path) -> Result<Grid> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;
    parse_grid(&content).with_context(|| format!("Failed to parse source file: {}", path.display()))
}

/// Parse a JSON array of rows into a [`Grid`].
///
/// Cells may be strings, numbers, booleans or `null` (read as blank).
pub fn parse_grid(content: &str) -> Result<Grid> {
    let value: Value = serde_json::from_str(content)?;
    let Value::Array(rows) = value else {
        bail!("Root of the source table must be an array of rows");
    };

    let mut grid = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        let Value::Array(cells) = row else {
            bail!("Row {} of the source table is not an array", index + 1);
        };
        let cells = cells
            .into_iter()
            .enumerate()
            .map(|(column, cell)| cell_text(cell, index, column))
            .collect::<Result<Vec<_>>>()?;
        grid.push(cells);
    }

    Ok(Grid::new(grid))
}

fn cell_text(cell: Value, row: usize, column: usize) -> Result<String> {
    match cell {
        Value::Null => Ok(String::new()),
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Array(_) | Value::Object(_) => bail!(
            "Cell at row {}, column {} must be a scalar value",
            row + 1,
            column + 1
        ),
    }
}

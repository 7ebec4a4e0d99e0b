use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::DatasetError;
use super::model::{Dataset, PokemonRecord};

/// Columns the dashboard cannot work without. Any others are kept for the
/// table dump only.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "name", "type1", "attack", "defense", "hp", "height_m", "kg", "speed",
];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the dataset from a CSV file on disk.
pub fn load_csv(path: &Path) -> Result<Dataset, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = from_reader(file)?;
    log::info!(
        "Loaded {} records with columns {:?} from {}",
        dataset.len(),
        dataset.headers,
        path.display()
    );
    Ok(dataset)
}

/// Parse a dataset from any CSV byte stream with a header row.
pub fn from_reader<R: Read>(input: R) -> Result<Dataset, DatasetError> {
    let mut reader = csv::Reader::from_reader(input);
    let header_record = reader.headers()?.clone();

    for col in REQUIRED_COLUMNS {
        if !header_record.iter().any(|h| h == col) {
            return Err(DatasetError::MissingColumn(col.to_string()));
        }
    }

    let mut records = Vec::new();
    let mut rows = Vec::new();

    for (row, result) in reader.records().enumerate() {
        let raw = result?;
        let record: PokemonRecord = raw
            .deserialize(Some(&header_record))
            .map_err(|source| DatasetError::Record { row, source })?;
        rows.push(raw.iter().map(str::to_string).collect());
        records.push(record);
    }

    warn_on_duplicate_names(&records);

    Ok(Dataset {
        records,
        headers: header_record.iter().map(str::to_string).collect(),
        rows,
    })
}

/// Lookups by name take the first row; make ambiguity visible in the log.
fn warn_on_duplicate_names(records: &[PokemonRecord]) {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for r in records {
        *seen.entry(r.name.as_str()).or_default() += 1;
    }
    let duplicated = seen.values().filter(|&&n| n > 1).count();
    if duplicated > 0 {
        log::warn!("{duplicated} names appear on more than one row; selecting them shows the first row");
    }
}

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, ArrayRef, AsArray, Float64Array, StringArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::error::DatasetError;
use super::model::{
    COL_CRITIC_SCORE, COL_GENRE, COL_NAME, COL_PLATFORM, COL_PUBLISHER, COL_RATING,
    COL_USER_SCORE, COL_YEAR, GameDataset, MIN_RELEASE_YEAR, REQUIRED_COLUMNS, RawRecord,
    is_blank_cell,
};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the games dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the column names in [`REQUIRED_COLUMNS`]
/// * `.json`    – `[{ "Name": ..., "Platform": ..., ... }, ...]`
/// * `.parquet` – one column per field, numeric columns of any numeric or string type
///
/// Incomplete rows and rows released before [`MIN_RELEASE_YEAR`] are dropped.
pub fn load_file(path: &Path) -> Result<GameDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let raw = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!(DatasetError::UnsupportedExtension(other.to_string())),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    Ok(clean(raw)?)
}

/// Apply the cleaning policy to raw rows and build the dataset.
///
/// Rows with any missing field are dropped first, then rows released before
/// [`MIN_RELEASE_YEAR`]. Neither is an error; only an empty result is.
pub fn clean(raw: Vec<RawRecord>) -> Result<GameDataset, DatasetError> {
    let total = raw.len();

    let complete: Vec<_> = raw.into_iter().filter_map(RawRecord::into_record).collect();
    let incomplete = total - complete.len();

    let records: Vec<_> = complete
        .into_iter()
        .filter(|rec| rec.year >= MIN_RELEASE_YEAR)
        .collect();
    let too_old = total - incomplete - records.len();

    if incomplete + too_old > 0 {
        log::warn!(
            "Dropped {incomplete} incomplete and {too_old} pre-{MIN_RELEASE_YEAR} rows out of {total}"
        );
    }

    let dataset = GameDataset::from_records(records).ok_or(DatasetError::NoUsableRecords {
        min_year: MIN_RELEASE_YEAR,
    })?;

    log::info!(
        "Loaded {} records: {} genres, {} ratings, {} platforms, years {}",
        dataset.len(),
        dataset.domains.genres.len(),
        dataset.domains.ratings.len(),
        dataset.domains.platforms.len(),
        dataset.domains.year_range,
    );
    Ok(dataset)
}

/// Fail with [`DatasetError::MissingColumn`] for the first required column not in `present`.
fn check_columns<'a>(present: impl IntoIterator<Item = &'a str>) -> Result<(), DatasetError> {
    let present: BTreeSet<&str> = present.into_iter().map(str::trim).collect();
    match REQUIRED_COLUMNS.iter().find(|col| !present.contains(*col)) {
        Some(col) => Err(DatasetError::MissingColumn(col.to_string())),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one release per row.
/// Extra columns (sales figures, developer, ...) are not kept, but a blank
/// cell in any of them still marks the row incomplete.
fn load_csv(path: &Path) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .context("opening CSV")?;

    let headers = reader.headers().context("reading CSV headers")?.clone();
    check_columns(headers.iter())?;

    reader
        .records()
        .enumerate()
        .map(|(row_no, result)| {
            let record = result.with_context(|| format!("CSV row {row_no}"))?;
            let mut raw: RawRecord = record
                .deserialize(Some(&headers))
                .with_context(|| format!("CSV row {row_no}"))?;
            raw.has_blank_cell = record.iter().any(is_blank_cell);
            Ok(raw)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "Name": "Halo 2", "Platform": "XB", "Year_of_Release": 2004,
///     "Genre": "Shooter", "Publisher": "Microsoft Game Studios",
///     "Critic_Score": 95, "User_Score": "7.7", "Rating": "M" },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<RawRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root
        .as_array()
        .context("Expected top-level JSON array")?;

    let mut rows = Vec::with_capacity(records.len());
    let mut keys = BTreeSet::new();

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        keys.extend(obj.keys().map(String::as_str));

        rows.push(RawRecord {
            name: obj.get(COL_NAME).and_then(json_text),
            platform: obj.get(COL_PLATFORM).and_then(json_text),
            year: obj.get(COL_YEAR).and_then(json_number),
            genre: obj.get(COL_GENRE).and_then(json_text),
            publisher: obj.get(COL_PUBLISHER).and_then(json_text),
            critic_score: obj.get(COL_CRITIC_SCORE).and_then(json_number),
            user_score: obj.get(COL_USER_SCORE).and_then(json_number),
            rating: obj.get(COL_RATING).and_then(json_text),
            has_blank_cell: obj.values().any(json_is_blank),
        });
    }

    check_columns(keys)?;
    Ok(rows)
}

fn json_text(val: &JsonValue) -> Option<String> {
    match val {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn json_is_blank(val: &JsonValue) -> bool {
    match val {
        JsonValue::Null => true,
        JsonValue::String(s) => is_blank_cell(s),
        _ => false,
    }
}

fn json_number(val: &JsonValue) -> Option<f64> {
    match val {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one column per field.
///
/// Text columns are cast to `Utf8` and numeric columns to `Float64`, so files
/// written by **Pandas** (nullable floats, `tbd` strings) and **Polars** both
/// load. Cells that fail the cast become nulls.
fn load_parquet(path: &Path) -> Result<Vec<RawRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    check_columns(builder.schema().fields().iter().map(|f| f.name().as_str()))?;
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        let name = column_as(&batch, COL_NAME, &DataType::Utf8)?;
        let platform = column_as(&batch, COL_PLATFORM, &DataType::Utf8)?;
        let year = column_as(&batch, COL_YEAR, &DataType::Float64)?;
        let genre = column_as(&batch, COL_GENRE, &DataType::Utf8)?;
        let publisher = column_as(&batch, COL_PUBLISHER, &DataType::Utf8)?;
        let critic = column_as(&batch, COL_CRITIC_SCORE, &DataType::Float64)?;
        let user = column_as(&batch, COL_USER_SCORE, &DataType::Float64)?;
        let rating = column_as(&batch, COL_RATING, &DataType::Utf8)?;

        // Every column, required or not, as text where it casts.
        let cells: Vec<ArrayRef> = batch
            .columns()
            .iter()
            .map(|col| cast(col.as_ref(), &DataType::Utf8).unwrap_or_else(|_| col.clone()))
            .collect();

        for row in 0..batch.num_rows() {
            rows.push(RawRecord {
                name: text_at(name.as_string(), row),
                platform: text_at(platform.as_string(), row),
                year: number_at(year.as_primitive::<Float64Type>(), row),
                genre: text_at(genre.as_string(), row),
                publisher: text_at(publisher.as_string(), row),
                critic_score: number_at(critic.as_primitive::<Float64Type>(), row),
                user_score: number_at(user.as_primitive::<Float64Type>(), row),
                rating: text_at(rating.as_string(), row),
                has_blank_cell: cells.iter().any(|col| cell_is_blank(col, row)),
            });
        }
    }

    Ok(rows)
}

// -- Parquet / Arrow helpers --

/// Fetch a column by name and cast it to `to`.
fn column_as(batch: &RecordBatch, name: &str, to: &DataType) -> Result<ArrayRef> {
    let col = batch
        .column_by_name(name)
        .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))?;
    cast(col.as_ref(), to).with_context(|| format!("casting column '{name}' to {to:?}"))
}

fn text_at(col: &StringArray, row: usize) -> Option<String> {
    (!col.is_null(row)).then(|| col.value(row).to_string())
}

fn cell_is_blank(col: &ArrayRef, row: usize) -> bool {
    col.is_null(row)
        || col
            .as_string_opt::<i32>()
            .is_some_and(|s| is_blank_cell(s.value(row)))
}

fn number_at(col: &Float64Array, row: usize) -> Option<f64> {
    (!col.is_null(row)).then(|| col.value(row))
}

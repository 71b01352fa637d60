use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::Value;

use crate::error::AppError;

pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<Value>, AppError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
    let value: Value = serde_json::from_str(&raw).map_err(|e| AppError::json(path, e))?;

    match value {
        Value::Array(items) => Ok(items),
        _ => Err(AppError::NotAnArray { path: path.to_path_buf() }),
    }
}

pub fn count_records(path: impl AsRef<Path>) -> Result<usize, AppError> {
    read_records(path).map(|items| items.len())
}

pub fn write_records(path: impl AsRef<Path>, records: &[Value]) -> Result<(), AppError> {
    let path = path.as_ref();
    let file = fs::File::create(path).map_err(|e| AppError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, records).map_err(|e| AppError::json(path, e))?;
    writer.write_all(b"\n").map_err(|e| AppError::io(path, e))?;
    writer.flush().map_err(|e| AppError::io(path, e))?;

    tracing::info!(path = %path.display(), records = records.len(), "wrote JSON export");
    Ok(())
}

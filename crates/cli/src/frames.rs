//! Per-frame reference positions as a table (CSV or Parquet).

use anyhow::{Context, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

use crate::track::Frame;

pub fn frames_table(frames: &[Frame]) -> PolarsResult<DataFrame> {
    // usize -> u64 is lossless on every supported target.
    let index: Vec<u64> = frames.iter().map(|f| f.index as u64).collect();
    let x: Vec<f64> = frames.iter().map(|f| f.reference.x).collect();
    let y: Vec<f64> = frames.iter().map(|f| f.reference.y).collect();
    df!("frame" => index, "ref_x" => x, "ref_y" => y)
}

/// Write `frames` to `path`; `.parquet` selects Parquet, anything else CSV.
pub fn write_frames(path: &Path, frames: &[Frame]) -> Result<()> {
    let mut df = frames_table(frames)?;
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") => {
            ParquetWriter::new(file)
                .finish(&mut df)
                .with_context(|| format!("writing parquet {}", path.display()))?;
        }
        _ => {
            let mut file = file;
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(&mut df)
                .with_context(|| format!("writing csv {}", path.display()))?;
        }
    }
    tracing::info!(rows = df.height(), path = %path.display(), "frames_written");
    Ok(())
}

use crate::types::Collection;
use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Writes `collection` as 2-space indented JSON, replacing any existing file.
pub fn write_collection<P: AsRef<Path>>(path: P, collection: &Collection) -> Result<()>
where
    P: std::fmt::Debug,
{
    let file = File::create(path.as_ref())
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, collection)
        .with_context(|| format!("Failed to write collection to: {:?}", path))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush file: {:?}", path))?;
    log::debug!("wrote {} items to {:?}", collection.item.len(), path);
    Ok(())
}

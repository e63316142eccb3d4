use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Writes the profile map as an INI document with sections sorted by name.
/// The document goes to a sibling temp file first and is renamed over the
/// target, so the store file is never left partially written.
pub fn serialize_write_ordered<T>(profiles: &HashMap<String, T>, path: &Path) -> Result<()>
where
    T: Serialize,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("tmp");
    {
        let file = File::create(&tmp_path)?;
        let mut writer = BufWriter::new(file);

        let mut sorted_profiles: Vec<_> = profiles.iter().collect();
        sorted_profiles.sort_by_key(|x| x.0);

        for (key, profile) in sorted_profiles {
            writeln!(writer, "[{}]", key)?;
            serde_ini::to_writer(&mut writer, profile)?;
            writeln!(writer)?;
        }

        writer.flush()?;
    }
    fs::rename(&tmp_path, path)?;

    info!("Role profile store rewritten");

    Ok(())
}

//! Sample command implementation - print or write an example well file

use anyhow::Result;
use std::path::PathBuf;

use crate::config::WellFile;

pub fn execute(output: Option<PathBuf>, open_hole: bool) -> Result<()> {
    let well = WellFile::example(open_hole);

    match output {
        Some(path) => {
            well.save_to_file(&path)?;
            log::info!("Wrote example well file to {}", path.display());
        }
        None => print!("{}", well.to_toml()?),
    }

    Ok(())
}

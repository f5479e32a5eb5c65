use std::{io, path::PathBuf};

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

const SUBDIR: &str = "cropboard";

#[derive(Debug, EnumIter)]
pub enum Dirs {
    Config,
}

impl Dirs {
    /// `None` when the platform has no such directory.
    pub fn path(&self) -> Option<PathBuf> {
        match *self {
            Dirs::Config => dirs::config_dir().map(|dir| dir.join(SUBDIR)),
        }
    }
}

impl Dirs {
    pub fn initialize_dirs() -> io::Result<()> {
        for path in Dirs::iter().filter_map(|dir| dir.path()) {
            if !path.exists() {
                std::fs::create_dir_all(path)?;
            }
        }
        Ok(())
    }
}

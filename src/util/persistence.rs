use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde_json::Error as SerdeError;

use crate::domain::PersistedState;

const APP_QUALIFIER: &str = "eu";
const APP_ORG: &str = "RoxToolbox";
const APP_NAME: &str = "RoxToolbox";

const STATE_FILENAME: &str = "state.json";

pub fn state_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(STATE_FILENAME))
}

pub fn load_persisted_state() -> Option<PersistedState> {
    let path = state_file()?;
    let data = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&data) {
        Ok(state) => Some(state),
        Err(err) => {
            println!("[persist] Ignoring unreadable state file: {err}");
            None
        }
    }
}

pub fn save_persisted_state(state: &PersistedState) -> Result<(), PersistSaveError> {
    let path = state_file().ok_or(PersistSaveError::StorageUnavailable)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn delete_persisted_state() -> Result<(), PersistSaveError> {
    let path = state_file().ok_or(PersistSaveError::StorageUnavailable)?;
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

//! Loader for the combat RON file at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::CombatParams;
use super::validation::validate_params;

/// Path of the combat parameter file, relative to the working directory.
pub const COMBAT_PARAMS_PATH: &str = "assets/data/combat.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse combat parameters from RON text. `source` only labels errors.
pub fn parse_combat_params(
    source: &str,
    contents: &str,
) -> Result<CombatParams, ContentLoadError> {
    ron_options().from_str(contents).map_err(|e| ContentLoadError {
        file: source.to_string(),
        message: format!("Parse error: {}", e),
    })
}

/// Load combat parameters from a RON file.
pub fn load_combat_params(path: &Path) -> Result<CombatParams, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_combat_params(&file_name, &contents)
}

/// Startup system: replace the default parameters with the ones on disk when
/// they load and validate cleanly.
pub(crate) fn load_combat_params_on_startup(mut params: ResMut<CombatParams>) {
    let path = Path::new(COMBAT_PARAMS_PATH);
    let loaded = match load_combat_params(path) {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!("{}; keeping built-in combat parameters", e);
            return;
        }
    };

    let errors = validate_params(&loaded);
    if !errors.is_empty() {
        for error in &errors {
            warn!("Combat parameter validation: {}", error);
        }
        warn!(
            "{} invalid combat parameter(s) in {}; keeping built-in values",
            errors.len(),
            COMBAT_PARAMS_PATH
        );
        return;
    }

    info!(
        "Loaded combat parameters from {} (schema v{})",
        COMBAT_PARAMS_PATH, loaded.schema_version
    );
    *params = loaded;
}

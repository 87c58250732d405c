//! Dotenv file loading
//!
//! `.env.<environment>` is loaded before `.env`, so its values win. The
//! environment itself may be set in the process or in `.env` alone.

use std::collections::HashMap;

use stv_shared::config::Environment;

const BASE_ENV_FILE: &str = ".env";

/// Loads the environment-specific file and then `.env` into the process
pub fn load() -> Environment {
    let base = read_env_file(BASE_ENV_FILE);
    let environment = resolve_environment(|key| std::env::var(key).ok(), &base);

    dotenvy::from_filename(environment.env_file()).ok();
    dotenvy::from_filename(BASE_ENV_FILE).ok();
    environment
}

/// Resolves the environment, preferring process variables over `.env` entries
pub fn resolve_environment<F>(process: F, base: &HashMap<String, String>) -> Environment
where
    F: Fn(&str) -> Option<String>,
{
    Environment::from_source(|key| process(key).or_else(|| base.get(key).cloned()))
}

/// Reads a dotenv file without touching the process; missing files read as empty
fn read_env_file(path: &str) -> HashMap<String, String> {
    dotenvy::from_filename_iter(path)
        .map(|entries| entries.filter_map(Result::ok).collect())
        .unwrap_or_default()
}

//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AssembleError, AssembleResult};

use super::types::{Config, Verbosity};

/// Config file looked up in the project root
pub const CONFIG_FILE_NAME: &str = "rea.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AssembleResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| AssembleError::io(path, e))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AssembleError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    config
        .paths
        .validate()
        .map_err(|e| AssembleError::Config {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the config for a project root.
///
/// An explicit path must exist; the implicit `<root>/rea.toml` is optional.
/// Environment overrides are applied last.
pub fn load_for_root(
    root: &Path,
    explicit: Option<&Path>,
) -> AssembleResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => {
            let implicit = root.join(CONFIG_FILE_NAME);
            if implicit.is_file() {
                load_with_warnings(&implicit)?
            } else {
                (Config::default(), Vec::new())
            }
        }
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (REA_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // REA_BUILD_TOOL
    if let Some(tool) = get_env("REA_BUILD_TOOL") {
        if !tool.trim().is_empty() {
            config.build.tool = tool;
        }
    }

    // REA_VERBOSITY
    if let Some(verbosity) = get_env("REA_VERBOSITY") {
        config.output.verbosity = Verbosity::from_name(&verbosity);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "paths",
        "engine_project",
        "game_project",
        "game_publish_dir",
        "engine_build_dir",
        "game_assets_dir",
        "build",
        "tool",
        "output",
        "verbosity",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levenshtein_basics() {
        assert_eq!(levenshtein("tool", "tool"), 0);
        assert_eq!(levenshtein("tol", "tool"), 1);
        assert_eq!(levenshtein("", "abc"), 3);
    }

    #[test]
    fn suggest_key_close_match() {
        assert_eq!(suggest_key("verbosty"), Some("verbosity".to_string()));
        assert_eq!(suggest_key("completely_unrelated"), None);
    }

    #[test]
    fn find_line_number_is_one_based() {
        let content = "[build]\ntool = \"dotnet\"\ntoool = 1\n";
        assert_eq!(find_line_number(content, "toool"), Some(3));
        assert_eq!(find_line_number(content, "missing"), None);
    }
}

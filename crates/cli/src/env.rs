use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::CliError;

/// Environment variables from the process, optionally extended by a .env
/// file. Entries from the file win over the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvManager {
    vars: HashMap<String, String>,
}

impl EnvManager {
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Load variables from a .env file
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CliError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::EnvFile(format!("failed to read {}: {}", path.display(), e))
        })?;

        self.parse_env_content(&content)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn parse_env_content(&mut self, content: &str) -> Result<(), CliError> {
        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(CliError::EnvFile(format!(
                    "malformed line {} (expected KEY=VALUE)",
                    line_num + 1
                )));
            };

            let key = key.trim();
            if key.is_empty() {
                return Err(CliError::EnvFile(format!(
                    "empty key at line {}",
                    line_num + 1
                )));
            }

            self.vars.insert(key.to_string(), unquote(value));
        }

        Ok(())
    }
}

fn unquote(value: &str) -> String {
    let value = value.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner.to_string();
        }
    }
    value.to_string()
}

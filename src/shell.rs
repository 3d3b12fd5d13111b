//! Shell Environment
//!
//! Main entry point: ties together the command registry, parser and
//! interpreter.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::commands::{Application, CommandRegistry};
use crate::interpreter::{ExecResult, Interpreter, ShellError};
use crate::parser::Parser;

/// Options for creating a Shell, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellOptions {
    /// Prefix that selects unsafe dispatch for an application name
    pub unsafe_prefix: char,
    /// Run programs from PATH when no built-in has the name
    pub external_fallback: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            unsafe_prefix: '_',
            external_fallback: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ShellOptions {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

/// The main shell environment.
pub struct Shell {
    registry: CommandRegistry,
    parser: Parser,
}

impl Shell {
    /// Create a shell with every built-in registered.
    pub fn new(options: ShellOptions) -> Self {
        Self {
            registry: CommandRegistry::with_builtins(options),
            parser: Parser::new(),
        }
    }

    /// Add or replace an application.
    pub fn register(&mut self, app: Box<dyn Application>) {
        self.registry.register(app);
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Parse and evaluate one command line.
    pub fn exec(&mut self, line: &str) -> Result<ExecResult, ShellError> {
        let ast = self.parser.parse(line)?;
        Interpreter::new(&self.registry).evaluate(&ast)
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(ShellOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ShellOptions::default();
        assert_eq!(options.unsafe_prefix, '_');
        assert!(options.external_fallback);
    }

    #[test]
    fn test_options_from_toml() {
        let options = ShellOptions::from_toml_str("unsafe_prefix = \"!\"\n").unwrap();
        assert_eq!(options.unsafe_prefix, '!');
        assert!(options.external_fallback);

        let options = ShellOptions::from_toml_str("external_fallback = false").unwrap();
        assert_eq!(options.unsafe_prefix, '_');
        assert!(!options.external_fallback);

        assert_eq!(ShellOptions::from_toml_str("").unwrap(), ShellOptions::default());
    }

    #[test]
    fn test_options_reject_unknown_keys() {
        assert!(matches!(
            ShellOptions::from_toml_str("colour = true"),
            Err(ConfigError::Parse(_))
        ));
        assert!(ShellOptions::from_toml_str("unsafe_prefix = \"ab\"").is_err());
    }

    #[test]
    fn test_load_options_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shell.toml");
        std::fs::write(&path, "external_fallback = false\n").unwrap();
        assert!(!ShellOptions::load(&path).unwrap().external_fallback);

        assert!(matches!(
            ShellOptions::load(dir.path().join("missing.toml")),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_exec() {
        let mut shell = Shell::default();
        let result = shell.exec("echo a; echo b").unwrap();
        assert_eq!(result.stdout, vec!["a\n", "b\n"]);
        assert!(matches!(shell.exec("echo 'x"), Err(ShellError::Parse(_))));
    }

    #[test]
    fn test_custom_prefix_through_shell() {
        let mut shell = Shell::new(ShellOptions {
            unsafe_prefix: '!',
            external_fallback: false,
        });
        let result = shell.exec("!ls /no/such/dir; echo ok").unwrap();
        assert_eq!(result.stdout, vec!["ok\n"]);
        assert_eq!(result.exit_code, 1);
    }
}

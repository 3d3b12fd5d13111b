// src/commands/registry.rs
use std::collections::HashMap;

use super::local_app::LocalApp;
use super::types::{Application, CommandResult};
use crate::interpreter::errors::ShellError;
use crate::shell::ShellOptions;

use super::cat::CatCommand;
use super::cd::CdCommand;
use super::cut::CutCommand;
use super::echo::EchoCommand;
use super::find::FindCommand;
use super::grep::GrepCommand;
use super::head::HeadCommand;
use super::ls::LsCommand;
use super::pwd::PwdCommand;
use super::sort::SortCommand;
use super::tail::TailCommand;
use super::uniq::UniqCommand;

/// How a failing application is reported: returned as data, or escalated.
pub type DispatchPolicy = fn(&str, CommandResult) -> Result<CommandResult, ShellError>;

/// Escalate any failure into a hard error.
pub fn safe_dispatch(name: &str, result: CommandResult) -> Result<CommandResult, ShellError> {
    if result.exit_code == 0 {
        return Ok(result);
    }
    tracing::debug!(target: "dispatch", "{} failed with exit code {}", name, result.exit_code);
    Err(ShellError::ExitNonZero {
        app: name.to_string(),
        stderr: result.stderr.join("\n"),
    })
}

/// Keep failures in the result.
pub fn unsafe_dispatch(_name: &str, result: CommandResult) -> Result<CommandResult, ShellError> {
    Ok(result)
}

pub enum AppHandle<'r> {
    Builtin(&'r dyn Application),
    External(LocalApp),
}

/// An application together with the policy chosen for this invocation
pub struct ResolvedApp<'r> {
    pub name: String,
    pub is_unsafe: bool,
    app: AppHandle<'r>,
    dispatch: DispatchPolicy,
}

impl ResolvedApp<'_> {
    pub fn run(&self, args: &[String], stdin: &[String]) -> Result<CommandResult, ShellError> {
        let result = match &self.app {
            AppHandle::Builtin(app) => app.execute(args, stdin),
            AppHandle::External(app) => app.execute(args, stdin),
        };
        (self.dispatch)(&self.name, result)
    }

    pub fn is_external(&self) -> bool {
        matches!(self.app, AppHandle::External(_))
    }
}

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Application>>,
    options: ShellOptions,
}

impl CommandRegistry {
    pub fn new(options: ShellOptions) -> Self {
        Self {
            commands: HashMap::new(),
            options,
        }
    }

    /// A registry holding every built-in application
    pub fn with_builtins(options: ShellOptions) -> Self {
        let mut registry = Self::new(options);
        register_builtins(&mut registry);
        registry
    }

    pub fn register(&mut self, cmd: Box<dyn Application>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Application> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn options(&self) -> &ShellOptions {
        &self.options
    }

    /// Resolve an application name. A leading unsafe prefix selects unsafe
    /// dispatch and is not part of the looked-up name.
    pub fn resolve(&self, name: &str) -> Result<ResolvedApp<'_>, ShellError> {
        let (bare, is_unsafe) = match name.strip_prefix(self.options.unsafe_prefix) {
            Some(rest) if !rest.is_empty() => (rest, true),
            _ => (name, false),
        };
        let dispatch: DispatchPolicy = if is_unsafe {
            unsafe_dispatch
        } else {
            safe_dispatch
        };

        let app = if let Some(builtin) = self.get(bare) {
            AppHandle::Builtin(builtin)
        } else if self.options.external_fallback {
            LocalApp::locate(bare)
                .map(AppHandle::External)
                .ok_or_else(|| ShellError::AppNotFound(bare.to_string()))?
        } else {
            return Err(ShellError::AppNotFound(bare.to_string()));
        };

        Ok(ResolvedApp {
            name: bare.to_string(),
            is_unsafe,
            app,
            dispatch,
        })
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::with_builtins(ShellOptions::default())
    }
}

fn register_builtins(registry: &mut CommandRegistry) {
    registry.register(Box::new(PwdCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(EchoCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(HeadCommand));
    registry.register(Box::new(TailCommand));
    registry.register(Box::new(GrepCommand));
    registry.register(Box::new(CutCommand));
    registry.register(Box::new(FindCommand));
    registry.register(Box::new(SortCommand));
    registry.register(Box::new(UniqCommand));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_builtins_registered() {
        let registry = CommandRegistry::default();
        assert_eq!(
            registry.names(),
            vec!["cat", "cd", "cut", "echo", "find", "grep", "head", "ls", "pwd", "sort", "tail", "uniq"]
        );
    }

    #[test]
    fn test_safe_dispatch_escalates() {
        let registry = CommandRegistry::default();
        let app = registry.resolve("ls").unwrap();
        assert!(!app.is_unsafe);
        let err = app.run(&args(&["/no/such/dir"]), &[]).unwrap_err();
        match err {
            ShellError::ExitNonZero { app, stderr } => {
                assert_eq!(app, "ls");
                assert_eq!(stderr, "ls: /no/such/dir: No such directory");
            }
            other => panic!("expected ExitNonZero, got {:?}", other),
        }
    }

    #[test]
    fn test_unsafe_prefix_captures_failure() {
        let registry = CommandRegistry::default();
        let app = registry.resolve("_ls").unwrap();
        assert!(app.is_unsafe);
        assert_eq!(app.name, "ls");
        let result = app.run(&args(&["/no/such/dir"]), &[]).unwrap();
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.stderr, vec!["ls: /no/such/dir: No such directory"]);
    }

    #[test]
    fn test_success_passes_both_policies() {
        let registry = CommandRegistry::default();
        for name in ["echo", "_echo"] {
            let result = registry.resolve(name).unwrap().run(&args(&["hi"]), &[]).unwrap();
            assert_eq!(result.stdout, vec!["hi\n"]);
        }
    }

    #[test]
    fn test_bare_prefix_is_a_name() {
        let registry = CommandRegistry::new(ShellOptions {
            external_fallback: false,
            ..Default::default()
        });
        match registry.resolve("_") {
            Err(ShellError::AppNotFound(name)) => assert_eq!(name, "_"),
            other => panic!("expected AppNotFound, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_unknown_without_fallback() {
        let registry = CommandRegistry::with_builtins(ShellOptions {
            external_fallback: false,
            ..Default::default()
        });
        assert!(matches!(registry.resolve("sh"), Err(ShellError::AppNotFound(_))));
        assert!(matches!(registry.resolve("_sh"), Err(ShellError::AppNotFound(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_external_fallback() {
        let registry = CommandRegistry::default();
        let app = registry.resolve("sh").unwrap();
        assert!(app.is_external());
        let result = app.run(&args(&["-c", "echo hi"]), &[]).unwrap();
        assert_eq!(result.stdout, vec!["hi\n"]);
    }

    #[test]
    fn test_unknown_with_fallback() {
        let registry = CommandRegistry::default();
        assert!(matches!(
            registry.resolve("definitely-not-a-real-program-xyz"),
            Err(ShellError::AppNotFound(_))
        ));
    }

    #[test]
    fn test_custom_prefix() {
        let registry = CommandRegistry::with_builtins(ShellOptions {
            unsafe_prefix: '!',
            external_fallback: false,
        });
        assert!(registry.resolve("!ls").unwrap().is_unsafe);
        assert!(matches!(registry.resolve("_ls"), Err(ShellError::AppNotFound(_))));
    }
}

// src/commands/local_app.rs
//! Adapter that runs programs found on `PATH` through the Application contract.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::types::{Application, CommandResult};
use super::utils::split_lines;

pub struct LocalApp {
    name: String,
    path: PathBuf,
}

impl LocalApp {
    /// Locate an executable for `name`. A name containing `/` is taken as a
    /// path; anything else is searched for on `PATH`.
    pub fn locate(name: &str) -> Option<Self> {
        let path = if name.contains('/') {
            let candidate = PathBuf::from(name);
            is_executable(&candidate).then_some(candidate)?
        } else {
            let path_var = std::env::var_os("PATH")?;
            std::env::split_paths(&path_var)
                .map(|dir| dir.join(name))
                .find(|candidate| is_executable(candidate))?
        };

        Some(Self {
            name: name.to_string(),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

impl Application for LocalApp {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self, args: &[String], stdin: &[String]) -> CommandResult {
        let mut child = match Command::new(&self.path)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => return CommandResult::error(format!("{}: {}", self.name, e)),
        };

        // Feed stdin from another thread so a child that fills its stdout
        // pipe before reading all input cannot deadlock us.
        let writer = child.stdin.take().map(|mut pipe| {
            let input = stdin.concat();
            std::thread::spawn(move || {
                // The child may exit without reading its input.
                let _ = pipe.write_all(input.as_bytes());
            })
        });

        let output = match child.wait_with_output() {
            Ok(output) => output,
            Err(e) => return CommandResult::error(format!("{}: {}", self.name, e)),
        };
        if let Some(writer) = writer {
            let _ = writer.join();
        }

        let stdout = split_lines(&String::from_utf8_lossy(&output.stdout));
        let stderr = String::from_utf8_lossy(&output.stderr)
            .lines()
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        let exit_code = output.status.code().unwrap_or(1);

        CommandResult::with_exit_code(stdout, stderr, exit_code)
    }
}

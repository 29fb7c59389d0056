//! Shared integration-test helpers: wordlist fixtures on disk and a runner
//! for the `fuzzlist` binary.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// A temporary directory holding wordlist fixtures.
pub struct Fixtures {
    dir: TempDir,
}

impl Fixtures {
    /// Creates an empty fixture directory.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    /// Writes `lines` joined by `\n` (with a trailing newline) to `name`.
    pub fn wordlist(&self, name: &str, lines: &[&str]) -> PathBuf {
        let mut content = lines.join("\n");
        content.push('\n');
        self.raw(name, content.as_bytes())
    }

    /// Writes raw bytes to `name`.
    pub fn raw(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("failed to write fixture");
        path
    }

    /// Root of the fixture directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Converts loaded values to strings for readable assertions.
pub fn strings(values: &[Vec<u8>]) -> Vec<String> {
    values
        .iter()
        .map(|v| String::from_utf8_lossy(v).into_owned())
        .collect()
}

/// Runs the `fuzzlist` binary with `args`, feeding `stdin` if given.
pub fn run_cli(args: &[&str], stdin: Option<&[u8]>) -> Output {
    run_cli_with_env(args, stdin, &[])
}

/// Like [`run_cli`], with extra environment variables set.
///
/// Every `FUZZLIST_*` variable of the test process is cleared first.
pub fn run_cli_with_env(args: &[&str], stdin: Option<&[u8]>, env: &[(&str, &str)]) -> Output {
    let bin = env!("CARGO_BIN_EXE_fuzzlist");
    let mut child = Command::new(bin)
        .args(args)
        .env_remove("FUZZLIST_CONFIG")
        .env_remove("FUZZLIST_COLOR")
        .env_remove("FUZZLIST_LOG_FORMAT")
        .env_remove("FUZZLIST_LOG_LEVEL")
        .env_remove("FUZZLIST_MAX_LINE_LEN")
        .envs(env.iter().copied())
        .stdin(if stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn fuzzlist");

    if let Some(bytes) = stdin {
        let mut pipe = child.stdin.take().expect("stdin not captured");
        pipe.write_all(bytes).expect("failed to write stdin");
    }

    child.wait_with_output().expect("failed to wait for fuzzlist")
}

/// Path as `&str`, panicking on non-UTF-8 temp paths.
pub fn arg(path: &Path) -> &str {
    path.to_str().expect("non-UTF-8 fixture path")
}

//! External minifier invocation
//!
//! Bundles are produced by piping the raw sources, in include order, into a
//! yuicompressor process:
//!
//! ```text
//! java -jar yuicompressor-2.4.2.jar --type js -o static/js/yuicat_index.js
//! ```
//!
//! A minifier path that is not a `.jar` is executed directly with the same
//! arguments.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{ChildStdin, Command, Stdio};

use crate::common::fs::ensure_parent_dir;
use crate::domain::AssetType;
use crate::error::{Result, fs as fs_error, minifier};

/// Something that turns a list of sources into one compressed bundle
pub trait Compressor {
    /// Concatenate and compress `files`, in order, into `output`
    fn compress(&self, files: &[PathBuf], output: &Path, asset_type: AssetType) -> Result<()>;
}

/// yuicompressor run as a child process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YuiCompressor {
    java: PathBuf,
    jar: PathBuf,
}

impl YuiCompressor {
    pub fn new(java: impl Into<PathBuf>, jar: impl Into<PathBuf>) -> Self {
        Self {
            java: java.into(),
            jar: jar.into(),
        }
    }

    fn runs_on_jvm(&self) -> bool {
        self.jar
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("jar"))
    }

    fn program(&self) -> &Path {
        if self.runs_on_jvm() {
            &self.java
        } else {
            &self.jar
        }
    }

    /// Build the command line for one bundle
    pub fn command(&self, output: &Path, asset_type: AssetType) -> Command {
        let mut cmd = Command::new(self.program());
        if self.runs_on_jvm() {
            cmd.arg("-jar").arg(&self.jar);
        }
        cmd.arg("--type")
            .arg(asset_type.extension())
            .arg("-o")
            .arg(output);
        cmd
    }
}

impl Compressor for YuiCompressor {
    fn compress(&self, files: &[PathBuf], output: &Path, asset_type: AssetType) -> Result<()> {
        ensure_parent_dir(output)?;

        let program = self.program().display().to_string();
        let mut cmd = self.command(output, asset_type);
        cmd.stdin(Stdio::piped());
        log::debug!("running {cmd:?} on {} file(s)", files.len());

        let mut child = cmd
            .spawn()
            .map_err(|e| minifier::spawn_failed(&program, e.to_string()))?;

        if let Some(stdin) = child.stdin.take() {
            if let Err(err) = feed(stdin, files) {
                let _ = child.kill();
                let _ = child.wait();
                return Err(err);
            }
        }

        let status = child
            .wait()
            .map_err(|e| minifier::spawn_failed(&program, e.to_string()))?;
        if !status.success() {
            let code = status
                .code()
                .map_or_else(|| "unknown (terminated by signal)".to_string(), |c| c.to_string());
            return Err(minifier::failed(code));
        }
        Ok(())
    }
}

/// Stream every file into the minifier's stdin, closing it afterwards
///
/// A minifier that exits before reading all input is reported through its
/// exit status, so a broken pipe is not an error here.
fn feed(mut stdin: ChildStdin, files: &[PathBuf]) -> Result<()> {
    for path in files {
        let mut file = File::open(path).map_err(|e| fs_error::read_error(path, &e))?;
        match io::copy(&mut file, &mut stdin) {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => return Ok(()),
            Err(e) => return Err(fs_error::read_error(path, &e)),
        }
    }
    match stdin.flush() {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(e.into()),
        _ => Ok(()),
    }
}

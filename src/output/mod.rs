//! Artifact output: where the rendered page is written and how it is opened.
//!
//! Both concerns sit behind traits so the pipeline can be driven with a
//! temp file and the system browser, or with in-memory doubles in tests.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use url::Url;

use crate::error::{Result, ValueGraphError};

/// Accepts the rendered artifact and returns where it now lives.
pub trait OutputSink {
    fn write(&mut self, bytes: &[u8]) -> Result<PathBuf>;
}

/// Opens a written artifact for the user.
pub trait Viewer {
    fn open(&self, location: &Path) -> Result<()>;

    /// False when opening was turned off, so `present` skips it.
    fn enabled(&self) -> bool {
        true
    }
}

/// Writes each artifact to a new, persisted temporary file.
#[derive(Debug, Clone)]
pub struct TempFileSink {
    dir: Option<PathBuf>,
    prefix: String,
}

impl TempFileSink {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            dir: None,
            prefix: prefix.into(),
        }
    }

    /// Create files in `dir` instead of the system temp directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }
}

impl OutputSink for TempFileSink {
    fn write(&mut self, bytes: &[u8]) -> Result<PathBuf> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(&self.prefix).suffix(".html");
        let mut file = match &self.dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .map_err(|e| ValueGraphError::Output(format!("creating temp file: {}", e)))?;

        file.write_all(bytes)
            .map_err(|e| ValueGraphError::Output(format!("writing generated file: {}", e)))?;

        let (_, path) = file
            .keep()
            .map_err(|e| ValueGraphError::Output(format!("persisting generated file: {}", e.error)))?;
        // A relative output dir would otherwise yield a path no file URL can be built from
        Ok(path.canonicalize()?)
    }
}

/// Writes the artifact to a fixed path, creating parent directories.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OutputSink for FileSink {
    fn write(&mut self, bytes: &[u8]) -> Result<PathBuf> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                ValueGraphError::Output(format!("creating {}: {}", parent.display(), e))
            })?;
        }
        std::fs::write(&self.path, bytes).map_err(|e| {
            ValueGraphError::Output(format!("writing {}: {}", self.path.display(), e))
        })?;
        Ok(self.path.canonicalize()?)
    }
}

/// Launches the platform's default handler for `file://` URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemViewer;

impl SystemViewer {
    fn command() -> Command {
        if cfg!(target_os = "macos") {
            Command::new("open")
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/c", "start"]);
            cmd
        } else {
            Command::new("xdg-open")
        }
    }
}

impl Viewer for SystemViewer {
    fn open(&self, location: &Path) -> Result<()> {
        let url = Url::from_file_path(location).map_err(|_| {
            ValueGraphError::InvalidInput(format!(
                "cannot build a file URL for {}",
                location.display()
            ))
        })?;
        log::debug!("Opening {}", url);
        // Not waited on: the viewer outlives this process
        Self::command().arg(url.as_str()).spawn()?;
        Ok(())
    }
}

/// Never opens anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoViewer;

impl Viewer for NoViewer {
    fn open(&self, _location: &Path) -> Result<()> {
        Ok(())
    }

    fn enabled(&self) -> bool {
        false
    }
}

/// Outcome of handing an artifact to a viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    Opened(PathBuf),
    NotOpened(PathBuf),
}

impl Presentation {
    pub fn location(&self) -> &Path {
        match self {
            Presentation::Opened(path) | Presentation::NotOpened(path) => path.as_path(),
        }
    }
}

/// Try to open `location`; on failure tell the user where the artifact is.
pub fn present(location: &Path, viewer: &dyn Viewer) -> Presentation {
    if !viewer.enabled() {
        eprintln!("HTML output written to {}", location.display());
        return Presentation::NotOpened(location.to_path_buf());
    }

    match viewer.open(location) {
        Ok(()) => {
            log::info!("Opened {}", location.display());
            Presentation::Opened(location.to_path_buf())
        }
        Err(e) => {
            log::warn!("Failed to open viewer: {}", e);
            eprintln!("HTML output written to {}", location.display());
            Presentation::NotOpened(location.to_path_buf())
        }
    }
}

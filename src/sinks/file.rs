//! File sink implementation

use crate::core::{
    FilteringLogger, LogLevel, Logger, LoggerError, LoggerFactory, LoggerOptions, ResourceKey,
    Result, Sink,
};
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

pub struct FileSink {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    donot_rotate: bool,
}

impl FileSink {
    /// Open `path` for appending, creating missing parent directories
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                LoggerError::io_operation("creating log directory", parent.display().to_string(), e)
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::io_operation("opening log file", path.display().to_string(), e))?;

        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
            donot_rotate: false,
        })
    }

    /// Mark the file as exempt from rotation by external tooling
    #[must_use]
    pub fn with_donot_rotate(mut self, donot_rotate: bool) -> Self {
        self.donot_rotate = donot_rotate;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn donot_rotate(&self) -> bool {
        self.donot_rotate
    }
}

impl Sink for FileSink {
    fn write(&mut self, level: LogLevel, message: &str) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::sink("file", "file writer closed"))?;

        let line = format!(
            "{} [{}] {}\n",
            Local::now().format(TIMESTAMP_FORMAT),
            level.as_str(),
            message
        );
        writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        match self.writer.take() {
            Some(mut writer) => Ok(writer.flush()?),
            None => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}

/// Registry factory writing each key to the file it names.
///
/// Keys that are not local paths are resolved relative to `base_dir`.
pub struct FileLoggerFactory {
    base_dir: PathBuf,
}

impl FileLoggerFactory {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn resolve(&self, key: &ResourceKey) -> PathBuf {
        match key.to_file_path() {
            Some(path) if path.is_absolute() => path,
            Some(path) => self.base_dir.join(path),
            None => {
                let sanitized: String = key
                    .as_str()
                    .chars()
                    .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
                    .collect();
                self.base_dir.join(format!("{}.log", sanitized))
            }
        }
    }
}

impl LoggerFactory for FileLoggerFactory {
    fn create_logger(
        &self,
        key: &ResourceKey,
        level: LogLevel,
        options: &LoggerOptions,
    ) -> Result<Arc<dyn Logger>> {
        let sink = FileSink::new(self.resolve(key))?.with_donot_rotate(options.donot_rotate);
        Ok(Arc::new(FilteringLogger::with_options(sink, level, options)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_gated_lines() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("nested/app.log");

        let logger = FilteringLogger::new(FileSink::new(&path).unwrap(), LogLevel::Info);
        logger.debug("hidden", &[]);
        logger.info("started", &[]);
        logger.flush().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("[info] started"));
    }

    #[test]
    fn test_closed_sink_rejects_writes() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut sink = FileSink::new(dir.path().join("a.log")).unwrap();
        sink.close().unwrap();
        assert!(sink.write(LogLevel::Info, "late").is_err());
        sink.close().unwrap();
    }

    #[test]
    fn test_factory_resolves_keys() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let factory = FileLoggerFactory::new(dir.path());

        assert_eq!(factory.resolve(&ResourceKey::new("window1/main.log")), dir.path().join("window1/main.log"));
        assert_eq!(factory.resolve(&ResourceKey::new("output://git")), dir.path().join("output___git.log"));

        let absolute = dir.path().join("abs.log");
        assert_eq!(factory.resolve(&ResourceKey::from_path(&absolute)), absolute);
    }
}

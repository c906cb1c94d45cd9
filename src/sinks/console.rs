//! Console sink implementation

use crate::core::{
    FilteringLogger, LogLevel, Logger, LoggerFactory, LoggerOptions, ResourceKey, Result, Sink,
};
use colored::Colorize;
use std::sync::Arc;

pub struct ConsoleSink {
    use_colors: bool,
    label: Option<String>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            label: None,
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            label: None,
        }
    }

    /// Prefix every line with `[label]`
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Colors follow `donot_use_formatters`, the label follows `name`
    pub fn from_options(options: &LoggerOptions) -> Self {
        Self {
            use_colors: !options.donot_use_formatters,
            label: options.name.clone(),
        }
    }

    fn format_line(&self, level: LogLevel, message: &str) -> String {
        let level_str = if self.use_colors {
            format!("{:5}", level.tag()).color(level.color_code()).to_string()
        } else {
            format!("{:5}", level.tag())
        };

        match self.label {
            Some(ref label) => format!("[{}] [{}] {}", label, level_str, message),
            None => format!("[{}] {}", level_str, message),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, level: LogLevel, message: &str) -> Result<()> {
        let output = self.format_line(level, message);

        // Route Warning and Error levels to stderr, others to stdout
        match level {
            LogLevel::Warning | LogLevel::Error => eprintln!("{}", output),
            _ => println!("{}", output),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

/// Registry factory building console loggers
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLoggerFactory;

impl LoggerFactory for ConsoleLoggerFactory {
    fn create_logger(
        &self,
        _key: &ResourceKey,
        level: LogLevel,
        options: &LoggerOptions,
    ) -> Result<Arc<dyn Logger>> {
        let sink = ConsoleSink::from_options(options);
        Ok(Arc::new(FilteringLogger::with_options(sink, level, options)))
    }
}

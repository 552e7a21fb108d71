use std::{
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    str::FromStr,
    sync::Mutex,
};

use chrono::Local;
use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};

use crate::config::LoggerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn tag(&self) -> ColoredString {
        match self {
            LogLevel::Debug => "DBG".bright_cyan(),
            LogLevel::Info => "INF".bright_green(),
            LogLevel::Warn => "WAR".yellow(),
            LogLevel::Error => "ERR".bright_red(),
        }
    }

    fn tag_no_color(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DBG",
            LogLevel::Info => "INF",
            LogLevel::Warn => "WAR",
            LogLevel::Error => "ERR",
        }
    }

    /// Whether a message at this level is shown by a logger configured at
    /// `threshold`.
    pub fn show(&self, threshold: &LogLevel) -> bool {
        match self {
            LogLevel::Debug => *threshold == LogLevel::Debug,
            LogLevel::Info => *threshold == LogLevel::Debug || *threshold == LogLevel::Info,
            LogLevel::Warn => *threshold != LogLevel::Error,
            LogLevel::Error => true,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" | "dbg" => Ok(LogLevel::Debug),
            "info" | "inf" => Ok(LogLevel::Info),
            "warn" | "warning" | "war" => Ok(LogLevel::Warn),
            "error" | "err" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "Debug"),
            LogLevel::Info => write!(f, "Info"),
            LogLevel::Warn => write!(f, "Warn"),
            LogLevel::Error => write!(f, "Error"),
        }
    }
}

/// User-facing CLI logger with colored level prefixes on stderr and an
/// optional uncolored log file.
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
    name: String,
    file: Option<Mutex<BufWriter<File>>>,
}

impl Logger {
    pub fn new(level: LogLevel, name: String, log_file_path: Option<String>) -> Self {
        let file = log_file_path.and_then(|path| {
            std::fs::create_dir_all("./logs").ok();
            File::create(path).ok().map(|f| Mutex::new(BufWriter::new(f)))
        });

        Logger { level, name, file }
    }

    pub fn from_config(config: &LoggerConfig, name: String) -> Option<Self> {
        if !config.enabled {
            return None;
        }

        let log_file_path = config.log_file.then(|| {
            format!(
                "./logs/lexfsa_run_{}.txt",
                Local::now().format("%Y-%m-%d_%H-%M-%S")
            )
        });

        Some(Logger::new(config.log_level, name, log_file_path))
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        self.writeln_to_file(&format!(
            "[{}] {}: {}",
            level.tag_no_color(),
            self.name,
            message
        ));

        if level.show(&self.level) {
            let name = format!("{}:", self.name).dimmed();
            eprintln!("[{}] {} {}", level.tag(), name, message);
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn writeln_to_file(&self, string: &str) {
        if let Some(file) = &self.file {
            let mut f = file.lock().unwrap();

            f.write_all(string.as_bytes()).unwrap();
            f.write_all(b"\n").unwrap();
        }
    }
}

//! Build metadata
//!
//! `build.rs` stamps each compilation with a counter and a UTC timestamp;
//! they surface in the startup banner and on `/status`.

use std::fmt;

use serde::Serialize;

const UNKNOWN: &str = "unknown";

/// Identity of the running binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self::from_stamp(
            option_env!("UNIT_CONVERTER_BUILD_NUMBER"),
            option_env!("UNIT_CONVERTER_BUILD_TIMESTAMP"),
        )
    }

    /// Build info from raw build-script stamps; missing or garbled stamps read as 0 / "unknown"
    fn from_stamp(number: Option<&'static str>, timestamp: Option<&'static str>) -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            build_number: number.and_then(|n| n.trim().parse().ok()).unwrap_or(0),
            build_timestamp: timestamp.filter(|t| !t.is_empty()).unwrap_or(UNKNOWN),
        }
    }

    /// Multi-line banner shown at startup
    pub fn banner(&self) -> String {
        let rule = "=".repeat(47);
        format!(
            "{rule}\n  Unit Converter Service\n  {}\n  Compiled: {}\n{rule}",
            self, self.build_timestamp
        )
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{} (build {})", self.name, self.version, self.build_number)
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    eprintln!("{}", BuildInfo::current().banner());
}

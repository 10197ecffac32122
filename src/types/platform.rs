use crate::modules::error::ModuleError;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Target platform a module artifact is built for.
///
/// The identifier is the file suffix used by standalone module scripts, e.g.
/// `shell/shell.linux`. Only the exact canonical identifiers map to named
/// variants; anything else is kept verbatim in `Unknown` so the suffix always
/// matches what the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Platform {
    Linux,
    MacOS,
    Windows,
    FreeBSD,
    Unknown(String),
}

impl Platform {
    /// Platform of the machine running this process.
    pub fn current() -> Self {
        match std::env::consts::OS {
            "macos" => Platform::MacOS,
            os => Self::from_identifier(os),
        }
    }

    pub fn from_identifier(id: &str) -> Self {
        match id {
            "linux" => Platform::Linux,
            "darwin" => Platform::MacOS,
            "windows" => Platform::Windows,
            "freebsd" => Platform::FreeBSD,
            _ => Platform::Unknown(id.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Platform::Linux => "linux",
            Platform::MacOS => "darwin",
            Platform::Windows => "windows",
            Platform::FreeBSD => "freebsd",
            Platform::Unknown(id) => id,
        }
    }

    /// The identifier becomes part of a file name, so it must not be empty or
    /// contain a path separator.
    pub fn validate(&self) -> Result<(), ModuleError> {
        let id = self.as_str();
        let reason = if id.is_empty() {
            "identifier is empty"
        } else if id.contains('/') || id.contains('\\') {
            "identifier contains a path separator"
        } else {
            return Ok(());
        };

        Err(ModuleError::InvalidPlatform {
            platform: id.to_string(),
            reason: reason.to_string(),
        })
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_identifier(s))
    }
}

impl From<String> for Platform {
    fn from(s: String) -> Self {
        Self::from_identifier(&s)
    }
}

impl From<Platform> for String {
    fn from(p: Platform) -> Self {
        p.as_str().to_string()
    }
}

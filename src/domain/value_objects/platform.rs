//! Platform value objects - which native runtimes to deploy
//!
//! - `HostOs`: the operating system the assembler runs on
//! - `Platform`: the .NET runtime identifier derived from it

use serde::{Deserialize, Serialize};

use crate::error::{AssembleError, AssembleResult};

/// Host operating system as reported by the Rust standard library
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HostOs {
    Windows,
    MacOs,
    Linux,
    /// Anything else (`freebsd`, `android`, ...)
    Other(String),
}

impl HostOs {
    /// Detect the OS this binary was built for
    pub fn detect() -> Self {
        Self::from_os_str(std::env::consts::OS)
    }

    /// Parse a `std::env::consts::OS` style identifier
    pub fn from_os_str(os: &str) -> Self {
        match os {
            "windows" => HostOs::Windows,
            "macos" => HostOs::MacOs,
            "linux" => HostOs::Linux,
            other => HostOs::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            HostOs::Windows => "windows",
            HostOs::MacOs => "macos",
            HostOs::Linux => "linux",
            HostOs::Other(os) => os,
        }
    }
}

impl std::fmt::Display for HostOs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Runtime identifier used to pick `runtimes/<rid>/native` from the publish output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "win-x64")]
    WinX64,
    #[serde(rename = "osx-x64")]
    OsxX64,
    #[serde(rename = "linux-x64")]
    LinuxX64,
}

impl Platform {
    /// Every supported platform
    pub const ALL: [Platform; 3] = [Platform::WinX64, Platform::OsxX64, Platform::LinuxX64];

    /// Map a host OS to its runtime identifier.
    ///
    /// Unknown hosts are rejected rather than guessed.
    pub fn from_host(host: &HostOs) -> AssembleResult<Self> {
        match host {
            HostOs::Windows => Ok(Platform::WinX64),
            HostOs::MacOs => Ok(Platform::OsxX64),
            HostOs::Linux => Ok(Platform::LinuxX64),
            HostOs::Other(os) => Err(AssembleError::UnsupportedPlatform { os: os.clone() }),
        }
    }

    /// Detect the platform of the running host
    pub fn detect() -> AssembleResult<Self> {
        Self::from_host(&HostOs::detect())
    }

    /// The runtime identifier string (`win-x64`, `osx-x64`, `linux-x64`)
    pub fn runtime_identifier(&self) -> &'static str {
        match self {
            Platform::WinX64 => "win-x64",
            Platform::OsxX64 => "osx-x64",
            Platform::LinuxX64 => "linux-x64",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.runtime_identifier())
    }
}

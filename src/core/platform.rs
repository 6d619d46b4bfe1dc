//! Platform targets of the native library build.
//!
//! The build pipeline that compiles Yoga's C++ sources is external to
//! flexgen. This module only describes its contract: which platform and
//! architecture pairs it supports, what the static library is called on each,
//! and where the library and headers land in the consuming project.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use miette::Diagnostic as MietteDiagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Darwin,
    Linux,
    Windows,
}

impl Platform {
    /// All supported platforms, in build order.
    pub const ALL: [Platform; 3] = [Platform::Darwin, Platform::Linux, Platform::Windows];

    /// Get the platform name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Darwin => "darwin",
            Platform::Linux => "linux",
            Platform::Windows => "windows",
        }
    }

    /// Architectures the pipeline builds for this platform.
    pub fn architectures(&self) -> &'static [&'static str] {
        match self {
            Platform::Darwin => &["arm64", "x86_64"],
            Platform::Linux => &["amd64"],
            Platform::Windows => &["x64"],
        }
    }

    /// File name of the static library on this platform.
    pub fn lib_name(&self) -> &'static str {
        match self {
            Platform::Darwin | Platform::Linux => "libyogacore.a",
            Platform::Windows => "yogacore.lib",
        }
    }

    /// Detect the host platform.
    pub fn host() -> Result<Self, PlatformError> {
        std::env::consts::OS.parse()
    }

    /// Normalize a machine architecture name to this platform's spelling.
    ///
    /// 64-bit x86 is spelled `amd64` on Linux, `x64` on Windows and `x86_64`
    /// on Darwin; `aarch64` becomes `arm64`. Anything else is lower-cased and
    /// kept.
    pub fn normalize_arch(&self, arch: &str) -> String {
        match arch.to_lowercase().as_str() {
            "x86_64" | "amd64" => match self {
                Platform::Darwin => "x86_64".to_string(),
                Platform::Linux => "amd64".to_string(),
                Platform::Windows => "x64".to_string(),
            },
            "aarch64" | "arm64" => "arm64".to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "darwin" | "macos" => Ok(Platform::Darwin),
            "linux" => Ok(Platform::Linux),
            "windows" => Ok(Platform::Windows),
            _ => Err(PlatformError::UnsupportedPlatform(s.to_string())),
        }
    }
}

/// Platform errors.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
pub enum PlatformError {
    #[error("unsupported platform `{0}`")]
    #[diagnostic(
        code(flexgen::platform::unsupported),
        help("supported platforms: darwin, linux, windows")
    )]
    UnsupportedPlatform(String),

    #[error("unsupported architecture `{arch}` for platform {platform}")]
    #[diagnostic(code(flexgen::platform::unsupported_arch))]
    UnsupportedArch { platform: Platform, arch: String },
}

/// A validated platform/architecture pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BuildTarget {
    pub platform: Platform,
    pub arch: String,
}

impl BuildTarget {
    /// Create a target, checking the architecture against the supported set.
    pub fn new(platform: Platform, arch: &str) -> Result<Self, PlatformError> {
        if !platform.architectures().contains(&arch) {
            return Err(PlatformError::UnsupportedArch {
                platform,
                arch: arch.to_string(),
            });
        }
        Ok(BuildTarget {
            platform,
            arch: arch.to_string(),
        })
    }

    /// Detect the host target.
    pub fn host() -> Result<Self, PlatformError> {
        let platform = Platform::host()?;
        let arch = platform.normalize_arch(std::env::consts::ARCH);
        BuildTarget::new(platform, &arch)
    }

    /// Every supported target.
    pub fn all() -> Vec<BuildTarget> {
        Platform::ALL
            .iter()
            .flat_map(|platform| {
                platform.architectures().iter().map(|arch| BuildTarget {
                    platform: *platform,
                    arch: arch.to_string(),
                })
            })
            .collect()
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.platform, self.arch)
    }
}

/// Where the build pipeline installs its artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    pub libs_dir: PathBuf,
    pub include_dir: PathBuf,
}

impl InstallLayout {
    /// Create a layout rooted at the given directories.
    pub fn new(libs_dir: impl Into<PathBuf>, include_dir: impl Into<PathBuf>) -> Self {
        InstallLayout {
            libs_dir: libs_dir.into(),
            include_dir: include_dir.into(),
        }
    }

    /// Default layout relative to a project root (`_libs/`, `include/`).
    pub fn default_for(root: &Path) -> Self {
        InstallLayout::new(root.join("_libs"), root.join("include"))
    }

    /// Path of the static library for a target.
    pub fn library_path(&self, target: &BuildTarget) -> PathBuf {
        self.libs_dir
            .join(target.platform.as_str())
            .join(&target.arch)
            .join(target.platform.lib_name())
    }

    /// Directory mirroring the upstream public headers.
    pub fn header_dir(&self) -> PathBuf {
        self.include_dir.join("yoga")
    }
}

//! Package domain model
//!
//! An installed unit of resources. The root package represents the
//! current project itself and is always classified enabled; installed
//! packages are classified from their install path and load result.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use super::predicate::{Field, Fielded};

/// Installer name recorded when none is given explicitly
pub const DEFAULT_INSTALLER: &str = "user";

/// Install metadata recorded when a package was added
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallInfo {
    /// Install path as recorded, often relative to the project root
    pub path: String,

    /// Name of the installer that added the package
    pub installer: String,
}

impl InstallInfo {
    pub fn new(path: impl Into<String>, installer: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            installer: installer.into(),
        }
    }
}

/// Load failure detail for a package whose metadata could not be parsed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadError {
    /// Class of the underlying failure
    pub class: String,

    /// Failure message
    pub message: String,
}

impl LoadError {
    pub fn new(class: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.class, self.message)
    }
}

/// Lifecycle state of a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackageState {
    Enabled,
    /// The install path does not exist
    NotFound,
    /// The package metadata failed to parse
    NotLoadable,
}

impl PackageState {
    /// All states, in display order
    pub fn all() -> [PackageState; 3] {
        [
            PackageState::Enabled,
            PackageState::NotFound,
            PackageState::NotLoadable,
        ]
    }

    /// The state tag used in filters and output
    pub fn tag(&self) -> &'static str {
        match self {
            PackageState::Enabled => "enabled",
            PackageState::NotFound => "not-found",
            PackageState::NotLoadable => "not-loadable",
        }
    }
}

impl fmt::Display for PackageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// An installed unit of resources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Package name, often `vendor/name`
    pub name: String,

    /// Absolute install path
    pub install_path: PathBuf,

    /// Install metadata; `None` for the root package
    pub install_info: Option<InstallInfo>,

    /// Load failure, when the package metadata could not be parsed
    pub load_error: Option<LoadError>,
}

impl Package {
    /// Creates the root package for the current project
    pub fn root(name: impl Into<String>, install_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            install_path: install_path.into(),
            install_info: None,
            load_error: None,
        }
    }

    /// Creates an installed package
    pub fn new(
        name: impl Into<String>,
        install_path: impl Into<PathBuf>,
        install_info: InstallInfo,
    ) -> Self {
        Self {
            name: name.into(),
            install_path: install_path.into(),
            install_info: Some(install_info),
            load_error: None,
        }
    }

    /// Returns true for the package of the current project itself
    pub fn is_root(&self) -> bool {
        self.install_info.is_none()
    }

    /// The installer name; empty for the root package
    pub fn installer(&self) -> &str {
        self.install_info
            .as_ref()
            .map(|info| info.installer.as_str())
            .unwrap_or("")
    }

    /// Classifies the package into exactly one lifecycle state
    ///
    /// Computed fresh on every call, never cached: the root package is
    /// always enabled; a missing install path wins over a load error.
    pub fn state(&self) -> PackageState {
        if self.is_root() {
            return PackageState::Enabled;
        }
        if !self.install_path.exists() {
            return PackageState::NotFound;
        }
        if self.load_error.is_some() {
            return PackageState::NotLoadable;
        }
        PackageState::Enabled
    }
}

impl Fielded for Package {
    fn field(&self, field: Field) -> String {
        match field {
            Field::Name => self.name.clone(),
            Field::Installer => self.installer().to_string(),
            Field::State => self.state().tag().to_string(),
        }
    }
}

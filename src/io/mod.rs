//! Mesh export.
//!
//! The mesher itself never touches the file system; these writers are the
//! persistence side of the crate.

#[cfg(feature = "stl-io")]
mod stl;

mod obj;

use crate::errors::MeshError;
use crate::mesh::Mesh;
use std::fmt::Debug;
use std::path::Path;

/// Generic I/O and format‑conversion errors.
///
/// STL output is behind the `stl-io` feature flag. When it is disabled,
/// asking for STL yields [`IoError::Unimplemented`].
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),

    MalformedPath(String),
    Unimplemented(String),

    /// The mesh failed validation before being written.
    InvalidMesh(MeshError),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),

            MalformedPath(msg) => write!(f, "The path is malformed: {msg}"),
            Unimplemented(msg) => write!(f, "Feature is not implemented: {msg}"),

            InvalidMesh(error) => write!(f, "Refusing to export invalid mesh: {error}"),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IoError::StdIo(error) => Some(error),
            IoError::InvalidMesh(error) => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

impl From<MeshError> for IoError {
    fn from(value: MeshError) -> Self {
        Self::InvalidMesh(value)
    }
}

/// On-disk mesh formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    /// Binary STL
    #[default]
    Stl,
    /// ASCII STL
    StlAscii,
    /// Wavefront OBJ (1-based indices)
    Obj,
}

impl ExportFormat {
    /// Conventional file extension, without the dot.
    pub const fn extension(self) -> &'static str {
        match self {
            ExportFormat::Stl | ExportFormat::StlAscii => "stl",
            ExportFormat::Obj => "obj",
        }
    }
}

impl<S: Clone + Debug + Send + Sync> Mesh<S> {
    /// Serialize this mesh in `format`. `name` becomes the solid/object name.
    pub fn to_bytes(&self, format: ExportFormat, name: &str) -> Result<Vec<u8>, IoError> {
        self.validate()?;
        match format {
            #[cfg(feature = "stl-io")]
            ExportFormat::Stl => Ok(self.to_stl_binary(name)?),
            #[cfg(feature = "stl-io")]
            ExportFormat::StlAscii => Ok(self.to_stl_ascii(name).into_bytes()),
            #[cfg(not(feature = "stl-io"))]
            ExportFormat::Stl | ExportFormat::StlAscii => Err(IoError::Unimplemented(
                "STL export requires the `stl-io` feature".to_string(),
            )),
            ExportFormat::Obj => Ok(self.to_obj(name).into_bytes()),
        }
    }

    /// Write this mesh to `path`, creating parent directories as needed.
    /// The solid name is taken from the file stem.
    pub fn write_to(&self, path: &Path, format: ExportFormat) -> Result<(), IoError> {
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| IoError::MalformedPath(path.display().to_string()))?;
        let bytes = self.to_bytes(format, name)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;

        tracing::debug!(path = %path.display(), ?format, "wrote mesh");
        Ok(())
    }
}

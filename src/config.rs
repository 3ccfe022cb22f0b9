//! Command line configuration and argument validation.
//!
//! The mesher takes `step` as a plain `usize` and trusts it; everything that
//! turns user text into a valid `step` lives here.

use crate::errors::MeshError;
use crate::float_types::Real;
use crate::io::ExportFormat;
use std::path::PathBuf;

/// Sampling resolution used when none is given
pub const DEFAULT_STEP: usize = 32;

/// Output path, without extension, used when none is given
pub const DEFAULT_OUTPUT_STEM: &str = "stl/reuleaux_tetrahedron";

/// Default output path for `format`, carrying that format's extension.
pub fn default_output(format: ExportFormat) -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_STEM).with_extension(format.extension())
}

/// Parse and validate a sampling resolution.
///
/// Accepts positive integers only. Surrounding whitespace is ignored.
///
/// ## Errors
/// [`MeshError::InvalidSampleStep`] for zero, negative, fractional or
/// non-numeric input.
pub fn parse_step(input: &str) -> Result<usize, MeshError> {
    match input.trim().parse::<usize>() {
        Ok(step) if step > 0 => Ok(step),
        _ => Err(MeshError::InvalidSampleStep(input.to_string())),
    }
}

/// Parse a strictly positive, finite width.
pub fn parse_width(input: &str) -> Result<Real, String> {
    match input.trim().parse::<Real>() {
        Ok(width) if width.is_finite() && width > 0.0 => Ok(width),
        _ => Err(format!("width must be a positive number, got {input:?}")),
    }
}

/// Fully resolved run settings.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshConfig {
    /// Sample intervals along each face edge
    pub step: usize,
    /// Width of the solid; `None` keeps the unit-sphere construction
    pub width: Option<Real>,
    /// Output file
    pub output: PathBuf,
    /// Output format
    pub format: ExportFormat,
    /// Merge the duplicated boundary vertices before writing
    pub weld: bool,
}

impl Default for MeshConfig {
    fn default() -> Self {
        let format = ExportFormat::default();
        Self {
            step: DEFAULT_STEP,
            width: None,
            output: default_output(format),
            format,
            weld: false,
        }
    }
}

impl MeshConfig {
    /// Settings from already-validated arguments. A missing `output` falls
    /// back to [`default_output`] for `format`; an explicit path is kept as is.
    pub fn resolve(
        step: usize,
        width: Option<Real>,
        output: Option<PathBuf>,
        format: ExportFormat,
        weld: bool,
    ) -> Self {
        Self {
            step,
            width,
            output: output.unwrap_or_else(|| default_output(format)),
            format,
            weld,
        }
    }

    /// Factor that maps the unit-sphere solid (width √(8/3)) to the requested width.
    pub fn scale_factor(&self) -> Real {
        self.width
            .map_or(1.0, |width| width / crate::reuleaux::tetrahedron::EDGE_LENGTH)
    }

    /// `step` is conventionally a power of two; anything else still works.
    pub const fn step_is_conventional(&self) -> bool {
        self.step.is_power_of_two()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn positive_integers_are_accepted() {
        assert_eq!(parse_step("1"), Ok(1));
        assert_eq!(parse_step(" 32 "), Ok(32));
        assert_eq!(parse_step("48"), Ok(48));
    }

    #[test]
    fn everything_else_is_an_invalid_step() {
        for bad in ["0", "-4", "2.5", "eight", ""] {
            assert_eq!(
                parse_step(bad),
                Err(MeshError::InvalidSampleStep(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn width_must_be_positive() {
        assert!(parse_width("2.5").is_ok());
        assert!(parse_width("0").is_err());
        assert!(parse_width("-1").is_err());
        assert!(parse_width("inf").is_err());
    }

    #[test]
    fn scale_factor_targets_the_requested_width() {
        let config = MeshConfig {
            width: Some(2.0 * crate::reuleaux::tetrahedron::EDGE_LENGTH),
            ..MeshConfig::default()
        };
        assert_relative_eq!(config.scale_factor(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(MeshConfig::default().scale_factor(), 1.0);
    }

    #[test]
    fn default_output_follows_the_format() {
        let obj = MeshConfig::resolve(4, None, None, ExportFormat::Obj, false);
        assert_eq!(obj.output, PathBuf::from("stl/reuleaux_tetrahedron.obj"));

        let ascii = MeshConfig::resolve(4, None, None, ExportFormat::StlAscii, false);
        assert_eq!(ascii.output, PathBuf::from("stl/reuleaux_tetrahedron.stl"));
        assert_eq!(MeshConfig::default().output, ascii.output);
    }

    #[test]
    fn explicit_output_is_kept() {
        let config = MeshConfig::resolve(
            8,
            Some(3.0),
            Some(PathBuf::from("out/solid.mesh")),
            ExportFormat::Obj,
            true,
        );
        assert_eq!(config.output, PathBuf::from("out/solid.mesh"));
        assert_eq!(config.step, 8);
        assert_eq!(config.width, Some(3.0));
        assert!(config.weld);
    }

    #[test]
    fn default_step_is_conventional() {
        assert!(MeshConfig::default().step_is_conventional());
        let odd = MeshConfig {
            step: 12,
            ..MeshConfig::default()
        };
        assert!(!odd.step_is_conventional());
    }
}

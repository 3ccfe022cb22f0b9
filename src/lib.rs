//! Triangulated surface meshes of the **Reuleaux tetrahedron**: four spherical
//! patches, each centered on one vertex of a regular tetrahedron with radius
//! equal to its edge length.
//!
//! ```
//! use reuleaux::mesh::Mesh;
//!
//! let solid = Mesh::<()>::reuleaux_tetrahedron(16, None)?;
//! assert_eq!(solid.vertices.len(), 4 * 17 * 18 / 2);
//! assert_eq!(solid.triangles.len(), 4 * 16 * 16);
//! # Ok::<(), reuleaux::errors::MeshError>(())
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` export
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to replicate faces on multiple threads

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod config;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod mesh;
pub mod reuleaux;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::MeshError;
pub use mesh::Mesh;

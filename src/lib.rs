//! Decoder for [Wavefront OBJ] geometry and its companion MTL material
//! libraries.
//!
//! The decoder is permissive: malformed numbers keep their defaults, unknown
//! directives are skipped, and anomalies are reported through [`Diagnostics`]
//! instead of aborting the decode.
//!
//! ```
//! use obj_loader::{mtl, obj};
//!
//! let text = "mtllib cube.mtl\nv 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nusemtl red\nf 1 2 3 4\n";
//! let data = obj::from_str(text, &obj::DecodeOptions::default(), |name: &str| {
//!     assert_eq!(name, "cube.mtl");
//!     Ok(mtl::from_str("newmtl red\nKd 1 0 0\n"))
//! });
//! assert_eq!(data.attrib.positions.len(), 4);
//! assert_eq!(data.shapes.len(), 1);
//! assert_eq!(data.shapes[0].mesh.num_face_vertices, [3, 3]);
//! assert_eq!(data.shapes[0].mesh.material_ids, [0, 0]);
//! assert!(data.diagnostics.warnings().is_empty());
//! ```
//!
//! [Wavefront OBJ]: https://en.wikipedia.org/wiki/Wavefront_.obj_file

#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    single_use_lifetimes,
    unreachable_pub
)]
#![warn(clippy::exhaustive_enums, clippy::exhaustive_structs)]

mod error;
pub use error::{Diagnostics, Error, Result};

mod utils;

mod common;
pub use common::*;

mod loader;
pub use loader::Loader;

pub mod mtl;
pub mod obj;

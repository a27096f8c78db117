//! Procedural mesh generators
//!
//! Each generator returns a fully attributed [`MeshData`](crate::resources::MeshData)
//! (positions, normals, uvs, triangle indices) ready for upload.

pub mod box_shape;
pub mod cylinder;
pub mod plane;
pub mod sphere;

pub use box_shape::{BoxOptions, create_box};
pub use cylinder::{CylinderOptions, create_cylinder};
pub use plane::{PlaneOptions, create_plane};
pub use sphere::{SphereOptions, create_sphere};

pub mod material;
pub mod mesh;
pub mod obj;
pub mod primitives;
pub mod texture;

pub use material::{FlatMaterial, MaterialSpec};
pub use mesh::{MeshCapabilities, MeshData};
pub use obj::load_obj;
pub use texture::TextureData;

//! Materials
//!
//! An object carries either flat reflectance coefficients or a diffuse
//! texture, never both. A textured object still uploads material vectors,
//! but zeroed, so the uniform data always has the same shape.

use glam::Vec4;

use crate::resources::texture::TextureData;

/// Phong reflectance coefficients for an untextured surface.
#[derive(Debug, Clone, Copy)]
pub struct FlatMaterial {
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
    pub shininess: f32,
}

impl FlatMaterial {
    pub const DEFAULT_SHININESS: f32 = 32.0;

    #[must_use]
    pub fn new(ambient: Vec4, diffuse: Vec4, specular: Vec4) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess: Self::DEFAULT_SHININESS,
        }
    }

    /// Single-color convenience: ambient and diffuse share the color,
    /// specular is white.
    #[must_use]
    pub fn colored(color: Vec4) -> Self {
        Self::new(color, color, Vec4::ONE)
    }

    /// The zeroed vectors a textured object uploads in place of real
    /// coefficients.
    #[must_use]
    pub fn zeroed() -> Self {
        Self {
            ambient: Vec4::ZERO,
            diffuse: Vec4::ZERO,
            specular: Vec4::ZERO,
            shininess: Self::DEFAULT_SHININESS,
        }
    }
}

impl Default for FlatMaterial {
    fn default() -> Self {
        Self::colored(Vec4::ONE)
    }
}

/// What a drawable object is shaded with: flat coefficients or a texture.
#[derive(Debug, Clone)]
pub enum MaterialSpec {
    Flat(FlatMaterial),
    Textured(TextureData),
}

impl MaterialSpec {
    #[must_use]
    pub fn flat(ambient: Vec4, diffuse: Vec4, specular: Vec4) -> Self {
        Self::Flat(FlatMaterial::new(ambient, diffuse, specular))
    }

    #[must_use]
    pub fn colored(color: Vec4) -> Self {
        Self::Flat(FlatMaterial::colored(color))
    }

    #[must_use]
    pub fn textured(texture: TextureData) -> Self {
        Self::Textured(texture)
    }
}

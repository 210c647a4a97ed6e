//! Surface material parameters.
//!
//! A Material carries the per-surface shading parameters consumed by
//! the deferred renderer's geometry pass. The scene core treats it as
//! opaque payload: it is handed to `Renderer::set_material_uniforms`
//! right before the owning mesh is drawn.

use glam::Vec3;

/// Phong-style material parameters for the G-buffer pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    name: String,
    ambient: Vec3,
    diffuse: Vec3,
    specular: Vec3,
    shininess: f32,
}

impl Material {
    /// Create a material with default parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ambient: Vec3::splat(0.1),
            diffuse: Vec3::ONE,
            specular: Vec3::splat(0.5),
            shininess: 32.0,
        }
    }

    // ===== GETTERS =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ambient(&self) -> Vec3 {
        self.ambient
    }

    pub fn diffuse(&self) -> Vec3 {
        self.diffuse
    }

    pub fn specular(&self) -> Vec3 {
        self.specular
    }

    pub fn shininess(&self) -> f32 {
        self.shininess
    }

    // ===== SETTERS =====

    pub fn set_ambient(&mut self, ambient: Vec3) {
        self.ambient = ambient;
    }

    pub fn set_diffuse(&mut self, diffuse: Vec3) {
        self.diffuse = diffuse;
    }

    pub fn set_specular(&mut self, specular: Vec3) {
        self.specular = specular;
    }

    pub fn set_shininess(&mut self, shininess: f32) {
        self.shininess = shininess;
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new("default")
    }
}

#[cfg(test)]
#[path = "material_tests.rs"]
mod tests;

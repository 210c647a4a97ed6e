use glam::Vec3;
use super::*;

#[test]
fn test_material_new_defaults() {
    let material = Material::new("bricks");

    assert_eq!(material.name(), "bricks");
    assert_eq!(material.diffuse(), Vec3::ONE);
    assert_eq!(material.ambient(), Vec3::splat(0.1));
    assert_eq!(material.shininess(), 32.0);
}

#[test]
fn test_material_setters() {
    let mut material = Material::new("metal");
    material.set_diffuse(Vec3::new(0.8, 0.8, 0.9));
    material.set_specular(Vec3::ONE);
    material.set_ambient(Vec3::ZERO);
    material.set_shininess(128.0);

    assert_eq!(material.diffuse(), Vec3::new(0.8, 0.8, 0.9));
    assert_eq!(material.specular(), Vec3::ONE);
    assert_eq!(material.ambient(), Vec3::ZERO);
    assert_eq!(material.shininess(), 128.0);
}

#[test]
fn test_material_default_name() {
    assert_eq!(Material::default().name(), "default");
}

use std::sync::Arc;
use glam::{Mat4, Vec3};
use crate::renderer::mock_renderer::MockRendererMesh;
use crate::scene::AABB;
use super::*;

fn test_mesh(gpu: Arc<MockRendererMesh>) -> Mesh {
    Mesh::from_desc(MeshDesc {
        name: "cube".to_string(),
        material: Arc::new(Material::new("bricks")),
        gpu,
        local_bounds: AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0)),
    })
}

#[test]
fn test_from_desc() {
    let mesh = test_mesh(Arc::new(MockRendererMesh::new(true)));

    assert_eq!(mesh.name(), "cube");
    assert_eq!(mesh.material().name(), "bricks");
    assert!(mesh.is_loaded());
    assert_eq!(mesh.boundaries().local().max, Vec3::splat(1.0));
}

#[test]
fn test_is_loaded_tracks_gpu_state() {
    let gpu = Arc::new(MockRendererMesh::new(false));
    let mesh = test_mesh(gpu.clone());

    assert!(!mesh.is_loaded());
    gpu.set_loaded(true);
    assert!(mesh.is_loaded());
}

#[test]
fn test_draw_calls_delegate_to_gpu() {
    let gpu = Arc::new(MockRendererMesh::new(true));
    let mesh = test_mesh(gpu.clone());

    mesh.bind_vertex_array_object().unwrap();
    mesh.draw_elements().unwrap();
    mesh.draw_elements().unwrap();

    assert_eq!(gpu.bind_count(), 1);
    assert_eq!(gpu.draw_count(), 2);
}

#[test]
fn test_transform_boundaries_updates_world() {
    let mesh = test_mesh(Arc::new(MockRendererMesh::new(true)));

    mesh.transform_boundaries(&Mat4::from_scale(Vec3::splat(3.0)));

    let bounds = mesh.boundaries();
    assert_eq!(bounds.world().max, Vec3::splat(3.0));
    assert_eq!(bounds.local().max, Vec3::splat(1.0));
}

#[test]
fn test_shared_mesh_sees_last_transform() {
    // Two owners of the same Arc<Mesh>: the last re-transform wins
    let mesh = Arc::new(test_mesh(Arc::new(MockRendererMesh::new(true))));
    let other = mesh.clone();

    mesh.transform_boundaries(&Mat4::from_scale(Vec3::splat(2.0)));
    other.transform_boundaries(&Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0)));

    let bounds = mesh.boundaries();
    assert_eq!(bounds.world().min, Vec3::new(4.0, -1.0, -1.0));
    assert_eq!(bounds.world().max, Vec3::new(6.0, 1.0, 1.0));
}

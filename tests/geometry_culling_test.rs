use tui_render3d::geometry::{BoxShape, Pyramid, Shape, Text};
use tui_render3d::math::{Matrix4, Vector3};
use tui_render3d::raster::culling::{front_faces, visible_edges};
use tui_render3d::raster::Projector;
use tui_render3d::scene::Camera;

#[test]
fn box_and_pyramid_counts() {
    let b = BoxShape::new(1.0, 2.0, 3.0);
    assert_eq!(b.vertices().len(), 8);
    assert_eq!(b.edges().len(), 12);
    assert_eq!(b.faces().len(), 12);

    let p = Pyramid::new(1.0, 1.0);
    assert_eq!(p.vertices().len(), 5);
    assert_eq!(p.edges().len(), 8);
    assert_eq!(p.faces().len(), 0);
}

fn front_count(model: Matrix4, camera: &Camera) -> usize {
    let shape = BoxShape::cube(1.0);
    let projector = Projector::new(camera.view_projection(1.0) * model, 60, 30, 2.0);
    let projected = projector.project_all(shape.vertices());
    front_faces(shape.faces(), &projected).len()
}

#[test]
fn box_from_generic_angles_shows_between_three_and_six_triangles() {
    let angles = [(0.3, 0.4), (1.1, -0.7), (2.5, 0.2), (-0.9, 1.0), (4.0, -0.35)];
    for (az, el) in angles {
        let camera = Camera::orbit(4.0, az, el, Vector3::ZERO);
        let n = front_count(Matrix4::identity(), &camera);
        assert!((3..=6).contains(&n), "az={az} el={el}: {n}");
    }
}

#[test]
fn face_on_box_shows_exactly_its_front_face() {
    let n = front_count(Matrix4::identity(), &Camera::default());
    assert_eq!(n, 2);
}

#[test]
fn culled_edges_are_unique_and_drawn_from_front_faces() {
    let shape = BoxShape::cube(1.0);
    let camera = Camera::orbit(4.0, 0.6, 0.5, Vector3::ZERO);
    let projected = Projector::new(camera.view_projection(1.0), 60, 30, 2.0)
        .project_all(shape.vertices());
    let edges = visible_edges(shape.faces(), &projected);

    let mut sorted = edges.clone();
    sorted.dedup();
    assert_eq!(sorted, edges);
    assert!(edges.iter().all(|e| e.0 < e.1));
    // Three visible quads: 9 outline edges plus 3 diagonals.
    assert_eq!(edges.len(), 12);
}

#[test]
fn box_behind_camera_has_no_front_faces() {
    let camera = Camera::default();
    let n = front_count(Matrix4::translation(0.0, 0.0, 10.0), &camera);
    assert_eq!(n, 0);
}

#[test]
fn text_geometry() {
    let hi = Text::new("HI");
    assert!(!hi.vertices().is_empty());
    assert!(hi.faces().is_empty());
    assert!(hi.edges().iter().all(|e| e.1 < hi.vertices().len()));

    // Unknown characters contribute nothing.
    let unknown = Text::new("~~");
    assert!(unknown.vertices().is_empty());
    assert!(unknown.edges().is_empty());

    // Lowercase maps to the same strokes.
    assert_eq!(Text::new("hi").vertices(), hi.vertices());
}

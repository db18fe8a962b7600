use glam::{Mat4, Vec3};

use crate::types::Vertex;

/// Hard-coded unit cube: 6 faces x 2 triangles, 36 vertices, one color per
/// vertex.
#[rustfmt::skip]
const CUBE_VERTICES: [Vertex; 36] = [
    Vertex::new([-1.0, -1.0, -1.0], [0.583, 0.771, 0.014]),
    Vertex::new([-1.0, -1.0,  1.0], [0.609, 0.115, 0.436]),
    Vertex::new([-1.0,  1.0,  1.0], [0.327, 0.483, 0.844]),
    Vertex::new([ 1.0,  1.0, -1.0], [0.822, 0.569, 0.201]),
    Vertex::new([-1.0, -1.0, -1.0], [0.435, 0.602, 0.223]),
    Vertex::new([-1.0,  1.0, -1.0], [0.310, 0.747, 0.185]),
    Vertex::new([ 1.0, -1.0,  1.0], [0.597, 0.770, 0.761]),
    Vertex::new([-1.0, -1.0, -1.0], [0.559, 0.436, 0.730]),
    Vertex::new([ 1.0, -1.0, -1.0], [0.359, 0.583, 0.152]),
    Vertex::new([ 1.0,  1.0, -1.0], [0.483, 0.596, 0.789]),
    Vertex::new([ 1.0, -1.0, -1.0], [0.559, 0.861, 0.639]),
    Vertex::new([-1.0, -1.0, -1.0], [0.195, 0.548, 0.859]),
    Vertex::new([-1.0, -1.0, -1.0], [0.014, 0.184, 0.576]),
    Vertex::new([-1.0,  1.0,  1.0], [0.771, 0.328, 0.970]),
    Vertex::new([-1.0,  1.0, -1.0], [0.406, 0.615, 0.116]),
    Vertex::new([ 1.0, -1.0,  1.0], [0.676, 0.977, 0.133]),
    Vertex::new([-1.0, -1.0,  1.0], [0.971, 0.572, 0.833]),
    Vertex::new([-1.0, -1.0, -1.0], [0.140, 0.616, 0.489]),
    Vertex::new([-1.0,  1.0,  1.0], [0.997, 0.513, 0.064]),
    Vertex::new([-1.0, -1.0,  1.0], [0.945, 0.719, 0.592]),
    Vertex::new([ 1.0, -1.0,  1.0], [0.543, 0.021, 0.978]),
    Vertex::new([ 1.0,  1.0,  1.0], [0.279, 0.317, 0.505]),
    Vertex::new([ 1.0, -1.0, -1.0], [0.167, 0.620, 0.077]),
    Vertex::new([ 1.0,  1.0, -1.0], [0.347, 0.857, 0.137]),
    Vertex::new([ 1.0, -1.0, -1.0], [0.055, 0.953, 0.042]),
    Vertex::new([ 1.0,  1.0,  1.0], [0.714, 0.505, 0.345]),
    Vertex::new([ 1.0, -1.0,  1.0], [0.783, 0.290, 0.734]),
    Vertex::new([ 1.0,  1.0,  1.0], [0.722, 0.645, 0.174]),
    Vertex::new([ 1.0,  1.0, -1.0], [0.302, 0.455, 0.848]),
    Vertex::new([-1.0,  1.0, -1.0], [0.225, 0.587, 0.040]),
    Vertex::new([ 1.0,  1.0,  1.0], [0.517, 0.713, 0.338]),
    Vertex::new([-1.0,  1.0, -1.0], [0.053, 0.959, 0.120]),
    Vertex::new([-1.0,  1.0,  1.0], [0.393, 0.621, 0.362]),
    Vertex::new([ 1.0,  1.0,  1.0], [0.673, 0.211, 0.457]),
    Vertex::new([-1.0,  1.0,  1.0], [0.820, 0.883, 0.371]),
    Vertex::new([ 1.0, -1.0,  1.0], [0.982, 0.099, 0.879]),
];

/// Hard-coded red triangle in the XY plane
#[rustfmt::skip]
const TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex::new([-1.0, -1.0, 0.0], [1.0, 0.0, 0.0]),
    Vertex::new([ 1.0, -1.0, 0.0], [1.0, 0.0, 0.0]),
    Vertex::new([ 0.0,  1.0, 0.0], [1.0, 0.0, 0.0]),
];

pub fn cube_vertices() -> &'static [Vertex] {
    &CUBE_VERTICES
}

pub fn triangle_vertices() -> &'static [Vertex] {
    &TRIANGLE_VERTICES
}

/// Cube model matrix: the cube sits at the origin
pub fn cube_model() -> Mat4 {
    Mat4::IDENTITY
}

/// Triangle model matrix: shifted to the side so both meshes are visible
pub fn triangle_model() -> Mat4 {
    Mat4::from_translation(Vec3::new(4.0, 0.0, -1.0))
}

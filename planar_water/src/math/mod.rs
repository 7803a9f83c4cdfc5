//! Mirror math - plane, reflection matrix and oblique near-plane projection.
//!
//! Conventions: column vectors, right-handed world, cameras look down their
//! local -Z, OpenGL clip space (-w <= z <= w).

mod plane;
mod reflection;
mod oblique;

pub use plane::Plane;
pub use reflection::{reflection_matrix, look_rotation};
pub use oblique::{oblique_projection, sgn};

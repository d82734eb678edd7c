//! Deformation dispatch: turns a deformation kind, a spherical sample and a
//! parameter set into a vertex position, or a position plus normal.
//!
//! Parameters are range-checked once, here, before any shape or noise code
//! runs. Unknown kind and style names degrade to [`DeformationKind::None`]
//! and [`CloudStyle::Gaussian`] instead of failing.

mod dispatch;
mod kind;
mod params;

pub use dispatch::{BULGE_PER_INTENSITY, Deformer, full_vertex, position};
pub use kind::{BlendPolicy, DeformationKind, UnknownDeformationKind};
pub use params::{CloudParams, DeformParams, PlanetParams, ProfileParams, ValidatedParams};

pub use sculpt_shape::{CloudStyle, FullVertex, Vec3};

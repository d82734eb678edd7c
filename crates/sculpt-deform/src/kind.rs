//! The closed set of deformation kinds and their selector names.

use std::fmt;
use std::str::FromStr;

use sculpt_shape::canonical_name;
use serde::{Deserialize, Serialize};

/// Error returned by [`DeformationKind::from_str`] for an unrecognised name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown deformation kind: {0:?}")]
pub struct UnknownDeformationKind(pub String);

/// How a kind's `intensity` reaches the final vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendPolicy {
    /// Intensity is ignored; the result is the length-stretched sphere.
    Identity,
    /// The shape function consumes intensity itself; no extra blend.
    Folded,
    /// The shape is linearly blended against the stretched sphere by intensity.
    Blended,
}

/// Deformation family applied to the base sphere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeformationKind {
    #[default]
    None,
    Spheroid,
    Ovoid,
    Egg,
    Pear,
    Droplet,
    DropletInverted,
    Bullet,
    Cone,
    Cloud,
    Planet,
}

impl DeformationKind {
    pub const ALL: [DeformationKind; 11] = [
        DeformationKind::None,
        DeformationKind::Spheroid,
        DeformationKind::Ovoid,
        DeformationKind::Egg,
        DeformationKind::Pear,
        DeformationKind::Droplet,
        DeformationKind::DropletInverted,
        DeformationKind::Bullet,
        DeformationKind::Cone,
        DeformationKind::Cloud,
        DeformationKind::Planet,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DeformationKind::None => "NONE",
            DeformationKind::Spheroid => "SPHEROID",
            DeformationKind::Ovoid => "OVOID",
            DeformationKind::Egg => "EGG",
            DeformationKind::Pear => "PEAR",
            DeformationKind::Droplet => "DROPLET",
            DeformationKind::DropletInverted => "DROPLET_INVERTED",
            DeformationKind::Bullet => "BULLET",
            DeformationKind::Cone => "CONE",
            DeformationKind::Cloud => "CLOUD",
            DeformationKind::Planet => "PLANET",
        }
    }

    /// Parse a kind name, falling back to [`DeformationKind::None`] for
    /// anything unrecognised. Config files written by older or newer
    /// versions rely on this never failing.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|err| {
            log::warn!("{err}, falling back to {}", DeformationKind::default());
            DeformationKind::default()
        })
    }

    pub fn blend_policy(self) -> BlendPolicy {
        match self {
            DeformationKind::None => BlendPolicy::Identity,
            DeformationKind::Spheroid | DeformationKind::Cloud | DeformationKind::Planet => {
                BlendPolicy::Folded
            }
            DeformationKind::Ovoid
            | DeformationKind::Egg
            | DeformationKind::Pear
            | DeformationKind::Droplet
            | DeformationKind::DropletInverted
            | DeformationKind::Bullet
            | DeformationKind::Cone => BlendPolicy::Blended,
        }
    }

    /// Whether evaluating this kind samples the noise engine.
    pub fn uses_noise(self) -> bool {
        matches!(self, DeformationKind::Cloud | DeformationKind::Planet)
    }
}

impl FromStr for DeformationKind {
    type Err = UnknownDeformationKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = canonical_name(s);
        DeformationKind::ALL
            .into_iter()
            .find(|kind| kind.name() == key)
            .ok_or_else(|| UnknownDeformationKind(s.to_string()))
    }
}

impl fmt::Display for DeformationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for DeformationKind {
    fn from(name: String) -> Self {
        DeformationKind::from_name(&name)
    }
}

impl From<DeformationKind> for String {
    fn from(kind: DeformationKind) -> Self {
        kind.name().to_string()
    }
}

//! The rig summary produced by extraction.
//!
//! Joints form a tree. The arena stores them as fixed-size records indexed
//! by position, with parent references as indices into the same arena, so a
//! valid arena can be built in a single forward pass and can never contain
//! a cycle.

use crate::error::{Error, Result};
use crate::metadata::RigMetadata;

/// Parent index of a root joint.
pub const ROOT_PARENT: i32 = -1;

/// A 3-component vector (translation or rotation).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// A single joint record in the rig skeleton.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Joint {
    pub index: u32,
    pub name: String,
    /// Arena index of the parent joint, or [`ROOT_PARENT`] for a root.
    pub parent_index: i32,
    pub translation: Vec3,
    pub rotation: Vec3,
}

/// A blend shape record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BlendShape {
    pub index: u32,
    pub name: String,
    pub target_index: u32,
}

/// An append-only arena of joints that enforces the tree invariant.
///
/// Every pushed joint's parent must be [`ROOT_PARENT`] or the index of a
/// joint already in the arena.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct JointArena {
    joints: Vec<Joint>,
}

// Deserialization re-checks the tree invariant instead of trusting the
// serialized order.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for JointArena {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let joints = Vec::<Joint>::deserialize(deserializer)?;
        let mut arena = JointArena::new();
        for joint in joints {
            arena.try_push(joint).map_err(serde::de::Error::custom)?;
        }
        Ok(arena)
    }
}

impl JointArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a joint, rejecting any parent reference that is not a root
    /// marker or an earlier arena index.
    pub fn try_push(&mut self, joint: Joint) -> Result<()> {
        let valid_parent = joint.parent_index == ROOT_PARENT
            || (joint.parent_index >= 0 && (joint.parent_index as usize) < self.joints.len());

        if !valid_parent {
            return Err(Error::InvalidJointParent {
                index: self.joints.len(),
                parent_index: joint.parent_index,
            });
        }

        self.joints.push(joint);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Joint> {
        self.joints.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Joint> {
        self.joints.iter()
    }

    pub fn as_slice(&self) -> &[Joint] {
        &self.joints
    }
}

/// Metadata record produced for a validated DNA file.
///
/// Created once per successfully validated source and immutable thereafter.
/// The optional sequences are populated only by a full parser; the
/// placeholder path leaves them unset.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CharacterRigSummary {
    pub metadata: RigMetadata,
    pub joint_count: u32,
    pub mesh_count: u32,
    pub blend_shape_count: u32,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub lod_count: Option<u32>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub joints: Option<JointArena>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub blend_shapes: Option<Vec<BlendShape>>,
}

//! Vertex animations: per-target timelines of vertex buffer snapshots (morph) or blended poses.

use std::{
    collections::{btree_map::Entry, BTreeMap},
    sync::Arc,
};

use crate::{Error, VertexBuffer, VertexData};

/// The geometry a [VertexTrack] deforms.
///
/// Ordered so that shared geometry comes first, then submeshes by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackTarget {
    SharedGeometry,
    SubMesh(usize),
}

impl TrackTarget {
    /// Convert from a numeric track handle, where `0` targets the shared geometry and `i > 0`
    /// targets submesh `i - 1`.
    #[inline]
    pub fn from_handle(handle: u16) -> Self {
        match handle {
            0 => Self::SharedGeometry,
            h => Self::SubMesh(h as usize - 1),
        }
    }

    /// Convert to a numeric track handle; `None` if the submesh index doesn't fit.
    #[inline]
    pub fn handle(self) -> Option<u16> {
        match self {
            Self::SharedGeometry => Some(0),
            Self::SubMesh(i) => u16::try_from(i).ok()?.checked_add(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VertexAnimationType {
    #[default]
    None,
    Morph,
    Pose,
}

/// A full snapshot of vertex positions at a point in time.
///
/// The buffer is shared, not copied: keyframes of merged or cloned tracks refer to the same
/// buffer as the keyframe they were made from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MorphKeyFrame {
    pub time: f32,
    pub buffer: Arc<VertexBuffer>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoseRef {
    pub pose_index: u16,
    pub influence: f32,
}

/// A set of weighted poses at a point in time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoseKeyFrame {
    pub time: f32,
    pub poses: Vec<PoseRef>,
}

/// Keyframes of a [VertexTrack], tagged by animation type.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyFrames {
    #[default]
    None,
    Morph(Vec<MorphKeyFrame>),
    Pose(Vec<PoseKeyFrame>),
}

impl KeyFrames {
    pub fn animation_type(&self) -> VertexAnimationType {
        match self {
            Self::None => VertexAnimationType::None,
            Self::Morph(_) => VertexAnimationType::Morph,
            Self::Pose(_) => VertexAnimationType::Pose,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Morph(k) => k.len(),
            Self::Pose(k) => k.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The timeline of a single vertex animation target.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexTrack {
    target: TrackTarget,
    /// Descriptor of the vertex data this track animates
    pub associated_vertex_data: Option<VertexData>,
    keyframes: KeyFrames,
}

impl VertexTrack {
    pub fn new(target: TrackTarget, ty: VertexAnimationType) -> Self {
        Self {
            target,
            associated_vertex_data: None,
            keyframes: match ty {
                VertexAnimationType::None => KeyFrames::None,
                VertexAnimationType::Morph => KeyFrames::Morph(Vec::new()),
                VertexAnimationType::Pose => KeyFrames::Pose(Vec::new()),
            },
        }
    }

    /// Construct a morph track from keyframes in any order.
    pub fn morph(target: TrackTarget, mut keyframes: Vec<MorphKeyFrame>) -> Self {
        keyframes.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self {
            target,
            associated_vertex_data: None,
            keyframes: KeyFrames::Morph(keyframes),
        }
    }

    #[inline]
    pub fn target(&self) -> TrackTarget {
        self.target
    }

    #[inline]
    pub fn animation_type(&self) -> VertexAnimationType {
        self.keyframes.animation_type()
    }

    pub fn keyframes(&self) -> &KeyFrames {
        &self.keyframes
    }

    pub fn num_keyframes(&self) -> usize {
        self.keyframes.len()
    }

    /// Morph keyframes in time order; empty if this isn't a morph track.
    pub fn morph_keyframes(&self) -> &[MorphKeyFrame] {
        match &self.keyframes {
            KeyFrames::Morph(k) => k,
            _ => &[],
        }
    }

    /// Pose keyframes in time order; empty if this isn't a pose track.
    pub fn pose_keyframes(&self) -> &[PoseKeyFrame] {
        match &self.keyframes {
            KeyFrames::Pose(k) => k,
            _ => &[],
        }
    }

    /// Insert a morph keyframe, keeping keyframes sorted by time.
    pub fn create_morph_keyframe(
        &mut self,
        time: f32,
        buffer: Arc<VertexBuffer>,
    ) -> Result<&mut MorphKeyFrame, Error> {
        match &mut self.keyframes {
            KeyFrames::Morph(k) => {
                let at = k.partition_point(|kf| kf.time <= time);
                k.insert(at, MorphKeyFrame { time, buffer });
                Ok(&mut k[at])
            }
            other => Err(Error::KeyFrameType {
                expected: other.animation_type(),
                found: VertexAnimationType::Morph,
            }),
        }
    }

    /// Insert a pose keyframe, keeping keyframes sorted by time.
    pub fn create_pose_keyframe(&mut self, time: f32) -> Result<&mut PoseKeyFrame, Error> {
        match &mut self.keyframes {
            KeyFrames::Pose(k) => {
                let at = k.partition_point(|kf| kf.time <= time);
                k.insert(
                    at,
                    PoseKeyFrame {
                        time,
                        poses: Vec::new(),
                    },
                );
                Ok(&mut k[at])
            }
            other => Err(Error::KeyFrameType {
                expected: other.animation_type(),
                found: VertexAnimationType::Pose,
            }),
        }
    }
}

/// A named vertex animation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Animation {
    name: String,
    length: f32,
    vertex_tracks: BTreeMap<TrackTarget, VertexTrack>,
}

impl Animation {
    pub fn new(name: impl Into<String>, length: f32) -> Self {
        Self {
            name: name.into(),
            length,
            vertex_tracks: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Duration, in seconds.
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Create a track for `target`, replacing any track that already targeted it.
    pub fn create_vertex_track(
        &mut self,
        target: TrackTarget,
        ty: VertexAnimationType,
    ) -> &mut VertexTrack {
        self.insert_vertex_track(VertexTrack::new(target, ty))
    }

    /// Add `track`, replacing any track that already targeted the same geometry.
    pub fn insert_vertex_track(&mut self, track: VertexTrack) -> &mut VertexTrack {
        match self.vertex_tracks.entry(track.target) {
            Entry::Occupied(mut e) => {
                e.insert(track);
                e.into_mut()
            }
            Entry::Vacant(e) => e.insert(track),
        }
    }

    pub fn vertex_track(&self, target: TrackTarget) -> Option<&VertexTrack> {
        self.vertex_tracks.get(&target)
    }

    /// Tracks in [TrackTarget] order.
    pub fn vertex_tracks(&self) -> impl Iterator<Item = &VertexTrack> {
        self.vertex_tracks.values()
    }

    pub fn num_vertex_tracks(&self) -> usize {
        self.vertex_tracks.len()
    }
}

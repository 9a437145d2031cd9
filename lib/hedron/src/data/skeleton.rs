use nalgebra::{UnitQuaternion, Vector3};

use crate::Error;

/// A joint of a [Skeleton], in its binding pose relative to its parent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bone {
    pub handle: u16,
    pub name: String,
    pub parent: Option<u16>,
    pub position: Vector3<f32>,
    pub orientation: UnitQuaternion<f32>,
    pub scale: Vector3<f32>,
}

/// A bone hierarchy which meshes bind their vertices to.
///
/// Skeletons are shared by every mesh naming them; hold them through `Arc` and compare them with
/// `Arc::ptr_eq`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skeleton {
    name: String,
    bones: Vec<Bone>,
}

impl Skeleton {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bones: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Bones in handle order.
    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    pub fn bone(&self, handle: u16) -> Option<&Bone> {
        self.bones.get(handle as usize)
    }

    pub fn bone_by_name(&self, name: &str) -> Option<&Bone> {
        self.bones.iter().find(|b| b.name == name)
    }

    /// Append a bone in the identity pose, returning it. Its handle is the number of bones that
    /// came before it.
    ///
    /// # Errors
    ///
    /// * [`DuplicateBone`](Error::DuplicateBone) if a bone named `name` exists
    /// * [`UnknownBone`](Error::UnknownBone) if `parent` isn't a bone of this skeleton
    /// * [`TooManyBones`](Error::TooManyBones) if every handle is taken
    pub fn create_bone(
        &mut self,
        name: impl Into<String>,
        parent: Option<u16>,
    ) -> Result<&mut Bone, Error> {
        let name = name.into();
        if self.bone_by_name(&name).is_some() {
            return Err(Error::DuplicateBone(name));
        }
        if let Some(p) = parent.filter(|&p| self.bone(p).is_none()) {
            return Err(Error::UnknownBone(p));
        }
        let handle = u16::try_from(self.bones.len()).map_err(|_| Error::TooManyBones)?;
        self.bones.push(Bone {
            handle,
            name,
            parent,
            position: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
            scale: Vector3::repeat(1.0),
        });
        Ok(&mut self.bones[handle as usize])
    }
}

use nalgebra::{Point3, Vector3};

/// Axis-Aligned Bounding Box
///
/// An [empty](Aabb::empty) box has `mins = +∞` and `maxs = -∞`, which makes it the identity
/// element of [Aabb::merge].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    pub mins: Point3<f32>,
    pub maxs: Point3<f32>,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

impl Aabb {
    #[inline]
    pub fn new(mins: Point3<f32>, maxs: Point3<f32>) -> Self {
        Self { mins, maxs }
    }

    /// A box containing nothing.
    #[inline]
    pub fn empty() -> Self {
        Self {
            mins: Point3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            maxs: Point3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// The smallest box containing every point in `points`.
    pub fn from_points<'p>(points: impl IntoIterator<Item = &'p Point3<f32>>) -> Self {
        let mut res = Self::empty();
        for p in points {
            res.merge_point(p);
        }
        res
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        let Self { mins: i, maxs: a } = self;
        i.x > a.x || i.y > a.y || i.z > a.z
    }

    #[inline]
    pub fn contains(&self, p: &Point3<f32>) -> bool {
        let Self { mins: i, maxs: a } = self;
        (p.x >= i.x && p.y >= i.y && p.z >= i.z) && (p.x <= a.x && p.y <= a.y && p.z <= a.z)
    }

    /// Determine the center of `self`.
    #[inline]
    pub fn center(&self) -> Point3<f32> {
        nalgebra::center(&self.mins, &self.maxs)
    }

    /// The size of `self` along each axis; zero if `self` is empty.
    #[inline]
    pub fn extents(&self) -> Vector3<f32> {
        if self.is_empty() {
            Vector3::zeros()
        } else {
            self.maxs - self.mins
        }
    }

    /// Grow `self` to the union of `self` and `other`.
    #[inline]
    pub fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    /// The smallest box containing both `self` and `other`.
    #[inline]
    pub fn union(mut self, other: &Aabb) -> Self {
        self.merge(other);
        self
    }

    /// Grow `self` until it contains `p`.
    #[inline]
    pub fn merge_point(&mut self, p: &Point3<f32>) {
        self.mins = self.mins.inf(p);
        self.maxs = self.maxs.sup(p);
    }

    /// Radius of the smallest origin-centered sphere containing `self`.
    pub fn bounding_radius(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        self.mins.coords.norm().max(self.maxs.coords.norm())
    }
}

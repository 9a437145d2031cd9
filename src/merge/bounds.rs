use hedron::Aabb;

/// Running union of bounding boxes.
///
/// Union is commutative & associative, so the result doesn't depend on merge order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundsAccumulator {
    total: Aabb,
}

impl BoundsAccumulator {
    /// Start from an empty box.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn merge(&mut self, bounds: &Aabb) {
        self.total.merge(bounds);
    }

    #[inline]
    pub fn finish(self) -> Aabb {
        self.total
    }
}

impl<'b> Extend<&'b Aabb> for BoundsAccumulator {
    fn extend<I: IntoIterator<Item = &'b Aabb>>(&mut self, iter: I) {
        for b in iter {
            self.merge(b);
        }
    }
}

impl<'b> FromIterator<&'b Aabb> for BoundsAccumulator {
    fn from_iter<I: IntoIterator<Item = &'b Aabb>>(iter: I) -> Self {
        let mut res = Self::new();
        res.extend(iter);
        res
    }
}

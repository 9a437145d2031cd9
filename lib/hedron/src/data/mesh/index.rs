/// Index storage, in either of the two widths mesh formats use.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Indices {
    U16(Vec<u16>),
    U32(Vec<u32>),
}

impl Default for Indices {
    fn default() -> Self {
        Self::U16(Vec::new())
    }
}

impl Indices {
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::U16(i) => i.len(),
            Self::U32(i) => i.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<u32> {
        match self {
            Self::U16(i) => i.get(index).map(|&v| v as u32),
            Self::U32(i) => i.get(index).copied(),
        }
    }
}

/// The topology of a submesh: a window of `index_count` indices starting at `index_start`.
///
/// Unlike [VertexData](crate::VertexData), cloning IndexData always copies the indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexData {
    pub index_start: usize,
    pub index_count: usize,
    pub indices: Indices,
}

impl IndexData {
    pub fn new(indices: Indices) -> Self {
        Self {
            index_start: 0,
            index_count: indices.len(),
            indices,
        }
    }

    pub fn from_u16(indices: Vec<u16>) -> Self {
        Self::new(Indices::U16(indices))
    }

    pub fn from_u32(indices: Vec<u32>) -> Self {
        Self::new(Indices::U32(indices))
    }

    /// Iterate over the indices within the window; stops early if the window overruns the storage.
    pub fn iter(&self) -> impl Iterator<Item = u32> + Clone + '_ {
        let end = self.index_start.saturating_add(self.index_count);
        (self.index_start..end).map_while(|i| self.indices.get(i))
    }
}

use crate::Error;

/// A blob of raw vertex data, laid out as consecutive vertices of `vertex_size` bytes each.
///
/// Buffers are shared between owners through `Arc`: [VertexData](crate::VertexData) binds them,
/// and [morph keyframes](crate::MorphKeyFrame) refer to them directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexBuffer {
    vertex_size: usize,
    data: Vec<u8>,
}

impl VertexBuffer {
    /// Construct a VertexBuffer.
    ///
    /// # Errors
    ///
    /// * [`ZeroVertexSize`](Error::ZeroVertexSize) if `vertex_size == 0`
    /// * [`PartialVertex`](Error::PartialVertex) if `data.len()` isn't a multiple of `vertex_size`
    pub fn new(vertex_size: usize, data: Vec<u8>) -> Result<Self, Error> {
        if vertex_size == 0 {
            return Err(Error::ZeroVertexSize);
        }
        if data.len() % vertex_size != 0 {
            return Err(Error::PartialVertex {
                len: data.len(),
                vertex_size,
            });
        }
        Ok(Self { vertex_size, data })
    }

    /// Construct a VertexBuffer without checking that `data` holds whole vertices.
    #[inline]
    pub(crate) fn from_packed(vertex_size: usize, data: Vec<u8>) -> Self {
        Self { vertex_size, data }
    }

    /// Construct a zero-filled VertexBuffer holding `count` vertices.
    pub fn zeroed(vertex_size: usize, count: usize) -> Result<Self, Error> {
        let len = vertex_size
            .checked_mul(count)
            .ok_or(Error::BufferTooLarge { vertex_size, count })?;
        Self::new(vertex_size, vec![0; len])
    }

    #[inline(always)]
    pub fn vertex_size(&self) -> usize {
        self.vertex_size
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        // deserialized buffers skip the checks in `new`
        self.data.len().checked_div(self.vertex_size).unwrap_or(0)
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        self.data.as_slice()
    }

    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [u8] {
        self.data.as_mut_slice()
    }

    /// The bytes of a single vertex.
    #[inline]
    pub fn vertex(&self, index: usize) -> Option<&[u8]> {
        let start = index.checked_mul(self.vertex_size)?;
        self.data.get(start..start.checked_add(self.vertex_size)?)
    }
}

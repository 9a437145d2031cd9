use std::{collections::BTreeMap, sync::Arc};

use nalgebra::Point3;

use crate::{Error, VertexBuffer};

/// What a [VertexElement] is used for.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VertexElementSemantic {
    Position,
    BlendWeights,
    BlendIndices,
    Normal,
    Diffuse,
    Specular,
    TextureCoordinates(u16),
    Binormal,
    Tangent,
}

/// The inner components of a [VertexElementType]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VertexElementComponent {
    U8,
    U16,
    U32,
    I8,
    I16,
    F32,
}

impl VertexElementComponent {
    pub const fn alignment(self) -> usize {
        use std::mem::align_of;
        match self {
            VertexElementComponent::U8 => align_of::<u8>(),
            VertexElementComponent::U16 => align_of::<u16>(),
            VertexElementComponent::U32 => align_of::<u32>(),
            VertexElementComponent::I8 => align_of::<i8>(),
            VertexElementComponent::I16 => align_of::<i16>(),
            VertexElementComponent::F32 => align_of::<f32>(),
        }
    }

    pub const fn size(self) -> usize {
        use std::mem::size_of;
        match self {
            VertexElementComponent::U8 => size_of::<u8>(),
            VertexElementComponent::U16 => size_of::<u16>(),
            VertexElementComponent::U32 => size_of::<u32>(),
            VertexElementComponent::I8 => size_of::<i8>(),
            VertexElementComponent::I16 => size_of::<i16>(),
            VertexElementComponent::F32 => size_of::<f32>(),
        }
    }
}

/// The shape of the value stored in a [VertexElement].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VertexElementType {
    Scalar,
    Vec2,
    Vec3,
    Vec4,
}

impl VertexElementType {
    pub const fn size_elements(self) -> usize {
        match self {
            VertexElementType::Scalar => 1,
            VertexElementType::Vec2 => 2,
            VertexElementType::Vec3 => 3,
            VertexElementType::Vec4 => 4,
        }
    }

    pub const fn size_bytes(self, comp: VertexElementComponent) -> usize {
        comp.size() * self.size_elements()
    }
}

// positions are written & read as packed [f32; 3]
static_assertions::const_assert_eq!(
    std::mem::size_of::<[f32; 3]>(),
    VertexElementType::Vec3.size_bytes(VertexElementComponent::F32)
);
static_assertions::const_assert_eq!(
    std::mem::align_of::<[f32; 3]>(),
    VertexElementComponent::F32.alignment()
);

/// One attribute of every vertex in a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexElement {
    /// Binding index of the buffer this element is read from
    pub source: u16,
    /// Byte offset of this element within each vertex
    pub offset: usize,
    pub semantic: VertexElementSemantic,
    pub ty: VertexElementType,
    pub component: VertexElementComponent,
}

impl VertexElement {
    #[inline]
    pub const fn size(&self) -> usize {
        self.ty.size_bytes(self.component)
    }
}

/// The layout of the vertices described by a [VertexData].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexDeclaration {
    elements: Vec<VertexElement>,
}

impl VertexDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_element(&mut self, element: VertexElement) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[VertexElement] {
        &self.elements
    }

    /// The first element with the given semantic.
    pub fn find(&self, semantic: VertexElementSemantic) -> Option<&VertexElement> {
        self.elements.iter().find(|e| e.semantic == semantic)
    }

    /// The number of bytes per vertex read from the buffer bound at `source`.
    pub fn vertex_size(&self, source: u16) -> usize {
        self.elements
            .iter()
            .filter(|e| e.source == source)
            .map(|e| e.offset.saturating_add(e.size()))
            .max()
            .unwrap_or(0)
    }
}

/// A range of vertices, their layout, and the buffers they're stored in.
///
/// `Clone` shares the bound buffers with the original; use [VertexData::deep_clone] for an
/// independent copy.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexData {
    pub vertex_start: usize,
    pub vertex_count: usize,
    pub declaration: VertexDeclaration,
    bindings: BTreeMap<u16, Arc<VertexBuffer>>,
}

impl VertexData {
    pub fn new(vertex_count: usize, declaration: VertexDeclaration) -> Self {
        Self {
            vertex_start: 0,
            vertex_count,
            declaration,
            bindings: BTreeMap::new(),
        }
    }

    /// Construct VertexData holding a single packed position element at source 0.
    pub fn from_positions(positions: &[Point3<f32>]) -> Self {
        let element = VertexElement {
            source: 0,
            offset: 0,
            semantic: VertexElementSemantic::Position,
            ty: VertexElementType::Vec3,
            component: VertexElementComponent::F32,
        };
        let mut declaration = VertexDeclaration::new();
        declaration.add_element(element);

        let data = positions
            .iter()
            .flat_map(|p| [p.x, p.y, p.z])
            .flat_map(f32::to_le_bytes)
            .collect::<Vec<u8>>();

        let mut res = Self::new(positions.len(), declaration);
        // the element size is never zero and `data` is built from whole vertices
        res.bindings.insert(
            0,
            Arc::new(VertexBuffer::from_packed(element.size(), data)),
        );
        res
    }

    /// Bind `buffer` at `source`, returning the buffer previously bound there.
    pub fn bind(&mut self, source: u16, buffer: Arc<VertexBuffer>) -> Option<Arc<VertexBuffer>> {
        self.bindings.insert(source, buffer)
    }

    pub fn binding(&self, source: u16) -> Option<&Arc<VertexBuffer>> {
        self.bindings.get(&source)
    }

    pub fn bindings(&self) -> impl Iterator<Item = (u16, &Arc<VertexBuffer>)> {
        self.bindings.iter().map(|(s, b)| (*s, b))
    }

    /// Copy `self`, including the contents of every bound buffer.
    pub fn deep_clone(&self) -> Self {
        Self {
            vertex_start: self.vertex_start,
            vertex_count: self.vertex_count,
            declaration: self.declaration.clone(),
            bindings: self
                .bindings
                .iter()
                .map(|(s, b)| (*s, Arc::new(VertexBuffer::clone(b))))
                .collect(),
        }
    }

    /// Read the position of every vertex in `vertex_start..vertex_start + vertex_count`.
    ///
    /// # Errors
    ///
    /// * [`MissingElement`](Error::MissingElement) if there's no `Vec3<F32>` position element
    /// * [`UnboundSource`](Error::UnboundSource) if the position element's buffer isn't bound
    /// * [`ElementOutOfBounds`](Error::ElementOutOfBounds) if a vertex lies past the end of its buffer
    pub fn positions(&self) -> Result<Vec<Point3<f32>>, Error> {
        let element = self
            .declaration
            .find(VertexElementSemantic::Position)
            .filter(|e| {
                e.ty == VertexElementType::Vec3 && e.component == VertexElementComponent::F32
            })
            .ok_or(Error::MissingElement(VertexElementSemantic::Position))?;
        let buffer = self
            .binding(element.source)
            .ok_or(Error::UnboundSource(element.source))?;

        let out_of_bounds = |vertex| Error::ElementOutOfBounds {
            binding: element.source,
            vertex,
        };
        let end = self
            .vertex_start
            .checked_add(self.vertex_count)
            .ok_or(out_of_bounds(self.vertex_start))?;
        let comp = VertexElementComponent::F32.size();
        (self.vertex_start..end)
            .map(|vertex| -> Result<Point3<f32>, Error> {
                let bytes = buffer
                    .vertex(vertex)
                    .and_then(|v| {
                        v.get(element.offset..element.offset.checked_add(element.size())?)
                    })
                    .ok_or(out_of_bounds(vertex))?;
                let mut xyz = bytes
                    .chunks_exact(comp)
                    .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]));
                Ok(Point3::new(
                    xyz.next().unwrap_or_default(),
                    xyz.next().unwrap_or_default(),
                    xyz.next().unwrap_or_default(),
                ))
            })
            .collect()
    }
}

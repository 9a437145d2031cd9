//! Edge lists: per-triangle adjacency derived from a mesh's topology.
//!
//! Vertices are matched by index within a *vertex set*. Set `0` is the mesh's shared vertex data;
//! set `i + 1` is the dedicated vertex data of submesh `i`. Edges never join triangles from
//! different vertex sets.

use std::collections::{BTreeMap, HashMap};

use crate::Mesh;

/// A triangle referenced by the edges of an [EdgeData].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeTriangle {
    pub submesh: usize,
    pub vertex_set: usize,
    pub vertices: [u32; 3],
}

/// An edge between two vertices, bordering one or two triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// Indices into [EdgeData::triangles]. For degenerate edges both entries are the same.
    pub triangles: [usize; 2],
    /// Vertex indices, in the winding order of `triangles[0]`
    pub vertices: [u32; 2],
    /// Set if only one triangle borders this edge
    pub degenerate: bool,
}

/// The edges of a single vertex set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeGroup {
    pub vertex_set: usize,
    pub edges: Vec<Edge>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeData {
    pub triangles: Vec<EdgeTriangle>,
    pub edge_groups: Vec<EdgeGroup>,
    /// Set if every edge borders exactly two triangles
    pub closed: bool,
}

impl EdgeData {
    /// Build the edge list of every triangle-topology submesh in `mesh`.
    pub fn build(mesh: &Mesh) -> Self {
        let mut triangles = Vec::new();
        let mut groups: BTreeMap<usize, (Vec<Edge>, HashMap<(u32, u32), usize>)> =
            BTreeMap::new();

        for (sub_idx, sub) in mesh.submeshes().iter().enumerate() {
            let vertex_set = if sub.use_shared_vertices {
                0
            } else {
                sub_idx + 1
            };
            for tri in sub.triangles() {
                let tri_idx = triangles.len();
                triangles.push(EdgeTriangle {
                    submesh: sub_idx,
                    vertex_set,
                    vertices: tri,
                });
                let (edges, unpaired) = groups.entry(vertex_set).or_default();
                for k in 0..3 {
                    let (a, b) = (tri[k], tri[(k + 1) % 3]);
                    // a neighbour sharing this edge walks it in the opposite direction
                    match unpaired.remove(&(b, a)) {
                        Some(e) => {
                            edges[e].triangles[1] = tri_idx;
                            edges[e].degenerate = false;
                        }
                        None => {
                            unpaired.insert((a, b), edges.len());
                            edges.push(Edge {
                                triangles: [tri_idx, tri_idx],
                                vertices: [a, b],
                                degenerate: true,
                            });
                        }
                    }
                }
            }
        }

        let edge_groups = groups
            .into_iter()
            .map(|(vertex_set, (edges, _))| EdgeGroup { vertex_set, edges })
            .collect::<Vec<_>>();
        let closed = edge_groups
            .iter()
            .flat_map(|g| g.edges.iter())
            .all(|e| !e.degenerate);

        Self {
            triangles,
            edge_groups,
            closed,
        }
    }

    pub fn num_edges(&self) -> usize {
        self.edge_groups.iter().map(|g| g.edges.len()).sum()
    }
}

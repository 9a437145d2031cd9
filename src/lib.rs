//! Merge meshes that share a skeleton (or that have none) into a single mesh.
//!
//! Submeshes, bone assignments, and morph animations of every input are carried over to the
//! output; bounding boxes are unioned. Inputs are loaded from, and the output exported to, a
//! [MeshStore](store::MeshStore).
//!
//! ```no_run
//! use meshmerge::{store::FileMeshStore, Context, MergeTool};
//!
//! let mut ctx = Context::new();
//! let mut store = FileMeshStore::new();
//! let summary = MergeTool::invoke(&mut ctx, &mut store, &["a.mesh", "b.mesh"], &["ab.mesh"])?;
//! println!("merged {} submeshes", summary.submeshes);
//! # Ok::<(), meshmerge::Error>(())
//! ```
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

mod context;
mod error;
pub mod merge;
pub mod store;
mod tool;

pub use context::*;
pub use error::*;
pub use merge::{BoundsAccumulator, ConsistencyError, MeshMerger};
pub use tool::*;

pub use hedron;

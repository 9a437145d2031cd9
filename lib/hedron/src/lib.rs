//! In-memory mesh data: submeshes, vertex & index data, bone assignments, vertex animations, and
//! the skeletons meshes are bound to.
//!
//! Everything here is plain data plus the editing operations needed to assemble new meshes out of
//! existing ones. Reading and writing files is left to consumers of this crate.
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

mod data;
pub use data::*;

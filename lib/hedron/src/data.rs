//! # See Also
//!
//! * [Mesh], the root of the data model
//! * [Skeleton], shared between every mesh bound to it

mod animation;
mod bounds;
mod buffer;
mod error;
mod mesh;
mod skeleton;

pub use animation::*;
pub use bounds::*;
pub use buffer::*;
pub use error::*;
pub use mesh::*;
pub use skeleton::*;

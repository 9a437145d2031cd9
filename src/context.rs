//! State shared by everything taking part in a single tool invocation.

use std::{collections::HashMap, sync::Arc};

use hedron::Skeleton;

/// Deduplicates skeletons by name, so that every mesh naming a skeleton shares one instance.
#[derive(Debug, Default)]
pub struct SkeletonRegistry {
    by_name: HashMap<String, Arc<Skeleton>>,
}

impl SkeletonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Arc<Skeleton>> {
        self.by_name.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Register `skeleton` under its own name, returning the shared instance.
    ///
    /// If a skeleton with that name is already registered, `skeleton` is dropped and the existing
    /// instance is returned instead.
    pub fn register(&mut self, skeleton: Skeleton) -> Arc<Skeleton> {
        self.by_name
            .entry(skeleton.name().to_owned())
            .or_insert_with(|| Arc::new(skeleton))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Per-invocation context, constructed once and passed to the [merger](crate::MeshMerger) and
/// the [tool](crate::MergeTool).
#[derive(Debug, Default)]
pub struct Context {
    pub skeletons: SkeletonRegistry,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }
}

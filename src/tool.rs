//! The merge tool: load inputs, merge them, export the result.

use hedron::Mesh;

use crate::{
    store::{LoadError, MeshStore},
    Context, Error, MeshMerger, UsageError,
};

/// What a successful [MergeTool::invoke] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    /// Name the merged mesh was exported as
    pub output: String,
    /// Inputs merged into the output, in order
    pub merged: Vec<String>,
    /// Inputs that couldn't be loaded, in order
    pub skipped: Vec<String>,
    pub submeshes: usize,
    /// Skeleton shared by the merged meshes
    pub skeleton: Option<String>,
}

/// Merges every input mesh into a single output mesh.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeTool;

impl MergeTool {
    /// Load `inputs` from `store`, merge them, and export the result to the only entry of
    /// `outputs`.
    ///
    /// Inputs that can't be loaded are skipped with a warning.
    ///
    /// # Errors
    ///
    /// * [UsageError] if there isn't exactly one output, or there are no inputs; nothing is loaded.
    /// * [LoadError] if a loaded mesh names a skeleton that can't be loaded; nothing is exported.
    /// * [ConsistencyError](crate::ConsistencyError) if the loaded meshes disagree about their
    ///   skeleton; nothing is exported.
    /// * [ExportError](crate::store::ExportError) if the merged mesh can't be written.
    #[tracing::instrument(skip_all, fields(inputs = inputs.len(), outputs = outputs.len()))]
    pub fn invoke<S: MeshStore + ?Sized>(
        ctx: &mut Context,
        store: &mut S,
        inputs: &[impl AsRef<str>],
        outputs: &[impl AsRef<str>],
    ) -> Result<MergeSummary, Error> {
        let output = match outputs {
            [output] => output.as_ref(),
            _ => return Err(UsageError::OutputCount(outputs.len()).into()),
        };
        if inputs.is_empty() {
            return Err(UsageError::NoInputs.into());
        }

        let mut loaded = Vec::with_capacity(inputs.len());
        let mut merged = Vec::with_capacity(inputs.len());
        let mut skipped = Vec::new();
        for input in inputs {
            let name = input.as_ref();
            let mut mesh = match store.load_mesh(name) {
                Ok(mesh) => mesh,
                Err(error) => {
                    tracing::warn!(%error, "Skipped: Mesh {name} cannot be loaded.");
                    skipped.push(name.to_owned());
                    continue;
                }
            };
            Self::bind_skeleton(ctx, store, &mut mesh)?;
            tracing::info!("Loaded: {name}");
            loaded.push(mesh);
            merged.push(name.to_owned());
        }

        let mut merger = MeshMerger::from_context(ctx);
        for mesh in &loaded {
            merger.add_mesh(mesh)?;
        }
        let result = merger.merge(output);
        store.export_mesh(&result, output)?;
        tracing::info!(
            submeshes = result.num_submeshes(),
            "Exported: {} meshes merged into {output}",
            loaded.len()
        );

        Ok(MergeSummary {
            output: output.to_owned(),
            merged,
            skipped,
            submeshes: result.num_submeshes(),
            skeleton: result.skeleton_name().map(str::to_owned),
        })
    }

    /// Bind `mesh` to the skeleton it names, if any.
    ///
    /// Skeletons are loaded at most once per [Context] and registered under the name meshes refer
    /// to them by.
    fn bind_skeleton<S: MeshStore + ?Sized>(
        ctx: &mut Context,
        store: &S,
        mesh: &mut Mesh,
    ) -> Result<(), LoadError> {
        if let Some(skeleton_name) = mesh.skeleton_name().map(str::to_owned) {
            let skeleton = match ctx.skeletons.get_by_name(&skeleton_name) {
                Some(skeleton) => skeleton.clone(),
                None => {
                    tracing::debug!("Loading: skeleton {skeleton_name}");
                    let mut skeleton = store.load_skeleton(&skeleton_name)?;
                    skeleton.set_name(skeleton_name);
                    ctx.skeletons.register(skeleton)
                }
            };
            mesh.bind_skeleton(skeleton);
        }
        Ok(())
    }
}

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use hedron::{
    Aabb, BoneAssignment, IndexData, Mesh, OperationType, Skeleton, TrackTarget,
    VertexAnimationType, VertexBuffer, VertexData,
};
use meshmerge::{
    store::{FileMeshStore, Format, LoadError, MeshStore},
    Context, MergeTool,
};
use nalgebra::point;

/// A fresh directory for a single test.
fn scratch(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("meshmerge-{}-{test}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn sample_mesh() -> Mesh {
    let mut mesh = Mesh::new("sample");
    mesh.set_skeleton_name(Some("rig.skeleton".into()));
    mesh.shared_vertex_data = Some(VertexData::from_positions(&[
        point![0.0, 0.0, 0.0],
        point![1.0, 0.0, 0.0],
        point![0.0, 1.0, 0.0],
    ]));
    mesh.add_bone_assignment(BoneAssignment::new(2, 0, 0.5));
    let sub = mesh.create_named_submesh("body");
    sub.use_shared_vertices = true;
    sub.operation = OperationType::TriangleStrip;
    sub.index_data = IndexData::from_u32(vec![0, 1, 2]);
    sub.set_material_name("Skin");
    let anim = mesh.animation_or_insert("blink", 0.25);
    anim.create_vertex_track(TrackTarget::SubMesh(0), VertexAnimationType::Morph)
        .create_morph_keyframe(0.1, Arc::new(VertexBuffer::zeroed(12, 3).unwrap()))
        .unwrap();
    mesh.set_bounds(Aabb::new(
        point![0.0, 0.0, 0.0],
        point![1.0, 1.0, 0.0],
    ));
    mesh
}

fn assert_same(a: &Mesh, b: &Mesh) {
    assert_eq!(a.name(), b.name());
    assert_eq!(a.skeleton_name(), b.skeleton_name());
    assert_eq!(a.submeshes(), b.submeshes());
    assert_eq!(a.submesh_name(0), b.submesh_name(0));
    assert_eq!(
        a.shared_vertex_data.as_ref().unwrap().positions().unwrap(),
        b.shared_vertex_data.as_ref().unwrap().positions().unwrap()
    );
    assert!(a.bone_assignments().eq(b.bone_assignments()));
    assert_eq!(a.animations(), b.animations());
    assert_eq!(a.bounds(), b.bounds());
}

#[test]
fn format_by_extension() {
    assert_eq!(Format::from_path("a/b.ron"), Format::Ron);
    assert_eq!(Format::from_path("b.RON"), Format::Ron);
    assert_eq!(Format::from_path("b.mesh"), Format::Bincode);
    assert_eq!(Format::from_path("b"), Format::Bincode);
}

#[test]
fn round_trip() {
    let dir = scratch("round-trip");
    let mesh = sample_mesh();
    let mut store = FileMeshStore::new();
    for file in ["sample.mesh", "sample.ron"] {
        let path = dir.join(file);
        store.export_mesh(&mesh, path_str(&path)).unwrap();
        let loaded = store.load_mesh(path_str(&path)).unwrap();
        assert_same(&mesh, &loaded);
        assert!(loaded.skeleton().is_none());
    }
    let text = fs::read_to_string(dir.join("sample.ron")).unwrap();
    assert!(text.contains("meshmerge::mesh"));
}

#[test]
fn search_paths() {
    let dir = scratch("search-paths");
    let mut skeleton = Skeleton::new("rig.skeleton");
    skeleton.create_bone("root", None).unwrap();
    let store = FileMeshStore::with_search_paths([dir.clone()]);
    store
        .export_skeleton(&skeleton, path_str(&dir.join("rig.skeleton")))
        .unwrap();

    assert_eq!(store.resolve("rig.skeleton"), Some(dir.join("rig.skeleton")));
    assert_eq!(store.load_skeleton("rig.skeleton").unwrap(), skeleton);
    assert!(matches!(
        store.load_skeleton("other.skeleton"),
        Err(LoadError::NotFound(name)) if name == "other.skeleton"
    ));
}

#[test]
fn wrong_resource_kind() {
    let dir = scratch("wrong-kind");
    let store = FileMeshStore::new();
    let path = dir.join("rig.skeleton");
    store
        .export_skeleton(&Skeleton::new("rig"), path_str(&path))
        .unwrap();
    assert!(matches!(
        store.load_mesh(path_str(&path)),
        Err(LoadError::BadMagic { expected: "meshmerge::mesh", .. })
    ));
}

#[test]
fn garbage_is_a_decode_error() {
    let dir = scratch("garbage");
    let path = dir.join("junk.mesh");
    fs::write(&path, [0xff; 3]).unwrap();
    assert!(matches!(
        FileMeshStore::new().load_mesh(path_str(&path)),
        Err(LoadError::Decode { .. })
    ));
}

#[test]
fn tool_over_files() {
    let dir = scratch("tool");
    let mut store = FileMeshStore::with_search_paths([dir.clone()]);
    store
        .export_skeleton(&Skeleton::new("rig.skeleton"), path_str(&dir.join("rig.skeleton")))
        .unwrap();
    let inputs = ["a.mesh", "b.ron"].map(|f| dir.join(f));
    for input in &inputs {
        store.export_mesh(&sample_mesh(), path_str(input)).unwrap();
    }
    let output = dir.join("merged.mesh");

    let mut ctx = Context::new();
    let summary = MergeTool::invoke(
        &mut ctx,
        &mut store,
        &inputs.iter().map(|p| path_str(p)).collect::<Vec<_>>(),
        &[path_str(&output)],
    )
    .unwrap();
    assert_eq!(summary.submeshes, 2);
    assert!(summary.skipped.is_empty());

    let merged = store.load_mesh(path_str(&output)).unwrap();
    assert_eq!(merged.num_submeshes(), 2);
    assert_eq!(merged.skeleton_name(), Some("rig.skeleton"));
    // only the first input's shared block survives, but both inputs' assignments do
    assert_eq!(merged.shared_vertex_data.as_ref().unwrap().vertex_count, 3);
    assert_eq!(merged.bone_assignments().count(), 2);
    let blink = merged.animation("blink").unwrap();
    assert!(blink.vertex_track(TrackTarget::SubMesh(0)).is_some());
    assert!(blink.vertex_track(TrackTarget::SubMesh(1)).is_some());
}

use std::sync::Arc;

use hedron::{
    Animation, BoneAssignment, Error, IndexData, Mesh, MorphKeyFrame, OperationType, Skeleton,
    SubMesh, TrackTarget, VertexAnimationType, VertexBuffer, VertexData, VertexTrack,
};
use nalgebra::point;

fn quad_positions() -> VertexData {
    VertexData::from_positions(&[
        point![0.0, 0.0, 0.0],
        point![1.0, 0.0, 0.0],
        point![1.0, 1.0, 0.0],
        point![0.0, 1.0, 0.0],
    ])
}

#[test]
fn submesh_naming() {
    let mut mesh = Mesh::new("m");
    mesh.create_named_submesh("hull");
    mesh.create_submesh();
    mesh.create_named_submesh("sail");

    assert_eq!(mesh.num_submeshes(), 3);
    assert_eq!(mesh.submesh_name(0), Some("hull"));
    assert_eq!(mesh.submesh_name(1), None);
    assert_eq!(mesh.submesh_name(2), Some("sail"));
    assert_eq!(mesh.submesh_index("sail"), Some(2));

    mesh.rename_submesh("hull", "keel").unwrap();
    assert_eq!(mesh.submesh_name(0), Some("keel"));
    assert!(mesh.submesh_by_name("hull").is_none());
    assert!(matches!(
        mesh.rename_submesh("hull", "x"),
        Err(Error::UnknownSubMesh(_))
    ));
    assert!(matches!(
        mesh.name_submesh("x", 3),
        Err(Error::SubMeshOutOfRange { index: 3, count: 3 })
    ));
}

#[test]
fn reused_name_moves_to_newest_submesh() {
    let mut mesh = Mesh::new("m");
    mesh.create_named_submesh("part");
    mesh.create_named_submesh("part");
    assert_eq!(mesh.num_submeshes(), 2);
    assert_eq!(mesh.submesh_name(0), None);
    assert_eq!(mesh.submesh_name(1), Some("part"));
}

#[test]
fn rename_material() {
    let mut mesh = Mesh::new("m");
    mesh.create_submesh().set_material_name("Wood");
    mesh.create_submesh().set_material_name("Stone");
    mesh.create_submesh().set_material_name("Wood");
    assert_eq!(mesh.rename_material("Wood", "Oak"), 2);
    let mats = mesh
        .submeshes()
        .iter()
        .map(SubMesh::material_name)
        .collect::<Vec<_>>();
    assert_eq!(mats, ["Oak", "Stone", "Oak"]);
}

#[test]
fn skeleton_binding() {
    let skel = Arc::new(Skeleton::new("rig.skeleton"));
    let mut mesh = Mesh::new("m");
    assert!(!mesh.has_skeleton());

    mesh.bind_skeleton(skel.clone());
    assert_eq!(mesh.skeleton_name(), Some("rig.skeleton"));
    assert!(Arc::ptr_eq(mesh.skeleton().unwrap(), &skel));

    // same name keeps the binding
    mesh.set_skeleton_name(Some("rig.skeleton".into()));
    assert!(mesh.skeleton().is_some());

    mesh.set_skeleton_name(Some("other.skeleton".into()));
    assert!(mesh.skeleton().is_none());
    assert!(mesh.has_skeleton());
}

#[test]
fn bone_assignments_restart() {
    let mut sub = SubMesh::new();
    for v in 0..4 {
        sub.add_bone_assignment(BoneAssignment::new(v, 0, 1.0));
    }
    let iter = sub.bone_assignments();
    assert_eq!(iter.clone().count(), 4);
    assert_eq!(iter.map(|a| a.vertex_index).sum::<u32>(), 6);

    let mut mesh = Mesh::new("m");
    mesh.add_bone_assignment(BoneAssignment::new(0, 1, 0.5));
    *mesh.create_submesh() = sub;
    assert_eq!(mesh.total_bone_assignments(), 5);
}

#[test]
fn vertex_data_deep_clone() {
    let data = quad_positions();
    let shallow = data.clone();
    let deep = data.deep_clone();

    let orig = data.binding(0).unwrap();
    assert!(Arc::ptr_eq(orig, shallow.binding(0).unwrap()));
    assert!(!Arc::ptr_eq(orig, deep.binding(0).unwrap()));
    assert_eq!(orig, deep.binding(0).unwrap());
    assert_eq!(deep.positions().unwrap(), data.positions().unwrap());
}

#[test]
fn positions_round_trip() {
    let data = quad_positions();
    assert_eq!(data.vertex_count, 4);
    assert_eq!(data.declaration.vertex_size(0), 12);
    let pts = data.positions().unwrap();
    assert_eq!(pts[2], point![1.0, 1.0, 0.0]);
}

#[test]
fn positions_without_element() {
    let data = VertexData::default();
    assert!(matches!(data.positions(), Err(Error::MissingElement(_))));
}

#[test]
fn vertex_buffer_checks() {
    assert!(matches!(VertexBuffer::new(0, vec![]), Err(Error::ZeroVertexSize)));
    assert!(matches!(
        VertexBuffer::new(4, vec![0; 6]),
        Err(Error::PartialVertex { len: 6, vertex_size: 4 })
    ));
    let buf = VertexBuffer::zeroed(4, 3).unwrap();
    assert_eq!(buf.vertex_count(), 3);
    assert_eq!(buf.vertex(2), Some(&[0u8; 4][..]));
    assert_eq!(buf.vertex(3), None);
    assert_eq!(buf.vertex(usize::MAX), None);
    let bytes = VertexBuffer::zeroed(1, 2).unwrap();
    assert_eq!(bytes.vertex(usize::MAX), None);
    assert!(matches!(
        VertexBuffer::zeroed(2, usize::MAX),
        Err(Error::BufferTooLarge { vertex_size: 2, .. })
    ));
}

#[test]
fn positions_past_the_end() {
    let mut data = quad_positions();
    data.vertex_start = 3;
    data.vertex_count = 2;
    assert!(matches!(
        data.positions(),
        Err(Error::ElementOutOfBounds { binding: 0, vertex: 4 })
    ));
    data.vertex_start = usize::MAX;
    data.vertex_count = 1;
    assert!(matches!(
        data.positions(),
        Err(Error::ElementOutOfBounds { vertex: usize::MAX, .. })
    ));
    data.vertex_start = usize::MAX - 1;
    data.vertex_count = 1;
    assert!(matches!(data.positions(), Err(Error::ElementOutOfBounds { .. })));
}

#[test]
fn triangles_by_operation() {
    let mut sub = SubMesh::new();
    sub.index_data = IndexData::from_u16(vec![0, 1, 2, 3]);

    sub.operation = OperationType::TriangleList;
    assert_eq!(sub.triangles(), vec![[0, 1, 2]]);

    sub.operation = OperationType::TriangleStrip;
    assert_eq!(sub.triangles(), vec![[0, 1, 2], [2, 1, 3]]);

    sub.operation = OperationType::TriangleFan;
    assert_eq!(sub.triangles(), vec![[0, 1, 2], [0, 2, 3]]);

    sub.operation = OperationType::LineList;
    assert!(sub.triangles().is_empty());
}

#[test]
fn edge_list_of_open_and_closed_surfaces() {
    // two triangles sharing the diagonal of a quad
    let mut mesh = Mesh::new("quad");
    let sub = mesh.create_submesh();
    sub.vertex_data = Some(quad_positions());
    sub.index_data = IndexData::from_u16(vec![0, 1, 2, 0, 2, 3]);

    let edges = mesh.build_edge_list();
    assert_eq!(edges.triangles.len(), 2);
    assert_eq!(edges.num_edges(), 5);
    assert!(!edges.closed);
    let shared = edges.edge_groups[0]
        .edges
        .iter()
        .filter(|e| !e.degenerate)
        .collect::<Vec<_>>();
    assert_eq!(shared.len(), 1);
    assert_eq!(shared[0].triangles, [0, 1]);

    // tetrahedron
    let mut mesh = Mesh::new("tetra");
    mesh.shared_vertex_data = Some(quad_positions());
    let sub = mesh.create_submesh();
    sub.use_shared_vertices = true;
    sub.index_data = IndexData::from_u32(vec![0, 2, 1, 0, 1, 3, 1, 2, 3, 2, 0, 3]);
    let edges = mesh.build_edge_list();
    assert_eq!(edges.num_edges(), 6);
    assert_eq!(edges.edge_groups[0].vertex_set, 0);
    assert!(edges.closed);
}

#[test]
fn index_window() {
    let mut data = IndexData::from_u32(vec![9, 8, 7, 6, 5]);
    data.index_start = 1;
    data.index_count = 3;
    assert_eq!(data.iter().collect::<Vec<_>>(), vec![8, 7, 6]);
    data.index_count = 10;
    assert_eq!(data.iter().count(), 4);
    data.index_start = usize::MAX;
    assert_eq!(data.iter().count(), 0);
    data.index_count = usize::MAX;
    data.index_start = 4;
    assert_eq!(data.iter().collect::<Vec<_>>(), vec![5]);
}

#[test]
fn morph_keyframes_stay_sorted() {
    let buf = Arc::new(VertexBuffer::zeroed(12, 4).unwrap());
    let mut anim = Animation::new("wave", 2.0);
    let track = anim.create_vertex_track(TrackTarget::SubMesh(0), VertexAnimationType::Morph);
    track.create_morph_keyframe(1.0, buf.clone()).unwrap();
    track.create_morph_keyframe(0.0, buf.clone()).unwrap();
    track.create_morph_keyframe(0.5, buf.clone()).unwrap();
    let times = track
        .morph_keyframes()
        .iter()
        .map(|k| k.time)
        .collect::<Vec<_>>();
    assert_eq!(times, [0.0, 0.5, 1.0]);
    assert!(matches!(
        track.create_pose_keyframe(0.0),
        Err(Error::KeyFrameType { .. })
    ));
    assert!(track.pose_keyframes().is_empty());
}

#[test]
fn morph_track_from_keyframes() {
    let buf = Arc::new(VertexBuffer::zeroed(12, 1).unwrap());
    let frames = [0.75, 0.25]
        .map(|time| MorphKeyFrame {
            time,
            buffer: buf.clone(),
        })
        .to_vec();
    let mut anim = Animation::new("wave", 1.0);
    anim.create_vertex_track(TrackTarget::SharedGeometry, VertexAnimationType::Pose);

    let track = anim.insert_vertex_track(VertexTrack::morph(TrackTarget::SharedGeometry, frames));
    assert_eq!(track.morph_keyframes()[0].time, 0.25);
    assert!(Arc::ptr_eq(&track.morph_keyframes()[1].buffer, &buf));
    // replaced the pose track
    assert_eq!(anim.num_vertex_tracks(), 1);
    assert_eq!(
        anim.vertex_track(TrackTarget::SharedGeometry)
            .map(|t| t.animation_type()),
        Some(VertexAnimationType::Morph)
    );
}

#[test]
fn track_handles() {
    assert_eq!(TrackTarget::from_handle(0), TrackTarget::SharedGeometry);
    assert_eq!(TrackTarget::from_handle(3), TrackTarget::SubMesh(2));
    assert_eq!(TrackTarget::SubMesh(2).handle(), Some(3));
    assert_eq!(TrackTarget::SubMesh(u16::MAX as usize).handle(), None);
}

#[test]
fn animation_or_insert_keeps_length() {
    let mut mesh = Mesh::new("m");
    mesh.animation_or_insert("idle", 1.0);
    let anim = mesh.animation_or_insert("idle", 5.0);
    assert_eq!(anim.length(), 1.0);
    assert_eq!(mesh.animations().len(), 1);
    assert!(mesh.has_animation("idle"));
}

#[test]
fn skeleton_bones() {
    let mut skel = Skeleton::new("s");
    skel.create_bone("root", None).unwrap();
    let arm = skel.create_bone("arm", Some(0)).unwrap();
    assert_eq!(arm.handle, 1);
    assert!(matches!(skel.create_bone("root", None), Err(Error::DuplicateBone(_))));
    assert!(matches!(skel.create_bone("leg", Some(7)), Err(Error::UnknownBone(7))));
    assert_eq!(skel.bone_by_name("arm").map(|b| b.parent), Some(Some(0)));
}

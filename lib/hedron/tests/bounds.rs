use hedron::Aabb;
use nalgebra::{point, vector, Point3};
use quickcheck_macros::quickcheck;

// small integer coordinates keep the generated boxes finite & NaN-free
fn aabb(a: (i16, i16, i16), b: (i16, i16, i16)) -> Aabb {
    let a = point![a.0 as f32, a.1 as f32, a.2 as f32];
    let b = point![b.0 as f32, b.1 as f32, b.2 as f32];
    Aabb::new(a.inf(&b), a.sup(&b))
}

#[test]
fn empty_is_identity() {
    let b = aabb((0, 0, 0), (1, 2, 3));
    assert_eq!(Aabb::empty().union(&b), b);
    assert_eq!(b.union(&Aabb::empty()), b);
    assert!(Aabb::empty().is_empty());
    assert!(!b.is_empty());
}

#[test]
fn union_of_touching_boxes() {
    let a = aabb((0, 0, 0), (1, 1, 1));
    let b = aabb((1, 1, 1), (2, 2, 2));
    assert_eq!(a.union(&b), aabb((0, 0, 0), (2, 2, 2)));
}

#[test]
fn from_points() {
    let pts: [Point3<f32>; 3] = [point![1.0, -2.0, 0.5], point![-1.0, 4.0, 0.0], point![0.0, 0.0, 3.0]];
    let b = Aabb::from_points(&pts);
    assert_eq!(b.mins, point![-1.0, -2.0, 0.0]);
    assert_eq!(b.maxs, point![1.0, 4.0, 3.0]);
    assert!(pts.iter().all(|p| b.contains(p)));
}

#[test]
fn bounding_radius() {
    assert_eq!(Aabb::empty().bounding_radius(), 0.0);
    let b = aabb((-3, 0, 0), (0, 4, 0));
    // farthest corner from the origin is the larger of |mins| and |maxs|
    assert_eq!(b.bounding_radius(), 4.0);
}

#[test]
fn center_and_extents() {
    let b = aabb((-2, 0, 1), (2, 6, 1));
    assert_eq!(b.center(), point![0.0, 3.0, 1.0]);
    assert_eq!(b.extents(), vector![4.0, 6.0, 0.0]);
    assert_eq!(Aabb::empty().extents(), vector![0.0, 0.0, 0.0]);
}

#[quickcheck]
fn union_commutes(a: ((i16, i16, i16), (i16, i16, i16)), b: ((i16, i16, i16), (i16, i16, i16))) -> bool {
    let (a, b) = (aabb(a.0, a.1), aabb(b.0, b.1));
    a.union(&b) == b.union(&a)
}

#[quickcheck]
fn union_associates(
    a: ((i16, i16, i16), (i16, i16, i16)),
    b: ((i16, i16, i16), (i16, i16, i16)),
    c: ((i16, i16, i16), (i16, i16, i16)),
) -> bool {
    let (a, b, c) = (aabb(a.0, a.1), aabb(b.0, b.1), aabb(c.0, c.1));
    a.union(&b).union(&c) == a.union(&b.union(&c))
}

#[quickcheck]
fn union_contains_operands(a: ((i16, i16, i16), (i16, i16, i16)), b: ((i16, i16, i16), (i16, i16, i16))) -> bool {
    let (a, b) = (aabb(a.0, a.1), aabb(b.0, b.1));
    let u = a.union(&b);
    [a.mins, a.maxs, b.mins, b.maxs].iter().all(|p| u.contains(p))
}

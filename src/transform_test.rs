#![allow(clippy::float_cmp)]

use super::*;
use crate::camera::Point;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Constructors ---

#[test]
fn identity_components() {
    let m = Matrix::identity();
    assert_eq!(m, Matrix::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0));
}

#[test]
fn from_zoom_components() {
    let m = Matrix::from_zoom(2.0, 400.0, 300.0);
    assert_eq!(m.a, 2.0);
    assert_eq!(m.b, 0.0);
    assert_eq!(m.c, 0.0);
    assert_eq!(m.d, 2.0);
    assert_eq!(m.e, 400.0);
    assert_eq!(m.f, 300.0);
}

// --- apply ---

#[test]
fn apply_identity_is_noop() {
    let p = Matrix::identity().apply(Point::new(12.5, -7.0));
    assert!(point_approx_eq(p, Point::new(12.5, -7.0)));
}

#[test]
fn apply_scales_and_translates() {
    let m = Matrix::from_zoom(2.0, 100.0, 50.0);
    let p = m.apply(Point::new(10.0, 20.0));
    assert!(approx_eq(p.x, 120.0));
    assert!(approx_eq(p.y, 90.0));
}

#[test]
fn apply_uses_skew_components() {
    // x' = a·x + c·y + e, y' = b·x + d·y + f
    let m = Matrix::new(1.0, 0.5, 0.25, 1.0, 10.0, 20.0);
    let p = m.apply(Point::new(4.0, 8.0));
    assert!(approx_eq(p.x, 4.0 + 2.0 + 10.0));
    assert!(approx_eq(p.y, 2.0 + 8.0 + 20.0));
}

// --- invert ---

#[test]
fn invert_identity_is_identity() {
    let inv = Matrix::identity().invert();
    assert!(approx_eq(inv.a, 1.0));
    assert!(approx_eq(inv.b, 0.0));
    assert!(approx_eq(inv.c, 0.0));
    assert!(approx_eq(inv.d, 1.0));
    assert!(approx_eq(inv.e, 0.0));
    assert!(approx_eq(inv.f, 0.0));
}

#[test]
fn invert_undoes_zoom_and_translation() {
    let m = Matrix::from_zoom(4.0, 640.0, 360.0);
    let world = m.invert().apply(Point::new(640.0, 360.0));
    assert!(point_approx_eq(world, Point::new(0.0, 0.0)));
}

#[test]
fn invert_round_trip_uniform() {
    let m = Matrix::from_zoom(0.75, 13.7, -42.3);
    let p = Point::new(333.3, -999.9);
    let back = m.invert().apply(m.apply(p));
    assert!(point_approx_eq(p, back));
}

#[test]
fn invert_round_trip_with_skew() {
    let m = Matrix::new(1.2, 0.3, -0.4, 0.9, 55.0, -20.0);
    let p = Point::new(-81.0, 17.5);
    let back = m.invert().apply(m.apply(p));
    assert!(point_approx_eq(p, back));
}

#[test]
fn invert_round_trip_inverse_first() {
    let m = Matrix::new(2.0, 0.0, 0.0, 3.0, -10.0, 8.0);
    let p = Point::new(100.0, 200.0);
    let back = m.apply(m.invert().apply(p));
    assert!(point_approx_eq(p, back));
}

#[test]
fn double_invert_is_original() {
    let m = Matrix::from_zoom(2.5, 320.0, 240.0);
    let twice = m.invert().invert();
    assert!(approx_eq(twice.a, m.a));
    assert!(approx_eq(twice.d, m.d));
    assert!(approx_eq(twice.e, m.e));
    assert!(approx_eq(twice.f, m.f));
}

#[test]
fn invert_negative_scale() {
    let m = Matrix::new(-1.0, 0.0, 0.0, -1.0, 5.0, 5.0);
    let p = Point::new(3.0, -4.0);
    let back = m.invert().apply(m.apply(p));
    assert!(point_approx_eq(p, back));
}

//a Imports
use gfx_nd::glsl::{Mat4d, Vec3d};
use gfx_nd::{matrix, quat, scalar, transform, vector};

//a Helpers
fn mat_close(a: &[[f64; 4]; 4], b: &[[f64; 4]; 4], tol: f64) -> bool {
    vector::all(&matrix::equal_eps(a, b, tol))
}

//a Affine transforms
#[test]
fn test_translate() {
    let t = transform::translation(&[1., 2., 3.]);
    assert_eq!(t[3], [1., 2., 3., 1.]);
    assert_eq!(t[0], [1., 0., 0., 0.]);

    // Translating a point moves it; the fourth component carries through
    let p = matrix::transform(&t, &[5., 5., 5., 1.]);
    assert_eq!(p, [6., 7., 8., 1.]);
    // A direction (w = 0) is unmoved
    let d = matrix::transform(&t, &[5., 5., 5., 0.]);
    assert_eq!(d, [5., 5., 5., 0.]);

    // Postmultiplication composes translations
    let t2 = transform::translate(&t, &[1., 1., 1.]);
    assert_eq!(t2[3], [2., 3., 4., 1.]);

    let m = Mat4d::translation(&Vec3d::new(1., 2., 3.));
    assert_eq!(m.translate(&Vec3d::new(1., 1., 1.))[3], [2., 3., 4., 1.]);
}

#[test]
fn test_rotate() {
    let half_pi = std::f64::consts::FRAC_PI_2;
    // A quarter turn about z maps x to y
    let r = transform::rotation(half_pi, &[0., 0., 1.]);
    let v = matrix::transform(&r, &[1., 0., 0., 1.]);
    assert!(vector::distance(&v, &[0., 1., 0., 1.]) < 1e-12);

    // The axis is normalized internally
    let r2 = transform::rotation(half_pi, &[0., 0., 7.]);
    assert!(mat_close(&r, &r2, 1e-12));

    // The rotation agrees with the quaternion form
    let axis = vector::normalize([1., 2., 3.]);
    let r = transform::rotation(0.8, &axis);
    let q = quat::of_axis_angle(0.8, &axis);
    assert!(mat_close(&r, &quat::mat4_cast(&q), 1e-12));

    // Postmultiplying composes on the right
    let m = transform::translation(&[1., 0., 0.]);
    let mr = transform::rotate(&m, half_pi, &[0., 0., 1.]);
    let v = matrix::transform(&mr, &[1., 0., 0., 1.]);
    assert!(vector::distance(&v, &[1., 1., 0., 1.]) < 1e-12);

    // A zero axis produces NaN entries
    let bad: [[f64; 4]; 4] = transform::rotation(0.5, &[0., 0., 0.]);
    assert!(bad[0][0].is_nan());
}

#[test]
fn test_scale() {
    let s = transform::scaling(&[2., 3., 4.]);
    let v = matrix::transform(&s, &[1., 1., 1., 1.]);
    assert_eq!(v, [2., 3., 4., 1.]);

    let m = transform::translation(&[1., 2., 3.]);
    let ms = transform::scale(&m, &[2., 2., 2.]);
    // The translation column is untouched
    assert_eq!(ms[3], [1., 2., 3., 1.]);
    assert_eq!(ms[0], [2., 0., 0., 0.]);
}

//a Camera
#[test]
fn test_look_at_identity() {
    let m = transform::look_at(&[0., 0., 0.], &[0., 0., -1.], &[0., 1., 0.]);
    assert!(mat_close(&m, &matrix::identity(), 1e-12));
}

#[test]
fn test_look_at_offset() {
    let m = transform::look_at(&[-1., 1., 1.], &[1., -1., -1.], &[0., 1., 0.]);
    let expected = [
        [0.7071, 0.4082, -0.5774, 0.],
        [0., 0.8165, 0.5774, 0.],
        [0.7071, -0.4082, 0.5774, 0.],
        [0., 0., -1.7321, 1.],
    ];
    assert!(mat_close(&m, &expected, 1e-4));

    // Degenerate eye == center yields NaN rows
    let bad: [[f64; 4]; 4] = transform::look_at(&[1., 1., 1.], &[1., 1., 1.], &[0., 1., 0.]);
    assert!(bad[0][0].is_nan());
}

//a Projections
#[test]
fn test_perspective() {
    let m = transform::perspective(std::f64::consts::FRAC_PI_4, 1., 0.1, 100.);
    assert!((m[0][0] - 2.414_213_562_373_095).abs() < 1e-9);
    assert!((m[1][1] - 2.414_213_562_373_095).abs() < 1e-9);
    assert!((m[2][2] - -1.001_001_001_001_001).abs() < 1e-9);
    assert_eq!(m[2][3], -1.);
    assert!((m[3][2] - -0.100_100_100_100_100_1).abs() < 1e-9);
    assert_eq!(m[3][3], 0.);

    // The near plane projects to depth 0 and the far plane to 1...
    let near = matrix::transform(&m, &[0., 0., -0.1, 1.]);
    assert!((near[2] / near[3]).abs() < 1e-12);
    let far = matrix::transform(&m, &[0., 0., -100., 1.]);
    assert!((far[2] / far[3] - 1.).abs() < 1e-12);
}

#[test]
fn test_perspective_reverse_z() {
    let m = transform::perspective_reverse_z(std::f64::consts::FRAC_PI_4, 1., 0.1, 100.);
    assert!((m[2][2] - 0.001_001_001_001_001).abs() < 1e-9);
    assert_eq!(m[2][3], -1.);
    assert!((m[3][2] - 0.100_100_100_100_100_1).abs() < 1e-9);

    // ...and reversed: near maps to 1, far to 0
    let near = matrix::transform(&m, &[0., 0., -0.1, 1.]);
    assert!((near[2] / near[3] - 1.).abs() < 1e-12);
    let far = matrix::transform(&m, &[0., 0., -100., 1.]);
    assert!((far[2] / far[3]).abs() < 1e-12);
}

#[test]
fn test_perspective_fov() {
    // With square pixels this matches the fov-and-aspect form
    let fov = std::f64::consts::FRAC_PI_4;
    let a = transform::perspective_fov(fov, 800., 600., 0.1, 100.);
    let b = transform::perspective(fov, 800. / 600., 0.1, 100.);
    assert!(mat_close(&a, &b, 1e-12));

    let ra = transform::perspective_fov_reverse_z(fov, 800., 600., 0.1, 100.);
    let rb = transform::perspective_reverse_z(fov, 800. / 600., 0.1, 100.);
    assert!(mat_close(&ra, &rb, 1e-12));
}

#[test]
fn test_infinite_perspective() {
    let fov = std::f64::consts::FRAC_PI_4;
    let m = transform::infinite_perspective(fov, 1., 0.1);
    assert_eq!(m[2][2], -1.);
    assert_eq!(m[2][3], -1.);
    assert_eq!(m[3][2], -0.1);
    assert!((m[0][0] - 2.414_213_562_373_095).abs() < 1e-9);

    // The finite projection converges to it as the far plane recedes
    let f = transform::perspective(fov, 1., 0.1, 1e9);
    assert!(mat_close(&m, &f, 1e-6));
}

#[test]
fn test_infinite_perspective_reverse_z() {
    let fov = std::f64::consts::FRAC_PI_4;
    let m = transform::infinite_perspective_reverse_z(fov, 1., 0.1);
    assert_eq!(m[2][2], 0.);
    assert_eq!(m[2][3], -1.);
    assert_eq!(m[3][2], 0.1);

    // Near maps to 1; the limit at infinity is 0
    let near = matrix::transform(&m, &[0., 0., -0.1, 1.]);
    assert!((near[2] / near[3] - 1.).abs() < 1e-12);
    let far = matrix::transform(&m, &[0., 0., -1e12, 1.]);
    assert!((far[2] / far[3]).abs() < 1e-10);

    // And it is the limit of the finite reverse-Z form
    let f = transform::perspective_reverse_z(fov, 1., 0.1, 1e9);
    assert!(mat_close(&m, &f, 1e-6));
}

#[test]
fn test_orthographic() {
    let m = transform::orthographic(-1., 1., -1., 1., 0., 8.);
    assert_eq!(m[0][0], 1.);
    assert_eq!(m[1][1], 1.);
    assert_eq!(m[2][2], -0.125);
    assert_eq!(m[3][2], 0.);
    assert_eq!(m[3][3], 1.);

    // Depth runs 0 at the near plane to 1 at the far plane
    let near = matrix::transform(&m, &[0., 0., 0., 1.]);
    assert_eq!(near[2], 0.);
    let far = matrix::transform(&m, &[0., 0., -8., 1.]);
    assert_eq!(far[2], 1.);

    // An off-centre box maps its corners to the clip cube walls
    let m = transform::orthographic(0., 4., 0., 2., 1., 5.);
    let c = matrix::transform(&m, &[0., 0., -1., 1.]);
    assert_eq!(c[0], -1.);
    assert_eq!(c[1], -1.);
    assert_eq!(c[2], 0.);
    let c = matrix::transform(&m, &[4., 2., -5., 1.]);
    assert_eq!(c[0], 1.);
    assert_eq!(c[1], 1.);
    assert_eq!(c[2], 1.);

    let m2 = transform::orthographic2d(-1., 1., -1., 1.);
    assert_eq!(m2[2][2], -1.);
    assert_eq!(m2[0][0], 1.);
}

#[test]
fn test_frustum() {
    // A symmetric frustum matches the fov form
    let fov = std::f64::consts::FRAC_PI_4;
    let near = 0.1;
    let far = 100.;
    let top = (fov / 2.).tan() * near;
    let right = top * 1.;
    let f = transform::frustum(-right, right, -top, top, near, far);
    let p = transform::perspective(fov, 1., near, far);
    assert!(mat_close(&f, &p, 1e-12));
}

//a Decompose and recompose
#[test]
fn test_decompose_recompose() {
    let t = [10., 20., 30.];
    let r = [0., 0., scalar::atan2(0.5, 0.866)];
    let s = [1., 1., 1.];
    let m = transform::recompose_euler(&t, &r, &s);

    let (t2, r2, s2) = transform::decompose_euler(&m).unwrap();
    assert!(vector::distance(&t, &t2) < 1e-12);
    assert!(vector::distance(&r, &r2) < 1e-9);
    assert!(vector::distance(&s, &s2) < 1e-12);
    // Round trip is exact to floating rounding
    let m2 = transform::recompose_euler(&t2, &r2, &s2);
    assert!(mat_close(&m, &m2, 1e-12));

    // And through the quaternion form
    let (t3, q3, s3) = transform::decompose(&m).unwrap();
    let m3 = transform::recompose(&t3, &q3, &s3);
    assert!(mat_close(&m, &m3, 1e-12));
}

#[test]
fn test_decompose_scales() {
    let t = [5., 10., 15.];
    let r = [0.; 3];
    let s = [2., 3., 4.];
    let m = transform::recompose_euler(&t, &r, &s);
    let (t2, r2, s2) = transform::decompose_euler(&m).unwrap();
    assert!(vector::distance(&t, &t2) < 1e-12);
    assert!(vector::distance(&r, &r2) < 1e-12);
    assert!(vector::distance(&s, &s2) < 1e-12);
}

#[test]
fn test_decompose_negative_scale() {
    // A fully mirrored scale is recovered with all three axes negative
    let t = [10., 20., 30.];
    let r = [0., scalar::radians(75.0), 0.];
    let s = [-1., -1., -1.];
    let m = transform::recompose_euler(&t, &r, &s);

    let (t2, r2, s2) = transform::decompose_euler(&m).unwrap();
    assert!(vector::distance(&t, &t2) < 1e-12);
    assert!(vector::distance(&s, &s2) < 1e-12);
    assert!(vector::distance(&r, &r2) < 1e-6);
    let m2 = transform::recompose_euler(&t2, &r2, &s2);
    assert!(mat_close(&m, &m2, 1e-9));

    let (_, q3, s3) = transform::decompose(&m).unwrap();
    assert!(vector::distance(&s, &s3) < 1e-12);
    let m3 = transform::recompose(&t2, &q3, &s3);
    assert!(mat_close(&m, &m3, 1e-9));
}

#[test]
fn test_decompose_rejects() {
    // An all-zero matrix has no valid w-w entry
    assert!(transform::decompose(&matrix::zero::<f64, 4>()).is_none());

    // A zero basis with a valid w-w entry is still degenerate
    let mut m = matrix::zero::<f64, 4>();
    m[3][3] = 1.;
    assert!(transform::decompose(&m).is_none());
    assert!(transform::decompose_euler(&m).is_none());
}

#[test]
fn test_decompose_clears_perspective() {
    // A stray perspective component is separated off and discarded
    let mut m = matrix::identity::<f64, 4>();
    m[0][3] = 0.5;
    let (t, q, s) = transform::decompose(&m).unwrap();
    assert_eq!(t, [0., 0., 0.]);
    assert!(vector::distance(&s, &[1., 1., 1.]) < 1e-12);
    assert!(vector::distance(&q, &quat::identity()) < 1e-12);
}

#[test]
fn test_decompose_rotation_only() {
    // A swapped-axis reflection-free rotation decomposes cleanly
    let m = matrix::from_mat3(&[[0., 1., 0.], [1., 0., 0.], [0., 0., -1.]]);
    let (t, _q, s) = transform::decompose(&m).unwrap();
    assert_eq!(t, [0., 0., 0.]);
    // Determinant is +1, so scales stay positive
    assert!(vector::distance(&s, &[1., 1., 1.]) < 1e-12);
}

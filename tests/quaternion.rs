//a Imports
use gfx_nd::glsl::{Quatd, Vec3d};
use gfx_nd::{quat, scalar, vector, Quat};

//a Helpers
//fi quat_eq
/// Compare two quaternions as rotations: q and -q rotate identically,
/// so either component match is accepted
fn quat_eq(q: &Quatd, q2: &Quatd) -> bool {
    let d_sub = (*q2 - *q).length_sq();
    let d_add = (*q2 + *q).length_sq();
    d_sub < 1.0e-6 || d_add < 1.0e-6
}

fn quat_eq_wxyz(q: &Quatd, wxyz: (f64, f64, f64, f64)) -> bool {
    let e = Quatd::new(wxyz.0, wxyz.1, wxyz.2, wxyz.3);
    quat_eq(q, &e)
}

//a Construction
#[test]
fn test_identity_and_components() {
    let q = Quatd::identity();
    assert_eq!(q.length(), 1.);
    assert_eq!(q.as_wxyz(), (1., 0., 0., 0.));
    assert_eq!(Quatd::default().as_wxyz(), (1., 0., 0., 0.));

    let q = Quatd::new(1., 2., 3., 4.);
    assert_eq!(q.w(), 1.);
    assert_eq!(q.x(), 2.);
    assert_eq!(q.y(), 3.);
    assert_eq!(q.z(), 4.);
    // Indexing is in x, y, z, w storage order
    assert_eq!(q[0], 2.);
    assert_eq!(q[3], 1.);
    assert_eq!(q.conjugate().as_wxyz(), (1., -2., -3., -4.));
    assert_eq!(q.length_sq(), 30.);
}

#[test]
fn test_axis_angle_products() {
    let x = Vec3d::new(1., 0., 0.);
    let y = Vec3d::new(0., 1., 0.);
    let z = Vec3d::new(0., 0., 1.);
    let ra = std::f64::consts::FRAC_PI_2;
    let rsqrt2 = 0.5_f64.sqrt();

    assert_eq!(Quatd::of_axis_angle(0., &x).as_wxyz(), (1., 0., 0., 0.));
    assert!(quat_eq_wxyz(&Quatd::of_axis_angle(ra, &x), (rsqrt2, rsqrt2, 0., 0.)));
    assert!(quat_eq_wxyz(&Quatd::of_axis_angle(2. * ra, &x), (0., 1., 0., 0.)));
    assert!(quat_eq_wxyz(&Quatd::of_axis_angle(ra, &y), (rsqrt2, 0., rsqrt2, 0.)));
    assert!(quat_eq_wxyz(&Quatd::of_axis_angle(ra, &z), (rsqrt2, 0., 0., rsqrt2)));

    let x90 = Quatd::of_axis_angle(ra, &x);
    let y90 = Quatd::of_axis_angle(ra, &y);
    let z90 = Quatd::of_axis_angle(ra, &z);

    assert!(quat_eq_wxyz(&(x90 * y90), (0.5, 0.5, 0.5, 0.5)));
    assert!(quat_eq_wxyz(&(z90 * x90), (0.5, 0.5, 0.5, 0.5)));
    assert!(quat_eq_wxyz(&(y90 * z90), (0.5, 0.5, 0.5, 0.5)));
    assert!(quat_eq_wxyz(&(y90 * x90), (0.5, 0.5, 0.5, -0.5)));
    assert!(quat_eq_wxyz(&(x90 * z90), (0.5, 0.5, -0.5, 0.5)));
    assert!(quat_eq_wxyz(&(z90 * y90), (0.5, -0.5, 0.5, 0.5)));

    // Twelve 30-degree steps come back to a full turn
    for axis in [&x, &y, &z] {
        let t = Quatd::of_axis_angle(ra / 3., axis);
        let t2 = t * t;
        let t4 = t2 * t2;
        let t12 = t4 * t4 * t4;
        assert!(quat_eq_wxyz(&t12, (1., 0., 0., 0.)));
    }
}

#[test]
fn test_rotate_vec() {
    let x = Vec3d::new(1., 0., 0.);
    let y = Vec3d::new(0., 1., 0.);
    let z = Vec3d::new(0., 0., 1.);
    let ra = std::f64::consts::FRAC_PI_2;

    let qx = Quatd::of_axis_angle(ra, &x);
    assert!(z.distance(&(qx * y)) < 1e-12);
    assert!(y.distance(&(qx * -z)) < 1e-12);
    assert!(x.distance(&(qx * x)) < 1e-12);

    let qz = Quatd::of_axis_angle(ra, &z);
    assert!(y.distance(&(qz * x)) < 1e-12);

    // The matrix form maps the same vectors
    let m = qz.mat3();
    assert!((m.transform(&x)).distance(&(qz * x)) < 1e-12);

    // Rotating with q and then its inverse is the identity
    let q = Quatd::of_axis_angle(0.7, &Vec3d::new(1., 2., 3.).normalize());
    let v = Vec3d::new(0.3, -0.4, 0.5);
    assert!(v.distance(&(q.inverse() * (q * v))) < 1e-12);
}

#[test]
fn test_between() {
    let x = Vec3d::new(1., 0., 0.);
    let y = Vec3d::new(0., 1., 0.);

    // Identical vectors give the identity rotation
    let q = Quatd::between(&x, &x);
    assert!(quat_eq_wxyz(&q, (1., 0., 0., 0.)));

    // x to y is a quarter turn about z
    let q = Quatd::between(&x, &y);
    assert!(y.distance(&(q * x)) < 1e-12);
    assert!((q.angle() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);

    // Anti-parallel vectors still rotate x onto -x
    let q = Quatd::between(&x, &Vec3d::new(-1., 0., 0.));
    assert!((q.angle() - std::f64::consts::PI).abs() < 1e-9);
    assert!((q * x).distance(&Vec3d::new(-1., 0., 0.)) < 1e-12);
}

#[test]
fn test_from_euler() {
    // Roll about Z only
    let q = Quatd::from_euler(&Vec3d::new(0., 0., 0.5));
    let qz = Quatd::of_axis_angle(0.5, &Vec3d::new(0., 0., 1.));
    assert!(quat_eq(&q, &qz));

    // Pitch about X only
    let q = Quatd::from_euler(&Vec3d::new(0.3, 0., 0.));
    let qx = Quatd::of_axis_angle(0.3, &Vec3d::new(1., 0., 0.));
    assert!(quat_eq(&q, &qx));

    // The composition order is roll after yaw after pitch
    let e = Vec3d::new(0.2, 0.3, 0.4);
    let q = Quatd::from_euler(&e);
    let qx = Quatd::of_axis_angle(0.2, &Vec3d::new(1., 0., 0.));
    let qy = Quatd::of_axis_angle(0.3, &Vec3d::new(0., 1., 0.));
    let qz = Quatd::of_axis_angle(0.4, &Vec3d::new(0., 0., 1.));
    assert!(quat_eq(&q, &(qz * qy * qx)));
}

//a Norm and inverse
#[test]
fn test_normalize() {
    let q = Quatd::new(1., 2., 3., 4.).normalize();
    assert!((q.length() - 1.).abs() < 1e-14);

    // The zero quaternion normalizes to the identity rotation
    let q = Quatd::new(0., 0., 0., 0.).normalize();
    assert_eq!(q.as_wxyz(), (1., 0., 0., 0.));
}

#[test]
fn test_inverse() {
    let q = Quatd::new(1., 2., 3., 4.);
    let p = q * q.inverse();
    assert!(quat_eq_wxyz(&p, (1., 0., 0., 0.)));

    // For a unit quaternion the inverse is the conjugate
    let u = q.normalize();
    let d = u.inverse() - u.conjugate();
    assert!(d.length() < 1e-14);
}

//a Transcendentals
#[test]
fn test_exp_log() {
    // log of the identity is the zero quaternion
    let l = Quatd::identity().log();
    assert_eq!(l.into_array(), [0., 0., 0., 0.]);

    // log of a negative real quaternion turns through pi about x
    let l = Quatd::new(-1., 0., 0., 0.).log();
    assert_eq!(l.as_wxyz(), (0., std::f64::consts::PI, 0., 0.));

    // log at zero is all infinite
    let l = Quatd::new(0., 0., 0., 0.).log();
    assert_eq!(l.is_inf(), [true, true, true, true]);

    // exp of an effectively real quaternion collapses to zero
    let e = Quatd::new(5., 0., 0., 0.).exp();
    assert_eq!(e.into_array(), [0., 0., 0., 0.]);

    // exp . log is the identity on unit quaternions off the real axis
    let q = Quatd::of_axis_angle(0.8, &Vec3d::new(0., 1., 0.));
    let r = q.log().exp();
    assert!(quat_eq(&q, &r));

    // log of exp recovers a small pure quaternion
    let p = Quatd::new(0., 0.1, 0.2, 0.3);
    let r = p.exp().log();
    let d = r - p;
    assert!(d.length() < 1e-12);
}

#[test]
fn test_pow() {
    let q = Quatd::of_axis_angle(0.6, &Vec3d::new(0., 0., 1.));

    // Power zero is the identity
    assert_eq!(q.pow(0.).as_wxyz(), (1., 0., 0., 0.));

    // Power one reproduces the input
    assert!(quat_eq(&q.pow(1.), &q));

    // Power two is the square
    assert!(quat_eq(&q.pow(2.), &(q * q)));

    // sqrt squared is the input
    let s = q.sqrt();
    assert!(quat_eq(&(s * s), &q));

    // A real quaternion raises its scalar part
    let r = Quatd::new(2., 0., 0., 0.).pow(3.);
    assert_eq!(r.as_wxyz(), (8., 0., 0., 0.));

    // Non-unit quaternions scale as |q|^y
    let q2 = Quatd::new(0., 0., 0., 2.);
    let sq = q2.pow(2.);
    assert!((sq.length() - 4.).abs() < 1e-12);
}

//a Interpolation
#[test]
fn test_lerp() {
    let a = Quatd::new(1., 0., 0., 0.);
    let b = Quatd::new(0., 1., 0., 0.);
    assert_eq!(a.lerp(&b, 0.).into_array(), a.into_array());
    assert_eq!(a.lerp(&b, 1.).into_array(), b.into_array());
    assert_eq!(a.lerp(&b, 0.25).as_wxyz(), (0.75, 0.25, 0., 0.));
}

#[test]
fn test_mix_slerp() {
    let x = Vec3d::new(1., 0., 0.);
    let y = Vec3d::new(0., 1., 0.);
    let z = Vec3d::new(0., 0., 1.);

    // Halfway between the identity and a quarter turn is 45 degrees
    let q1 = Quatd::between(&x, &x);
    let q2 = Quatd::between(&x, &y);
    let h = q1.mix(&q2, 0.5);
    assert!((scalar::degrees(h.angle()) - 45.).abs() < 1e-3);
    let h = q1.slerp(&q2, 0.5);
    assert!((scalar::degrees(h.angle()) - 45.).abs() < 1e-3);

    // Endpoints are reproduced
    let qa = Quatd::of_axis_angle(0.3, &z);
    let qb = Quatd::of_axis_angle(1.1, &z);
    assert!(quat_eq(&qa.mix(&qb, 0.), &qa));
    assert!(quat_eq(&qa.mix(&qb, 1.), &qb));
    assert!(quat_eq(&qa.slerp(&qb, 0.), &qa));

    // slerp takes the short path against a negated operand, mix does not
    let qc = -qb;
    let s = qa.slerp(&qc, 0.5);
    assert!((s.angle() - 0.7).abs() < 1e-9);

    // Nearly identical rotations fall back to linear interpolation
    let qd = Quatd::of_axis_angle(0.3 + 1e-9, &z);
    let m = qa.mix(&qd, 0.5);
    assert!((m.angle() - 0.3).abs() < 1e-6);
}

//a Extraction
#[test]
fn test_angle_axis() {
    let axis = Vec3d::new(1., 2., 3.).normalize();
    let q = Quatd::of_axis_angle(0.9, &axis);
    assert!((q.angle() - 0.9).abs() < 1e-12);
    assert!(q.axis().distance(&axis) < 1e-12);

    // Near the identity the asin path keeps precision
    let q = Quatd::of_axis_angle(1e-4, &axis);
    assert!((q.angle() - 1e-4).abs() < 1e-12);

    // The identity has no axis; the conventional Z is reported
    assert_eq!(Quatd::identity().axis().into_array(), [0., 0., 1.]);
    assert_eq!(Quatd::identity().angle(), 0.);
}

#[test]
fn test_pitch_yaw_roll() {
    let e = Vec3d::new(0.2, 0.3, 0.4);
    let q = Quatd::from_euler(&e);
    assert!((q.pitch() - 0.2).abs() < 1e-12);
    assert!((q.yaw() - 0.3).abs() < 1e-12);
    assert!((q.roll() - 0.4).abs() < 1e-12);
    assert!(q.euler_angles().distance(&e) < 1e-12);

    let q = Quatd::from_euler(&Vec3d::new(0.5, 0., 0.));
    assert!((q.pitch() - 0.5).abs() < 1e-12);
    assert_eq!(q.roll(), 0.);
    assert_eq!(q.yaw(), 0.);
}

//a Matrix conversions
#[test]
fn test_mat_casts() {
    let samples = [
        Quatd::identity(),
        Quatd::new(0., 1., 0., 0.),
        Quatd::new(0., 0., 1., 0.),
        Quatd::new(0., 0., 0., 1.),
        Quatd::new(1., 2., 3., 4.).normalize(),
        Quatd::new(4., 3., 2., 1.).normalize(),
        Quatd::new(-1., 0.5, -0.5, 0.25).normalize(),
    ];
    for q in &samples {
        // Round-trip through the matrix, up to sign
        let m = q.mat3();
        let q2 = Quat::from_rotation3(&m);
        assert!(quat_eq(q, &q2));
        // And the matrix itself round-trips exactly-ish
        let m2 = q2.mat3();
        assert!(vector::all(&m.equal_eps(&m2, 1e-9)));
    }

    // mat4 is mat3 with identity padding
    let q = Quatd::new(1., 2., 3., 4.).normalize();
    let m4 = q.mat4();
    assert_eq!(m4[3], [0., 0., 0., 1.]);
    assert_eq!(m4[0][3], 0.);
    let q2 = Quat::from_rotation4(&m4);
    assert!(quat_eq(&q, &q2));

    // A quarter turn about x maps y to z in matrix form
    let q = Quatd::of_axis_angle(std::f64::consts::FRAC_PI_2, &Vec3d::new(1., 0., 0.));
    let m = q.mat3();
    let v = m.transform(&Vec3d::new(0., 1., 0.));
    assert!(v.distance(&Vec3d::new(0., 0., 1.)) < 1e-12);
}

#[test]
fn test_look_at() {
    // Looking along -z with y up is the identity rotation
    let q = Quatd::look_at(&Vec3d::new(0., 0., -1.), &Vec3d::new(0., 1., 0.));
    let v = Vec3d::new(0.3, 0.4, 0.5);
    let r = q * v;
    // The rotation is orthonormal whatever the direction
    assert!((r.length() - v.length()).abs() < 1e-12);

    let q = Quatd::look_at(&Vec3d::new(1., 0., 0.), &Vec3d::new(0., 1., 0.));
    let r = q * Vec3d::new(0., 0., 1.);
    assert!((r.length() - 1.).abs() < 1e-12);
}

#[test]
fn test_rotate_incremental() {
    let z = Vec3d::new(0., 0., 1.);
    let q = Quatd::identity().rotate(0.4, &z).rotate(0.5, &z);
    assert!((q.angle() - 0.9).abs() < 1e-12);

    // A drifted axis is renormalized
    let q = Quatd::identity().rotate(0.4, &Vec3d::new(0., 0., 2.));
    assert!((q.angle() - 0.4).abs() < 1e-12);
}

//a Comparisons
#[test]
fn test_comparisons() {
    let a = Quatd::new(1., 2., 3., 4.);
    let b = Quatd::new(1., 2., 0., 4.);
    // Component order of the bool vector is x, y, z, w
    assert_eq!(a.equal(&a), [true; 4]);
    assert_eq!(a.equal(&b), [true, false, true, true]);
    assert_eq!(a.not_equal(&b), [false, true, false, false]);
    assert_eq!(a.equal_eps(&b, 4.), [true; 4]);

    // q and -q are rotationally equal but not component-equal
    let u = a.normalize();
    assert_eq!(u.equal(&-u), [false; 4]);

    assert_eq!(
        quat::less_than(&[1., 5., 1., 5.], &[2., 2., 2., 2.]),
        [true, false, true, false]
    );

    let n = Quatd::new(f64::NAN, 0., 0., 0.);
    assert_eq!(n.is_nan(), [false, false, false, true]);
}

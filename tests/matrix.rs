//a Imports
use gfx_nd::glsl::{Mat3d, Mat4d, Vec3d, Vec4d};
use gfx_nd::{matrix, vector};

//a Helpers
fn mat_close<const D: usize>(a: &[[f64; D]; D], b: &[[f64; D]; D], tol: f64) -> bool {
    vector::all(&matrix::equal_eps(a, b, tol))
}

//a Construction and indexing
#[test]
fn test_construction() {
    let i = Mat3d::identity();
    assert_eq!(i.into_cols(), [[1., 0., 0.], [0., 1., 0.], [0., 0., 1.]]);
    let d = Mat3d::diagonal(2.);
    assert_eq!(d.into_cols(), [[2., 0., 0.], [0., 2., 0.], [0., 0., 2.]]);
    assert!(Mat3d::zero().is_zero());
    assert!(Mat3d::default().is_zero());

    let m = Mat3d::from_cols([[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]]);
    // m[c][r] addresses column c, row r
    assert_eq!(m[0], [1., 2., 3.]);
    assert_eq!(m[1][2], 6.);
    assert_eq!(m[2][0], 7.);
    assert_eq!(m.col(1).into_array(), [4., 5., 6.]);

    let mut m = m;
    m[1][2] = 60.;
    m.set_col(2, &Vec3d::new(70., 80., 90.));
    assert_eq!(m[1], [4., 5., 60.]);
    assert_eq!(m[2], [70., 80., 90.]);
}

#[test]
fn test_mat3_mat4_conversion() {
    let m3 = Mat3d::from_cols([[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]]);
    let m4 = Mat4d::from_mat3(&m3);
    assert_eq!(m4[0], [1., 2., 3., 0.]);
    assert_eq!(m4[1], [4., 5., 6., 0.]);
    assert_eq!(m4[3], [0., 0., 0., 1.]);
    assert_eq!(Mat3d::from_mat4(&m4).into_cols(), m3.into_cols());
}

//a Products
#[test]
fn test_multiply() {
    let i = Mat3d::identity();
    let m = Mat3d::from_cols([[1., 2., 3.], [4., 5., 6.], [7., 8., 10.]]);
    assert_eq!((i * m).into_cols(), m.into_cols());
    assert_eq!((m * i).into_cols(), m.into_cols());

    // Column j of A*B is A applied to column j of B
    let b = Mat3d::from_cols([[1., 0., 0.], [0., 2., 0.], [1., 1., 1.]]);
    let ab = m * b;
    assert_eq!(ab.col(0).into_array(), m.transform(&b.col(0)).into_array());
    assert_eq!(ab.col(1).into_array(), m.transform(&b.col(1)).into_array());
    assert_eq!(ab.col(2).into_array(), m.transform(&b.col(2)).into_array());

    // (A*B)v == A(Bv)
    let v = Vec3d::new(1., -2., 3.);
    let lhs = (m * b) * v;
    let rhs = m * (b * v);
    assert!(lhs.distance(&rhs) < 1e-12);

    // A row vector times the matrix is the transpose transform
    let vr = v * m;
    let vt = m.transpose() * v;
    assert_eq!(vr.into_array(), vt.into_array());
}

#[test]
fn test_component_ops() {
    let a = Mat3d::from_cols([[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]]);
    let b = Mat3d::identity();
    assert_eq!((a + b)[0], [2., 2., 3.]);
    assert_eq!((a - b)[1], [4., 4., 6.]);
    assert_eq!((a * 2.)[2], [14., 16., 18.]);
    assert_eq!((a / 2.)[0], [0.5, 1., 1.5]);
    assert_eq!((-a)[0], [-1., -2., -3.]);

    let h = a.comp_mult(&b);
    assert_eq!(h[0], [1., 0., 0.]);
    assert_eq!(h[1], [0., 5., 0.]);
    assert_eq!(h[2], [0., 0., 9.]);

    let mut c = a;
    c += b;
    c -= b;
    c *= 2.;
    c /= 2.;
    assert_eq!(c.into_cols(), a.into_cols());
}

#[test]
fn test_outer_product() {
    let c = Vec3d::new(1., 2., 3.);
    let r = Vec3d::new(4., 5., 6.);
    let m = Mat3d::outer_product(&c, &r);
    // Entry at column j, row i is c[i]*r[j]
    assert_eq!(m[0], [4., 8., 12.]);
    assert_eq!(m[1], [5., 10., 15.]);
    assert_eq!(m[2], [6., 12., 18.]);
}

//a Transpose, determinant, inverse
#[test]
fn test_transpose() {
    let m = Mat3d::from_cols([[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]]);
    let t = m.transpose();
    assert_eq!(t[0], [1., 4., 7.]);
    assert_eq!(t[1], [2., 5., 8.]);
    assert_eq!(t[2], [3., 6., 9.]);
    assert_eq!(t.transpose().into_cols(), m.into_cols());
}

#[test]
fn test_determinant() {
    assert_eq!(Mat3d::identity().determinant(), 1.);
    assert_eq!(Mat3d::diagonal(2.).determinant(), 8.);
    assert_eq!(Mat4d::diagonal(2.).determinant(), 16.);
    // Repeated column is singular
    let s = Mat3d::from_cols([[1., 2., 3.], [1., 2., 3.], [7., 8., 9.]]);
    assert_eq!(s.determinant(), 0.);

    let m = Mat3d::from_cols([[2., 0., 0.], [1., 3., 0.], [4., 5., 6.]]);
    assert_eq!(m.determinant(), 36.);

    // Swapping two columns negates the determinant
    let m2 = Mat3d::from_cols([[1., 3., 0.], [2., 0., 0.], [4., 5., 6.]]);
    assert_eq!(m2.determinant(), -36.);
}

#[test]
fn test_inverse3() {
    let samples = [
        [[1., 0., 0.], [0., 1., 0.], [0., 0., 1.]],
        [[1., 0., 0.], [0., 1., 1.], [0., 0., 1.]],
        [[1., 3., 2.], [0., 2., 3.], [-1., 2., 3.]],
    ];
    for m in &samples {
        let mi = matrix::inverse3(m);
        let p = matrix::multiply(&mi, m);
        assert!(mat_close(&p, &matrix::identity(), 1e-9));
        let p = matrix::multiply(m, &mi);
        assert!(mat_close(&p, &matrix::identity(), 1e-9));
    }
}

#[test]
fn test_inverse4() {
    let samples = [
        [
            [1., 0., 0., 0.],
            [0., 1., 0., 0.],
            [0., 0., 1., 1.],
            [0., 0., 1., 0.],
        ],
        [
            [1., 3., 2., 1.],
            [0., 2., 3., 3.],
            [-1., 2., 3., 2.],
            [0., 0., 2., 1.],
        ],
    ];
    for m in &samples {
        let mi = matrix::inverse4(m);
        let p = matrix::multiply(&mi, m);
        assert!(mat_close(&p, &matrix::identity(), 1e-9));
    }

    let m = Mat4d::from_cols(samples[1]);
    let p = m.inverse() * m;
    assert!(vector::all(&p.equal_eps(&Mat4d::identity(), 1e-9)));
}

#[test]
fn test_singular_inverse() {
    // Singular inverse divides by zero and yields non-finite entries
    let s = Mat3d::from_cols([[1., 2., 3.], [1., 2., 3.], [7., 8., 9.]]);
    let si = s.inverse();
    let mut any_nonfinite = false;
    for c in 0..3 {
        for r in 0..3 {
            if !si[c][r].is_finite() {
                any_nonfinite = true;
            }
        }
    }
    assert!(any_nonfinite);
}

//a Comparisons and interpolation
#[test]
fn test_comparisons() {
    let a = Mat3d::identity();
    let mut b = a;
    b[1][1] = 2.;
    assert_eq!(a.equal(&a), [true, true, true]);
    assert_eq!(a.equal(&b), [true, false, true]);
    assert_eq!(a.not_equal(&b), [false, true, false]);
    assert_eq!(a.equal_eps(&b, 1.5), [true, true, true]);
    assert_eq!(a.equal_eps(&b, 0.5), [true, false, true]);

    let one = 1.0_f64;
    let mut c = a;
    c[0][0] = f64::from_bits(one.to_bits() + 1);
    assert_eq!(a.equal_ulps(&c, 1), [true, true, true]);
    assert_eq!(a.equal_ulps(&c, 0), [false, true, true]);
}

#[test]
fn test_mix() {
    let a = Mat3d::zero();
    let b = Mat3d::diagonal(2.);
    let m = a.mix(&b, 0.5);
    assert_eq!(m.into_cols(), Mat3d::diagonal(1.).into_cols());
    let m = matrix::mix_mat(&a.into_cols(), &b.into_cols(), &Mat3d::diagonal(0.5).into_cols());
    assert_eq!(m, Mat3d::diagonal(1.).into_cols());
}

#[test]
fn test_display() {
    let m = Mat3d::from_cols([[0., 1., 2.], [3., 4., 5.], [6., 7., 8.]]);
    assert_eq!(format!("{}", m), "[0,1,2 3,4,5 6,7,8]");
    let v = Vec4d::new(0., 1., 2., 3.);
    assert_eq!(format!("{}", v), "(0,1,2,3)");
}

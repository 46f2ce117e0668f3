//a Imports
use gfx_nd::noise;

//a Reference values
#[test]
fn test_perlin2_reference() {
    assert!((noise::perlin2(&[0.2_f64, 0.3]) - 0.232801).abs() < 1e-6);
    assert!((noise::perlin2(&[-0.2_f64, -0.3]) - -0.272289).abs() < 1e-6);
    assert!((noise::perlin2(&[0.2_f32, 0.3]) - 0.232801).abs() < 1e-5);
}

#[test]
fn test_perlin3_reference() {
    assert!((noise::perlin3(&[0.2_f64, 0.3, 0.4]) - -0.46676).abs() < 1e-2);
    assert!((noise::perlin3(&[-0.2_f64, -0.3, -0.4]) - 0.264326).abs() < 1e-2);
}

#[test]
fn test_perlin4_reference() {
    assert!((noise::perlin4(&[0.2_f64, 0.3, 0.4, 0.5]) - -0.437573).abs() < 1e-6);
    assert!((noise::perlin4(&[-0.2_f64, -0.3, -0.4, -0.5]) - 0.59862).abs() < 1e-6);
}

#[test]
fn test_perlin_periodic_reference() {
    assert!((noise::perlin2_periodic(&[0.2_f64, 0.3], &[0.5, 0.5]) - 0.248691).abs() < 1e-6);
    assert!(
        (noise::perlin3_periodic(&[0.2_f64, 0.3, 0.4], &[0.5, 0.5, 0.5]) - -0.246843).abs() < 1e-6
    );
    assert!(
        (noise::perlin4_periodic(&[0.2_f64, 0.3, 0.4, 0.5], &[0.5, 0.5, 0.5, 0.5]) - -0.0998235)
            .abs()
            < 1e-7
    );
}

//a Lattice behavior
#[test]
fn test_integer_lattice_is_zero() {
    // Gradient noise vanishes on every integer lattice point
    assert_eq!(noise::perlin2(&[0.0_f64, 0.0]), 0.0);
    assert_eq!(noise::perlin3(&[0.0_f64, 0.0, 0.0]), 0.0);
    assert_eq!(noise::perlin4(&[0.0_f64, 0.0, 0.0, 0.0]), 0.0);

    for p in [[1.0_f64, 2.0], [10., 20.], [-1., -2.], [-10., -20.], [0., 5.]] {
        assert_eq!(noise::perlin2(&p), 0.0, "perlin2{:?}", p);
    }
    for p in [
        [1.0_f64, 2.0, 3.0],
        [10., 20., 30.],
        [-1., -2., -3.],
        [1., 0., 10.],
    ] {
        assert_eq!(noise::perlin3(&p), 0.0, "perlin3{:?}", p);
    }
    for p in [
        [1.0_f64, 2.0, 3.0, 4.0],
        [10., 20., 30., 40.],
        [-1., -2., -3., -4.],
        [1., 5., 0., 2.],
    ] {
        assert_eq!(noise::perlin4(&p), 0.0, "perlin4{:?}", p);
    }
}

#[test]
fn test_tiny_input_is_zero() {
    // Denormal-small inputs sit on the origin lattice point
    let tiny = f64::MIN_POSITIVE;
    assert!(noise::perlin2(&[tiny, tiny]).abs() < 1e-12);
    assert!(noise::perlin3(&[tiny, tiny, tiny]).abs() < 1e-12);
    assert!(noise::perlin4(&[tiny, tiny, tiny, tiny]).abs() < 1e-12);
}

#[test]
fn test_periodicity() {
    // With an integer period the noise tiles exactly
    let rep = [2.0_f64, 3.0];
    for p in [[0.3_f64, 0.4], [1.1, 0.7], [0.9, 2.9]] {
        let a = noise::perlin2_periodic(&p, &rep);
        let b = noise::perlin2_periodic(&[p[0] + rep[0], p[1] + rep[1]], &rep);
        assert!((a - b).abs() < 1e-12, "tile mismatch at {:?}", p);
    }

    let rep3 = [2.0_f64, 2.0, 2.0];
    let p = [0.3_f64, 1.4, 0.8];
    let a = noise::perlin3_periodic(&p, &rep3);
    let b = noise::perlin3_periodic(&[p[0] + 2., p[1] + 4., p[2] - 2.], &rep3);
    assert!((a - b).abs() < 1e-12);
}

#[test]
fn test_range_is_sane() {
    // Values stay in roughly [-1, 1] over a sample of points
    let mut p = [0.17_f64, 0.31, 0.47];
    for _ in 0..100 {
        let v = noise::perlin3(&p);
        assert!(v.abs() <= 1.5, "out of range at {:?}: {}", p, v);
        p[0] += 0.37;
        p[1] += 0.53;
        p[2] += 0.71;
    }
}

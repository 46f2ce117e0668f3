/*a Copyright

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

  http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.

@file    noise_op.rs
@brief   Classic Perlin noise - part of graphics math library
 */

//a Imports
use crate::scalar_op as scalar;
use crate::vector_op as vector;
use crate::Float;

//a Notes
// Classic Perlin gradient noise with the 6t^5 - 15t^4 + 10t^3 fade
// curve. Lattice hashing uses the permutation polynomial
// ((34x + 1) x) mod 289 evaluated four lanes at a time, and the
// gradients are normalized with a first-order Taylor approximation of
// 1/sqrt; both must stay exactly as written for outputs to match the
// reference values. Every integer lattice point evaluates to zero.
//
// The periodic variants wrap the lattice coordinates by the given
// period before hashing, so the noise tiles with that period.

//a Lattice helpers
//fi mod289
fn mod289<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    let m = V::lit(289.0);
    for c in &mut v {
        *c = *c - (*c / m).floor() * m;
    }
    v
}

//fi permute
fn permute<V: Float>(mut v: [V; 4]) -> [V; 4] {
    let c34 = V::lit(34.0);
    for x in &mut v {
        *x = (*x * c34 + V::one()) * *x;
    }
    mod289(v)
}

//fi taylor_inv_sqrt
fn taylor_inv_sqrt<V: Float>(mut v: [V; 4]) -> [V; 4] {
    let a = V::lit(1.792_842_914_001_59);
    let b = V::lit(0.853_734_720_953_14);
    for c in &mut v {
        *c = a - b * *c;
    }
    v
}

//fi fade
fn fade<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    let six = V::int(6);
    let fifteen = V::int(15);
    let ten = V::int(10);
    for t in &mut v {
        *t = *t * *t * *t * (*t * (*t * six - fifteen) + ten);
    }
    v
}

//a Two components
//fi perlin2_impl
fn perlin2_impl<V: Float>(p: &[V; 2], rep: Option<&[V; 2]>) -> V {
    let one = V::one();
    let half = V::frac(1, 2);

    let mut pi = [p[0].floor(), p[1].floor(), p[0].floor() + one, p[1].floor() + one];
    let pf = [
        scalar::fract(p[0]),
        scalar::fract(p[1]),
        scalar::fract(p[0]) - one,
        scalar::fract(p[1]) - one,
    ];
    if let Some(rep) = rep {
        pi = [
            scalar::modulo(pi[0], rep[0]),
            scalar::modulo(pi[1], rep[1]),
            scalar::modulo(pi[2], rep[0]),
            scalar::modulo(pi[3], rep[1]),
        ];
    }
    let pi = mod289(pi);

    let ix = [pi[0], pi[2], pi[0], pi[2]];
    let iy = [pi[1], pi[1], pi[3], pi[3]];
    let fx = [pf[0], pf[2], pf[0], pf[2]];
    let fy = [pf[1], pf[1], pf[3], pf[3]];

    let i = permute(vector::add(permute(ix), &iy, one));

    let c41 = V::lit(41.0);
    let mut gx = [V::zero(); 4];
    for k in 0..4 {
        gx[k] = (scalar::fract(i[k] / c41)) * V::int(2) - one;
    }
    let mut gy = [V::zero(); 4];
    for k in 0..4 {
        gy[k] = scalar::abs(gx[k]) - half;
    }
    for k in 0..4 {
        gx[k] = gx[k] - (gx[k] + half).floor();
    }

    let mut g00 = [gx[0], gy[0]];
    let mut g10 = [gx[1], gy[1]];
    let mut g01 = [gx[2], gy[2]];
    let mut g11 = [gx[3], gy[3]];

    let norm = taylor_inv_sqrt([
        vector::dot(&g00, &g00),
        vector::dot(&g01, &g01),
        vector::dot(&g10, &g10),
        vector::dot(&g11, &g11),
    ]);
    g00 = vector::scale(g00, norm[0]);
    g01 = vector::scale(g01, norm[1]);
    g10 = vector::scale(g10, norm[2]);
    g11 = vector::scale(g11, norm[3]);

    let n00 = vector::dot(&g00, &[fx[0], fy[0]]);
    let n10 = vector::dot(&g10, &[fx[1], fy[1]]);
    let n01 = vector::dot(&g01, &[fx[2], fy[2]]);
    let n11 = vector::dot(&g11, &[fx[3], fy[3]]);

    let fade_xy = fade([pf[0], pf[1]]);
    let n_x = vector::mix(&[n00, n01], &[n10, n11], fade_xy[0]);
    let n_xy = scalar::mix(n_x[0], n_x[1], fade_xy[1]);
    V::lit(2.3) * n_xy
}

//fp perlin2
/// Classic Perlin noise of a 2-component point, in roughly [-1, 1]
///
/// # Example
///
/// ```
/// use gfx_nd::noise;
/// assert_eq!( noise::perlin2(&[0.0_f64, 0.0]), 0.0 );
/// assert!( (noise::perlin2(&[0.2_f64, 0.3]) - 0.232801).abs() < 1e-6 );
/// ```
pub fn perlin2<V: Float>(p: &[V; 2]) -> V {
    perlin2_impl(p, None)
}

//fp perlin2_periodic
/// Classic Perlin noise tiled with the given period
pub fn perlin2_periodic<V: Float>(p: &[V; 2], rep: &[V; 2]) -> V {
    perlin2_impl(p, Some(rep))
}

//a Three components
//fi gradients3
fn gradients3<V: Float>(ixy: &[V; 4]) -> ([V; 4], [V; 4], [V; 4]) {
    let seventh = V::frac(1, 7);
    let half = V::frac(1, 2);
    let mut gx = [V::zero(); 4];
    let mut gy = [V::zero(); 4];
    let mut gz = [V::zero(); 4];
    for k in 0..4 {
        let raw = ixy[k] * seventh;
        gy[k] = scalar::fract(raw.floor() * seventh) - half;
        gx[k] = scalar::fract(raw);
        gz[k] = half - scalar::abs(gx[k]) - scalar::abs(gy[k]);
        let sz = scalar::step(gz[k], V::zero());
        gx[k] = gx[k] - sz * (scalar::step(V::zero(), gx[k]) - half);
        gy[k] = gy[k] - sz * (scalar::step(V::zero(), gy[k]) - half);
    }
    (gx, gy, gz)
}

//fi perlin3_impl
fn perlin3_impl<V: Float>(p: &[V; 3], rep: Option<&[V; 3]>) -> V {
    let one = V::one();

    let (pi0, pi1) = {
        let f = vector::floor(*p);
        match rep {
            Some(rep) => {
                let pi0 = vector::modulo_vec(f, rep);
                let pi1 = vector::modulo_vec(vector::add(pi0, &[one; 3], one), rep);
                (mod289(pi0), mod289(pi1))
            }
            None => (mod289(f), mod289(vector::add(f, &[one; 3], one))),
        }
    };
    let pf0 = vector::fract(*p);
    let pf1 = vector::add(pf0, &[one; 3], -one);

    let ix = [pi0[0], pi1[0], pi0[0], pi1[0]];
    let iy = [pi0[1], pi0[1], pi1[1], pi1[1]];
    let iz0 = [pi0[2]; 4];
    let iz1 = [pi1[2]; 4];

    let ixy = permute(vector::add(permute(ix), &iy, one));
    let ixy0 = permute(vector::add(ixy, &iz0, one));
    let ixy1 = permute(vector::add(ixy, &iz1, one));

    let (gx0, gy0, gz0) = gradients3(&ixy0);
    let (gx1, gy1, gz1) = gradients3(&ixy1);

    let mut g000 = [gx0[0], gy0[0], gz0[0]];
    let mut g100 = [gx0[1], gy0[1], gz0[1]];
    let mut g010 = [gx0[2], gy0[2], gz0[2]];
    let mut g110 = [gx0[3], gy0[3], gz0[3]];
    let mut g001 = [gx1[0], gy1[0], gz1[0]];
    let mut g101 = [gx1[1], gy1[1], gz1[1]];
    let mut g011 = [gx1[2], gy1[2], gz1[2]];
    let mut g111 = [gx1[3], gy1[3], gz1[3]];

    let norm0 = taylor_inv_sqrt([
        vector::dot(&g000, &g000),
        vector::dot(&g010, &g010),
        vector::dot(&g100, &g100),
        vector::dot(&g110, &g110),
    ]);
    g000 = vector::scale(g000, norm0[0]);
    g010 = vector::scale(g010, norm0[1]);
    g100 = vector::scale(g100, norm0[2]);
    g110 = vector::scale(g110, norm0[3]);
    let norm1 = taylor_inv_sqrt([
        vector::dot(&g001, &g001),
        vector::dot(&g011, &g011),
        vector::dot(&g101, &g101),
        vector::dot(&g111, &g111),
    ]);
    g001 = vector::scale(g001, norm1[0]);
    g011 = vector::scale(g011, norm1[1]);
    g101 = vector::scale(g101, norm1[2]);
    g111 = vector::scale(g111, norm1[3]);

    let n000 = vector::dot(&g000, &pf0);
    let n100 = vector::dot(&g100, &[pf1[0], pf0[1], pf0[2]]);
    let n010 = vector::dot(&g010, &[pf0[0], pf1[1], pf0[2]]);
    let n110 = vector::dot(&g110, &[pf1[0], pf1[1], pf0[2]]);
    let n001 = vector::dot(&g001, &[pf0[0], pf0[1], pf1[2]]);
    let n101 = vector::dot(&g101, &[pf1[0], pf0[1], pf1[2]]);
    let n011 = vector::dot(&g011, &[pf0[0], pf1[1], pf1[2]]);
    let n111 = vector::dot(&g111, &pf1);

    let f = fade(pf0);
    let n_z = vector::mix(&[n000, n100, n010, n110], &[n001, n101, n011, n111], f[2]);
    let n_yz = vector::mix(&[n_z[0], n_z[1]], &[n_z[2], n_z[3]], f[1]);
    let n_xyz = scalar::mix(n_yz[0], n_yz[1], f[0]);
    V::lit(2.2) * n_xyz
}

//fp perlin3
/// Classic Perlin noise of a 3-component point, in roughly [-1, 1]
pub fn perlin3<V: Float>(p: &[V; 3]) -> V {
    perlin3_impl(p, None)
}

//fp perlin3_periodic
/// Classic Perlin noise tiled with the given period
pub fn perlin3_periodic<V: Float>(p: &[V; 3], rep: &[V; 3]) -> V {
    perlin3_impl(p, Some(rep))
}

//a Four components
//fi gradients4
fn gradients4<V: Float>(ixy: &[V; 4]) -> ([V; 4], [V; 4], [V; 4], [V; 4]) {
    let seven = V::int(7);
    let six = V::int(6);
    let half = V::frac(1, 2);
    let three_quarters = V::frac(3, 4);
    let mut gx = [V::zero(); 4];
    let mut gy = [V::zero(); 4];
    let mut gz = [V::zero(); 4];
    let mut gw = [V::zero(); 4];
    for k in 0..4 {
        let rx = ixy[k] / seven;
        let ry = rx.floor() / seven;
        let rz = ry.floor() / six;
        gx[k] = scalar::fract(rx) - half;
        gy[k] = scalar::fract(ry) - half;
        gz[k] = scalar::fract(rz) - half;
        gw[k] = three_quarters - scalar::abs(gx[k]) - scalar::abs(gy[k]) - scalar::abs(gz[k]);
        let sw = scalar::step(gw[k], V::zero());
        gx[k] = gx[k] - sw * (scalar::step(V::zero(), gx[k]) - half);
        gy[k] = gy[k] - sw * (scalar::step(V::zero(), gy[k]) - half);
    }
    (gx, gy, gz, gw)
}

//fi perlin4_impl
fn perlin4_impl<V: Float>(p: &[V; 4], rep: Option<&[V; 4]>) -> V {
    let one = V::one();

    let (pi0, pi1) = {
        let f = vector::floor(*p);
        match rep {
            Some(rep) => {
                let pi0 = vector::modulo_vec(f, rep);
                let pi1 = vector::modulo_vec(vector::add(pi0, &[one; 4], one), rep);
                (mod289(pi0), mod289(pi1))
            }
            None => (mod289(f), mod289(vector::add(f, &[one; 4], one))),
        }
    };
    let pf0 = vector::fract(*p);
    let pf1 = vector::add(pf0, &[one; 4], -one);

    let ix = [pi0[0], pi1[0], pi0[0], pi1[0]];
    let iy = [pi0[1], pi0[1], pi1[1], pi1[1]];
    let iz0 = [pi0[2]; 4];
    let iz1 = [pi1[2]; 4];
    let iw0 = [pi0[3]; 4];
    let iw1 = [pi1[3]; 4];

    let ixy = permute(vector::add(permute(ix), &iy, one));
    let ixy0 = permute(vector::add(ixy, &iz0, one));
    let ixy1 = permute(vector::add(ixy, &iz1, one));
    let ixy00 = permute(vector::add(ixy0, &iw0, one));
    let ixy01 = permute(vector::add(ixy0, &iw1, one));
    let ixy10 = permute(vector::add(ixy1, &iw0, one));
    let ixy11 = permute(vector::add(ixy1, &iw1, one));

    let (gx00, gy00, gz00, gw00) = gradients4(&ixy00);
    let (gx01, gy01, gz01, gw01) = gradients4(&ixy01);
    let (gx10, gy10, gz10, gw10) = gradients4(&ixy10);
    let (gx11, gy11, gz11, gw11) = gradients4(&ixy11);

    let mut g0000 = [gx00[0], gy00[0], gz00[0], gw00[0]];
    let mut g1000 = [gx00[1], gy00[1], gz00[1], gw00[1]];
    let mut g0100 = [gx00[2], gy00[2], gz00[2], gw00[2]];
    let mut g1100 = [gx00[3], gy00[3], gz00[3], gw00[3]];
    let mut g0010 = [gx10[0], gy10[0], gz10[0], gw10[0]];
    let mut g1010 = [gx10[1], gy10[1], gz10[1], gw10[1]];
    let mut g0110 = [gx10[2], gy10[2], gz10[2], gw10[2]];
    let mut g1110 = [gx10[3], gy10[3], gz10[3], gw10[3]];
    let mut g0001 = [gx01[0], gy01[0], gz01[0], gw01[0]];
    let mut g1001 = [gx01[1], gy01[1], gz01[1], gw01[1]];
    let mut g0101 = [gx01[2], gy01[2], gz01[2], gw01[2]];
    let mut g1101 = [gx01[3], gy01[3], gz01[3], gw01[3]];
    let mut g0011 = [gx11[0], gy11[0], gz11[0], gw11[0]];
    let mut g1011 = [gx11[1], gy11[1], gz11[1], gw11[1]];
    let mut g0111 = [gx11[2], gy11[2], gz11[2], gw11[2]];
    let mut g1111 = [gx11[3], gy11[3], gz11[3], gw11[3]];

    let norm00 = taylor_inv_sqrt([
        vector::dot(&g0000, &g0000),
        vector::dot(&g0100, &g0100),
        vector::dot(&g1000, &g1000),
        vector::dot(&g1100, &g1100),
    ]);
    g0000 = vector::scale(g0000, norm00[0]);
    g0100 = vector::scale(g0100, norm00[1]);
    g1000 = vector::scale(g1000, norm00[2]);
    g1100 = vector::scale(g1100, norm00[3]);
    let norm01 = taylor_inv_sqrt([
        vector::dot(&g0001, &g0001),
        vector::dot(&g0101, &g0101),
        vector::dot(&g1001, &g1001),
        vector::dot(&g1101, &g1101),
    ]);
    g0001 = vector::scale(g0001, norm01[0]);
    g0101 = vector::scale(g0101, norm01[1]);
    g1001 = vector::scale(g1001, norm01[2]);
    g1101 = vector::scale(g1101, norm01[3]);
    let norm10 = taylor_inv_sqrt([
        vector::dot(&g0010, &g0010),
        vector::dot(&g0110, &g0110),
        vector::dot(&g1010, &g1010),
        vector::dot(&g1110, &g1110),
    ]);
    g0010 = vector::scale(g0010, norm10[0]);
    g0110 = vector::scale(g0110, norm10[1]);
    g1010 = vector::scale(g1010, norm10[2]);
    g1110 = vector::scale(g1110, norm10[3]);
    let norm11 = taylor_inv_sqrt([
        vector::dot(&g0011, &g0011),
        vector::dot(&g0111, &g0111),
        vector::dot(&g1011, &g1011),
        vector::dot(&g1111, &g1111),
    ]);
    g0011 = vector::scale(g0011, norm11[0]);
    g0111 = vector::scale(g0111, norm11[1]);
    g1011 = vector::scale(g1011, norm11[2]);
    g1111 = vector::scale(g1111, norm11[3]);

    let n0000 = vector::dot(&g0000, &pf0);
    let n1000 = vector::dot(&g1000, &[pf1[0], pf0[1], pf0[2], pf0[3]]);
    let n0100 = vector::dot(&g0100, &[pf0[0], pf1[1], pf0[2], pf0[3]]);
    let n1100 = vector::dot(&g1100, &[pf1[0], pf1[1], pf0[2], pf0[3]]);
    let n0010 = vector::dot(&g0010, &[pf0[0], pf0[1], pf1[2], pf0[3]]);
    let n1010 = vector::dot(&g1010, &[pf1[0], pf0[1], pf1[2], pf0[3]]);
    let n0110 = vector::dot(&g0110, &[pf0[0], pf1[1], pf1[2], pf0[3]]);
    let n1110 = vector::dot(&g1110, &[pf1[0], pf1[1], pf1[2], pf0[3]]);
    let n0001 = vector::dot(&g0001, &[pf0[0], pf0[1], pf0[2], pf1[3]]);
    let n1001 = vector::dot(&g1001, &[pf1[0], pf0[1], pf0[2], pf1[3]]);
    let n0101 = vector::dot(&g0101, &[pf0[0], pf1[1], pf0[2], pf1[3]]);
    let n1101 = vector::dot(&g1101, &[pf1[0], pf1[1], pf0[2], pf1[3]]);
    let n0011 = vector::dot(&g0011, &[pf0[0], pf0[1], pf1[2], pf1[3]]);
    let n1011 = vector::dot(&g1011, &[pf1[0], pf0[1], pf1[2], pf1[3]]);
    let n0111 = vector::dot(&g0111, &[pf0[0], pf1[1], pf1[2], pf1[3]]);
    let n1111 = vector::dot(&g1111, &pf1);

    let f = fade(pf0);
    let n_0w = vector::mix(&[n0000, n1000, n0100, n1100], &[n0001, n1001, n0101, n1101], f[3]);
    let n_1w = vector::mix(&[n0010, n1010, n0110, n1110], &[n0011, n1011, n0111, n1111], f[3]);
    let n_zw = vector::mix(&n_0w, &n_1w, f[2]);
    let n_yzw = vector::mix(&[n_zw[0], n_zw[1]], &[n_zw[2], n_zw[3]], f[1]);
    let n_xyzw = scalar::mix(n_yzw[0], n_yzw[1], f[0]);
    V::lit(2.2) * n_xyzw
}

//fp perlin4
/// Classic Perlin noise of a 4-component point, in roughly [-1, 1]
pub fn perlin4<V: Float>(p: &[V; 4]) -> V {
    perlin4_impl(p, None)
}

//fp perlin4_periodic
/// Classic Perlin noise tiled with the given period
pub fn perlin4_periodic<V: Float>(p: &[V; 4], rep: &[V; 4]) -> V {
    perlin4_impl(p, Some(rep))
}

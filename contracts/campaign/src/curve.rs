//! # secp256k1 signature screening
//!
//! The host's `secp256k1_recover` traps on signatures it cannot recover
//! from. A ticket is untrusted caller input, so [`is_recoverable`] screens the
//! compact `r || s` form first:
//!
//! * `1 <= r < n`, and `r` is the x-coordinate of a curve point
//!   (`r^3 + 7` is a square mod `p`, checked with Euler's criterion)
//! * `1 <= s <= n / 2` (low-S form)
//!
//! Field elements are four little-endian `u64` limbs.

type U256 = [u64; 4];

/// Group order `n`, big-endian.
const ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

/// `n / 2`, big-endian. Largest low-S value.
const HALF_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b, 0x20, 0xa0,
];

/// Field prime `p = 2^256 - 2^32 - 977`.
const P: U256 = [
    0xffff_fffe_ffff_fc2f,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
];

/// `(p - 1) / 2`, the Euler criterion exponent.
const LEGENDRE_EXP: U256 = [
    0xffff_ffff_7fff_fe17,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0x7fff_ffff_ffff_ffff,
];

/// `2^256 mod p`.
const FOLD: u128 = 0x1_0000_03d1;

const ONE: U256 = [1, 0, 0, 0];

/// `true` when the host can recover a public key from `r || s`.
pub fn is_recoverable(compact: &[u8; 64]) -> bool {
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&compact[..32]);
    s.copy_from_slice(&compact[32..]);

    in_range(&r, &ORDER, false) && in_range(&s, &HALF_ORDER, true) && is_x_coordinate(&r)
}

/// `0 < v < bound`, or `0 < v <= bound` when `inclusive`. Big-endian.
fn in_range(v: &[u8; 32], bound: &[u8; 32], inclusive: bool) -> bool {
    if v.iter().all(|b| *b == 0) {
        return false;
    }
    match v.cmp(bound) {
        core::cmp::Ordering::Less => true,
        core::cmp::Ordering::Equal => inclusive,
        core::cmp::Ordering::Greater => false,
    }
}

fn is_x_coordinate(r: &[u8; 32]) -> bool {
    let x = from_be_bytes(r);
    let y2 = add_small(&mul_mod(&mul_mod(&x, &x), &x), 7);
    pow_mod(&y2, &LEGENDRE_EXP) == ONE
}

fn from_be_bytes(bytes: &[u8; 32]) -> U256 {
    let mut out = [0u64; 4];
    for (i, limb) in out.iter_mut().enumerate() {
        let start = 32 - 8 * (i + 1);
        let mut chunk = [0u8; 8];
        chunk.copy_from_slice(&bytes[start..start + 8]);
        *limb = u64::from_be_bytes(chunk);
    }
    out
}

fn geq(a: &U256, b: &U256) -> bool {
    for i in (0..4).rev() {
        if a[i] != b[i] {
            return a[i] > b[i];
        }
    }
    true
}

fn sub(a: &U256, b: &U256) -> U256 {
    let mut out = [0u64; 4];
    let mut borrow = false;
    for i in 0..4 {
        let (d, b1) = a[i].overflowing_sub(b[i]);
        let (d, b2) = d.overflowing_sub(borrow as u64);
        out[i] = d;
        borrow = b1 || b2;
    }
    out
}

/// `a + k mod p` for `a < p` and small `k`.
fn add_small(a: &U256, k: u64) -> U256 {
    let mut out = [0u64; 4];
    let mut carry = k as u128;
    for i in 0..4 {
        let v = a[i] as u128 + carry;
        out[i] = v as u64;
        carry = v >> 64;
    }
    if geq(&out, &P) {
        out = sub(&out, &P);
    }
    out
}

fn mul_wide(a: &U256, b: &U256) -> [u64; 8] {
    let mut w = [0u64; 8];
    for i in 0..4 {
        let mut carry: u128 = 0;
        for j in 0..4 {
            let t = w[i + j] as u128 + a[i] as u128 * b[j] as u128 + carry;
            w[i + j] = t as u64;
            carry = t >> 64;
        }
        w[i + 4] = carry as u64;
    }
    w
}

/// Reduce a 512-bit product mod `p` using `2^256 = FOLD (mod p)`.
fn reduce(w: &[u64; 8]) -> U256 {
    let mut out = [0u64; 4];
    let mut carry: u128 = 0;
    for i in 0..4 {
        let v = w[i] as u128 + w[i + 4] as u128 * FOLD + carry;
        out[i] = v as u64;
        carry = v >> 64;
    }

    let mut extra = carry * FOLD;
    for limb in out.iter_mut() {
        let v = *limb as u128 + extra;
        *limb = v as u64;
        extra = v >> 64;
    }
    if extra != 0 {
        // wrapped past 2^256; the remainder is small, so this cannot carry out
        let mut carry = FOLD;
        for limb in out.iter_mut() {
            let v = *limb as u128 + carry;
            *limb = v as u64;
            carry = v >> 64;
        }
    }

    if geq(&out, &P) {
        out = sub(&out, &P);
    }
    out
}

fn mul_mod(a: &U256, b: &U256) -> U256 {
    reduce(&mul_wide(a, b))
}

fn pow_mod(base: &U256, exp: &U256) -> U256 {
    let mut acc = ONE;
    for i in (0..4).rev() {
        for bit in (0..64).rev() {
            acc = mul_mod(&acc, &acc);
            if (exp[i] >> bit) & 1 == 1 {
                acc = mul_mod(&acc, base);
            }
        }
    }
    acc
}

//! Affine point arithmetic on the twisted Edwards curve
//! -x² + y² = 1 + d·x²·y² over GF(2^255 - 19).

use moncrypt_bignum::BigInt;
use moncrypt_types::CryptoError;
use subtle::{Choice, ConstantTimeEq};

use super::field;
use super::params::CurveParams;

/// An affine point (x, y).
///
/// Construction does not check curve membership; use [`is_on_curve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    x: BigInt,
    y: BigInt,
}

impl Point {
    /// Create a point from its affine coordinates.
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Point { x, y }
    }

    /// The neutral element (0, 1).
    pub fn identity() -> Self {
        Point {
            x: BigInt::zero(),
            y: BigInt::one(),
        }
    }

    /// The base point B.
    pub fn basepoint() -> Self {
        CurveParams::get().b.clone()
    }

    /// The x-coordinate.
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    /// The y-coordinate.
    pub fn y(&self) -> &BigInt {
        &self.y
    }
}

impl ConstantTimeEq for Point {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x: {}, y: {}", self.x, self.y)
    }
}

/// Point addition R = P + Q with the complete twisted Edwards law:
///
/// ```text
/// x3 = (x1·y2 + x2·y1) / (1 + d·x1·x2·y1·y2)
/// y3 = (y1·y2 + x1·x2) / (1 - d·x1·x2·y1·y2)
/// ```
///
/// Valid for doubling (P == Q). Only off-curve inputs can make a
/// denominator vanish, which is reported as [`CryptoError::BnNoInverse`].
pub fn edwards(p: &Point, q: &Point) -> Result<Point, CryptoError> {
    let params = CurveParams::get();
    let (x1, y1) = (&p.x, &p.y);
    let (x2, y2) = (&q.x, &q.y);

    let x1x2 = field::mul(x1, x2)?;
    let y1y2 = field::mul(y1, y2)?;
    let t = field::mul(&params.d, &field::mul(&x1x2, &y1y2)?)?; // d·x1·x2·y1·y2

    let x_num = field::add(&field::mul(x1, y2)?, &field::mul(x2, y1)?)?;
    let y_num = field::add(&y1y2, &x1x2)?;
    let x_den = field::add(&BigInt::one(), &t)?;
    let y_den = field::sub(&BigInt::one(), &t)?;

    Ok(Point {
        x: field::mul(&x_num, &field::inv(&x_den)?)?,
        y: field::mul(&y_num, &field::inv(&y_den)?)?,
    })
}

/// Scalar multiplication R = e·P by double-and-add, most significant bit first.
///
/// Scalars must be non-negative; `e == 0` yields the identity.
pub fn scalarmult(p: &Point, e: &BigInt) -> Result<Point, CryptoError> {
    if e.is_negative() {
        log::debug!("rejected negative scalar for scalar multiplication");
        return Err(CryptoError::EccNegativeScalar);
    }

    let mut result = Point::identity();
    for i in (0..e.bit_len()).rev() {
        result = edwards(&result, &result)?;
        if e.test_bit(i) {
            result = edwards(&result, p)?;
        }
    }
    Ok(result)
}

/// Scalar multiplication with the base point: R = e·B.
pub fn scalarmult_base(e: &BigInt) -> Result<Point, CryptoError> {
    scalarmult(&CurveParams::get().b, e)
}

/// Check whether `p` satisfies -x² + y² - 1 - d·x²·y² ≡ 0 (mod q).
pub fn is_on_curve(p: &Point) -> bool {
    let params = CurveParams::get();
    let x2 = p.x.sqr();
    let y2 = p.y.sqr();
    let lhs = y2
        .sub(&x2)
        .sub(&BigInt::one())
        .sub(&params.d.mul(&x2).mul(&y2));
    field::reduce(&lhs).is_ok_and(|r| r.is_zero())
}

/// Recover the even x-coordinate belonging to `y`.
///
/// Computes xx = (y² - 1)/(d·y² + 1) and the candidate root
/// x = xx^((q+3)/8). Since q ≡ 5 (mod 8) the candidate is either a root
/// of xx or of -xx; the latter is fixed by multiplying with sqrt(-1).
/// The result is not checked: when xx is a non-residue the returned value
/// is not a root, and callers validate with [`is_on_curve`].
pub fn x_recover(y: &BigInt) -> Result<BigInt, CryptoError> {
    let params = CurveParams::get();
    let y2 = field::mul(y, y)?;
    let num = field::sub(&y2, &BigInt::one())?;
    let den = field::add(&field::mul(&params.d, &y2)?, &BigInt::one())?;
    let xx = field::mul(&num, &field::inv(&den)?)?;

    let x = xx.pow_mod(&params.sqrt_exp, &params.q)?;
    let is_root = field::mul(&x, &x)?.ct_eq(&xx);
    let x = BigInt::ct_select(&field::mul(&x, &params.i)?, &x, is_root);

    let odd = Choice::from(x.is_odd() as u8);
    let negated = field::sub(&params.q, &x)?;
    Ok(BigInt::ct_select(&x, &negated, odd))
}

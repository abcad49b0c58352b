//! Arbitrary-precision helpers for quote arithmetic.
//!
//! Every conversion from an exact integer quantity to `f64` goes through
//! these helpers, so each one rounds exactly once (to nearest, ties to
//! even), the same way an exact integer division would.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, ToPrimitive, Zero};

/// Bits kept in the integer quotient before the float conversion. One more
/// sticky bit below the 53-bit mantissa decides every rounding tie.
const QUOTIENT_BITS: u64 = 63;

/// Largest power-of-two step applied at once while rescaling; `2^±1000`
/// is a normal `f64`.
const SCALE_STEP: i64 = 1_000;

/// Converts the exact ratio `numerator / denominator` to the nearest `f64`.
///
/// Converting numerator and denominator separately would round twice and,
/// for reserves in the `10^15` range, lose the low bits of both operands.
/// Instead the operands are scaled so the integer quotient lands in
/// `[2^62, 2^64)`, a sticky bit records a non-zero remainder, and only that
/// quotient is converted.
///
/// Returns `None` if `denominator` is zero.
///
/// # Examples
///
/// ```
/// use amm_quote::math::big::ratio_to_f64;
/// use num_bigint::BigInt;
///
/// let r = ratio_to_f64(&BigInt::from(1), &BigInt::from(3)).unwrap_or_default();
/// assert!((r - 1.0 / 3.0).abs() < 1e-15);
/// ```
#[must_use]
pub fn ratio_to_f64(numerator: &BigInt, denominator: &BigInt) -> Option<f64> {
    let magnitude = unsigned_ratio_to_f64(numerator.magnitude(), denominator.magnitude())?;
    let negative = matches!(
        (numerator.sign(), denominator.sign()),
        (Sign::Minus, Sign::Plus) | (Sign::Plus, Sign::Minus)
    );
    Some(if negative { -magnitude } else { magnitude })
}

/// Unsigned form of [`ratio_to_f64`].
///
/// Returns `None` if `denominator` is zero.
#[must_use]
pub fn unsigned_ratio_to_f64(numerator: &BigUint, denominator: &BigUint) -> Option<f64> {
    if denominator.is_zero() {
        return None;
    }
    if numerator.is_zero() {
        return Some(0.0);
    }

    let shift = i64::try_from(denominator.bits() + QUOTIENT_BITS).ok()?
        - i64::try_from(numerator.bits()).ok()?;
    let (scaled_num, scaled_den) = if shift >= 0 {
        (numerator << shift.unsigned_abs(), denominator.clone())
    } else {
        (numerator.clone(), denominator << shift.unsigned_abs())
    };

    let mut quotient = (&scaled_num / &scaled_den).to_u64()?;
    if !(&scaled_num % &scaled_den).is_zero() {
        quotient |= 1;
    }

    scale_by_pow2(quotient as f64, -shift)
}

/// Converts an exact integer to the nearest `f64`.
///
/// Returns `None` only for integers whose bit length does not fit an `i64`.
#[must_use]
pub fn biguint_to_f64(value: &BigUint) -> Option<f64> {
    unsigned_ratio_to_f64(value, &BigUint::one())
}

/// Multiplies `value` by `2^exponent` in steps that stay in the normal
/// range, so only the final step can round into a subnormal.
fn scale_by_pow2(mut value: f64, mut exponent: i64) -> Option<f64> {
    while exponent > SCALE_STEP {
        value *= 2f64.powi(i32::try_from(SCALE_STEP).ok()?);
        exponent -= SCALE_STEP;
    }
    while exponent < -SCALE_STEP {
        value *= 2f64.powi(i32::try_from(-SCALE_STEP).ok()?);
        exponent += SCALE_STEP;
    }
    Some(value * 2f64.powi(i32::try_from(exponent).ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: i128) -> BigInt {
        BigInt::from(v)
    }

    #[test]
    fn zero_denominator() {
        assert_eq!(ratio_to_f64(&big(1), &big(0)), None);
    }

    #[test]
    fn zero_numerator() {
        assert_eq!(ratio_to_f64(&big(0), &big(7)), Some(0.0));
    }

    #[test]
    fn simple_fractions() {
        assert_eq!(ratio_to_f64(&big(1), &big(4)), Some(0.25));
        assert_eq!(ratio_to_f64(&big(-3), &big(4)), Some(-0.75));
        assert_eq!(ratio_to_f64(&big(10), &big(5)), Some(2.0));
    }

    #[test]
    fn huge_operands_keep_precision() {
        // (10^80 + 10^60) / (3 * 10^80) ≈ 1/3, far beyond f64-exact integers
        let ten = BigInt::from(10);
        let num = num_traits::pow(ten.clone(), 80) + num_traits::pow(ten.clone(), 60);
        let den = num_traits::pow(ten, 80) * 3;
        let Some(r) = ratio_to_f64(&num, &den) else {
            unreachable!("non-zero denominator");
        };
        assert!((r - 1.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn ties_and_remainders_round_to_nearest() {
        // 2^53 + 1 sits halfway between two floats: ties go to even.
        let odd = BigUint::from((1u64 << 53) + 1);
        assert_eq!(biguint_to_f64(&odd), Some(9_007_199_254_740_992.0));
        // A remainder just above the tie rounds up.
        let num = BigUint::from((1u128 << 54) + 3);
        assert_eq!(
            unsigned_ratio_to_f64(&num, &BigUint::from(2u32)),
            Some(9_007_199_254_740_994.0)
        );
    }

    #[test]
    fn matches_native_division_when_exact() {
        // 10^15 + 7 and 10^4 are exact floats, so IEEE division is the
        // correctly rounded reference.
        let num = BigUint::from(1_000_000_000_000_007u64);
        let den = BigUint::from(10_000u32);
        assert_eq!(
            unsigned_ratio_to_f64(&num, &den),
            Some(1_000_000_000_000_007.0 / 10_000.0)
        );
    }

    #[test]
    fn tiny_ratio_is_subnormal_not_zero() {
        // 1 / 2^1070 is below the smallest normal f64 (2^-1022).
        let den = BigUint::one() << 1_070u32;
        let Some(r) = unsigned_ratio_to_f64(&BigUint::one(), &den) else {
            unreachable!("non-zero denominator");
        };
        assert!(r > 0.0);
        assert_eq!(r, 2f64.powi(-1_000) * 2f64.powi(-70));
    }

    #[test]
    fn huge_ratio_keeps_magnitude() {
        let num = BigUint::one() << 1_000u32;
        assert_eq!(biguint_to_f64(&num), Some(2f64.powi(1_000)));
    }

    #[test]
    fn negative_denominator_flips_sign() {
        assert_eq!(ratio_to_f64(&big(3), &big(-4)), Some(-0.75));
        assert_eq!(ratio_to_f64(&big(-3), &big(-4)), Some(0.75));
    }
}

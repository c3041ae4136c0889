use num::{Float, NumCast, Zero};
use std::{
    fmt::{Debug, Display, LowerExp},
    iter::Sum,
    ops::{AddAssign, SubAssign},
    str::FromStr,
};

/// Floating point type the clustering engine calculates with.
/// Implemented for [`f32`] and [`f64`].
pub trait Primitive: AddAssign + Sum + SubAssign + Zero + Float + NumCast + FromStr
                + PartialOrd + Copy + Default + Display + Debug + Sync + Send + LowerExp + 'static
                + for<'a> AddAssign<&'a Self> {}
impl Primitive for f32 {}
impl Primitive for f64 {}

/// Convert a member count into the primitive, to be used as divisor.
#[inline(always)]
pub(crate) fn count_as<T: Primitive>(count: usize) -> T {
    // usize -> float can only lose precision, never fail
    T::from(count).unwrap_or_else(T::infinity)
}

/// Convert a (configuration) constant into the primitive.
#[inline(always)]
pub(crate) fn const_as<T: Primitive>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_conversion() {
        assert_eq!(count_as::<f64>(0), 0.0);
        assert_eq!(count_as::<f64>(3), 3.0);
        assert_eq!(count_as::<f32>(1_000_000), 1_000_000.0f32);
    }

    #[test]
    fn constant_conversion() {
        assert_eq!(const_as::<f64>(0.001), 0.001);
        assert_eq!(const_as::<f32>(0.001), 0.001f32);
    }
}

//! The random source used by map generation.
//!
//! Generation never reaches for a process-wide generator. Every call that needs randomness takes
//! a `&mut impl RandomSource`, so tests can pass a deterministic double and production code can pass
//! any [`rand::Rng`].

use rand::Rng;

use crate::error::RangeError;

pub trait RandomSource {
    /// Returns an integer in `[minimum, maximum]`, both ends inclusive.
    fn random_int(&mut self, minimum: i32, maximum: i32) -> Result<i32, RangeError>;

    /// Returns a float uniformly distributed in `[0, 1)`.
    fn random_float(&mut self) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn random_int(&mut self, minimum: i32, maximum: i32) -> Result<i32, RangeError> {
        if minimum > maximum {
            return Err(RangeError::EmptyRange { minimum, maximum });
        }
        Ok(self.random_range(minimum..=maximum))
    }

    fn random_float(&mut self) -> f64 {
        self.random::<f64>()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::RandomSource;
    use crate::error::RangeError;

    /// A random source that always answers with the same integer.
    ///
    /// Asking for a range that doesn't contain the value is an error, which lets tests check that
    /// callers request exactly the bounds they should.
    pub(crate) struct ConstantRng(pub i32);

    impl RandomSource for ConstantRng {
        fn random_int(&mut self, minimum: i32, maximum: i32) -> Result<i32, RangeError> {
            if !(minimum..=maximum).contains(&self.0) {
                return Err(RangeError::BeyondRange {
                    value: self.0,
                    minimum,
                    maximum,
                });
            }
            Ok(self.0)
        }

        fn random_float(&mut self) -> f64 {
            0.0
        }
    }

    #[test]
    fn constant_rng_rejects_values_outside_the_range() {
        let mut rng = ConstantRng(6);
        assert_eq!(rng.random_int(0, 6), Ok(6));
        let err = rng.random_int(0, 5).unwrap_err();
        assert!(err.to_string().starts_with("Beyond range"));
    }

    #[test]
    fn std_rng_stays_inside_inclusive_bounds() {
        let mut rng = StdRng::seed_from_u64(20);
        for _ in 0..200 {
            let value = rng.random_int(-2, 3).unwrap();
            assert!((-2..=3).contains(&value));
            let float = rng.random_float();
            assert!((0.0..1.0).contains(&float));
        }
        assert_eq!(rng.random_int(4, 4), Ok(4));
    }

    #[test]
    fn std_rng_reports_empty_range() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            rng.random_int(0, -1),
            Err(RangeError::EmptyRange {
                minimum: 0,
                maximum: -1
            })
        );
    }
}

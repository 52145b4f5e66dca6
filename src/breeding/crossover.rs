use crate::{challenge::Challenge, error::Result, solution::Solution};

/// Combines two parents at `cut_point` into a freshly scored child.
///
/// The child takes `first`'s bits before the cut point and `second`'s bits
/// from the cut point on. A cut point of 0 therefore yields a copy of
/// `second`'s bits.
///
/// # Panics
///
/// Panics if `cut_point` exceeds the length of either parent.
///
/// # Example
///
/// ```rust
/// use bitga::breeding::single_point;
/// use bitga::solution::Solution;
///
/// let count_ones = |bits: &[bool]| bits.iter().filter(|bit| **bit).count() as f64;
/// let ones = Solution::evaluate(vec![true; 4], &count_ones).unwrap();
/// let zeros = Solution::evaluate(vec![false; 4], &count_ones).unwrap();
///
/// let child = single_point(&ones, &zeros, 1, &count_ones).unwrap();
/// assert_eq!(child.bits, vec![true, false, false, false]);
/// assert_eq!(child.fitness, 1.0);
/// ```
pub fn single_point<C>(
    first: &Solution,
    second: &Solution,
    cut_point: usize,
    challenge: &C,
) -> Result<Solution>
where
    C: Challenge + ?Sized,
{
    let bits = first.bits[..cut_point]
        .iter()
        .chain(&second.bits[cut_point..])
        .copied()
        .collect();

    Solution::evaluate(bits, challenge)
}

//! Generators for decimal digit strings with specific shapes.
//!
//! Each call is independent; the only state is the caller's random number generator. All of them
//! require `max_length >= 1`, which [`GeneratorConfig::validate`](crate::GeneratorConfig::validate)
//! guarantees for configured lengths.
use rand::Rng;

/// A number of `1..=max_length` digits with no leading zero
pub fn random_number<R: Rng + ?Sized>(rng: &mut R, max_length: usize) -> String {
    let len = rng.gen_range(1..=max_length);
    let mut digits = String::with_capacity(len);
    digits.push(digit(rng.gen_range(1..=9)));
    for _ in 1..len {
        digits.push(digit(rng.gen_range(0..=9)));
    }
    digits
}

/// `1..=max_length` nines, probing carries and borrows
pub fn nines<R: Rng + ?Sized>(rng: &mut R, max_length: usize) -> String {
    "9".repeat(rng.gen_range(1..=max_length))
}

/// A one followed by `0..max_length` zeros, i.e. a power of ten with at most `max_length` digits
pub fn ones_zeros<R: Rng + ?Sized>(rng: &mut R, max_length: usize) -> String {
    let zeros = rng.gen_range(0..max_length);
    let mut digits = String::with_capacity(zeros + 1);
    digits.push('1');
    digits.extend(core::iter::repeat('0').take(zeros));
    digits
}

#[inline]
fn digit(d: u8) -> char {
    char::from(b'0' + d)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn random_number_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        for max_length in 1..=8 {
            for _ in 0..200 {
                let number = random_number(&mut rng, max_length);
                assert!(!number.is_empty() && number.len() <= max_length);
                assert!(number.bytes().all(|b| b.is_ascii_digit()));
                assert_ne!(number.as_bytes()[0], b'0', "leading zero in {}", number);
            }
        }
    }

    #[test]
    fn random_number_covers_every_length() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 6];
        for _ in 0..500 {
            seen[random_number(&mut rng, 6).len() - 1] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn nines_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let number = nines(&mut rng, 6);
            assert!((1..=6).contains(&number.len()));
            assert!(number.bytes().all(|b| b == b'9'));
        }
    }

    #[test]
    fn ones_zeros_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(ones_zeros(&mut rng, 1), "1");
        for _ in 0..200 {
            let number = ones_zeros(&mut rng, 6);
            assert!((1..=6).contains(&number.len()));
            assert!(number.starts_with('1'));
            assert!(number[1..].bytes().all(|b| b == b'0'));
        }
    }

    #[test]
    fn numbers_are_reproducible_from_a_seed() {
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (
                random_number(&mut rng, 6),
                nines(&mut rng, 6),
                ones_zeros(&mut rng, 6),
            )
        };
        assert_eq!(draw(1234), draw(1234));
    }
}

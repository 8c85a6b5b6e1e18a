// src/generator.rs
use rand::distributions::{Distribution, Uniform};
use thiserror::Error;

use crate::models::GenerationOptions;

/// Minimum acceptable password length.
pub const MIN_LENGTH: i64 = 4;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = br##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("password length must be at least {MIN_LENGTH} characters (got {length})")]
    TooShort { length: i64 },

    #[error("cannot generate a password from an empty character pool")]
    EmptyPool,
}

/// Check the minimum password length before generation or prompting.
///
/// Takes a signed length so out-of-range user input fails here with a clear
/// error instead of at the parsing boundary. Callers are expected to run this
/// before [`generate_password`]; the generator itself does not re-validate, so
/// bypassing the check is possible and deliberate (layering contract, not an
/// invariant enforced at the generator boundary).
pub fn validate_length(length: i64) -> Result<(), GenerateError> {
    if length < MIN_LENGTH {
        return Err(GenerateError::TooShort { length });
    }
    Ok(())
}

/// Generate a random password from the enabled character classes.
///
/// The pool always starts from lowercase letters, then appends digits,
/// punctuation and uppercase letters per the option flags. The classes are
/// disjoint, so concatenation produces a duplicate-free pool. Characters are
/// drawn independently and uniformly with replacement, which means an enabled
/// class is only probabilistically present in short outputs; callers who need
/// guaranteed class coverage must request sufficient length.
///
/// Uses the thread-local RNG. That is fine for this tool's threat model, but
/// a caller generating real secrets should swap in a cryptographically secure
/// source such as `rand::rngs::OsRng`.
pub fn generate_password(options: &GenerationOptions) -> Result<String, GenerateError> {
    let mut pool = Vec::with_capacity(94);
    pool.extend_from_slice(LOWERCASE);

    if options.use_digits {
        pool.extend_from_slice(DIGITS);
    }
    if options.use_special {
        pool.extend_from_slice(SPECIAL);
    }
    if options.use_uppercase {
        pool.extend_from_slice(UPPERCASE);
    }

    // Unreachable while the lowercase baseline is unconditional, but the
    // contract still reports it in case the baseline ever becomes a flag.
    if pool.is_empty() {
        return Err(GenerateError::EmptyPool);
    }

    let mut rng = rand::thread_rng();
    let dist = Uniform::from(0..pool.len());

    let password = (0..options.length)
        .map(|_| pool[dist.sample(&mut rng)] as char)
        .collect();

    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(length: usize, digits: bool, special: bool, uppercase: bool) -> GenerationOptions {
        GenerationOptions {
            length,
            use_digits: digits,
            use_special: special,
            use_uppercase: uppercase,
        }
    }

    #[test]
    fn output_has_requested_length() {
        for length in [4, 12, 100] {
            for digits in [false, true] {
                for special in [false, true] {
                    for uppercase in [false, true] {
                        let pw = generate_password(&options(length, digits, special, uppercase))
                            .unwrap();
                        assert_eq!(pw.chars().count(), length);
                    }
                }
            }
        }
    }

    #[test]
    fn all_flags_off_yields_only_lowercase() {
        let pw = generate_password(&options(200, false, false, false)).unwrap();
        assert!(pw.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn enabled_classes_appear_in_long_outputs() {
        // With a 200-char draw from a pool of at most 94 characters, a missing
        // enabled class is overwhelmingly unlikely.
        let pw = generate_password(&options(200, true, true, true)).unwrap();
        assert!(pw.chars().any(|c| c.is_ascii_digit()));
        assert!(pw.chars().any(|c| c.is_ascii_punctuation()));
        assert!(pw.chars().any(|c| c.is_ascii_uppercase()));
        assert!(pw.chars().any(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn disabled_classes_never_appear() {
        let pw = generate_password(&options(200, true, false, false)).unwrap();
        assert!(pw
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn default_options_draw_from_the_full_pool() {
        let pw = generate_password(&GenerationOptions::default()).unwrap();
        assert_eq!(pw.len(), 12);
        assert!(pw.chars().all(|c| c.is_ascii_graphic()));
    }

    #[test]
    fn length_validation_rejects_short_values() {
        for n in [-5, 0, 3] {
            assert!(matches!(
                validate_length(n),
                Err(GenerateError::TooShort { length }) if length == n
            ));
        }
    }

    #[test]
    fn length_validation_accepts_valid_values() {
        for n in [4, 12, 100] {
            assert!(validate_length(n).is_ok());
        }
    }
}

//! Short code generation.
//!
//! Codes are drawn uniformly from a 62-character alphanumeric alphabet using the
//! operating system CSPRNG. There is no fallback source: if the OS
//! cannot provide entropy, generation fails and the error is propagated.

/// Characters a generated code is made of.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length used when the caller asks for a zero-length code.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Largest multiple of the alphabet size that fits in a byte (62 * 4).
/// Bytes at or above it are discarded so that `byte % 62` stays uniform.
const REJECTION_BOUND: u8 = 248;

/// The operating system random source failed.
#[derive(Debug, thiserror::Error)]
#[error("secure random source unavailable: {0}")]
pub struct CodeGenerationError(#[from] getrandom::Error);

/// Generates a random code of `length` characters from [`ALPHABET`].
///
/// A `length` of zero falls back to [`DEFAULT_CODE_LENGTH`].
///
/// # Errors
///
/// Returns [`CodeGenerationError`] if the system random number generator fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_random_code(8)?;
/// assert_eq!(code.len(), 8);
/// assert!(code.bytes().all(|b| ALPHABET.contains(&b)));
/// ```
pub fn generate_random_code(length: usize) -> Result<String, CodeGenerationError> {
    let length = if length == 0 {
        DEFAULT_CODE_LENGTH
    } else {
        length
    };

    let mut code = String::with_capacity(length);
    let mut buffer = [0u8; 32];

    while code.len() < length {
        getrandom::fill(&mut buffer)?;

        for &byte in buffer.iter().filter(|&&b| b < REJECTION_BOUND) {
            code.push(ALPHABET[usize::from(byte % 62)] as char);
            if code.len() == length {
                break;
            }
        }
    }

    Ok(code)
}

/// Generates a code of [`DEFAULT_CODE_LENGTH`] characters.
///
/// # Errors
///
/// See [`generate_random_code`].
pub fn generate_code() -> Result<String, CodeGenerationError> {
    generate_random_code(DEFAULT_CODE_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_has_62_distinct_characters() {
        let distinct: HashSet<u8> = ALPHABET.iter().copied().collect();
        assert_eq!(distinct.len(), 62);
        assert!(ALPHABET.iter().all(|b| b.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_code_has_default_length() {
        let code = generate_code().unwrap();
        assert_eq!(code.len(), DEFAULT_CODE_LENGTH);
    }

    #[test]
    fn test_zero_length_falls_back_to_default() {
        let code = generate_random_code(0).unwrap();
        assert_eq!(code.len(), 6);
    }

    #[test]
    fn test_generate_requested_lengths() {
        for length in [1, 6, 12, 33, 64, 100] {
            let code = generate_random_code(length).unwrap();
            assert_eq!(code.len(), length);
        }
    }

    #[test]
    fn test_generate_code_uses_alphabet_only() {
        for _ in 0..200 {
            let code = generate_random_code(16).unwrap();
            assert!(code.bytes().all(|b| ALPHABET.contains(&b)), "{code}");
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let codes: HashSet<String> = (0..1000)
            .map(|_| generate_random_code(12).unwrap())
            .collect();

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generate_code_covers_both_cases_and_digits() {
        let sample = generate_random_code(4096).unwrap();
        assert!(sample.bytes().any(|b| b.is_ascii_digit()));
        assert!(sample.bytes().any(|b| b.is_ascii_lowercase()));
        assert!(sample.bytes().any(|b| b.is_ascii_uppercase()));
    }
}

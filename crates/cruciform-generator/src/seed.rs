use std::{fmt, str::FromStr};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// Random number generator driving every generator decision.
pub type PuzzleRng = Pcg64;

/// A 256-bit seed that makes puzzle generation reproducible.
///
/// Seeds are displayed and parsed as 64 lowercase hex digits.
///
/// # Examples
///
/// ```
/// use cruciform_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed = "00".repeat(32).parse()?;
/// assert_eq!(seed, PuzzleSeed::from_bytes([0; 32]));
/// assert_eq!(seed.to_string(), "00".repeat(32));
/// # Ok::<(), cruciform_generator::PuzzleSeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Draws a fresh seed from the thread-local RNG.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Wraps raw seed bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Creates the RNG this seed stands for.
    #[must_use]
    pub fn rng(&self) -> PuzzleRng {
        PuzzleRng::from_seed(self.0)
    }

    /// Derives an independent child seed, used for batch generation.
    ///
    /// The child is the SHA-256 digest of this seed followed by `index` in
    /// little-endian order, so batches are reproducible from one seed.
    #[must_use]
    pub fn derive(&self, index: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update(index.to_le_bytes());
        Self(hasher.finalize().into())
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`PuzzleSeed`] fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleSeedParseError {
    /// The input was not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Length of the rejected input.
        len: usize,
    },
    /// A character was not a hex digit.
    #[display("invalid hex digit at offset {index}")]
    InvalidHex {
        /// Offset of the offending character.
        index: usize,
    },
}

impl FromStr for PuzzleSeed {
    type Err = PuzzleSeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 64 {
            return Err(PuzzleSeedParseError::InvalidLength { len: s.len() });
        }
        let digit = |index: usize| {
            char::from(s.as_bytes()[index])
                .to_digit(16)
                .ok_or(PuzzleSeedParseError::InvalidHex { index })
        };
        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let (hi, lo) = (digit(2 * i)?, digit(2 * i + 1)?);
            #[expect(clippy::cast_possible_truncation)]
            let value = ((hi << 4) | lo) as u8;
            *byte = value;
        }
        Ok(Self(bytes))
    }
}

//! # Special Tokens

use crate::types::TokenType;

/// The number of reserved special tokens.
pub const SPECIAL_TOKEN_COUNT: usize = 4;

/// Reserved special tokens.
///
/// Their ids are fixed, independent of training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialToken {
    /// Padding; id 0.
    Pad,

    /// Unknown character fallback; id 1.
    Unk,

    /// Beginning of sequence; id 2.
    Bos,

    /// End of sequence; id 3.
    Eos,
}

impl SpecialToken {
    /// All special tokens, in id order.
    pub const ALL: [SpecialToken; SPECIAL_TOKEN_COUNT] =
        [Self::Pad, Self::Unk, Self::Bos, Self::Eos];

    /// The token string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pad => "<PAD>",
            Self::Unk => "<UNK>",
            Self::Bos => "<BOS>",
            Self::Eos => "<EOS>",
        }
    }

    /// The reserved id, as a `usize`.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The reserved id.
    pub fn id<T: TokenType>(&self) -> T {
        // ids 0..4 fit every unsigned type.
        T::from_usize(self.index()).unwrap_or_else(T::zero)
    }

    /// Look up the special token for a string.
    pub fn from_token_str(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == token)
    }

    /// Iterate ``(id, token)`` entries for every special token.
    pub fn entries<T: TokenType>() -> impl Iterator<Item = (T, &'static str)> {
        Self::ALL.into_iter().map(|s| (s.id::<T>(), s.as_str()))
    }
}

impl core::fmt::Display for SpecialToken {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_ids() {
        assert_eq!(SpecialToken::Pad.id::<u32>(), 0);
        assert_eq!(SpecialToken::Unk.id::<u32>(), 1);
        assert_eq!(SpecialToken::Bos.id::<u16>(), 2);
        assert_eq!(SpecialToken::Eos.id::<u8>(), 3);
    }

    #[test]
    fn test_round_trip_strings() {
        for special in SpecialToken::ALL {
            assert_eq!(SpecialToken::from_token_str(special.as_str()), Some(special));
            assert_eq!(special.to_string(), special.as_str());
        }
        assert_eq!(SpecialToken::from_token_str("<MASK>"), None);
    }
}

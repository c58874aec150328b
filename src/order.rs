//! Byte-order selection for numeric sub-values
//!
//! Directives select the byte order of a field's numeric sub-values with
//! the flat tokens `big` and `little`, or with the leaf tokens `le` and
//! `be` inside a bracketed modifier such as `prefix<u32,le>`. Fields
//! whose directive names no order fall back to the process-wide
//! [`DEFAULT_BYTE_ORDER`].

use lazy_static::lazy_static;

/// Byte order used when transcoding a numeric value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Big,
    Little,
}

impl ByteOrder {
    /// Interprets a directive token as a byte order.
    ///
    /// Recognizes both the flat-form tokens (`big`, `little`) and the
    /// bracketed-form leaf tokens (`be`, `le`). Any other token answers
    /// `None`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "be" | "big" => Some(Self::Big),
            "le" | "little" => Some(Self::Little),
            _ => None,
        }
    }

    /// Reports whether this is the little-endian order.
    #[inline]
    #[must_use]
    pub const fn is_little(self) -> bool {
        matches!(self, Self::Little)
    }
}

impl Default for ByteOrder {
    fn default() -> Self {
        *DEFAULT_BYTE_ORDER
    }
}

lazy_static! {
    /// Process-wide default byte order, read-only after initialization.
    ///
    /// Little-endian, matching the dominant convention of the borsh and
    /// Solana account layouts this directive language grew up around.
    pub static ref DEFAULT_BYTE_ORDER: ByteOrder = ByteOrder::Little;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_recognition() {
        assert_eq!(ByteOrder::from_token("le"), Some(ByteOrder::Little));
        assert_eq!(ByteOrder::from_token("little"), Some(ByteOrder::Little));
        assert_eq!(ByteOrder::from_token("be"), Some(ByteOrder::Big));
        assert_eq!(ByteOrder::from_token("big"), Some(ByteOrder::Big));
        assert_eq!(ByteOrder::from_token("u32"), None);
    }

    #[test]
    fn default_is_little() {
        assert!(ByteOrder::default().is_little());
        assert_eq!(*DEFAULT_BYTE_ORDER, ByteOrder::Little);
    }
}

//! `Radix` newtype for positional share encodings

use crate::error::DecodeError;

/// Numeric base of a share value (2..=36)
///
/// Digits are `0-9` followed by `a-z`, so 36 is the widest supported base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Radix(u32);

impl Radix {
    /// Smallest supported base
    pub const MIN: u32 = 2;

    /// Largest supported base
    pub const MAX: u32 = 36;

    /// Creates a new radix
    ///
    /// # Errors
    /// Returns [`DecodeError::InvalidBase`] if the base is outside 2..=36
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_recover::domain::Radix;
    ///
    /// let hex = Radix::new(16).unwrap();
    /// assert_eq!(*hex, 16);
    ///
    /// assert!(Radix::new(1).is_err());
    /// assert!(Radix::new(37).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self, DecodeError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DecodeError::InvalidBase(value.to_string()));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Radix {
    type Target = u32;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

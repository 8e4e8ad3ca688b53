//! Validation of the `keys` metadata carried by an input record

use anyhow::{Result, bail};

use super::{ShareCount, Threshold};

/// Validated pair of share count (n) and threshold (k)
///
/// Enforces the invariant that threshold <= `share_count`: a record cannot
/// require more points than it claims to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keys {
    share_count: ShareCount,
    threshold: Threshold,
}

impl Keys {
    /// Creates validated record metadata
    ///
    /// # Errors
    /// Returns an error if threshold exceeds share count
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_recover::domain::{Keys, ShareCount, Threshold};
    ///
    /// let keys = Keys::new(ShareCount::new(4).unwrap(), Threshold::new(3).unwrap()).unwrap();
    /// assert_eq!(*keys.share_count(), 4);
    /// assert_eq!(*keys.threshold(), 3);
    ///
    /// // Invalid: threshold > share_count
    /// assert!(Keys::new(ShareCount::new(2).unwrap(), Threshold::new(3).unwrap()).is_err());
    /// ```
    pub fn new(share_count: ShareCount, threshold: Threshold) -> Result<Self> {
        if *threshold > *share_count {
            bail!(
                "Threshold {} cannot exceed share count {}",
                *threshold,
                *share_count
            );
        }
        Ok(Self {
            share_count,
            threshold,
        })
    }

    /// Gets the share count value (n)
    #[must_use]
    pub fn share_count(&self) -> ShareCount {
        self.share_count
    }

    /// Gets the threshold value (k)
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }
}

use core::num::NonZeroU64;

use easy_ext::ext;

#[ext(U64Ext)]
pub impl u64 {
    /// Index into a circular buffer of `length` elements.
    #[inline]
    #[must_use]
    fn mod_index(self, length: NonZeroU64) -> Self {
        self % length
    }

    /// Multiplies in 128 bits so that the product can never wrap.
    #[inline]
    #[must_use]
    fn mul_wide(self, other: Self) -> u128 {
        u128::from(self) * u128::from(other)
    }
}

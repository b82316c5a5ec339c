//! Warp configuration

use std::num::NonZeroU32;

/// Default distance between strip starts, in source pixels.
pub const DEFAULT_STEP: NonZeroU32 = NonZeroU32::MIN.saturating_add(1);

/// Default strip thickness as a multiple of the step.
pub const DEFAULT_COVER_FACTOR: NonZeroU32 = NonZeroU32::MIN.saturating_add(4);

/// Options for a [`crate::WarpSession`]
///
/// Smaller steps give smoother results at the cost of more strips. The
/// cover factor sets how much consecutive strips overlap.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroU32;
/// use quadwarp_transform::WarpOptions;
///
/// let options = WarpOptions::default().step(NonZeroU32::new(4).unwrap());
/// assert_eq!(options.strip_thickness(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarpOptions {
    /// Distance between strip starts
    pub step: NonZeroU32,
    /// Strip thickness as a multiple of `step`
    pub cover_factor: NonZeroU32,
}

impl Default for WarpOptions {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            cover_factor: DEFAULT_COVER_FACTOR,
        }
    }
}

impl WarpOptions {
    /// Set the step
    pub fn step(mut self, step: NonZeroU32) -> Self {
        self.step = step;
        self
    }

    /// Set the cover factor
    pub fn cover_factor(mut self, cover_factor: NonZeroU32) -> Self {
        self.cover_factor = cover_factor;
        self
    }

    /// Strip thickness for the configured step.
    pub fn strip_thickness(&self) -> u32 {
        Self::thickness_for(self.step, self.cover_factor)
    }

    pub(crate) fn thickness_for(step: NonZeroU32, cover_factor: NonZeroU32) -> u32 {
        step.get().saturating_mul(cover_factor.get())
    }
}

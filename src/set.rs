use core::fmt;

use crate::ErrorKind;

// One bit per kind; adding a kind that does not fit the mask must not compile.
const _: () = assert!(ErrorKind::ALL.len() <= u32::BITS as usize);

bitflags::bitflags! {
    /// A set of zero or more [`ErrorKind`]s describing everything that went wrong
    /// for one test case.
    ///
    /// It is a [`bitflags`] generated bit-flag type. *Note: We make no guarantees
    /// that the numeric value of flags will stay the same across versions*; please
    /// treat this as a set of named values only.
    ///
    /// The [empty](Self::empty) set means no errors occurred. Sets are plain `Copy`
    /// data: the pure combining operations [`union`](Self::union) (`|`) and
    /// [`difference`](Self::difference) (`-`) never affect their operands, and
    /// [`insert`](Self::insert) (`|=`) mutates only through the caller's own
    /// exclusive reference.
    #[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
    pub struct ErrorSet: u32 {
        /// [`ErrorKind::NoGpuContext`].
        const NO_GPU_CONTEXT = 1 << ErrorKind::NoGpuContext as u32;

        /// [`ErrorKind::IntentionallySkipped`].
        const INTENTIONALLY_SKIPPED = 1 << ErrorKind::IntentionallySkipped as u32;

        /// [`ErrorKind::RenderModeMismatch`].
        const RENDER_MODE_MISMATCH = 1 << ErrorKind::RenderModeMismatch as u32;

        /// [`ErrorKind::ExpectationsMismatch`].
        const EXPECTATIONS_MISMATCH = 1 << ErrorKind::ExpectationsMismatch as u32;

        /// [`ErrorKind::MissingExpectations`].
        const MISSING_EXPECTATIONS = 1 << ErrorKind::MissingExpectations as u32;

        /// [`ErrorKind::WritingReferenceImage`].
        const WRITING_REFERENCE_IMAGE = 1 << ErrorKind::WritingReferenceImage as u32;
    }
}

impl ErrorSet {
    /// Returns whether the given kind is present in this set.
    #[inline]
    pub fn includes(self, kind: ErrorKind) -> bool {
        self.contains(kind.into())
    }

    /// Iterates over the kinds present in this set, in bit order.
    pub fn kinds(self) -> impl Iterator<Item = ErrorKind> {
        ErrorKind::ALL
            .into_iter()
            .filter(move |&kind| self.includes(kind))
    }

    /// Bits of the mask that no [`ErrorKind`] is assigned to.
    ///
    /// Nonempty only for sets smuggled in through [`Self::from_bits_retain`].
    fn unassigned(self) -> Self {
        self.difference(Self::all())
    }
}

impl Default for ErrorSet {
    /// Equivalent to [`Self::empty()`].
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

/// Constructs the set containing exactly the one given kind.
impl From<ErrorKind> for ErrorSet {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::from_bits_retain(kind.bit())
    }
}

/// Collects kinds gathered over the course of a test run into one set.
impl FromIterator<ErrorKind> for ErrorSet {
    fn from_iter<I: IntoIterator<Item = ErrorKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, kind| set | Self::from(kind))
    }
}

impl fmt::Display for ErrorSet {
    /// Displays the names of the contained kinds separated by “, ”, e.g.
    /// “NoGpuContext, ExpectationsMismatch”. The empty set displays as nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separator = "";
        for kind in self.kinds() {
            write!(f, "{separator}{kind}")?;
            separator = ", ";
        }
        if !self.unassigned().is_empty() {
            debug_assert!(
                false,
                "ErrorSet contains unassigned bits: {:#010x}",
                self.unassigned().bits()
            );
            write!(f, "{separator}Unknown")?;
        }
        Ok(())
    }
}

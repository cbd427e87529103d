use core::fmt;

/// Classification of a problem encountered while rendering a test case and comparing
/// it against reference output.
///
/// Each kind occupies one bit of an [`ErrorSet`] mask; a single test run may exhibit
/// several kinds simultaneously.
///
/// [`ErrorSet`]: crate::ErrorSet
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, exhaust::Exhaust)]
#[repr(u8)]
pub enum ErrorKind {
    /// A required GPU rendering context could not be obtained.
    ///
    /// This kind is present even in builds without GPU support, so that reports have
    /// a consistent set of columns (with a count of zero) across configurations.
    NoGpuContext = 0,

    /// The test was deliberately not run.
    IntentionallySkipped = 1,

    /// Two render modes of the same test produced different output.
    RenderModeMismatch = 2,

    /// The rendered output differs from the stored expected result.
    ExpectationsMismatch = 3,

    /// No stored expected result exists to compare the output against.
    MissingExpectations = 4,

    /// Writing out a new reference image failed.
    WritingReferenceImage = 5,
}

impl ErrorKind {
    /// All kinds, in bit order.
    pub const ALL: [Self; 6] = [
        Self::NoGpuContext,
        Self::IntentionallySkipped,
        Self::RenderModeMismatch,
        Self::ExpectationsMismatch,
        Self::MissingExpectations,
        Self::WritingReferenceImage,
    ];

    /// Returns the stable identifier for this kind, as used in logs and reports.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            ErrorKind::NoGpuContext => "NoGpuContext",
            ErrorKind::IntentionallySkipped => "IntentionallySkipped",
            ErrorKind::RenderModeMismatch => "RenderModeMismatch",
            ErrorKind::ExpectationsMismatch => "ExpectationsMismatch",
            ErrorKind::MissingExpectations => "MissingExpectations",
            ErrorKind::WritingReferenceImage => "WritingReferenceImage",
        }
    }

    /// The bit this kind occupies in an [`ErrorSet`](crate::ErrorSet) mask.
    #[inline]
    pub(crate) const fn bit(self) -> u32 {
        1 << self as u32
    }
}

/// Formats the kind as its [`name()`](Self::name).
impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use alloc::string::ToString as _;
    use alloc::vec::Vec;
    use exhaust::Exhaust as _;
    use pretty_assertions::assert_eq;

    #[test]
    fn all_agrees_with_exhaust() {
        assert_eq!(
            ErrorKind::exhaust().collect::<Vec<ErrorKind>>(),
            Vec::from(ErrorKind::ALL),
        );
    }

    #[test]
    fn names_are_nonempty_and_distinct() {
        let names: BTreeSet<&str> = ErrorKind::exhaust().map(ErrorKind::name).collect();
        assert_eq!(names.len(), ErrorKind::ALL.len());
        for name in names {
            assert!(!name.is_empty());
        }
    }

    #[test]
    fn display_equals_name() {
        for kind in ErrorKind::ALL {
            assert_eq!(kind.to_string(), kind.name());
        }
        assert_eq!(
            ErrorKind::WritingReferenceImage.to_string(),
            "WritingReferenceImage"
        );
    }

    #[test]
    fn bits_are_distinct_and_in_declaration_order() {
        for (i, kind) in ErrorKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.bit(), 1 << i, "{kind:?}");
        }
    }
}

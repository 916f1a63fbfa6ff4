/// Configuration options for [`Parser`](crate::Parser).
///
/// # Default
///
/// No nesting limit. Every input the grammar accepts is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum object nesting depth. The top-level object is depth 1.
    ///
    /// Nesting is tracked on the heap, so any depth parses without a limit.
    /// Set one to bound the work spent on untrusted input. Deeper input
    /// fails with
    /// [`ParseErrorCode::DepthLimit`](crate::ParseErrorCode::DepthLimit) at
    /// the offending brace.
    ///
    /// # Default
    ///
    /// `None`
    pub max_depth: Option<usize>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Returns true if an object at `depth` is within the limit.
    #[inline]
    pub(crate) fn allows_depth(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth <= max)
    }
}

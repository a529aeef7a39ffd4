/// How the engine decides that a selection completes a polygon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompletionPolicy {
    /// The selection must be a closed loop that visits the polygon's
    /// boundary points in cyclic order, in either direction, starting
    /// anywhere on the boundary.
    ExactLoop,
    /// The polygon completes once the edges walked in the current selection,
    /// together with edges already drawn by earlier completions of
    /// neighbouring polygons, cover its whole boundary.
    #[default]
    EdgeCoverage,
}

/// When completion is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompletionCheck {
    /// After every accepted point. Suits both drag and click input.
    #[default]
    EveryPoint,
    /// Only when the input gesture ends and the caller finalizes the
    /// selection.
    OnFinalize,
}

/// Tunable behaviour of a [`Board`](super::Board).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Completion test applied to candidate polygons.
    pub policy: CompletionPolicy,
    /// When the completion test runs.
    pub completion_check: CompletionCheck,
}

impl SelectionConfig {
    /// Sets the completion policy.
    #[must_use]
    pub fn with_policy(mut self, policy: CompletionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets when completion is checked.
    #[must_use]
    pub fn with_completion_check(mut self, check: CompletionCheck) -> Self {
        self.completion_check = check;
        self
    }
}

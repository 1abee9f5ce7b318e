use std::fmt;

/// Lifecycle of a single project-creation run.
///
/// ```text
/// Validating -> BackingUp -> Scaffolding -> TemplateGenerating -> GitInitializing -> Succeeded
///      \____________\____________\_________________\____________________\-> Failed -> RolledBack
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreationState {
    Validating,
    BackingUp,
    Scaffolding,
    TemplateGenerating,
    GitInitializing,
    Succeeded,
    RolledBack,
    Failed,
}

impl CreationState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validating => "validating",
            Self::BackingUp => "backing-up",
            Self::Scaffolding => "scaffolding",
            Self::TemplateGenerating => "template-generating",
            Self::GitInitializing => "git-initializing",
            Self::Succeeded => "succeeded",
            Self::RolledBack => "rolled-back",
            Self::Failed => "failed",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::RolledBack)
    }

    /// Whether the filesystem may have been touched in this state.
    pub const fn is_mutating(self) -> bool {
        matches!(
            self,
            Self::Scaffolding | Self::TemplateGenerating | Self::GitInitializing
        )
    }

    pub const fn can_transition_to(self, next: CreationState) -> bool {
        use CreationState::*;
        matches!(
            (self, next),
            (Validating, BackingUp)
                | (BackingUp, Scaffolding)
                | (Scaffolding, TemplateGenerating)
                | (TemplateGenerating, GitInitializing)
                | (GitInitializing, Succeeded)
                | (Validating | BackingUp | Scaffolding | TemplateGenerating | GitInitializing, Failed)
                | (Failed, RolledBack)
        )
    }
}

impl fmt::Display for CreationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::CreationState::*;

    #[test]
    fn happy_path_is_linear() {
        let path = [
            Validating,
            BackingUp,
            Scaffolding,
            TemplateGenerating,
            GitInitializing,
            Succeeded,
        ];
        for pair in path.windows(2) {
            assert!(pair[0].can_transition_to(pair[1]), "{} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn steps_cannot_be_skipped() {
        assert!(!Validating.can_transition_to(Scaffolding));
        assert!(!Scaffolding.can_transition_to(GitInitializing));
        assert!(!Validating.can_transition_to(Succeeded));
    }

    #[test]
    fn failure_leads_only_to_rollback() {
        assert!(TemplateGenerating.can_transition_to(Failed));
        assert!(Failed.can_transition_to(RolledBack));
        assert!(!Failed.can_transition_to(Succeeded));
        assert!(!Succeeded.can_transition_to(Failed));
    }

    #[test]
    fn terminal_states() {
        assert!(Succeeded.is_terminal());
        assert!(RolledBack.is_terminal());
        assert!(!Failed.is_terminal());
    }
}

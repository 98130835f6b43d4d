use crate::models::CharacterProfile;

#[derive(Clone, Debug, PartialEq, Default)]
pub enum Phase {
    /// Form is shown, no profile exists
    #[default]
    Creating,
    Generating,
    Chatting(CharacterProfile),
}

/// Cross-panel state: at most one profile, a generating flag and the last
/// generation error.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Studio {
    phase: Phase,
    error: Option<String>,
}

impl Studio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn profile(&self) -> Option<&CharacterProfile> {
        match &self.phase {
            Phase::Chatting(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn is_generating(&self) -> bool {
        self.phase == Phase::Generating
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns false when a generation cannot start from the current phase.
    pub fn begin_generation(&mut self) -> bool {
        if self.phase != Phase::Creating {
            return false;
        }
        self.phase = Phase::Generating;
        self.error = None;
        true
    }

    /// Ends an in-flight generation. Outcomes arriving in any other phase are
    /// dropped.
    pub fn finish_generation(&mut self, outcome: Result<CharacterProfile, String>) -> bool {
        if self.phase != Phase::Generating {
            tracing::warn!("Dropping generation result outside of the generating phase");
            return false;
        }
        match outcome {
            Ok(profile) => {
                self.phase = Phase::Chatting(profile);
                self.error = None;
            }
            Err(error) => {
                self.phase = Phase::Creating;
                self.error = Some(error);
            }
        }
        true
    }

    pub fn go_back(&mut self) {
        if matches!(self.phase, Phase::Chatting(_)) {
            self.phase = Phase::Creating;
            self.error = None;
        }
    }
}

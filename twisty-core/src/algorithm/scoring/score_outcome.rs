use crate::model::ScoredSegment;
use std::fmt::Display;

/// result of screening a single way. a rejected way is dropped from the search,
/// which keeps "rejected" distinct from a way that scored zero twistiness.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreOutcome {
    Scored(ScoredSegment),
    Rejected(RejectionReason),
}

impl ScoreOutcome {
    pub fn scored(self) -> Option<ScoredSegment> {
        match self {
            ScoreOutcome::Scored(segment) => Some(segment),
            ScoreOutcome::Rejected(_) => None,
        }
    }

    pub fn is_scored(&self) -> bool {
        matches!(self, ScoreOutcome::Scored(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RejectionReason {
    /// fewer than two points or a non-finite coordinate
    InvalidGeometry,
    TooShort,
    /// zero walked distance, so twistiness is undefined
    NoCurvatureSignal,
    NotCurvyEnough,
    UrbanNotCurvyEnough,
}

impl Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RejectionReason::InvalidGeometry => "invalid geometry",
            RejectionReason::TooShort => "too short",
            RejectionReason::NoCurvatureSignal => "no curvature signal",
            RejectionReason::NotCurvyEnough => "not curvy enough",
            RejectionReason::UrbanNotCurvyEnough => "urban and not curvy enough",
        };
        write!(f, "{s}")
    }
}

//! Events published by the pagination controller.

use shared::{domain::PageNumber, error::FetchFailure};

#[derive(Debug, Clone, PartialEq)]
pub enum PagerEvent {
    Loading {
        seq: u64,
        page: PageNumber,
    },
    Loaded {
        seq: u64,
        page: PageNumber,
        users: usize,
        total: Option<u64>,
    },
    Failed {
        seq: u64,
        page: PageNumber,
        failure: FetchFailure,
    },
    /// A response arrived after a newer request had been issued and was dropped.
    Stale {
        seq: u64,
        page: PageNumber,
    },
    Ignored {
        target: PageNumber,
    },
}

impl PagerEvent {
    pub fn seq(&self) -> Option<u64> {
        match self {
            Self::Loading { seq, .. }
            | Self::Loaded { seq, .. }
            | Self::Failed { seq, .. }
            | Self::Stale { seq, .. } => Some(*seq),
            Self::Ignored { .. } => None,
        }
    }
}

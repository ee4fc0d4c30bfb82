use super::types::MediaError;

/// Something an engine reports asynchronously.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// The playback position moved. Read it from `current_time`.
    TimeUpdate,
    Error(MediaError),
    /// Enough data is available to start playback.
    CanPlay,
    /// Audio output started or resumed.
    Playing,
    /// Playback reached the end of the resource.
    Ended,
    /// The duration became known or changed, in seconds.
    DurationChange(f64),
}

/// The subscription key for a `MediaEvent`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MediaEventKind {
    TimeUpdate,
    Error,
    CanPlay,
    Playing,
    Ended,
    DurationChange,
}

impl MediaEventKind {
    pub const ALL: [MediaEventKind; 6] = [
        Self::TimeUpdate,
        Self::Error,
        Self::CanPlay,
        Self::Playing,
        Self::Ended,
        Self::DurationChange,
    ];
}

impl MediaEvent {
    pub fn kind(&self) -> MediaEventKind {
        match self {
            Self::TimeUpdate => MediaEventKind::TimeUpdate,
            Self::Error(_) => MediaEventKind::Error,
            Self::CanPlay => MediaEventKind::CanPlay,
            Self::Playing => MediaEventKind::Playing,
            Self::Ended => MediaEventKind::Ended,
            Self::DurationChange(_) => MediaEventKind::DurationChange,
        }
    }
}

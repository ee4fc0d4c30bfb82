/// Errors returned to callers of a track. Engine failures are not errors in
/// this sense; they are recorded on the track instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackError {
    #[error("cannot {operation} {track}: the track has no engine")]
    InvalidState {
        operation: &'static str,
        track: String,
    },
}

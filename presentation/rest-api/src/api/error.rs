use poem::http::StatusCode;

/// Maps a domain error onto an HTTP status and an envelope message.
/// Every failure path renders through the same envelope shape.
pub trait IntoErrorEnvelope {
    fn into_error_envelope(self) -> (StatusCode, String);
}

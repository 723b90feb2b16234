use thiserror::Error;

/// Reasons a carousel refuses to mount. Any of these leaves the carousel
/// disabled for the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MountError {
    #[error("carousel markup has no track element")]
    MissingTrack,
    #[error("carousel markup has no slides")]
    NoSlides,
}

/// Rejected carousel transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("slide index {index} is out of range for {total} slides")]
    IndexOutOfRange { index: usize, total: usize },
}

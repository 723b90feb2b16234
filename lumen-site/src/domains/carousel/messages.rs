use lumen_core::carousel::Generation;

#[derive(Debug, Clone)]
pub enum Message {
    // Buttons and dots
    Next,
    Prev,
    GoTo(usize),

    // Keyboard, only honoured while the pointer rests on the carousel
    KeyNext,
    KeyPrev,

    // Pointer over the track
    PointerMoved(f32),
    PointerPressed,
    PointerReleased,
    HoverEnter,
    HoverExit,
    /// Horizontal offset reported by the track, including wheel and
    /// trackpad scrolling.
    TrackScrolled(f32),

    // Timers
    AutoplayTick(Generation),
    AnimationFrame,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Next => "Carousel::Next",
            Self::Prev => "Carousel::Prev",
            Self::GoTo(_) => "Carousel::GoTo",
            Self::KeyNext => "Carousel::KeyNext",
            Self::KeyPrev => "Carousel::KeyPrev",
            Self::PointerMoved(_) => "Carousel::PointerMoved",
            Self::PointerPressed => "Carousel::PointerPressed",
            Self::PointerReleased => "Carousel::PointerReleased",
            Self::HoverEnter => "Carousel::HoverEnter",
            Self::HoverExit => "Carousel::HoverExit",
            Self::TrackScrolled(_) => "Carousel::TrackScrolled",
            Self::AutoplayTick(_) => "Carousel::AutoplayTick",
            Self::AnimationFrame => "Carousel::AnimationFrame",
        }
    }
}

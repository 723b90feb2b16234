#[derive(Debug, Clone)]
pub enum Message {
    Scrolled { offset_y: f32, viewport_height: f32 },
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scrolled { .. } => "Page::Scrolled",
        }
    }
}

use crate::domains::page::Section;

#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    LinkPressed(Section),
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ToggleMenu => "Nav::ToggleMenu",
            Self::LinkPressed(_) => "Nav::LinkPressed",
        }
    }
}

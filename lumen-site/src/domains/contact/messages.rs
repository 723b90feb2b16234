use lumen_core::contact::Field;

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(Field, String),
    /// The visitor moved on from a field (Enter or picking an option).
    FieldCommitted(Field),
    ServicePicked(String),
    Submit,
    SubmissionFinished,
    DismissNotice,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FieldChanged(..) => "Contact::FieldChanged",
            Self::FieldCommitted(_) => "Contact::FieldCommitted",
            Self::ServicePicked(_) => "Contact::ServicePicked",
            Self::Submit => "Contact::Submit",
            Self::SubmissionFinished => "Contact::SubmissionFinished",
            Self::DismissNotice => "Contact::DismissNotice",
        }
    }
}

use iced::Task;
use lumen_core::ContactSession;
use lumen_core::contact::{Field, SubmitOutcome};

use super::Message;
use crate::messages::DomainMessage;

pub fn update(
    session: &mut ContactSession,
    message: Message,
) -> Task<DomainMessage> {
    log::trace!("{}", message.name());

    match message {
        Message::FieldChanged(field, value) => {
            session.edit(field, value);
            Task::none()
        }
        Message::FieldCommitted(field) => {
            session.blur(field);
            Task::none()
        }
        Message::ServicePicked(service) => {
            session.edit(Field::Service, service);
            session.blur(Field::Service);
            Task::none()
        }
        Message::Submit => match session.submit() {
            SubmitOutcome::Started(form) => {
                log::info!(
                    "contact request from {} ({})",
                    form.name.trim(),
                    form.service.as_deref().unwrap_or("no service chosen")
                );
                let delay = session.submit_delay();
                Task::perform(simulate_delivery(delay), |()| {
                    Message::SubmissionFinished.into()
                })
            }
            SubmitOutcome::Invalid => Task::none(),
            SubmitOutcome::AlreadySubmitting => {
                log::debug!("submit ignored: already in flight");
                Task::none()
            }
        },
        Message::SubmissionFinished => {
            session.complete();
            Task::none()
        }
        Message::DismissNotice => {
            session.dismiss();
            Task::none()
        }
    }
}

/// Stand-in for delivering the form; there is no backend.
pub async fn simulate_delivery(delay: std::time::Duration) {
    tokio::time::sleep(delay).await;
}

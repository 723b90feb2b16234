use iced::widget::{
    Column, button, column, container, pick_list, row, text, text_input,
};
use iced::{Alignment, Element, Length};
use lumen_core::ContactSession;
use lumen_core::contact::{Field, SubmissionStatus};

use super::Message;
use crate::content;
use crate::messages::DomainMessage;
use crate::theme::{self, LumenTheme};

pub fn view(session: &ContactSession) -> Element<'_, DomainMessage> {
    let form = session.form();

    let service = labelled(
        session,
        Field::Service,
        pick_list(
            content::SERVICE_NAMES,
            form.service.as_deref(),
            |picked: &str| Message::ServicePicked(picked.to_string()).into(),
        )
        .placeholder("Choose a treatment (optional)")
        .width(Length::Fill)
        .into(),
    );

    let mut body = Column::new()
        .spacing(14)
        .push(input(session, Field::Name, &form.name, "Your name"))
        .push(input(session, Field::Email, &form.email, "you@example.com"))
        .push(input(session, Field::Phone, &form.phone, "Optional"))
        .push(service)
        .push(input(
            session,
            Field::Message,
            &form.message,
            "How can we help?",
        ));

    let submit_label = if session.is_submitting() {
        "Sending…"
    } else {
        "Send message"
    };
    body = body.push(
        button(text(submit_label).size(16))
            .padding([12, 28])
            .style(theme::primary_button)
            .on_press_maybe(
                (!session.is_submitting()).then(|| Message::Submit.into()),
            ),
    );

    if session.status() == SubmissionStatus::Succeeded {
        body = body.push(
            container(
                row![
                    text("Thank you! We'll be in touch within one working day.")
                        .color(LumenTheme::SUCCESS)
                        .width(Length::Fill),
                    button(text("Dismiss").size(14))
                        .style(theme::ghost_button)
                        .on_press(Message::DismissNotice.into()),
                ]
                .align_y(Alignment::Center),
            )
            .padding(14)
            .style(theme::notice_style),
        );
    }

    container(body)
        .padding(32)
        .width(Length::Fill)
        .style(theme::card_style)
        .into()
}

fn input<'a>(
    session: &'a ContactSession,
    field: Field,
    value: &'a str,
    placeholder: &'a str,
) -> Element<'a, DomainMessage> {
    let invalid = session.errors().get(field).is_some();
    let widget = text_input(placeholder, value)
        .on_input(move |value| Message::FieldChanged(field, value).into())
        .on_submit(Message::FieldCommitted(field).into())
        .padding(12)
        .style(theme::input_style(invalid));
    labelled(session, field, widget.into())
}

fn labelled<'a>(
    session: &'a ContactSession,
    field: Field,
    widget: Element<'a, DomainMessage>,
) -> Element<'a, DomainMessage> {
    let mut column = column![
        text(field.label())
            .size(14)
            .color(LumenTheme::TEXT_SECONDARY),
        widget,
    ]
    .spacing(6);

    if let Some(error) = session.errors().get(field) {
        column = column.push(
            text(error.to_string())
                .size(13)
                .color(LumenTheme::ERROR),
        );
    }

    column.into()
}

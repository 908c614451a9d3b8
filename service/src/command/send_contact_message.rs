//! [`Command`] for sending a contact message.

use std::convert::Infallible;

use crate::{
    domain::{
        contact::{Form, Violation},
        handoff::{DeepLink, Message},
    },
    Service,
};

use super::Command;

/// [`Command`] handing a contact [`Form`] off to WhatsApp.
#[derive(Clone, Debug)]
pub struct SendContactMessage {
    /// Contact [`Form`] as filled in.
    pub form: Form,
}

/// Output of [`SendContactMessage`] [`Command`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Output {
    /// [`DeepLink`] carrying the inquiry is prepared.
    Sent(DeepLink),

    /// [`Form`] is rejected with every [`Violation`] found.
    Rejected(Vec<Violation>),
}

impl<Db> Command<SendContactMessage> for Service<Db> {
    type Ok = Output;
    type Err = Infallible;

    async fn execute(
        &self,
        SendContactMessage { form }: SendContactMessage,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(match form.validate() {
            Ok(inquiry) => {
                tracing::info!(
                    inquiry_type = %inquiry.inquiry_type,
                    "contact message handed off",
                );
                Output::Sent(DeepLink::whatsapp(
                    &self.config().payment.whatsapp_number,
                    &Message::inquiry(&inquiry),
                ))
            }
            Err(violations) => Output::Rejected(violations),
        })
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        command::Command as _,
        domain::contact::{Form, InquiryType, Violation},
        spec,
    };

    use super::{Output, SendContactMessage};

    #[tokio::test]
    async fn links_inquiry() {
        let out = spec::service(())
            .execute(SendContactMessage {
                form: Form {
                    name: "Sara".into(),
                    email: "s@example.com".into(),
                    phone: "0551234567".into(),
                    inquiry_type: Some(InquiryType::Other),
                    message: "Hello there, world".into(),
                },
            })
            .await
            .unwrap();
        let Output::Sent(link) = out else {
            panic!("expected a link");
        };
        assert!(link.as_ref().contains("Hello%20there%2C%20world"));
    }

    #[tokio::test]
    async fn returns_violations() {
        let out = spec::service(())
            .execute(SendContactMessage {
                form: Form::default(),
            })
            .await
            .unwrap();
        let Output::Rejected(violations) = out else {
            panic!("expected violations");
        };
        assert_eq!(violations.first(), Some(&Violation::NameRequired));
    }
}

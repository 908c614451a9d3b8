//! [`Command`] for confirming a payment of an [`Invoice`].

use common::DateTime;
use derive_more::{Display, Error};
use itertools::Itertools as _;
use tracerr::Traced;

use crate::{
    domain::{
        handoff::{DeepLink, Message},
        subscription::{Form, Invoice, Number, Violation},
    },
    Service,
};

use super::Command;

/// [`Command`] preparing a WhatsApp [`DeepLink`] confirming a bank transfer
/// made for an [`Invoice`].
#[derive(Clone, Debug)]
pub struct ConfirmPayment {
    /// [`Number`] of the paid [`Invoice`].
    pub number: Number,

    /// Registration [`Form`] the [`Invoice`] was issued for.
    pub form: Form,
}

impl<Db> Command<ConfirmPayment> for Service<Db> {
    type Ok = DeepLink;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        ConfirmPayment { number, form }: ConfirmPayment,
    ) -> Result<Self::Ok, Self::Err> {
        let registration = form
            .validate()
            .map_err(ExecutionError::InvalidRegistration)
            .map_err(tracerr::wrap!())?;
        let invoice =
            Invoice::restore(number, registration, DateTime::now().coerce());

        let details = &self.config().payment;
        let link = DeepLink::whatsapp(
            &details.whatsapp_number,
            &Message::payment(&invoice, details),
        );
        tracing::info!(number = %invoice.number, "payment handed off");

        Ok(link)
    }
}

/// Error of [`ConfirmPayment`] [`Command`] execution.
#[derive(Debug, Display, Error)]
pub enum ExecutionError {
    /// Registration [`Form`] is not valid.
    #[display("Invalid registration: {}", _0.iter().join(", "))]
    InvalidRegistration(#[error(not(source))] Vec<Violation>),
}

#[cfg(test)]
mod spec {
    use crate::{
        command::Command as _,
        domain::{subscription::Form, subscription::Number, Tier},
        spec,
    };

    use super::{ConfirmPayment, ExecutionError};

    fn form() -> Form {
        Form {
            tier: Tier::Vip,
            name: "محمد".into(),
            phone: "0501234567".into(),
            work_location: "جدة".into(),
            email: "m@example.com".into(),
            discount_code: String::new(),
        }
    }

    #[tokio::test]
    async fn links_configured_number() {
        let link = spec::service(())
            .execute(ConfirmPayment {
                number: Number::new("INV-1700000000000").unwrap(),
                form: form(),
            })
            .await
            .unwrap();
        assert!(link
            .as_ref()
            .starts_with("https://wa.me/966590317360?text="));
        assert!(link.as_ref().contains("INV-1700000000000"));
    }

    #[tokio::test]
    async fn refuses_invalid_form() {
        let err = spec::service(())
            .execute(ConfirmPayment {
                number: Number::new("INV-1").unwrap(),
                form: Form {
                    email: "broken".into(),
                    ..form()
                },
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err.as_ref(),
            ExecutionError::InvalidRegistration(v) if v.len() == 1,
        ));
    }
}

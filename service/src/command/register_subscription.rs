//! [`Command`] for registering a subscription.

use std::convert::Infallible;

use common::DateTime;

use crate::{
    domain::{
        subscription::{Form, Invoice, Violation},
        Quote,
    },
    Service,
};

use super::Command;

/// [`Command`] for registering a subscription and issuing its [`Invoice`].
///
/// Nothing is persisted: the [`Invoice`] is paid by a bank transfer confirmed
/// over WhatsApp.
#[derive(Clone, Debug)]
pub struct RegisterSubscription {
    /// Registration [`Form`] as filled in.
    pub form: Form,
}

/// Output of [`RegisterSubscription`] [`Command`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Output {
    /// [`Invoice`] is issued.
    Registered(Invoice),

    /// [`Form`] is rejected.
    Rejected {
        /// Every [`Violation`] found in the [`Form`].
        violations: Vec<Violation>,

        /// [`Quote`] of the selected tier, still shown to the customer.
        quote: Quote,
    },
}

impl<Db> Command<RegisterSubscription> for Service<Db> {
    type Ok = Output;
    type Err = Infallible;

    async fn execute(
        &self,
        RegisterSubscription { form }: RegisterSubscription,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(match form.validate() {
            Ok(registration) => {
                let invoice =
                    Invoice::issue(registration, DateTime::now().coerce());
                tracing::info!(
                    number = %invoice.number,
                    tier = %invoice.registration.tier,
                    discounted = invoice.discount_applied(),
                    "subscription registered",
                );
                Output::Registered(invoice)
            }
            Err(violations) => {
                tracing::debug!(?violations, "registration rejected");
                Output::Rejected {
                    violations,
                    quote: form.quote(),
                }
            }
        })
    }
}

#[cfg(test)]
mod spec {
    use common::Money;
    use rust_decimal::Decimal;

    use crate::{
        command::Command as _,
        domain::{subscription::Form, subscription::Violation, Tier},
        spec,
    };

    use super::{Output, RegisterSubscription};

    fn form(code: &str) -> Form {
        Form {
            tier: Tier::Family,
            name: "عبدالله".into(),
            phone: "+966501234567".into(),
            work_location: "الدمام".into(),
            email: "a@example.com".into(),
            discount_code: code.into(),
        }
    }

    #[tokio::test]
    async fn issues_discounted_invoice() {
        let Output::Registered(invoice) = spec::service(())
            .execute(RegisterSubscription {
                form: form("bakm589"),
            })
            .await
            .unwrap()
        else {
            panic!("expected registration");
        };
        assert!(invoice.discount_applied());
        assert_eq!(invoice.quote.final_price, Money::sar(Decimal::from(400)));
        assert!(invoice.number.as_ref().starts_with("INV-"));
    }

    #[tokio::test]
    async fn rejects_invalid_code_keeping_base_price() {
        let out = spec::service(())
            .execute(RegisterSubscription {
                form: form("HALF"),
            })
            .await
            .unwrap();
        assert_eq!(
            out,
            Output::Rejected {
                violations: vec![Violation::DiscountCodeInvalid],
                quote: crate::domain::Quote::new(
                    Tier::Family,
                    crate::domain::discount::Outcome::Empty,
                ),
            },
        );
    }
}

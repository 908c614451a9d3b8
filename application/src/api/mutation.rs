//! GraphQL [`Mutation`]s definitions.

use juniper::graphql_object;
use service::{
    command::{self, register_subscription},
    Command as _,
};

use crate::{api, define_error, AsError, Context, Error};

/// Root of all GraphQL mutations.
#[derive(Clone, Copy, Debug)]
pub struct Mutation;

impl Mutation {
    /// Name of the [`tracing::Span`] for the mutations.
    const SPAN_NAME: &'static str = "GraphQL mutation";
}

#[graphql_object(context = Context)]
impl Mutation {
    /// Registers a subscription for a card, issuing an `Invoice` to pay.
    ///
    /// Invalid input is reported in the `violations` rather than as an error,
    /// along with the `PriceQuote` of the selected `CardTier`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "registerSubscription",
            otel.name = Self::SPAN_NAME,
            tier = ?input.tier,
        ),
    )]
    pub async fn register_subscription(
        input: api::subscription::RegistrationInput,
        ctx: &Context,
    ) -> Result<api::subscription::RegistrationResult, Error> {
        let output = ctx
            .service()
            .execute(command::RegisterSubscription { form: input.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?;

        Ok(match output {
            register_subscription::Output::Registered(invoice) => {
                let quote = invoice.quote.into();
                api::subscription::RegistrationResult {
                    invoice: Some(invoice.into()),
                    violations: vec![],
                    quote,
                }
            }
            register_subscription::Output::Rejected { violations, quote } => {
                api::subscription::RegistrationResult {
                    invoice: None,
                    violations: violations
                        .into_iter()
                        .map(Into::into)
                        .collect(),
                    quote: quote.into(),
                }
            }
        })
    }

    /// Prepares a WhatsApp deep link confirming the bank transfer for the
    /// provided `Invoice`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_REGISTRATION` - the registration of the `Invoice` is
    ///                            invalid.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "confirmPayment",
            number = %invoice.number,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn confirm_payment(
        invoice: api::subscription::InvoiceInput,
        ctx: &Context,
    ) -> Result<String, Error> {
        let api::subscription::InvoiceInput {
            number,
            registration,
        } = invoice;
        ctx.service()
            .execute(command::ConfirmPayment {
                number: number.into(),
                form: registration.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|link| link.to_string())
    }

    /// Prepares a WhatsApp deep link carrying the provided contact message.
    ///
    /// Invalid input is reported in the `violations` rather than as an error.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "sendContactMessage",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn send_contact_message(
        input: api::contact::ContactInput,
        ctx: &Context,
    ) -> Result<api::contact::ContactResult, Error> {
        ctx.service()
            .execute(command::SendContactMessage { form: input.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Adds a new family member to the card of the authenticated card holder.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AUTHORIZATION_REQUIRED` - no valid session token is provided;
    /// - `NO_CARD` - the authenticated card holder holds no card;
    /// - `FAMILY_LIMIT_REACHED` - the card covers no more family members.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "addFamilyMember",
            name = %name,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn add_family_member(
        name: api::member::family::Name,
        ctx: &Context,
    ) -> Result<api::member::family::Member, Error> {
        let my_id = ctx.current_session().await?.member_id;

        ctx.service()
            .execute(command::AddFamilyMember {
                holder_id: my_id.into(),
                name: name.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Removes the family member with the provided ID from the card of the
    /// authenticated card holder.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AUTHORIZATION_REQUIRED` - no valid session token is provided;
    /// - `FAMILY_MEMBER_NOT_EXISTS` - the authenticated card holder has no
    ///                                family member with the provided ID.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "removeFamilyMember",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn remove_family_member(
        id: api::member::family::Id,
        ctx: &Context,
    ) -> Result<api::member::family::Member, Error> {
        let my_id = ctx.current_session().await?.member_id;

        ctx.service()
            .execute(command::RemoveFamilyMember {
                holder_id: my_id.into(),
                id: id.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }
}

impl AsError for command::confirm_payment::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "INVALID_REGISTRATION"]
                #[status = BAD_REQUEST]
                #[message = "Registration of the `Invoice` is invalid"]
                InvalidRegistration,
            }
        }

        match self {
            Self::InvalidRegistration(_) => {
                Some(Error::InvalidRegistration.into())
            }
        }
    }
}

impl AsError for command::add_family_member::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "NO_CARD"]
                #[status = FORBIDDEN]
                #[message = "Authenticated card holder holds no card"]
                NoCard,

                #[code = "FAMILY_LIMIT_REACHED"]
                #[status = CONFLICT]
                #[message = "Card covers no more family members"]
                LimitReached,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::HolderNotExists(_) => None,
            Self::NoCard(_) => Some(Error::NoCard.into()),
            Self::LimitReached(_) => Some(Error::LimitReached.into()),
        }
    }
}

impl AsError for command::remove_family_member::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "FAMILY_MEMBER_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "Family member with the provided ID doesn't exist"]
                FamilyMemberNotExists,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::FamilyMemberNotExists(_) => {
                Some(Error::FamilyMemberNotExists.into())
            }
        }
    }
}

//! [`Command`] definition.

pub mod add_family_member;
pub mod authorize_member_session;
pub mod confirm_payment;
pub mod register_subscription;
pub mod remove_family_member;
pub mod send_contact_message;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    add_family_member::AddFamilyMember,
    authorize_member_session::AuthorizeMemberSession,
    confirm_payment::ConfirmPayment,
    register_subscription::RegisterSubscription,
    remove_family_member::RemoveFamilyMember,
    send_contact_message::SendContactMessage,
};

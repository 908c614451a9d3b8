//! Domain definitions.

pub mod category;
pub mod contact;
pub mod customer;
pub mod discount;
pub mod handoff;
pub mod member;
pub mod partner;
pub mod quote;
pub mod savings;
pub mod subscription;
pub mod tier;

pub use self::{
    category::Category, member::Member, partner::Partner, quote::Quote,
    tier::Tier,
};

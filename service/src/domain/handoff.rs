//! Outbound messaging handoff definitions.
//!
//! Payments and inquiries are confirmed by a human over WhatsApp: the
//! platform only prepares a [`DeepLink`] opening a chat with a pre-filled
//! [`Message`].

use std::fmt::Write as _;

use derive_more::{AsRef, Display};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;
use smart_default::SmartDefault;

use super::{contact::Inquiry, subscription::Invoice};

/// Characters escaped in a URI component, leaving only the unreserved
/// marks of [RFC 2396] as they are.
///
/// [RFC 2396]: https://datatracker.ietf.org/doc/html/rfc2396#section-2.3
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Payment handoff details shown to customers.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, SmartDefault)]
#[serde(default)]
pub struct Details {
    /// WhatsApp number receiving confirmations, in international format
    /// without a leading `+`.
    #[default("966590317360")]
    pub whatsapp_number: String,

    /// Name of the bank to transfer money to.
    #[default("البنك الأهلي السعودي")]
    pub bank_name: String,

    /// Bank account number to transfer money to.
    #[default("01400032678206")]
    pub account_number: String,

    /// IBAN of the bank account to transfer money to.
    #[default("SA3910000001400032678206")]
    pub iban: String,
}

/// Text of a pre-filled [`DeepLink`] message.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str)]
pub struct Message(String);

impl Message {
    /// Composes a [`Message`] confirming the bank transfer for the provided
    /// [`Invoice`].
    #[must_use]
    pub fn payment(invoice: &Invoice, details: &Details) -> Self {
        let reg = &invoice.registration;

        let mut text = format!(
            "مرحباً، أود تأكيد اشتراكي في إبداع الحرفة\n\n\
             رقم الفاتورة: {}\n\
             نوع البطاقة: {}\n\
             الاسم: {}\n\
             رقم الجوال: {}\n\
             البريد الإلكتروني: {}\n\
             مكان العمل: {}\n",
            invoice.number,
            reg.tier.display_name(),
            reg.name,
            reg.phone,
            reg.email,
            reg.work_location,
        );
        if invoice.discount_applied() {
            if let Some(code) = &reg.discount_code {
                _ = writeln!(text, "كود الخصم: {code}");
            }
        }
        _ = write!(
            text,
            "المبلغ المدفوع: {} ريال\n\n\
             تم التحويل إلى حساب {}\n\
             سأقوم بإرسال صورة إيصال التحويل",
            invoice.quote.final_price.amount.normalize(),
            details.bank_name,
        );

        Self(text)
    }

    /// Composes a [`Message`] carrying the provided [`Inquiry`].
    #[must_use]
    pub fn inquiry(inquiry: &Inquiry) -> Self {
        Self(format!(
            "مرحباً، أنا {}\n\n\
             نوع الاستفسار: {}\n\n\
             الرسالة:\n{}\n\n\
             البريد الإلكتروني: {}\n\
             رقم الهاتف: {}",
            inquiry.sender,
            inquiry.inquiry_type.label(),
            inquiry.message,
            inquiry.email,
            inquiry.phone,
        ))
    }
}

/// Deep link opening a WhatsApp chat with a pre-filled [`Message`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str)]
pub struct DeepLink(String);

impl DeepLink {
    /// Creates a new [`DeepLink`] to the provided WhatsApp `number`.
    #[must_use]
    pub fn whatsapp(number: &str, message: &Message) -> Self {
        Self(format!(
            "https://wa.me/{number}?text={}",
            utf8_percent_encode(message.as_ref(), URI_COMPONENT),
        ))
    }
}

#[cfg(test)]
mod spec {
    use common::DateTime;

    use crate::domain::{
        contact::{self, InquiryType},
        subscription::{Form, Invoice, Number},
        Tier,
    };

    use super::{DeepLink, Details, Message};

    fn invoice(code: &str) -> Invoice {
        let reg = Form {
            tier: Tier::Vip,
            name: "محمد".into(),
            phone: "0501234567".into(),
            work_location: "جدة".into(),
            email: "m@example.com".into(),
            discount_code: code.into(),
        }
        .validate()
        .unwrap();
        Invoice::restore(
            Number::new("INV-42").unwrap(),
            reg,
            DateTime::UNIX_EPOCH.coerce(),
        )
    }

    #[test]
    fn composes_payment_message() {
        let msg = Message::payment(&invoice(""), &Details::default());
        assert_eq!(
            msg.as_ref(),
            "مرحباً، أود تأكيد اشتراكي في إبداع الحرفة\n\n\
             رقم الفاتورة: INV-42\n\
             نوع البطاقة: بطاقة VIP\n\
             الاسم: محمد\n\
             رقم الجوال: 0501234567\n\
             البريد الإلكتروني: m@example.com\n\
             مكان العمل: جدة\n\
             المبلغ المدفوع: 1500 ريال\n\n\
             تم التحويل إلى حساب البنك الأهلي السعودي\n\
             سأقوم بإرسال صورة إيصال التحويل",
        );
    }

    #[test]
    fn mentions_applied_code() {
        let msg = Message::payment(&invoice("bakm589"), &Details::default());
        assert!(msg.as_ref().contains("\nكود الخصم: BAKM589\nالمبلغ المدفوع: 750 ريال"));
    }

    #[test]
    fn composes_inquiry_message() {
        let inquiry = contact::Form {
            name: "سارة".into(),
            email: "s@example.com".into(),
            phone: "0551234567".into(),
            inquiry_type: Some(InquiryType::Support),
            message: "لا أستطيع الدخول".into(),
        }
        .validate()
        .unwrap();
        assert_eq!(
            Message::inquiry(&inquiry).as_ref(),
            "مرحباً، أنا سارة\n\n\
             نوع الاستفسار: الدعم الفني\n\n\
             الرسالة:\nلا أستطيع الدخول\n\n\
             البريد الإلكتروني: s@example.com\n\
             رقم الهاتف: 0551234567",
        );
    }

    #[test]
    fn encodes_like_uri_component() {
        let msg = Message("a b\n(c)!*'~-_.&=?/+#é".into());
        assert_eq!(
            DeepLink::whatsapp("966590317360", &msg).as_ref(),
            "https://wa.me/966590317360?text=\
             a%20b%0A(c)!*'~-_.%26%3D%3F%2F%2B%23%C3%A9",
        );
    }
}

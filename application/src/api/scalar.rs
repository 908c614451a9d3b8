//! GraphQL scalar helpers.

use std::{fmt, marker::PhantomData, str::FromStr};

use juniper::{
    GraphQLType, InputValue, ParseScalarResult, ParseScalarValue, ScalarToken,
    ScalarValue, Value,
};

/// Helper type to use in `#[graphql(with = ..)]` attribute of a string
/// scalar wrapping the validated `As` type.
///
/// Input strings are validated with the [`FromStr`] impl of `As`, while
/// output is its textual representation.
#[derive(Debug)]
pub struct Via<As>(PhantomData<As>);

impl<As> Via<As> {
    /// Converts the target type into a string scalar [`Value`].
    pub fn to_output<T, S>(value: &T) -> Value<S>
    where
        As: AsRef<str>,
        T: AsRef<As>,
        S: ScalarValue,
    {
        Value::scalar(AsRef::<As>::as_ref(value).as_ref().to_owned())
    }

    /// Constructs the target type from a string scalar [`InputValue`].
    ///
    /// # Errors
    ///
    /// If the `input` is not a string, or is rejected by the [`FromStr`] impl
    /// of `As` type.
    pub fn from_input<T, S>(input: &InputValue<S>) -> Result<T, String>
    where
        As: FromStr,
        As::Err: fmt::Display,
        T: From<As> + GraphQLType<S, TypeInfo = ()>,
        S: ScalarValue,
    {
        let name = T::name(&()).map(|n| n.to_string()).unwrap_or_default();
        let s = input.as_string_value().ok_or_else(|| {
            format!("Cannot parse `{name}` input scalar from non-string value: {input}")
        })?;
        s.parse::<As>()
            .map(T::from)
            .map_err(|e| format!("Cannot parse `{name}` input scalar: {e}"))
    }

    /// Parses the provided [`ScalarToken`] as a string.
    ///
    /// # Errors
    ///
    /// If the token is not a string.
    pub fn parse_token<S: ScalarValue>(
        value: ScalarToken<'_>,
    ) -> ParseScalarResult<S> {
        <String as ParseScalarValue<S>>::from_str(value)
    }
}

#[cfg(test)]
mod spec {
    use juniper::{DefaultScalarValue, InputValue};

    use crate::api::{member::family, subscription};

    use super::Via;

    type Scalar = DefaultScalarValue;

    #[test]
    fn parses_valid_input() {
        let input = InputValue::<Scalar>::scalar("  جدة ".to_owned());
        let name: family::Name =
            Via::<service::domain::member::family::Name>::from_input(&input)
                .unwrap();
        assert_eq!(name.to_string(), "جدة");
    }

    #[test]
    fn rejects_invalid_input() {
        let input = InputValue::<Scalar>::scalar("INV-".to_owned());
        let err = Via::<service::domain::subscription::Number>::from_input::<
            subscription::Number,
            Scalar,
        >(&input)
        .unwrap_err();
        assert!(err.contains("InvoiceNumber"), "{err}");

        let input = InputValue::<Scalar>::scalar(42);
        assert!(Via::<service::domain::subscription::Number>::from_input::<
            subscription::Number,
            Scalar,
        >(&input)
        .is_err());
    }
}

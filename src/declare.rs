//! Declaration-time support for [`string_enum!`](crate::string_enum).

/// Declares a closed set of string-valued constants.
///
/// Expands to a fieldless `Copy` enum with one variant per member, an
/// implementation of [`StringEnum`](crate::StringEnum) whose `values()`
/// slice follows declaration order, and the conversion surface expected
/// of a wire token: `Display`, `FromStr`, `TryFrom<&str>`,
/// `From<Self> for String`, `AsRef<str>`, and serde
/// `Serialize`/`Deserialize` as a bare JSON string.
///
/// Tokens are stored verbatim — no trimming, no case folding. Declaring
/// two members with the same token fails the build.
///
/// ```
/// string_enum::string_enum! {
///     /// Compression codecs accepted by the ingest endpoint.
///     pub enum Compression {
///         Gzip => "gzip",
///         Zstd => "zstd",
///     }
/// }
///
/// use string_enum::StringEnum;
///
/// assert_eq!(Compression::Zstd.as_str(), "zstd");
/// assert_eq!(Compression::parse("gzip"), Ok(Compression::Gzip));
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$member_meta:meta])*
                $member:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$member_meta])*
                $member
            ),+
        }

        impl $crate::StringEnum for $name {
            const SET_NAME: &'static str = ::core::stringify!($name);

            fn values() -> &'static [Self] {
                const VALUES: &[$name] = &[$($name::$member),+];
                VALUES
            }

            fn as_str(self) -> &'static str {
                match self {
                    $($name::$member => $token),+
                }
            }
        }

        const _: () = $crate::declare::assert_unique_tokens(&[$($token),+]);

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<Self as $crate::StringEnum>::as_str(*self))
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::UnknownValueError;

            fn from_str(token: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as $crate::StringEnum>::parse(token)
            }
        }

        impl ::core::convert::TryFrom<&str> for $name {
            type Error = $crate::UnknownValueError;

            fn try_from(token: &str) -> ::core::result::Result<Self, Self::Error> {
                <Self as $crate::StringEnum>::parse(token)
            }
        }

        impl ::core::convert::From<$name> for ::std::string::String {
            fn from(member: $name) -> Self {
                <$name as $crate::StringEnum>::as_str(member).to_owned()
            }
        }

        impl ::core::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                <Self as $crate::StringEnum>::as_str(*self)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(
                &self,
                serializer: S,
            ) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::token::serialize(self, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::token::deserialize(deserializer)
            }
        }
    };
}

/// Build-time guard behind `string_enum!`: rejects declarations where two
/// members share a wire token, so member equality and token equality
/// always coincide.
#[doc(hidden)]
pub const fn assert_unique_tokens(tokens: &[&str]) {
    let mut i = 0;
    while i < tokens.len() {
        let mut j = i + 1;
        while j < tokens.len() {
            assert!(
                !str_eq(tokens[i], tokens[j]),
                "string_enum! members must not share a wire token"
            );
            j += 1;
        }
        i += 1;
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::StringEnum;

    use super::assert_unique_tokens;

    crate::string_enum! {
        /// Delivery attempt outcome reported by the carrier feed.
        pub(crate) enum DeliveryOutcome {
            Delivered => "delivered",
            Refused => "refused",
            /// Carrier could not reach the address at all.
            Undeliverable => "undeliverable",
        }
    }

    #[test]
    fn set_name_is_the_type_name() {
        assert_eq!(DeliveryOutcome::SET_NAME, "DeliveryOutcome");
    }

    #[test]
    fn values_follow_declaration_order() {
        assert_eq!(
            DeliveryOutcome::values(),
            [
                DeliveryOutcome::Delivered,
                DeliveryOutcome::Refused,
                DeliveryOutcome::Undeliverable,
            ]
        );
    }

    #[test]
    fn display_matches_projection() {
        assert_eq!(DeliveryOutcome::Refused.to_string(), "refused");
        assert_eq!(
            DeliveryOutcome::Refused.to_string(),
            DeliveryOutcome::Refused.as_str()
        );
    }

    #[test]
    fn from_str_and_try_from_parse() {
        assert_eq!(
            "delivered".parse::<DeliveryOutcome>(),
            Ok(DeliveryOutcome::Delivered)
        );
        assert_eq!(
            DeliveryOutcome::try_from("undeliverable"),
            Ok(DeliveryOutcome::Undeliverable)
        );
        assert!("Delivered".parse::<DeliveryOutcome>().is_err());
    }

    #[test]
    fn string_conversions_agree() {
        assert_eq!(String::from(DeliveryOutcome::Delivered), "delivered");
        assert_eq!(DeliveryOutcome::Delivered.as_ref(), "delivered");
    }

    #[test]
    fn unique_tokens_pass_the_guard() {
        assert_unique_tokens(&["delivered", "refused", "undeliverable"]);
        assert_unique_tokens(&["only"]);
        assert_unique_tokens(&[]);
    }

    #[test]
    #[should_panic(expected = "must not share a wire token")]
    fn duplicate_tokens_fail_the_guard() {
        assert_unique_tokens(&["delivered", "refused", "delivered"]);
    }

    #[test]
    fn guard_is_exact_not_case_insensitive() {
        // Distinct by case is legal, matching the exact-match contract.
        assert_unique_tokens(&["delivered", "Delivered"]);
    }
}

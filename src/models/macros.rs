//! Macros for declaring closed value sets
//!
//! Every categorical field of a patient record is a closed enum: a label that
//! does not name one of its variants is rejected when parsed, never mapped to
//! an "unknown" catch-all.

/// Declare a closed value set with its display labels
///
/// The first label of each variant is its canonical label, used for
/// `Display` and as the serialized wire name. Additional labels are accepted
/// as aliases. Deserialization goes through `FromStr`, so JSON input and
/// parsed text accept the same labels, case-insensitively.
///
/// ```ignore
/// closed_value_set! {
///     /// Lymph node stage
///     pub enum NStage as "nStage" {
///         N0 => "N0",
///         Nx => "Nx" | "NX",
///     }
/// }
/// ```
macro_rules! closed_value_set {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $field:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// All variants, in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Canonical display label
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::PathwayError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let needle = s.trim();
                $(
                    if needle.eq_ignore_ascii_case($label)
                        $(|| needle.eq_ignore_ascii_case($alias))*
                    {
                        return Ok(Self::$variant);
                    }
                )+
                Err($crate::error::PathwayError::invalid_value($field, s))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let label =
                    <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                label.parse::<Self>().map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use closed_value_set;

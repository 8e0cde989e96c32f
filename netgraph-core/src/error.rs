//! Error types for the netgraph core library.
//!
//! Link insertion reports failure through its boolean result; only
//! configuration problems surface as [`NetworkError`].

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced when configuring or connecting a [`crate::Network`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum NetworkError {
    /// The Poisson mean used for degree draws was negative or not finite.
    #[error("mean degree must be a finite, non-negative number (got {got})")]
    InvalidMeanDegree {
        /// The rejected mean degree.
        got: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`NetworkError`] variants.
    enum NetworkErrorCode for NetworkError {
        /// The Poisson mean used for degree draws was negative or not finite.
        InvalidMeanDegree => InvalidMeanDegree { .. } => "NETWORK_INVALID_MEAN_DEGREE",
    }
}

/// Convenient result alias for netgraph operations.
pub type Result<T, E = NetworkError> = std::result::Result<T, E>;

/// Checks that `mean_degree` can parameterise a Poisson draw.
pub(crate) fn validate_mean_degree(mean_degree: f64) -> Result<f64> {
    if mean_degree.is_finite() && mean_degree >= 0.0 {
        Ok(mean_degree)
    } else {
        Err(NetworkError::InvalidMeanDegree { got: mean_degree })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0)]
    #[case(0.5)]
    #[case(12.0)]
    fn accepts_finite_non_negative_means(#[case] mean: f64) {
        assert_eq!(validate_mean_degree(mean), Ok(mean));
    }

    #[rstest]
    #[case(-0.1)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn rejects_unusable_means(#[case] mean: f64) {
        let err = validate_mean_degree(mean).expect_err("mean must be rejected");
        assert_eq!(err.code(), NetworkErrorCode::InvalidMeanDegree);
    }

    #[test]
    fn codes_and_messages_are_stable() {
        let err = NetworkError::InvalidMeanDegree { got: -2.0 };
        assert_eq!(err.code().as_str(), "NETWORK_INVALID_MEAN_DEGREE");
        assert_eq!(err.code().to_string(), "NETWORK_INVALID_MEAN_DEGREE");
        assert_eq!(
            err.to_string(),
            "mean degree must be a finite, non-negative number (got -2)"
        );
    }
}

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a row id, rejecting zero and negative values.
            pub fn new(value: i64) -> Result<Self> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(Error::InvalidId(value.to_string()))
                }
            }

            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                let value = s
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| Error::InvalidId(s.to_string()))?;
                Self::new(value).map_err(|_| Error::InvalidId(s.to_string()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

row_id!(
    /// Identifier of a row in `clients`
    ClientId
);
row_id!(
    /// Identifier of a row in `pets`
    PetId
);
row_id!(
    /// Identifier of a row in `consultations`
    ConsultationId
);

//! Closed menu enumerations for the counter.
//!
//! Each value has a wire code (what the order form submits) and a display label
//! (what the board shows). Parsing is exact on the code; anything else is an
//! [`UnknownMenuCode`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A submitted code that is not on the menu.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} code: {code:?}")]
pub struct UnknownMenuCode {
    pub kind: &'static str,
    pub code: String,
}

macro_rules! menu_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => ($code:tt, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $code)] $variant),+
        }

        impl $name {
            /// Every value, in the order the form lists them.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Code submitted by the form.
            pub fn code(self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }

            /// Name shown on the board.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownMenuCode;

            fn from_str(code: &str) -> Result<Self, Self::Err> {
                match code {
                    $($code => Ok($name::$variant),)+
                    _ => Err(UnknownMenuCode {
                        kind: $kind,
                        code: code.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }
    };
}

menu_enum! {
    /// The burger the order is built around.
    MainItem, "main item" {
        Verdadeirinho => ("VERDADEIRINHO", "Verdadeirinho"),
        Bacon => ("BACON", "Bacon"),
        Salada => ("SALADA", "Salada"),
    }
}

menu_enum! {
    /// A change to the main item.
    Modification, "modification" {
        NoCebola => ("NO_CEBOLA", "No Cebola"),
        NoMostarda => ("NO_MOSTARDA", "No Mostarda"),
        NoKetchup => ("NO_KETCHUP", "No Ketchup"),
        SwapFalafel => ("SWAP_FALAFEL", "Swap Falafel"),
        SwapShimeji => ("SWAP_SHIMEJI", "Swap Shimeji"),
        AddBacon => ("ADD_BACON", "Add Bacon"),
        AddQueijo => ("ADD_QUEIJO", "Add Queijo"),
    }
}

menu_enum! {
    /// A side dish.
    Side, "side" {
        Fries => ("FRIES", "Batata Frita"),
        OnionRings => ("ONION_RINGS", "Onion Rings"),
        Nuggets => ("NUGGETS", "Nuggets"),
    }
}

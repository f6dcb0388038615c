//! Macros for ergonomic state kind declarations.

/// Generate a state kind enum with the required derives and the
/// [`StateKind`](crate::core::StateKind) implementation.
///
/// # Example
///
/// ```
/// use stratum::state_kinds;
///
/// state_kinds! {
///     pub enum GuardKind {
///         Patrol,
///         Chase,
///         Attack,
///     }
/// }
///
/// use stratum::core::StateKind;
/// assert_eq!(GuardKind::Chase.name(), "Chase");
/// ```
#[macro_export]
macro_rules! state_kinds {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::StateKind for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

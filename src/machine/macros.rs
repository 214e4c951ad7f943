//! Macros for ergonomic state machine construction.

/// Generate a `StateId` implementation for simple enums.
///
/// # Example
///
/// ```
/// use gambit::state_id;
///
/// state_id! {
///     pub enum GoblinState {
///         Idle,
///         Patrol,
///         Flee,
///     }
/// }
/// ```
#[macro_export]
macro_rules! state_id {
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
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::machine::StateId for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

//! Macros for declaring state and trigger enums.

/// Generate a `State` implementation for a fieldless enum.
///
/// # Example
///
/// ```
/// use statechart_dot::state_enum;
/// use statechart_dot::core::State;
///
/// state_enum! {
///     pub enum Door {
///         Open,
///         Closed,
///     }
/// }
///
/// assert_eq!(Door::Closed.name(), "Closed");
/// ```
#[macro_export]
macro_rules! state_enum {
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
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate a `Trigger` implementation for a fieldless enum.
///
/// # Example
///
/// ```
/// use statechart_dot::trigger_enum;
/// use statechart_dot::core::Trigger;
///
/// trigger_enum! {
///     pub enum DoorTrigger {
///         Open,
///         Close,
///     }
/// }
///
/// assert_eq!(DoorTrigger::Open.name(), "Open");
/// ```
#[macro_export]
macro_rules! trigger_enum {
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
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Trigger for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

//! Macros for ergonomic state machine construction.

/// Generate a state enum and its `State` implementation.
///
/// The enum derives `Copy`, `Eq`, `Hash`, `Debug` and serde traits, and gets
/// an `ALL` constant listing every variant in declaration order. Attributes
/// written on the enum are applied after the derives, so serde helper
/// attributes may be used.
///
/// # Example
///
/// ```
/// use listbox_machine::core::State;
/// use listbox_machine::state_enum;
///
/// state_enum! {
///     #[serde(rename_all = "snake_case")]
///     pub enum PlayerState {
///         Stopped,
///         Playing,
///     }
/// }
///
/// assert_eq!(PlayerState::Playing.name(), "Playing");
/// assert_eq!(PlayerState::ALL.len(), 2);
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
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize
        )]
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            $vis const ALL: &'static [Self] = &[$(Self::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "Processing");
        assert_eq!(TestState::Complete.name(), "Complete");
    }

    #[test]
    fn state_enum_lists_variants_in_order() {
        assert_eq!(
            TestState::ALL,
            &[TestState::Initial, TestState::Processing, TestState::Complete]
        );
    }

    #[test]
    fn state_enum_applies_serde_attributes() {
        state_enum! {
            #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
            pub enum PublicState {
                WithKeys,
                Idle,
            }
        }

        let json = serde_json::to_string(&PublicState::WithKeys).unwrap();
        assert_eq!(json, "\"WITH_KEYS\"");
        assert_eq!(PublicState::Idle.name(), "Idle");
    }
}

//! Macros for naming nodes.

/// Declare an enum whose variants are graph nodes.
///
/// Variants are numbered from 0 in declaration order. The macro generates a
/// `#[repr(u8)]` enum, a [`Node`](crate::core::Node) implementation,
/// `From<Enum> for NodeIndex` and `TryFrom<NodeIndex> for Enum`.
///
/// # Example
///
/// ```
/// use goalfsm::core::{Node, NodeIndex};
/// use goalfsm::node_enum;
///
/// node_enum! {
///     pub enum Conveyor {
///         Stopped,
///         Ramping,
///         Running,
///     }
/// }
///
/// assert_eq!(NodeIndex::from(Conveyor::Running), NodeIndex::new(2));
/// assert_eq!(Conveyor::try_from(NodeIndex::new(1)), Ok(Conveyor::Ramping));
/// assert!(Conveyor::try_from(NodeIndex::new(3)).is_err());
/// assert_eq!(Conveyor::Stopped.name(), "Stopped");
/// ```
#[macro_export]
macro_rules! node_enum {
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
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        #[repr(u8)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in index order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::Node for $name {
            fn index(&self) -> $crate::core::NodeIndex {
                $crate::core::NodeIndex::new(*self as u8)
            }

            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::core::convert::From<$name> for $crate::core::NodeIndex {
            fn from(node: $name) -> Self {
                $crate::core::NodeIndex::new(node as u8)
            }
        }

        impl ::core::convert::TryFrom<$crate::core::NodeIndex> for $name {
            type Error = $crate::core::NodeIndex;

            fn try_from(index: $crate::core::NodeIndex) -> ::core::result::Result<Self, Self::Error> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|node| *node as u8 == index.get())
                    .ok_or(index)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Node, NodeIndex, Transition};
    use crate::engine::Engine;

    node_enum! {
        enum Lamp {
            Off,
            Warming,
            On,
        }
    }

    #[test]
    fn node_enum_numbers_variants_in_order() {
        assert_eq!(Lamp::Off.index(), NodeIndex::new(0));
        assert_eq!(Lamp::Warming.index(), NodeIndex::new(1));
        assert_eq!(Lamp::On.index(), NodeIndex::new(2));
        assert_eq!(Lamp::ALL.len(), 3);
    }

    #[test]
    fn node_enum_generates_names() {
        assert_eq!(Lamp::Warming.name(), "Warming");
    }

    #[test]
    fn node_enum_converts_back_from_index() {
        assert_eq!(Lamp::try_from(NodeIndex::new(2)), Ok(Lamp::On));
        assert_eq!(Lamp::try_from(NodeIndex::NONE), Err(NodeIndex::NONE));
    }

    #[test]
    fn node_enum_drives_an_engine() {
        let warm = Transition::new(Lamp::Off, Lamp::Warming);
        let light = Transition::new(Lamp::Warming, Lamp::On);
        let mut engine = Engine::new(2, Lamp::ALL.len()).unwrap();
        engine.register(&warm).unwrap();
        engine.register(&light).unwrap();
        engine.set_target(Lamp::On);

        while engine.tick().advanced() {}

        assert_eq!(Lamp::try_from(engine.current()), Ok(Lamp::On));
    }

    #[test]
    fn node_enum_supports_visibility_and_attributes() {
        node_enum! {
            /// Doc comments pass through.
            pub enum Gate {
                Shut,
                #[allow(dead_code)]
                Open,
            }
        }

        assert_eq!(NodeIndex::from(Gate::Shut), NodeIndex::new(0));
    }
}

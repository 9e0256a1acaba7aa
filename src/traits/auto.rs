/// What automatic detection finds for a concrete type. Produced by [`fosg_auto_traits!`].
///
/// [`fosg_auto_traits!`]: crate::fosg_auto_traits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AutoTraits {
    pub equality: bool,
    pub hashing: bool,
    pub default: bool,
    pub clone: bool,
}

impl AutoTraits {
    /// A holder keyed on this type (e.g. in an infostate table) needs both.
    pub fn keyable(&self) -> bool {
        self.equality && self.hashing
    }
}

/// Detects the capabilities of a concrete type.
///
/// Detection picks the capability impl whenever the type has it and falls back to `false`
/// otherwise. An author's `FosgEq` / `FosgHash` impl counts as the capability too, even
/// where the type has no `PartialEq` / `Hash` of its own. It only sees through concrete
/// types: inside a generic function the bounds in scope are all it can find.
///
/// ```
/// use fosg::FosgHash;
/// use std::hash::{Hash, Hasher};
///
/// #[derive(Clone, PartialEq)]
/// struct Move(u8);
///
/// let traits = fosg::fosg_auto_traits!(Move);
/// assert!(traits.equality);
/// assert!(!traits.hashing);
///
/// #[derive(Clone, PartialEq)]
/// struct Raise(u8);
///
/// impl FosgHash for Raise {
///     fn fosg_hash<H: Hasher>(&self, state: &mut H) {
///         self.0.hash(state)
///     }
/// }
///
/// assert!(fosg::fosg_auto_traits!(Raise).keyable());
/// ```
#[macro_export]
macro_rules! fosg_auto_traits {
    ($t:ty) => {{
        #[allow(unused_imports)]
        use $crate::traits::detect::{
            ElseClone as _, ElseDeclaredEq as _, ElseDeclaredHash as _, ElseDefault as _,
            ElseEq as _, ElseHash as _, ViaClone as _, ViaDeclaredEq as _,
            ViaDeclaredHash as _, ViaDefault as _, ViaEq as _, ViaHash as _,
        };
        let probe = $crate::traits::detect::Probe::<$t>::new();
        $crate::traits::AutoTraits {
            equality: (&&probe).equality() || (&&probe).declared_equality(),
            hashing: (&&probe).hashing() || (&&probe).declared_hashing(),
            default: (&&probe).default_constructible(),
            clone: (&&probe).cloneable(),
        }
    }};
}

// Autoref probing: the `Via*` impls sit one reference deeper than the `Else*` fallbacks,
// so method resolution reaches them first and only falls back when their bound fails.
#[doc(hidden)]
pub mod detect {
    use crate::traits::{FosgEq, FosgHash};
    use std::hash::Hash;
    use std::marker::PhantomData;

    pub struct Probe<T: ?Sized>(PhantomData<T>);

    impl<T: ?Sized> Probe<T> {
        pub const fn new() -> Self {
            Probe(PhantomData)
        }
    }

    pub trait ViaEq {
        fn equality(&self) -> bool {
            true
        }
    }
    impl<T: PartialEq + ?Sized> ViaEq for &Probe<T> {}

    pub trait ElseEq {
        fn equality(&self) -> bool {
            false
        }
    }
    impl<T: ?Sized> ElseEq for Probe<T> {}

    pub trait ViaHash {
        fn hashing(&self) -> bool {
            true
        }
    }
    impl<T: Hash + ?Sized> ViaHash for &Probe<T> {}

    pub trait ElseHash {
        fn hashing(&self) -> bool {
            false
        }
    }
    impl<T: ?Sized> ElseHash for Probe<T> {}

    pub trait ViaDeclaredEq {
        fn declared_equality(&self) -> bool {
            true
        }
    }
    impl<T: FosgEq + ?Sized> ViaDeclaredEq for &Probe<T> {}

    pub trait ElseDeclaredEq {
        fn declared_equality(&self) -> bool {
            false
        }
    }
    impl<T: ?Sized> ElseDeclaredEq for Probe<T> {}

    pub trait ViaDeclaredHash {
        fn declared_hashing(&self) -> bool {
            true
        }
    }
    impl<T: FosgHash + ?Sized> ViaDeclaredHash for &Probe<T> {}

    pub trait ElseDeclaredHash {
        fn declared_hashing(&self) -> bool {
            false
        }
    }
    impl<T: ?Sized> ElseDeclaredHash for Probe<T> {}

    pub trait ViaDefault {
        fn default_constructible(&self) -> bool {
            true
        }
    }
    impl<T: Default> ViaDefault for &Probe<T> {}

    pub trait ElseDefault {
        fn default_constructible(&self) -> bool {
            false
        }
    }
    impl<T: ?Sized> ElseDefault for Probe<T> {}

    pub trait ViaClone {
        fn cloneable(&self) -> bool {
            true
        }
    }
    impl<T: Clone> ViaClone for &Probe<T> {}

    pub trait ElseClone {
        fn cloneable(&self) -> bool {
            false
        }
    }
    impl<T: ?Sized> ElseClone for Probe<T> {}
}

#[cfg(test)]
mod test {
    use crate::fosg_auto_traits;
    use crate::traits::{FosgEq, FosgHash};
    use std::collections::HashMap;
    use std::hash::{Hash, Hasher};

    #[derive(PartialEq)]
    struct Move(u8);

    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
    struct Card(u8);

    struct Opaque;

    struct Chip(u16);

    impl FosgEq for Chip {
        fn fosg_eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl FosgHash for Chip {
        fn fosg_hash<H: Hasher>(&self, state: &mut H) {
            self.0.hash(state)
        }
    }

    struct Marker;

    impl FosgHash for Marker {
        fn fosg_hash<H: Hasher>(&self, _: &mut H) {}
    }

    #[test]
    fn eq_without_hash() {
        let traits = fosg_auto_traits!(Move);
        assert!(traits.equality);
        assert!(!traits.hashing);
        assert!(!traits.default);
        assert!(!traits.clone);
        assert!(!traits.keyable());
    }

    #[test]
    fn fully_derived() {
        let traits = fosg_auto_traits!(Card);
        assert!(traits.equality && traits.hashing && traits.default && traits.clone);
        assert!(traits.keyable());
    }

    #[test]
    fn nothing_detected() {
        let traits = fosg_auto_traits!(Opaque);
        assert_eq!(
            traits,
            crate::traits::AutoTraits {
                equality: false,
                hashing: false,
                default: false,
                clone: false,
            }
        );
    }

    #[test]
    fn declared_capabilities_count() {
        let chip = fosg_auto_traits!(Chip);
        assert!(chip.equality && chip.hashing);
        assert!(chip.keyable());
        assert!(!chip.clone);

        let marker = fosg_auto_traits!(Marker);
        assert!(marker.hashing);
        assert!(!marker.equality);
    }

    #[test]
    fn unsized_and_std_types() {
        assert!(fosg_auto_traits!(str).keyable());
        assert!(!fosg_auto_traits!(str).clone);
        let map = fosg_auto_traits!(HashMap<u8, u8>);
        assert!(map.equality);
        assert!(!map.hashing);
        assert!(!fosg_auto_traits!(f64).hashing);
    }
}

//! Collision layers and layer masks used to filter ray queries.
//!
//! A query carries a [`LayerMask`] of the layers it may hit. The player's own probes use
//! [`LayerMask::all_except`] with [`CollisionLayer::Player`] so they never hit the player body.

use num_traits::{One, PrimInt};

/// Trait implemented by flag enums whose discriminant is a bit index.
pub trait FlagBitmask {
    type Storage: PrimInt;

    fn bit_index(&self) -> u8;

    fn mask(&self) -> Self::Storage {
        // NOTE: `bit_index()` must be < number of bits in `Storage`.
        Self::Storage::one() << (self.bit_index() as usize)
    }
}

/// A plain bitmask container over a primitive integer.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitmaskFlags<T: PrimInt> {
    pub bits: T,
}

impl<T: PrimInt> BitmaskFlags<T> {
    pub fn new(bits: T) -> Self {
        Self { bits }
    }

    pub fn add<U: FlagBitmask<Storage = T>>(&mut self, tag: U) {
        self.bits = self.bits | tag.mask();
    }

    pub fn remove<U: FlagBitmask<Storage = T>>(&mut self, tag: U) {
        self.bits = self.bits & !tag.mask();
    }

    pub fn has<U: FlagBitmask<Storage = T>>(&self, tag: U) -> bool {
        (self.bits & tag.mask()) != T::zero()
    }

    pub fn has_any<U: FlagBitmask<Storage = T> + Copy>(&self, tags: &[U]) -> bool {
        let combined = tags.iter().fold(T::zero(), |acc, t| acc | t.mask());
        (self.bits & combined) != T::zero()
    }
}

/// Declare a bit-indexed enum and implement [`FlagBitmask`] for it.
///
/// Variants are numbered from zero in declaration order; `from_bit_index` inverts that mapping.
#[macro_export]
macro_rules! define_bitmask_flags {
    ($name:ident, $storage:ty, { $($variant:ident),* $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $($variant),*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub fn from_bit_index(index: u8) -> Option<Self> {
                Self::ALL.get(index as usize).copied()
            }
        }

        impl $crate::layers::FlagBitmask for $name {
            type Storage = $storage;

            fn bit_index(&self) -> u8 {
                *self as u8
            }
        }
    };
}

define_bitmask_flags!(CollisionLayer, u32, {
    Default,
    Player,
    Environment,
    Target,
    IgnoreRaycast,
});

/// Set of collision layers a query is allowed to hit.
pub type LayerMask = BitmaskFlags<u32>;

impl LayerMask {
    /// Mask that hits every layer.
    pub fn everything() -> Self {
        Self::new(u32::MAX)
    }

    /// Mask that hits every layer except `layer` (self-exclusion).
    pub fn all_except(layer: CollisionLayer) -> Self {
        let mut mask = Self::everything();
        mask.remove(layer);
        mask
    }

    pub fn only(layers: &[CollisionLayer]) -> Self {
        let mut mask = Self::default();
        for &layer in layers {
            mask.add(layer);
        }
        mask
    }
}

//! Weapon/inventory seam and the closed category enums that replace string tags.

/// Kind of weapon currently equipped, as reported by the inventory collaborator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WeaponKind {
    #[default]
    None,
    Gun,
    Melee,
}

/// Classification of a hittable object. Numeric values are part of the collider user-data
/// packing (see [`crate::body_tag`]); do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TargetCategory {
    #[default]
    Untagged = 0,
    /// Training dummy used to test melee hits.
    Dummy = 1,
    Enemy = 2,
}

impl TargetCategory {
    pub fn from_u8(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(TargetCategory::Untagged),
            1 => Some(TargetCategory::Dummy),
            2 => Some(TargetCategory::Enemy),
            _ => None,
        }
    }
}

/// Read-only view of the weapon/inventory subsystem.
///
/// Held by the controller for its whole lifetime instead of being looked up every tick.
pub trait WeaponSource {
    fn equipped(&self) -> WeaponKind;

    /// True for the whole interval a melee swing animation is playing.
    fn is_melee_swinging(&self) -> bool;
}

impl<T: WeaponSource + ?Sized> WeaponSource for &T {
    fn equipped(&self) -> WeaponKind {
        (**self).equipped()
    }

    fn is_melee_swinging(&self) -> bool {
        (**self).is_melee_swinging()
    }
}

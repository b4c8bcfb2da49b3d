/// Packed identity of a collider, stored in Rapier's `u128` collider `user_data`.
///
/// # Why this exists
/// Ray queries hand back a collider, not a game object. Packing the owning entity, its collision
/// layer and its target category into the collider itself lets a query filter and classify hits
/// without a side table.
///
/// # Bit layout
/// (least-significant bit = bit 0):
///
/// - bits 0..=63   : entity id (u64)
/// - bits 64..=71  : [`CollisionLayer`] bit index (u8)
/// - bits 72..=79  : [`TargetCategory`] tag (u8)
/// - bits 80..=127 : reserved (must be zero)
///
/// # Invariants
/// - Two different `(entity, layer, category)` triples never produce the same `BodyTag`.
/// - Reserved bits remain zero.
pub type BodyTag = u128;

use crate::{layers::CollisionLayer, types::EntityRef, weapon::TargetCategory};

const LAYER_SHIFT: u32 = u64::BITS;
const CATEGORY_SHIFT: u32 = LAYER_SHIFT + u8::BITS;
const BYTE_MASK: u128 = u8::MAX as u128;

/// Unpacked form of a [`BodyTag`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyInfo {
    pub entity: EntityRef,
    pub layer: CollisionLayer,
    pub category: TargetCategory,
}

/// Packs an entity id, layer and category into a [`BodyTag`].
pub fn pack_body_tag(entity: EntityRef, layer: CollisionLayer, category: TargetCategory) -> BodyTag {
    (entity as u128)
        | ((layer as u128) << LAYER_SHIFT)
        | ((category as u128) << CATEGORY_SHIFT)
}

/// Safely unpacks a [`BodyTag`].
///
/// Returns `None` if a tag is unknown or reserved bits are set (e.g. a collider inserted by
/// other code with its own user data).
pub fn try_unpack_body_tag(tag: BodyTag) -> Option<BodyInfo> {
    validate_body_tag(tag).ok()?;

    let layer = CollisionLayer::from_bit_index(((tag >> LAYER_SHIFT) & BYTE_MASK) as u8)?;
    let category = TargetCategory::from_u8(((tag >> CATEGORY_SHIFT) & BYTE_MASK) as u8)?;

    Some(BodyInfo {
        entity: (tag & u64::MAX as u128) as EntityRef,
        layer,
        category,
    })
}

/// Validates that a [`BodyTag`] conforms to the current packing contract.
pub fn validate_body_tag(tag: BodyTag) -> Result<(), &'static str> {
    const RESERVED_MASK: u128 = !0u128 << 80;
    if (tag & RESERVED_MASK) != 0 {
        return Err("Body tag reserved bits are non-zero");
    }
    if CollisionLayer::from_bit_index(((tag >> LAYER_SHIFT) & BYTE_MASK) as u8).is_none() {
        return Err("Body tag has unknown layer");
    }
    if TargetCategory::from_u8(((tag >> CATEGORY_SHIFT) & BYTE_MASK) as u8).is_none() {
        return Err("Body tag has unknown category");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_unpacks_every_layer_and_category() {
        let categories = [
            TargetCategory::Untagged,
            TargetCategory::Dummy,
            TargetCategory::Enemy,
        ];

        for &entity in &[0u64, 7, u32::MAX as u64, u64::MAX] {
            for &layer in CollisionLayer::ALL {
                for &category in &categories {
                    let tag = pack_body_tag(entity, layer, category);
                    assert_eq!(
                        try_unpack_body_tag(tag),
                        Some(BodyInfo {
                            entity,
                            layer,
                            category
                        })
                    );
                }
            }
        }
    }

    #[test]
    fn default_user_data_is_an_untagged_default_layer_body() {
        // Colliders built without user data carry 0.
        let info = try_unpack_body_tag(0).unwrap();
        assert_eq!(info.layer, CollisionLayer::Default);
        assert_eq!(info.category, TargetCategory::Untagged);
    }

    #[test]
    fn validate_rejects_reserved_bits() {
        let tag = pack_body_tag(1, CollisionLayer::Target, TargetCategory::Dummy) | (1u128 << 100);
        assert_eq!(
            validate_body_tag(tag),
            Err("Body tag reserved bits are non-zero")
        );
        assert_eq!(try_unpack_body_tag(tag), None);
    }

    #[test]
    fn validate_rejects_unknown_category() {
        let tag = (1u128) | (250u128 << CATEGORY_SHIFT);
        assert_eq!(validate_body_tag(tag), Err("Body tag has unknown category"));
    }
}

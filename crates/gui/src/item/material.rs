//! Material and enchantment identifiers.
//!
//! Names serialize in the server's SCREAMING_SNAKE_CASE form so they can be
//! parsed straight from plugin configuration (`"DIAMOND_SWORD".parse()`).

/// Item material shown in a menu slot.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Material {
    #[default]
    Stone,
    Dirt,
    GrassBlock,
    OakPlanks,
    Chest,
    EnderChest,
    Barrier,
    Arrow,
    Book,
    WritableBook,
    EnchantedBook,
    Paper,
    Compass,
    Clock,
    Diamond,
    Emerald,
    GoldIngot,
    IronIngot,
    RedstoneBlock,
    EmeraldBlock,
    WhiteStainedGlassPane,
    GrayStainedGlassPane,
    BlackStainedGlassPane,
    RedStainedGlassPane,
    LimeStainedGlassPane,
    PlayerHead,
    NameTag,
    Bow,
    DiamondSword,
    Anvil,
    Feather,
    Hopper,
    Lever,
    OakSign,
}

/// Enchantment kinds an item can carry.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Enchantment {
    // ========================================================================
    // Armor
    // ========================================================================
    Protection,
    FireProtection,
    FeatherFalling,
    BlastProtection,
    ProjectileProtection,
    Respiration,
    AquaAffinity,
    Thorns,

    // ========================================================================
    // Melee
    // ========================================================================
    Sharpness,
    Smite,
    BaneOfArthropods,
    Knockback,
    FireAspect,
    Looting,

    // ========================================================================
    // Tools
    // ========================================================================
    Efficiency,
    SilkTouch,
    Fortune,

    // ========================================================================
    // Bows
    // ========================================================================
    Power,
    Punch,
    Flame,
    Infinity,

    // ========================================================================
    // Fishing
    // ========================================================================
    LuckOfTheSea,
    Lure,

    // ========================================================================
    // Any item
    // ========================================================================
    Unbreaking,
    Mending,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_names_round_trip_through_strings() {
        assert_eq!(Material::DiamondSword.to_string(), "DIAMOND_SWORD");
        assert_eq!(
            "gray_stained_glass_pane".parse::<Material>(),
            Ok(Material::GrayStainedGlassPane)
        );
        assert!("NOT_A_BLOCK".parse::<Material>().is_err());
    }

    #[test]
    fn enchantment_names_use_server_spelling() {
        assert_eq!(Enchantment::BaneOfArthropods.as_ref(), "BANE_OF_ARTHROPODS");
        assert_eq!("power".parse::<Enchantment>(), Ok(Enchantment::Power));
    }
}

//! The shipped card set.
//!
//! Ids use snake_case. Bespoke text effects of the power cards (Limit Break
//! doubling strength, Demon Form's per-turn gain, Barricade keeping block)
//! are not modeled; they resolve through the flat effect fields only.

use super::attributes::CardUpgrade;
use super::definition::{CardDefinition, CardType, Cost, Rarity};

/// Card ids and copy counts of the starter deck.
pub const STARTER_DECK: [(&str, usize); 2] = [("strike", 5), ("defend", 5)];

/// All shipped definitions.
#[must_use]
pub fn definitions() -> Vec<CardDefinition> {
    use CardType::{Attack, Power, Skill};
    use Rarity::{Common, Rare};

    vec![
        // === Attacks ===
        CardDefinition::new("strike", "Strike", Attack, Common)
            .with_cost(Cost::Fixed(1))
            .with_damage(6)
            .with_description("Deal 6 damage")
            .with_upgrade(CardUpgrade::new().damage(9).description("Deal 9 damage")),
        CardDefinition::new("heavy_strike", "Heavy Strike", Attack, Common)
            .with_cost(Cost::Fixed(2))
            .with_damage(12)
            .with_description("Deal 12 damage")
            .with_upgrade(CardUpgrade::new().damage(16).description("Deal 16 damage")),
        CardDefinition::new("quick_strike", "Quick Strike", Attack, Common)
            .with_cost(Cost::Fixed(0))
            .with_damage(3)
            .with_description("Deal 3 damage")
            .with_upgrade(CardUpgrade::new().damage(4).description("Deal 4 damage")),
        CardDefinition::new("cleave", "Cleave", Attack, Common)
            .with_cost(Cost::Fixed(1))
            .with_damage(8)
            .aoe()
            .with_description("Deal 8 damage to ALL enemies")
            .with_upgrade(
                CardUpgrade::new()
                    .damage(11)
                    .description("Deal 11 damage to ALL enemies"),
            ),
        CardDefinition::new("iron_wave", "Iron Wave", Attack, Common)
            .with_cost(Cost::Fixed(1))
            .with_damage(5)
            .with_block(5)
            .with_description("Gain 5 block. Deal 5 damage")
            .with_upgrade(
                CardUpgrade::new()
                    .damage(7)
                    .block(7)
                    .description("Gain 7 block. Deal 7 damage"),
            ),
        CardDefinition::new("anger", "Anger", Attack, Common)
            .with_cost(Cost::Fixed(0))
            .with_damage(6)
            .exhaust()
            .with_description("Deal 6 damage. Exhaust")
            .with_upgrade(CardUpgrade::new().damage(8).description("Deal 8 damage. Exhaust")),
        CardDefinition::new("whirlwind", "Whirlwind", Attack, Rare)
            .with_cost(Cost::Variable)
            .with_damage(5)
            .aoe()
            .with_description("Deal 5 damage to ALL enemies X times")
            .with_upgrade(
                CardUpgrade::new()
                    .damage(7)
                    .description("Deal 7 damage to ALL enemies X times"),
            ),
        // === Skills ===
        CardDefinition::new("defend", "Defend", Skill, Common)
            .with_cost(Cost::Fixed(1))
            .with_block(5)
            .with_description("Gain 5 block")
            .with_upgrade(CardUpgrade::new().block(8).description("Gain 8 block")),
        CardDefinition::new("shrug_it_off", "Shrug It Off", Skill, Common)
            .with_cost(Cost::Fixed(1))
            .with_block(8)
            .with_draw(1)
            .with_description("Gain 8 block. Draw 1 card")
            .with_upgrade(
                CardUpgrade::new()
                    .block(11)
                    .description("Gain 11 block. Draw 1 card"),
            ),
        CardDefinition::new("flex", "Flex", Skill, Common)
            .with_cost(Cost::Fixed(1))
            .with_temporary_strength(2)
            .with_description("Gain 2 strength until end of turn")
            .with_upgrade(
                CardUpgrade::new()
                    .temporary_strength(3)
                    .description("Gain 3 strength until end of turn"),
            ),
        CardDefinition::new("impervious", "Impervious", Skill, Rare)
            .with_cost(Cost::Fixed(2))
            .with_block(30)
            .exhaust()
            .with_description("Gain 30 block. Exhaust")
            .with_upgrade(CardUpgrade::new().block(40).description("Gain 40 block. Exhaust")),
        CardDefinition::new("limit_break", "Limit Break", Skill, Rare)
            .with_cost(Cost::Fixed(1))
            .with_strength(2)
            .with_description("Double your strength")
            .with_upgrade(CardUpgrade::new().cost(Cost::Fixed(0))),
        // === Powers ===
        CardDefinition::new("demon_form", "Demon Form", Power, Rare)
            .with_cost(Cost::Fixed(3))
            .with_strength(2)
            .with_description("At the start of each turn, gain 2 strength")
            .with_upgrade(CardUpgrade::new().cost(Cost::Fixed(2))),
        CardDefinition::new("barricade", "Barricade", Power, Rare)
            .with_cost(Cost::Fixed(3))
            .with_description("Block is not removed at the start of your turn")
            .with_upgrade(CardUpgrade::new().cost(Cost::Fixed(2))),
    ]
}

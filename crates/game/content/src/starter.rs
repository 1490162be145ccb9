//! Starting state builders.

use game_core::{
    Character, CoreStats, Equipment, GameConfig, Grade, Origin, Technique, WorldState,
};

/// A fresh level-1 character with full pools and the starting spin budget.
///
/// The technique slot starts empty; the creation flow fills it with the
/// first gacha draw before play begins.
pub fn starting_character(
    name: impl Into<String>,
    origin: Origin,
    appearance: impl Into<String>,
) -> Character {
    let stats = CoreStats {
        forca: 10,
        energia: 10,
        qi: 10,
        sorte: 5,
    };
    Character {
        name: name.into(),
        origin,
        appearance: appearance.into(),
        grade: Grade::WEAKEST,
        technique: Technique::default(),
        level: 1,
        xp: 0,
        next_level_xp: GameConfig::BASE_NEXT_LEVEL_XP,
        spins: GameConfig::STARTING_SPINS,
        has_rct: false,
        profile_image: None,
        current_hp: stats.max_hp(),
        current_qi: stats.max_qi(),
        current_stamina: GameConfig::BASE_MAX_STAMINA,
        stats,
        inventory: Vec::new(),
        equipment: Equipment::empty(),
        abilities: Vec::new(),
        status_effects: Vec::new(),
    }
}

/// The opening world timeline.
pub fn starting_world() -> WorldState {
    WorldState {
        current_arc: "O Despertar".into(),
        current_location: "Tokyo - Escola Técnica".into(),
        global_tension: 20,
        ..WorldState::default()
    }
}

/// The stand-in duel adversary: the player's own shadow, one level ahead.
pub fn shadow_opponent(player: &Character) -> Character {
    let mut opponent = player.clone();
    opponent.name = "Sombras de Shibuya".into();
    opponent.origin = Origin::Maldicao;
    opponent.level = player.level + 1;
    opponent.profile_image = None;
    opponent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_character_opens_with_full_derived_pools() {
        let character = starting_character("Yuto", Origin::Humano, "Cabelo branco");
        assert_eq!(character.level, 1);
        assert_eq!(character.next_level_xp, 500);
        assert_eq!(character.spins, 5);
        assert_eq!(character.grade, Grade::WEAKEST);
        assert_eq!(character.current_hp, 200);
        assert_eq!(character.current_qi, 150);
        assert_eq!(character.current_stamina, 100);
        assert_eq!(character.current_hp, character.max_hp());
        assert_eq!(character.current_qi, character.max_qi());
        assert!(character.technique.name.is_empty());
    }

    #[test]
    fn starting_world_opens_the_first_arc() {
        let world = starting_world();
        assert_eq!(world.current_arc, "O Despertar");
        assert_eq!(world.current_location, "Tokyo - Escola Técnica");
        assert_eq!(world.player_reputation, 0);
        assert_eq!(world.global_tension, 20);
        assert!(!world.daily_boss_beaten);
    }

    #[test]
    fn shadow_opponent_mirrors_the_player_one_level_ahead() {
        let player = starting_character("Yuto", Origin::Humano, "");
        let opponent = shadow_opponent(&player);
        assert_eq!(opponent.name, "Sombras de Shibuya");
        assert_eq!(opponent.origin, Origin::Maldicao);
        assert_eq!(opponent.level, 2);
        assert_eq!(opponent.stats, player.stats);
    }
}

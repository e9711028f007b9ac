//! Demo data seeding at startup.

use tracing::info;

use dragonball_core::result::AppResult;
use dragonball_entity::character::CharacterDraft;
use dragonball_entity::user::Role;

use crate::character::CharacterService;
use crate::user::UserService;

/// Demo identities: username, password, role.
const DEMO_USERS: &[(&str, &str, Role)] = &[
    ("player", "player123", Role::Player),
    ("admin", "admin123", Role::Admin),
    ("player2", "player222", Role::Player),
    ("player3", "player333", Role::Player),
];

/// Seeds demo identities and the initial catalog.
#[derive(Debug, Clone)]
pub struct DataSeeder {
    users: UserService,
    characters: CharacterService,
}

impl DataSeeder {
    pub fn new(users: UserService, characters: CharacterService) -> Self {
        Self { users, characters }
    }

    /// Creates or resets the demo identities, then adds Goku if the catalog is empty.
    pub async fn run(&self) -> AppResult<()> {
        for (username, password, role) in DEMO_USERS {
            self.users.create_or_update(username, password, *role).await?;
        }
        info!(count = DEMO_USERS.len(), "Demo users seeded");

        if self.characters.count().await? == 0 {
            let goku = self.characters.create(goku()).await?;
            info!(character_id = goku.id, "Initial catalog seeded");
        }
        Ok(())
    }
}

fn goku() -> CharacterDraft {
    CharacterDraft {
        name: "Goku".to_string(),
        race: "Saiyan".to_string(),
        ki: Some("60,000,000".to_string()),
        max_ki: Some("90 Septillion".to_string()),
        power_level: 900_000_000_000,
        universe: 7,
        villain: false,
        transformations: ["Super Saiyan", "Super Saiyan Blue", "Ultra Instinct"]
            .iter()
            .map(|t| t.to_string())
            .collect(),
        image_url: None,
        gender: Some("Male".to_string()),
        description: Some("Earth-raised Saiyan warrior".to_string()),
        image: Some("/img/Jiren.webp".to_string()),
        affiliation: Some("Z Fighter".to_string()),
    }
}

//! Built-in canonical content.
//!
//! The shipped technique catalog and the canned duel opponent lines. The
//! catalog is also committed as `data/techniques.ron`, which the loader
//! tests keep in sync with this module.

use game_core::{TechniqueCatalog, TechniqueEntry};

/// Action lines used by the default duel opponent policy.
pub const OPPONENT_ACTIONS: [&str; 4] = [
    "Expansão de Domínio!",
    "Corte Rápido",
    "Flash Negro",
    "Recuar e Curar",
];

fn tier(entries: &[(&str, &str)]) -> Vec<TechniqueEntry> {
    entries
        .iter()
        .map(|(name, description)| TechniqueEntry {
            name: (*name).to_string(),
            description: (*description).to_string(),
        })
        .collect()
}

/// The canonical technique catalog: five entries per rarity tier.
pub fn builtin_catalog() -> TechniqueCatalog {
    TechniqueCatalog {
        comum: tier(&[
            (
                "Corte Simples",
                "Técnica de barreira para neutralizar domínios.",
            ),
            (
                "Reforço de Energia",
                "O básico: socos carregados com energia amaldiçoada.",
            ),
            (
                "Vigor Amaldiçoado",
                "Aumento passivo de resistência física.",
            ),
            (
                "Miráculo",
                "Acúmulo de pequenos milagres diários (Haruta).",
            ),
            (
                "Técnica Inversa (Jiro)",
                "Inverte a força dos ataques recebidos.",
            ),
        ]),
        raro: tier(&[
            (
                "Manipulação de Sangue",
                "Controle total do próprio sangue para combate (Kamo/Choso).",
            ),
            (
                "Fala Amaldiçoada",
                "Suas palavras se tornam ordens fatais (Inumaki).",
            ),
            (
                "Boneca de Palha",
                "Ressonância através de pregos e bonecos (Nobara).",
            ),
            (
                "Manipulação de Ferramentas",
                "Voar e controlar vassouras ou armas (Momo).",
            ),
            (
                "Técnica de Projeção",
                "Divide um segundo em 24 quadros (Naobito/Naoya).",
            ),
        ]),
        epico: tier(&[
            (
                "Ratio Technique",
                "Cria um ponto fraco na proporção 7:3 (Nanami).",
            ),
            ("Boogie Woogie", "Troca de lugar batendo palmas (Todo)."),
            (
                "Criação",
                "Materializa objetos do nada à custa de muita energia (Mai/Yorozu).",
            ),
            ("Disaster Flames", "Chamas vulcânicas devastadoras (Jogo)."),
            (
                "Disaster Plants",
                "Controle de raízes e flores amaldiçoadas (Hanami).",
            ),
        ]),
        lendario: tier(&[
            (
                "Dez Sombras",
                "Invocação de shikigamis através de sombras (Megumi).",
            ),
            (
                "Manipulação de Espíritos",
                "Absorve e controla maldições derrotadas (Geto/Kenjaku).",
            ),
            (
                "Star Rage",
                "Adiciona massa virtual a si mesma (Yuki Tsukumo).",
            ),
            (
                "Sky Manipulation",
                "Dobra o espaço como se fosse uma superfície (Uro).",
            ),
            (
                "Granite Blast",
                "Disparo massivo de energia pura (Ryu Ishigori).",
            ),
        ]),
        grau_especial: tier(&[
            (
                "Ilimitado",
                "Controle do infinito para defesa e ataque (Gojo).",
            ),
            (
                "Santuário",
                "Cortes invisíveis que fatiam tudo no alcance (Sukuna).",
            ),
            (
                "Transfiguração Inerte",
                "Altera a forma da alma através do toque (Mahito).",
            ),
            (
                "Cópia",
                "Mimetiza técnicas amaldiçoadas de outros (Yuta Okkotsu).",
            ),
            (
                "Comediante",
                "Torna real tudo o que o usuário acha engraçado (Takaba).",
            ),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Rarity;
    use strum::IntoEnumIterator;

    #[test]
    fn builtin_catalog_fills_every_tier() {
        let catalog = builtin_catalog();
        assert!(catalog.validate().is_ok());
        for rarity in Rarity::iter() {
            assert_eq!(catalog.tier(rarity).len(), 5, "tier {rarity}");
        }
    }
}

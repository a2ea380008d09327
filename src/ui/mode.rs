use crate::game::{Color, Player};

/// Who controls each side. Black always moves first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum PlayMode {
    #[default]
    HumanVsCpu,
    CpuVsHuman,
    HumanVsHuman,
}

impl PlayMode {
    /// Map a startup menu answer to a mode. Anything unrecognised picks the
    /// default.
    pub fn from_choice(choice: &str) -> PlayMode {
        match choice.trim() {
            "2" => PlayMode::CpuVsHuman,
            "3" => PlayMode::HumanVsHuman,
            _ => PlayMode::HumanVsCpu,
        }
    }

    /// Players in turn order: Black first, White second.
    pub fn players(self) -> [Player; 2] {
        let (black_human, white_human) = match self {
            PlayMode::HumanVsCpu => (true, false),
            PlayMode::CpuVsHuman => (false, true),
            PlayMode::HumanVsHuman => (true, true),
        };
        [
            Player::new(black_human, Color::Black),
            Player::new(white_human, Color::White),
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayMode::HumanVsCpu => "Black: human, White: CPU",
            PlayMode::CpuVsHuman => "Black: CPU, White: human",
            PlayMode::HumanVsHuman => "Black: human, White: human",
        }
    }
}

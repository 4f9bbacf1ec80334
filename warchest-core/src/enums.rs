//! Shared enumerations: players, control, token types, locations

use serde::{Deserialize, Serialize};

/// Player identity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A = 0,
    B = 1,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

/// Who controls a hex on the board
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    #[default]
    Neutral,
    A,
    B,
}

impl Control {
    pub const ALL: [Control; 3] = [Control::Neutral, Control::A, Control::B];

    pub fn is_neutral(self) -> bool {
        self == Control::Neutral
    }
}

impl From<Player> for Control {
    fn from(player: Player) -> Self {
        match player {
            Player::A => Control::A,
            Player::B => Control::B,
        }
    }
}

/// Token type tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    Blank,
}

/// Zone a token currently occupies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Board,
    Hand,
    Reserve,
    Dead,
    Bag,
    Discard,
}

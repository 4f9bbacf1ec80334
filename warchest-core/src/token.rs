//! Token identities and id allocation

use crate::enums::{Location, Player, TokenType};
use serde::{Deserialize, Serialize};

/// Unique token identifier
pub type TokenId = u64;

/// One game token.
///
/// `id` and `token_type` are fixed for life. A change of owner or location
/// produces a new value through [`Token::with_location`] or [`Token::restore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    id: TokenId,
    token_type: TokenType,
    owner: Player,
    location: Location,
}

impl Token {
    /// Rebuild a token with an explicit id. Does not consult any allocator.
    pub const fn restore(id: TokenId, token_type: TokenType, owner: Player, location: Location) -> Self {
        Self {
            id,
            token_type,
            owner,
            location,
        }
    }

    pub fn id(&self) -> TokenId {
        self.id
    }

    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    pub fn owner(&self) -> Player {
        self.owner
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// Copy of this token in another location
    pub fn with_location(self, location: Location) -> Self {
        Self { location, ..self }
    }

    /// Copy of this token with another owner
    pub fn with_owner(self, owner: Player) -> Self {
        Self { owner, ..self }
    }
}

/// Per-session token id allocator
///
/// Ids start at 0, increase by one per token and are never reused. Each game
/// session owns its own allocator; wrap it in a `Mutex` if tokens are created
/// from several threads.
#[derive(Clone, Debug, Default)]
pub struct TokenAllocator {
    next_id: TokenId,
}

impl TokenAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocator that continues an existing id sequence
    pub fn starting_at(next_id: TokenId) -> Self {
        Self { next_id }
    }

    /// Id the next `create` call will assign
    pub fn peek_next(&self) -> TokenId {
        self.next_id
    }

    /// Create a new token in the reserve
    pub fn create(&mut self, token_type: TokenType, owner: Player) -> Token {
        let token = Token::restore(self.next_id, token_type, owner, Location::Reserve);
        self.next_id += 1;
        token
    }
}

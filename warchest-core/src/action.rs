//! Actions: validate against a game state, then apply
//!
//! Each action kind has a fixed, ordered list of [`Rule`]s. `is_valid` passes
//! only if every rule holds. `apply` consumes the action and assumes the
//! caller has just seen `is_valid` return true on the same state.

use crate::board::Board;
use crate::enums::{Location, Player};
use crate::error::BoardError;
use crate::hex::Hex;
use crate::token::Token;
use std::collections::BTreeMap;

// ============================================================================
// GAME STATE
// ============================================================================

/// What an action needs from the orchestrator's game state
pub trait GameState {
    /// Player whose turn it is
    fn current_player(&self) -> Player;

    fn board(&self) -> &Board;

    fn board_mut(&mut self) -> &mut Board;
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Named parameters carried by a generic action
pub type ActionParams = BTreeMap<String, serde_json::Value>;

/// Move one token from `from` to the adjacent hex `to`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveAction {
    pub token: Token,
    pub from: Hex,
    pub to: Hex,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ActionKind {
    /// Turn check only; applying it changes nothing
    Base(ActionParams),
    Move(MoveAction),
}

/// A proposed action by one player
#[derive(Clone, Debug, PartialEq)]
pub struct Action {
    player: Player,
    kind: ActionKind,
}

/// A single legality check
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// It is the acting player's turn
    PlayerToMove,
    /// Source and destination are on the board
    OnBoard,
    /// The token is on top of the source stack
    TokenAtSource,
    TokenInHand,
    TokenOwnedByPlayer,
    /// Source and destination are exactly one step apart
    Adjacent,
    DestinationEmpty,
}

const BASE_RULES: &[Rule] = &[Rule::PlayerToMove];

const MOVE_RULES: &[Rule] = &[
    Rule::PlayerToMove,
    Rule::OnBoard,
    Rule::TokenAtSource,
    Rule::TokenInHand,
    Rule::TokenOwnedByPlayer,
    Rule::Adjacent,
    Rule::DestinationEmpty,
];

impl Rule {
    /// Whether this rule holds for `action` in `state`
    pub fn holds<S: GameState>(self, action: &Action, state: &S) -> bool {
        let board = state.board();
        let mv = action.as_move();

        match self {
            Rule::PlayerToMove => state.current_player() == action.player,
            Rule::OnBoard => mv.is_some_and(|mv| board.layout().contains(mv.from) && board.layout().contains(mv.to)),
            Rule::TokenAtSource => mv.is_some_and(|mv| {
                matches!(board.get_token_at(mv.from), Ok(Some(top)) if *top == mv.token)
            }),
            Rule::TokenInHand => mv.is_some_and(|mv| mv.token.location() == Location::Hand),
            Rule::TokenOwnedByPlayer => mv.is_some_and(|mv| mv.token.owner() == action.player),
            Rule::Adjacent => mv.is_some_and(|mv| mv.from.distance(mv.to) == 1),
            Rule::DestinationEmpty => mv.is_some_and(|mv| matches!(board.get_token_at(mv.to), Ok(None))),
        }
    }
}

impl Action {
    /// Generic action with no parameters
    pub fn new(player: Player) -> Self {
        Self::with_params(player, ActionParams::new())
    }

    pub fn with_params(player: Player, params: ActionParams) -> Self {
        Self {
            player,
            kind: ActionKind::Base(params),
        }
    }

    pub fn movement(player: Player, token: Token, from: Hex, to: Hex) -> Self {
        Self {
            player,
            kind: ActionKind::Move(MoveAction { token, from, to }),
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }

    /// Movement payload; movement rules fail for any other kind
    pub fn as_move(&self) -> Option<&MoveAction> {
        match &self.kind {
            ActionKind::Move(mv) => Some(mv),
            ActionKind::Base(_) => None,
        }
    }

    /// Ordered rules checked for this kind of action
    pub fn rules(&self) -> &'static [Rule] {
        match self.kind {
            ActionKind::Base(_) => BASE_RULES,
            ActionKind::Move(_) => MOVE_RULES,
        }
    }

    /// First rule that fails, if any
    pub fn first_violation<S: GameState>(&self, state: &S) -> Option<Rule> {
        self.rules().iter().copied().find(|rule| !rule.holds(self, state))
    }

    pub fn is_valid<S: GameState>(&self, state: &S) -> bool {
        match self.first_violation(state) {
            Some(rule) => {
                tracing::debug!("rejected {:?} by {:?}: {:?}", self.kind, self.player, rule);
                false
            }
            None => true,
        }
    }

    /// Commit the action.
    ///
    /// Must follow a successful `is_valid` on the same state. Errors here come
    /// from the board and mean the state changed in between.
    pub fn apply<S: GameState>(self, state: &mut S) -> Result<(), BoardError> {
        match self.kind {
            ActionKind::Base(_) => Ok(()),
            ActionKind::Move(mv) => {
                state.board_mut().move_token(mv.from, mv.to)?;
                tracing::debug!("{:?} moved token {} from {} to {}", self.player, mv.token.id(), mv.from, mv.to);
                Ok(())
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

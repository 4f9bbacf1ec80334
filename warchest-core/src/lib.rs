//! WARCHEST Core - Rules engine
//!
//! This crate provides the rules-enforcement core for WARCHEST:
//! - Board geometry (hex grid with tilted axial coordinates)
//! - Token identities and the per-session id allocator
//! - Board state (per-hex token stacks and territorial control)
//! - Action validation and apply pipeline

pub mod action;
pub mod board;
pub mod config;
pub mod enums;
pub mod error;
pub mod hex;
pub mod token;

// Re-exports for convenient access
pub use action::{Action, ActionKind, ActionParams, GameState, MoveAction, Rule};
pub use board::{Board, BoardBuilder, Cell, Layout, DEFAULT_RADIUS, NEUTRAL_LOCATIONS};
pub use config::{BoardConfig, LayoutSpec};
pub use enums::{Control, Location, Player, TokenType};
pub use error::{BoardError, HexError};
pub use hex::{Direction, Hex, DIRECTIONS};
pub use token::{Token, TokenAllocator, TokenId};

//! Board state: legal layout plus per-hex token stacks and control

use crate::enums::Control;
use crate::error::BoardError;
use crate::hex::Hex;
use crate::token::{Token, TokenId};
use rustc_hash::{FxHashMap, FxHashSet};

// ============================================================================
// LAYOUT
// ============================================================================

/// Radius of the default board (37 hexes)
pub const DEFAULT_RADIUS: i32 = 3;

/// Neutral control points of the default board
pub const NEUTRAL_LOCATIONS: [Hex; 6] = [
    Hex::new(0, -2),
    Hex::new(1, 0),
    Hex::new(2, 1),
    Hex::new(-2, -1),
    Hex::new(-1, 0),
    Hex::new(0, 2),
];

/// Fixed set of legal coordinates for one board
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    hexes: FxHashSet<Hex>,
}

impl Layout {
    /// All hexes within `radius` of the origin; empty for a negative radius
    pub fn hexagon(radius: i32) -> Self {
        if radius < 0 {
            return Self {
                hexes: FxHashSet::default(),
            };
        }
        (-radius..=radius)
            .flat_map(|q| (-radius..=radius).map(move |r| Hex::new(q, r)))
            .filter(|hex| hex.distance(Hex::ORIGIN) <= i64::from(radius))
            .collect()
    }

    pub fn contains(&self, hex: Hex) -> bool {
        self.hexes.contains(&hex)
    }

    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Hex> + '_ {
        self.hexes.iter().copied()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::hexagon(DEFAULT_RADIUS)
    }
}

impl FromIterator<Hex> for Layout {
    fn from_iter<I: IntoIterator<Item = Hex>>(iter: I) -> Self {
        Self {
            hexes: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// CELL
// ============================================================================

/// Payload of one hex: token stack (last = top) and control flag
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    stack: Vec<Token>,
    control: Control,
}

impl Cell {
    /// Top token, or None if empty
    pub fn top(&self) -> Option<&Token> {
        self.stack.last()
    }

    pub fn size(&self) -> usize {
        self.stack.len()
    }

    /// Tokens bottom to top
    pub fn tokens(&self) -> &[Token] {
        &self.stack
    }

    pub fn control(&self) -> Control {
        self.control
    }

    /// Empty neutral cells are not kept in the board map
    fn is_prunable(&self) -> bool {
        self.stack.is_empty() && self.control.is_neutral()
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// Board geometry and per-hex contents.
///
/// The map only ever holds coordinates of the layout, and never holds a cell
/// that is both empty and neutral.
///
/// `place` does not check whether the token already sits elsewhere on the
/// board. Callers own that invariant; [`Board::locate`] can check it.
#[derive(Clone, Debug, Default)]
pub struct Board {
    layout: Layout,
    cells: FxHashMap<Hex, Cell>,
}

impl Board {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Empty default board
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty board over a custom layout
    pub fn with_layout(layout: Layout) -> Self {
        Self {
            layout,
            cells: FxHashMap::default(),
        }
    }

    pub fn builder() -> BoardBuilder {
        BoardBuilder::default()
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Number of live cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate live cells
    pub fn cells(&self) -> impl Iterator<Item = (Hex, &Cell)> + '_ {
        self.cells.iter().map(|(&hex, cell)| (hex, cell))
    }

    /// Live cell at hex, if any
    pub fn cell(&self, hex: Hex) -> Result<Option<&Cell>, BoardError> {
        self.ensure_in_bounds(hex)?;
        Ok(self.cells.get(&hex))
    }

    /// Top token at hex
    pub fn get_token_at(&self, hex: Hex) -> Result<Option<&Token>, BoardError> {
        Ok(self.cell(hex)?.and_then(Cell::top))
    }

    pub fn control_of(&self, hex: Hex) -> Result<Control, BoardError> {
        Ok(self.cell(hex)?.map(Cell::control).unwrap_or_default())
    }

    /// Hex whose stack holds the token with `id`
    pub fn locate(&self, id: TokenId) -> Option<Hex> {
        self.cells
            .iter()
            .find(|(_, cell)| cell.stack.iter().any(|t| t.id() == id))
            .map(|(&hex, _)| hex)
    }

    // ========================================================================
    // MUTATION
    // ========================================================================

    /// Place a token on top of the stack at hex
    pub fn place(&mut self, hex: Hex, token: Token) -> Result<(), BoardError> {
        self.ensure_in_bounds(hex)?;
        tracing::trace!("place token {} at {}", token.id(), hex);
        self.cells.entry(hex).or_default().stack.push(token);
        Ok(())
    }

    /// Remove and return the top token at hex
    pub fn remove_top(&mut self, hex: Hex) -> Result<Token, BoardError> {
        self.ensure_in_bounds(hex)?;
        let cell = self.cells.get_mut(&hex).ok_or(BoardError::EmptyStack(hex))?;
        let top = cell.stack.pop().ok_or(BoardError::EmptyStack(hex))?;
        if cell.is_prunable() {
            self.cells.remove(&hex);
        }
        tracing::trace!("removed token {} from {}", top.id(), hex);
        Ok(top)
    }

    /// Set control of hex. Never touches the stack.
    ///
    /// Resetting an empty hex to neutral drops its cell, the same as emptying
    /// a neutral hex in `remove_top`. This keeps the map free of empty
    /// neutral cells at all times, not only after a removal.
    pub fn set_control(&mut self, hex: Hex, control: Control) -> Result<(), BoardError> {
        self.ensure_in_bounds(hex)?;
        match self.cells.get_mut(&hex) {
            Some(cell) => {
                cell.control = control;
                if cell.is_prunable() {
                    self.cells.remove(&hex);
                }
            }
            None if control.is_neutral() => {}
            None => {
                self.cells.insert(
                    hex,
                    Cell {
                        stack: Vec::new(),
                        control,
                    },
                );
            }
        }
        Ok(())
    }

    /// Move the top token of `from` onto the empty hex `to`.
    ///
    /// All preconditions are checked first; on error the board is unchanged.
    pub fn move_token(&mut self, from: Hex, to: Hex) -> Result<Token, BoardError> {
        let off_board: Vec<Hex> = [from, to]
            .into_iter()
            .filter(|&hex| !self.layout.contains(hex))
            .collect();
        if !off_board.is_empty() {
            return Err(BoardError::OutOfBounds(off_board));
        }
        if from == to {
            return Err(BoardError::SameHex(from));
        }
        if self.get_token_at(from)?.is_none() {
            return Err(BoardError::EmptyStack(from));
        }
        if self.get_token_at(to)?.is_some() {
            return Err(BoardError::DestinationOccupied(to));
        }

        let token = self.remove_top(from)?;
        self.place(to, token)?;
        Ok(token)
    }

    // ========================================================================
    // INTERNAL
    // ========================================================================

    fn ensure_in_bounds(&self, hex: Hex) -> Result<(), BoardError> {
        if self.layout.contains(hex) {
            Ok(())
        } else {
            Err(BoardError::out_of_bounds(hex))
        }
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Collects an initial layout, stacks and control, validated all at once by
/// [`BoardBuilder::build`]
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    layout: Option<Layout>,
    stacks: Vec<(Hex, Vec<Token>)>,
    pairs: Vec<(Hex, Token)>,
    control: Vec<(Hex, Control)>,
}

impl BoardBuilder {
    /// Use a custom layout instead of the default hexagon
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Initial stack at hex, bottom to top
    pub fn stack(mut self, hex: Hex, tokens: impl IntoIterator<Item = Token>) -> Self {
        self.stacks.push((hex, tokens.into_iter().collect()));
        self
    }

    /// (hex, token) pairs appended one by one; a hex may repeat
    pub fn pairs(mut self, pairs: impl IntoIterator<Item = (Hex, Token)>) -> Self {
        self.pairs.extend(pairs);
        self
    }

    pub fn control(mut self, hex: Hex, control: Control) -> Self {
        self.control.push((hex, control));
        self
    }

    /// Build the board, failing with every off-layout coordinate
    pub fn build(self) -> Result<Board, BoardError> {
        let layout = self.layout.unwrap_or_default();

        let mut off_board: Vec<Hex> = Vec::new();
        let hexes = self
            .stacks
            .iter()
            .map(|(hex, _)| *hex)
            .chain(self.pairs.iter().map(|(hex, _)| *hex))
            .chain(self.control.iter().map(|(hex, _)| *hex));
        for hex in hexes {
            if !layout.contains(hex) && !off_board.contains(&hex) {
                off_board.push(hex);
            }
        }
        if !off_board.is_empty() {
            tracing::debug!("rejected board with {} off-board coordinates", off_board.len());
            return Err(BoardError::OutOfBounds(off_board));
        }

        let mut cells: FxHashMap<Hex, Cell> = FxHashMap::default();
        for (hex, tokens) in self.stacks {
            cells.entry(hex).or_default().stack.extend(tokens);
        }
        for (hex, token) in self.pairs {
            cells.entry(hex).or_default().stack.push(token);
        }
        for (hex, control) in self.control {
            cells.entry(hex).or_default().control = control;
        }
        // Empty initial stacks with neutral control leave no cell behind
        cells.retain(|_, cell| !cell.is_prunable());

        Ok(Board { layout, cells })
    }
}

// ============================================================================
// TESTS
// ============================================================================

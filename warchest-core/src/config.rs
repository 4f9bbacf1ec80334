//! BoardConfig - board layout and starting control loaded from JSON

use crate::board::{Board, Layout, DEFAULT_RADIUS};
use crate::enums::Control;
use crate::error::BoardError;
use crate::hex::Hex;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How the legal coordinates of a board are described
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutSpec {
    /// Every hex within `radius` of the origin
    Hexagon { radius: i32 },
    /// Explicit list of hexes
    Hexes(Vec<Hex>),
}

impl LayoutSpec {
    pub fn to_layout(&self) -> Layout {
        match self {
            LayoutSpec::Hexagon { radius } => Layout::hexagon(*radius),
            LayoutSpec::Hexes(hexes) => hexes.iter().copied().collect(),
        }
    }
}

impl Default for LayoutSpec {
    fn default() -> Self {
        LayoutSpec::Hexagon {
            radius: DEFAULT_RADIUS,
        }
    }
}

/// Board setup read by orchestrators
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub layout: LayoutSpec,
    /// Starting control, applied in order
    #[serde(default)]
    pub control: Vec<(Hex, Control)>,
}

impl BoardConfig {
    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        serde_json::from_str(content).context("Invalid board config")
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read board config {}", path.display()))?;
        let config = Self::from_json(&content)?;
        tracing::debug!("Loaded board config from {}", path.display());
        Ok(config)
    }

    /// Build an empty-stacked board with this layout and control
    pub fn to_board(&self) -> Result<Board, BoardError> {
        self.control
            .iter()
            .fold(Board::builder().layout(self.layout.to_layout()), |builder, &(hex, control)| {
                builder.control(hex, control)
            })
            .build()
    }
}

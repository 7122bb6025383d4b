//! 佈局相關的資料結構定義

use crate::component::{Color, Position, UnitKind};
use crate::error::Result;
use crate::loader;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// 佈局檔（TOML）的原始格式
///
/// ```toml
/// name = "classic"
/// first = "White"
/// grid = """
/// w:Rook w:Knight ...
/// """
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutFile {
    pub name: String,
    #[serde(default)]
    pub first: Color,
    /// 8 行 × 8 格，第一行為 row 0
    pub grid: String,
}

/// 單位配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub pos: Position,
    pub color: Color,
    pub kind: UnitKind,
}

/// 解析後的佈局
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub name: String,
    pub first: Color,
    pub placements: Vec<Placement>,
}

/// 內建的開局佈局
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum StartingLayout {
    Classic,
    WizardsVsNecro,
    BeastsVsDemons,
    NecroVsBeasts,
}

impl StartingLayout {
    fn source(self) -> &'static str {
        match self {
            StartingLayout::Classic => include_str!("../layouts/classic.toml"),
            StartingLayout::WizardsVsNecro => include_str!("../layouts/wizards_vs_necro.toml"),
            StartingLayout::BeastsVsDemons => include_str!("../layouts/beasts_vs_demons.toml"),
            StartingLayout::NecroVsBeasts => include_str!("../layouts/necro_vs_beasts.toml"),
        }
    }
}

impl Layout {
    pub fn from_toml(content: &str) -> Result<Self> {
        loader::parse_layout(content)
    }

    /// 只有格子、沒有名稱的佈局，白方先手
    pub fn from_ascii(ascii: &str) -> Result<Self> {
        Ok(Self {
            name: "ascii".to_string(),
            first: Color::White,
            placements: loader::parse_grid(ascii)?,
        })
    }

    pub fn builtin(which: StartingLayout) -> Result<Self> {
        Self::from_toml(which.source())
    }

    pub fn to_toml(&self) -> Result<String> {
        loader::write_layout(self)
    }
}

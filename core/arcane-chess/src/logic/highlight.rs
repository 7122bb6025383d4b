//! 高亮解析
//!
//! 把選取單位分派給它的走法產生器，並依是否輪到該單位決定是否淡化。
//! 淡化只影響顏色，不過濾格子：玩家可以預覽對手的範圍，但不會因此取得行動權。

use crate::alias::Rgba;
use crate::component::{Color, Position, Unit};
use crate::constants::{ABILITY_COLOR, CAPTURE_COLOR, MOVE_COLOR, MUTED_COLOR, SACRIFICE_COLOR};
use crate::logic::board::Board;
use crate::logic::movement::generate;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// 高亮分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum HighlightTag {
    /// 可移動的空格
    Move,
    /// 可吃子的目標，或警示範圍（自爆、發射、投石）
    Capture,
    /// 能力目標（裝填、召喚、支配、交換…）
    Ability,
    /// 單位自身，再點一次啟動能力
    SelfMarker,
    /// 骨后復活的獻祭候選
    Sacrifice,
}

impl HighlightTag {
    pub fn color(self) -> Rgba {
        match self {
            HighlightTag::Move => MOVE_COLOR,
            HighlightTag::Capture => CAPTURE_COLOR,
            HighlightTag::Ability | HighlightTag::SelfMarker => ABILITY_COLOR,
            HighlightTag::Sacrifice => SACRIFICE_COLOR,
        }
    }
}

/// 棋盤上的一個高亮格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub pos: Position,
    pub tag: HighlightTag,
    /// 單位不屬於行動方時為 true
    pub muted: bool,
}

impl Highlight {
    pub fn new(pos: Position, tag: HighlightTag, muted: bool) -> Self {
        Self { pos, tag, muted }
    }

    pub fn color(&self) -> Rgba {
        if self.muted {
            MUTED_COLOR
        } else {
            self.tag.color()
        }
    }
}

/// 選取單位後顯示的高亮
pub fn resolve_highlights(unit: &Unit, board: &Board, side_to_move: Color) -> Vec<Highlight> {
    let muted = unit.color != side_to_move;
    generate(unit, board)
        .into_iter()
        .map(|(pos, tag)| Highlight::new(pos, tag, muted))
        .collect()
}

/// 把一組格子包成同一分類的高亮
pub fn zone<I>(positions: I, tag: HighlightTag, muted: bool) -> Vec<Highlight>
where
    I: IntoIterator<Item = Position>,
{
    positions
        .into_iter()
        .map(|pos| Highlight::new(pos, tag, muted))
        .collect()
}

/// 查詢某格的高亮分類
pub fn tag_at(highlights: &[Highlight], pos: Position) -> Option<HighlightTag> {
    highlights.iter().find(|h| h.pos == pos).map(|h| h.tag)
}

//! 點擊上下文：一次點擊在規則判斷時需要的所有查詢結果

use super::Game;
use crate::alias::UnitId;
use crate::component::Position;
use crate::logic::highlight::{tag_at, HighlightTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Click {
    pub pos: Position,
    /// 點擊格上的單位
    pub target: Option<UnitId>,
    /// 目前選取的單位
    pub selected: Option<UnitId>,
    /// 點擊格的高亮分類
    pub tag: Option<HighlightTag>,
}

impl Click {
    pub fn new(game: &Game, pos: Position) -> Self {
        let interaction = game.interaction();
        Self {
            pos,
            target: game.board().id_at(pos),
            selected: interaction.selected.and_then(|sel| game.board().id_at(sel)),
            tag: tag_at(&interaction.highlights, pos),
        }
    }

    /// 再次點擊已選取的單位
    pub fn is_reselect(&self) -> bool {
        self.selected.is_some() && self.selected == self.target
    }

    pub fn is_tagged(&self, tag: HighlightTag) -> bool {
        self.selected.is_some() && self.tag == Some(tag)
    }

    /// 點在移動或吃子高亮上
    pub fn is_destination(&self) -> bool {
        self.is_tagged(HighlightTag::Move) || self.is_tagged(HighlightTag::Capture)
    }
}

//! 互動狀態：選取、高亮、能力模式

use crate::alias::UnitId;
use crate::component::{Color, Position};
use crate::logic::capture::PendingEffect;
use crate::logic::highlight::{zone, Highlight, HighlightTag};

/// 互斥的能力模式，同一時間至多一個
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    /// 亡靈兵自爆預備
    SacrificeArmed { unit: UnitId },
    /// 亡者投射器 / 傳送門選擇裝填目標
    Loading { unit: UnitId },
    /// 亡者投射器選擇發射目標
    Launching { unit: UnitId },
    /// 食屍鬼王選擇召喚位置
    RaiseOffer { unit: UnitId },
    /// 投石者 / 眼魔瞄準
    Aiming { unit: UnitId },
    /// 潛行者吃子後必須再走一步
    FollowUpMove { unit: UnitId },
    /// 被支配的單位必須走一步
    DominationForcedMove { queen: UnitId, dominated: UnitId },
    /// 傳送門選擇彈出位置
    Ejecting { unit: UnitId },
    /// 死靈法師吃子後放置兵
    ResurrectionPending { color: Color, targets: Vec<Position> },
    /// 骨后被吃後選擇兩個獻祭
    SacrificeSelection {
        color: Color,
        candidates: Vec<Position>,
        picks: Vec<Position>,
    },
}

impl Mode {
    /// 只接受合法目的地的強制模式
    pub fn is_forced(&self) -> bool {
        matches!(
            self,
            Mode::FollowUpMove { .. } | Mode::DominationForcedMove { .. }
        )
    }

    /// 回合交換後仍保留的放置效果
    pub fn is_pending_placement(&self) -> bool {
        matches!(
            self,
            Mode::ResurrectionPending { .. } | Mode::SacrificeSelection { .. }
        )
    }

    /// 放置效果的高亮
    pub fn placement_highlights(&self) -> Vec<Highlight> {
        match self {
            Mode::ResurrectionPending { targets, .. } => {
                zone(targets.iter().copied(), HighlightTag::Ability, false)
            }
            Mode::SacrificeSelection {
                candidates, picks, ..
            } => zone(
                candidates.iter().copied().filter(|pos| !picks.contains(pos)),
                HighlightTag::Sacrifice,
                false,
            ),
            _ => Vec::new(),
        }
    }
}

impl From<PendingEffect> for Mode {
    fn from(effect: PendingEffect) -> Self {
        match effect {
            PendingEffect::Resurrection { color, targets } => {
                Mode::ResurrectionPending { color, targets }
            }
            PendingEffect::SacrificeSelection { color, candidates } => Mode::SacrificeSelection {
                color,
                candidates,
                picks: Vec::new(),
            },
        }
    }
}

/// 點擊之間保留的暫態
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub selected: Option<Position>,
    pub highlights: Vec<Highlight>,
    pub mode: Mode,
}

impl InteractionState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// 只保留放置效果（回合交換時）
    pub fn retain_pending(&mut self) {
        if self.mode.is_pending_placement() {
            self.selected = None;
            self.highlights = self.mode.placement_highlights();
        } else {
            self.clear();
        }
    }

    pub fn open_pending(&mut self, effect: PendingEffect) {
        self.mode = effect.into();
        self.selected = None;
        self.highlights = self.mode.placement_highlights();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_boundary_keeps_only_placement_modes() {
        let mut state = InteractionState {
            selected: Some(Position::new(1, 1)),
            highlights: Vec::new(),
            mode: Mode::Aiming { unit: 7 },
        };
        state.retain_pending();
        assert_eq!(state, InteractionState::default());

        state.open_pending(PendingEffect::Resurrection {
            color: Color::Black,
            targets: vec![Position::new(3, 3), Position::new(3, 5)],
        });
        state.retain_pending();
        assert!(state.mode.is_pending_placement());
        assert_eq!(state.highlights.len(), 2);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn picked_sacrifices_lose_their_highlight() {
        let mode = Mode::SacrificeSelection {
            color: Color::White,
            candidates: vec![Position::new(1, 0), Position::new(1, 1)],
            picks: vec![Position::new(1, 0)],
        };
        let highlights = mode.placement_highlights();
        assert_eq!(highlights.len(), 1);
        assert_eq!(highlights[0].pos, Position::new(1, 1));
        assert_eq!(highlights[0].tag, HighlightTag::Sacrifice);
    }
}

//! 吃子管線
//!
//! 單位離開棋盤（被吃）的唯一入口。不論是移動吃子、跳吃、遠程射擊還是連鎖爆炸，
//! 都經過 `resolve_capture`，連鎖中的每個單位也遞迴走同一條路徑。
//!
//! # 步驟（嚴格依序）：
//! 1. 受害者石化 → 吃子失敗，棋盤不變
//! 2. 受害者帶死亡爆炸 → 周圍八格（不分敵我）一併經管線移除
//! 3. 移動吃子且受害者會爆炸 → 攻擊者落在爆炸中心，同樣經管線移除
//! 4. 移除受害者
//! 5. 受害者可復活且己方仍有至少兩個兵系單位 → 開啟獻祭選擇
//! 6. 攻擊者可召喚 → 受害者原位置上下左右的空格開啟復活選擇

use crate::alias::UnitId;
use crate::component::{Color, Position, Unit};
use crate::constants::{ALL_DIRECTIONS, ORTHOGONAL, REVIVAL_SACRIFICES};
use crate::logic::board::Board;
use std::collections::HashSet;

/// 攻擊方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureStyle {
    /// 攻擊者移入受害者的格子
    MoveIn,
    /// 攻擊者不移動（射擊、投擲、跳吃的中間格、爆炸）
    Ranged,
}

/// 吃子後需要玩家接續點擊的效果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingEffect {
    /// 選出兩個兵系單位獻祭以復活骨后
    SacrificeSelection {
        color: Color,
        candidates: Vec<Position>,
    },
    /// 在其中一格放置新的兵
    Resurrection { color: Color, targets: Vec<Position> },
}

/// 吃子結果
#[derive(Debug, Clone, Default)]
pub struct CaptureOutcome {
    /// 指定的受害者是否已被移除
    pub captured: bool,
    /// 所有被移除的單位（含連鎖）
    pub removed: Vec<Unit>,
    /// 攻擊者是否也被移除
    pub attacker_removed: bool,
    /// 第一個開啟的接續效果
    pub pending: Option<PendingEffect>,
}

/// 對 `victim` 執行吃子管線
///
/// 受害者不存在時不做任何事，重複呼叫是安全的。
pub fn resolve_capture(
    board: &mut Board,
    victim: UnitId,
    attacker: Option<UnitId>,
    style: CaptureStyle,
) -> CaptureOutcome {
    let mut run = CaptureRun::default();
    let attacker_unit = attacker.and_then(|id| board.get(id).cloned());

    let Some(victim_unit) = board.get(victim).cloned() else {
        log::debug!("吃子目標 {victim} 已不在棋盤上");
        return run.finish(board, attacker_unit.as_ref());
    };

    run.capture(board, &victim_unit, attacker_unit.as_ref(), style);
    let mut outcome = run.finish(board, attacker_unit.as_ref());
    outcome.captured = !board.contains(victim);
    outcome
}

/// 自爆：周圍八格的單位與自己都經管線移除
pub fn detonate(board: &mut Board, center: UnitId) -> CaptureOutcome {
    let mut run = CaptureRun::default();
    let Some(bomber) = board.get(center).cloned() else {
        return run.finish(board, None);
    };
    log::info!("{} 在 {} 自爆", bomber.kind, bomber.pos());

    for id in neighbor_ids(board, bomber.pos()) {
        if let Some(unit) = board.get(id).cloned() {
            run.capture(board, &unit, Some(&bomber), CaptureStyle::Ranged);
        }
    }
    run.capture(board, &bomber, None, CaptureStyle::Ranged);

    let mut outcome = run.finish(board, None);
    outcome.captured = !board.contains(center);
    outcome
}

/// 骨后復活的獻祭候選：己方所有兵系單位
pub fn revival_candidates(board: &Board, color: Color) -> Vec<Position> {
    let mut candidates: Vec<Position> = board
        .units()
        .filter(|unit| unit.color == color && unit.kind.is_pawn_family())
        .map(|unit| unit.pos())
        .collect();
    candidates.sort();
    candidates
}

/// 復活目標：上下左右的空格
pub fn resurrection_targets(board: &Board, center: Position) -> Vec<Position> {
    center
        .offsets_in_bounds(&ORTHOGONAL)
        .filter(|pos| board.is_empty(*pos))
        .collect()
}

fn neighbor_ids(board: &Board, center: Position) -> Vec<UnitId> {
    center
        .offsets_in_bounds(&ALL_DIRECTIONS)
        .filter_map(|pos| board.id_at(pos))
        .collect()
}

/// 一次管線執行（含遞迴連鎖）的累積狀態
#[derive(Debug, Default)]
struct CaptureRun {
    visited: HashSet<UnitId>,
    removed: Vec<Unit>,
    pending: Option<PendingEffect>,
}

impl CaptureRun {
    fn capture(
        &mut self,
        board: &mut Board,
        victim: &Unit,
        attacker: Option<&Unit>,
        style: CaptureStyle,
    ) {
        if !board.contains(victim.id) || !self.visited.insert(victim.id) {
            return;
        }

        // 1. 石化免疫
        if victim.is_stone {
            log::info!("{} 已石化，吃子失敗", victim.kind);
            return;
        }

        // 2. 死亡爆炸
        if victim.kind.has_death_blast() {
            log::info!("{} 在 {} 引爆", victim.kind, victim.pos());
            for id in neighbor_ids(board, victim.pos()) {
                if let Some(unit) = board.get(id).cloned() {
                    self.capture(board, &unit, None, CaptureStyle::Ranged);
                }
            }
        }

        // 3. 反爆：移入爆炸中心的攻擊者
        if style == CaptureStyle::MoveIn && victim.kind.has_death_blast() {
            if let Some(unit) = attacker.and_then(|a| board.get(a.id).cloned()) {
                log::info!("{} 被 {} 的爆炸波及", unit.kind, victim.kind);
                self.capture(board, &unit, None, CaptureStyle::Ranged);
            }
        }

        // 4. 移除受害者
        if let Some(unit) = board.remove(victim.id) {
            log::info!("{} {} 在 {} 被移除", unit.color, unit.kind, unit.pos());
            self.removed.push(unit);
        }

        // 5. 獻祭復活
        if victim.kind.is_revival_eligible() {
            let candidates = revival_candidates(board, victim.color);
            if candidates.len() >= REVIVAL_SACRIFICES {
                self.offer(PendingEffect::SacrificeSelection {
                    color: victim.color,
                    candidates,
                });
            }
        }

        // 6. 吃子召喚
        if let Some(attacker) = attacker {
            if attacker.kind.raises_on_capture()
                && attacker.is_enemy_of(victim)
                && board.contains(attacker.id)
            {
                let targets = resurrection_targets(board, victim.pos());
                if !targets.is_empty() {
                    self.offer(PendingEffect::Resurrection {
                        color: attacker.color,
                        targets,
                    });
                }
            }
        }
    }

    fn offer(&mut self, effect: PendingEffect) {
        if self.pending.is_none() {
            self.pending = Some(effect);
        }
    }

    fn finish(self, board: &Board, attacker: Option<&Unit>) -> CaptureOutcome {
        CaptureOutcome {
            captured: false,
            removed: self.removed,
            attacker_removed: attacker.is_some_and(|a| !board.contains(a.id)),
            pending: self.pending.and_then(|effect| settle(board, effect)),
        }
    }
}

/// 連鎖結束後依最終棋盤更新接續效果，條件不再成立時取消
fn settle(board: &Board, effect: PendingEffect) -> Option<PendingEffect> {
    match effect {
        PendingEffect::SacrificeSelection { color, .. } => {
            let candidates = revival_candidates(board, color);
            (candidates.len() >= REVIVAL_SACRIFICES)
                .then_some(PendingEffect::SacrificeSelection { color, candidates })
        }
        PendingEffect::Resurrection { color, targets } => {
            let targets: Vec<Position> = targets
                .into_iter()
                .filter(|pos| board.is_empty(*pos))
                .collect();
            (!targets.is_empty()).then_some(PendingEffect::Resurrection { color, targets })
        }
    }
}

//! 野獸陣營能力：投石、跳吃、支配

use super::{ensure_kind, unit_snapshot, zone_of};
use crate::alias::UnitId;
use crate::component::{Position, UnitKind};
use crate::constants::RING_OF_THREE;
use crate::error::Result;
use crate::logic::board::Board;
use crate::logic::capture::{resolve_capture, CaptureOutcome, CaptureStyle};

/// 投石瞄準範圍
pub fn boulder_zone(board: &Board, thrower: UnitId) -> Result<Vec<Position>> {
    let unit = unit_snapshot(board, thrower)?;
    Ok(zone_of(&unit, &RING_OF_THREE))
}

// ============================================================================
// 跳跳兵
// ============================================================================

/// 是否為跳吃：直線前進兩格、落點為空、中間是可吃的敵人
pub fn is_hop_capture(board: &Board, hopper: UnitId, landing: Position) -> bool {
    let Some(unit) = board.get(hopper) else {
        return false;
    };
    let forward = unit.color.forward();
    if unit.kind != UnitKind::PawnHopper || landing != unit.pos().offset(2 * forward, 0) {
        return false;
    }
    let middle = unit.pos().offset(forward, 0);
    board.is_empty(landing)
        && board
            .enemy_at(middle, unit.color)
            .is_some_and(|enemy| !enemy.is_stone)
}

/// 跳吃：先經管線移除中間的敵人，跳跳兵仍在才落地
pub fn hop(board: &mut Board, hopper: UnitId, landing: Position) -> Result<CaptureOutcome> {
    let unit = unit_snapshot(board, hopper)?;
    ensure_kind(&unit, UnitKind::PawnHopper, "跳吃")?;

    let middle = unit.pos().offset(unit.color.forward(), 0);
    let victim = super::target_at(board, middle)?;
    let outcome = resolve_capture(board, victim, Some(hopper), CaptureStyle::Ranged);

    if board.contains(hopper) && board.is_empty(landing) {
        board.relocate(hopper, landing)?;
        log::info!("{} 跳過 {} 落在 {}", unit.kind, middle, landing);
    }
    Ok(outcome)
}

// ============================================================================
// 支配女王
// ============================================================================

/// 支配相鄰友軍：原狀存入女王的儲存槽，目標暫時變成后
pub fn dominate(board: &mut Board, queen: UnitId, target: UnitId) -> Result<()> {
    let queen_unit = unit_snapshot(board, queen)?;
    ensure_kind(&queen_unit, UnitKind::QueenOfDomination, "支配")?;
    let original = unit_snapshot(board, target)?;

    if let Some(dominated) = board.get_mut(target) {
        dominated.kind = UnitKind::Queen;
    }
    if let Some(queen) = board.get_mut(queen) {
        queen.stored_unit = Some(Box::new(original.clone()));
    }
    log::info!("{} 支配 {} 於 {}", queen_unit.kind, original.kind, original.pos());
    Ok(())
}

/// 解除支配：被支配的單位在目前位置恢復原狀，儲存槽清空
pub fn release_domination(board: &mut Board, queen: UnitId, dominated: UnitId) -> Result<()> {
    let snapshot = board
        .get_mut(queen)
        .and_then(|queen| queen.stored_unit.take());

    let Some(snapshot) = snapshot else {
        return Ok(());
    };
    if let Some(unit) = board.get_mut(dominated) {
        let pos = unit.pos;
        let mut restored = *snapshot;
        restored.pos = pos;
        log::info!("{} 在 {} 恢復原狀", restored.kind, pos);
        *unit = restored;
    }
    Ok(())
}

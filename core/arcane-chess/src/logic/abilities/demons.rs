//! 惡魔陣營能力：吸收、變身、轉化、眼魔射擊

use super::{ensure_kind, unit_snapshot, wizards, zone_of};
use crate::alias::UnitId;
use crate::component::{Position, UnitKind};
use crate::constants::BEHOLDER_ZONE;
use crate::error::Result;
use crate::logic::board::Board;
use crate::logic::capture::CaptureOutcome;

/// 眼魔射擊範圍
pub fn beholder_zone(board: &Board, beholder: UnitId) -> Result<Vec<Position>> {
    let unit = unit_snapshot(board, beholder)?;
    Ok(zone_of(&unit, &BEHOLDER_ZONE))
}

/// 嚎叫者吃子：移入目標格並吸收被吃單位家族的移動方式
pub fn howl(board: &mut Board, howler: UnitId, dest: Position) -> Result<CaptureOutcome> {
    let unit = unit_snapshot(board, howler)?;
    ensure_kind(&unit, UnitKind::Howler, "吸收")?;
    let victim = unit_snapshot(board, super::target_at(board, dest)?)?;

    let outcome = super::move_or_capture(board, howler, dest)?;
    if outcome.captured {
        if let Some(howler) = board.get_mut(howler) {
            if howler.absorbed.absorb(victim.kind.family()) {
                log::info!("{} 吸收 {} 的移動方式", howler.kind, victim.kind.family());
            }
        }
    }
    Ok(outcome)
}

/// 地獄兵吃掉非兵系單位：自身消失，在目標格變成被吃的種類
pub fn transform(board: &mut Board, pawn: UnitId, dest: Position) -> Result<CaptureOutcome> {
    let unit = unit_snapshot(board, pawn)?;
    ensure_kind(&unit, UnitKind::HellPawn, "變身")?;
    let victim = unit_snapshot(board, super::target_at(board, dest)?)?;

    let outcome = super::move_or_capture(board, pawn, dest)?;
    if outcome.captured && board.contains(pawn) && !victim.kind.is_pawn_family() {
        board.remove(pawn);
        if board.is_empty(dest) {
            let new_id = board.spawn(victim.kind, unit.color, dest)?;
            if victim.kind == UnitKind::Portal {
                wizards::adopt_shared_slot(board, new_id);
            }
            log::info!("{} 在 {} 變身為 {}", unit.kind, dest, victim.kind);
        }
    }
    Ok(outcome)
}

/// 地獄王轉化相鄰敵人為己方，雙方都不移動
pub fn convert(board: &mut Board, king: UnitId, target: Position) -> Result<UnitId> {
    let unit = unit_snapshot(board, king)?;
    ensure_kind(&unit, UnitKind::HellKing, "轉化")?;
    let converted = super::target_at(board, target)?;

    let mut is_portal = false;
    if let Some(enemy) = board.get_mut(converted) {
        enemy.color = unit.color;
        is_portal = enemy.kind == UnitKind::Portal;
        log::info!("{} 在 {} 轉化為 {}", enemy.kind, target, unit.color);
    }
    if is_portal {
        wizards::adopt_shared_slot(board, converted);
    }
    Ok(converted)
}

//! 能力模組
//!
//! 每個特殊種類的棋盤效果（不含點擊判斷）。點擊狀態機決定「何時」呼叫，
//! 這裡只負責「做什麼」：所有離場都經過吃子管線，收納與變身才直接移除。

pub mod beasts;
pub mod demons;
pub mod necro;
pub mod wizards;

use crate::alias::{Coord, UnitId};
use crate::component::{Position, Unit, UnitKind};
use crate::error::{BoardError, Result, RuleError};
use crate::logic::board::Board;
use crate::logic::capture::{resolve_capture, CaptureOutcome, CaptureStyle};

/// 取得單位快照，不存在時回傳錯誤
pub fn unit_snapshot(board: &Board, id: UnitId) -> Result<Unit> {
    board
        .get(id)
        .cloned()
        .ok_or_else(|| BoardError::UnitNotFound { id }.into())
}

/// 確認單位種類
pub fn ensure_kind(unit: &Unit, kind: UnitKind, action: &'static str) -> Result<()> {
    if unit.kind == kind {
        Ok(())
    } else {
        Err(RuleError::WrongKind {
            kind: unit.kind.to_string(),
            action,
        }
        .into())
    }
}

/// 目標格上的單位 ID
pub fn target_at(board: &Board, pos: Position) -> Result<UnitId> {
    board.id_at(pos).ok_or_else(|| {
        RuleError::MissingTarget {
            row: pos.row,
            col: pos.col,
        }
        .into()
    })
}

/// 固定位移表在棋盤內的格子
pub fn zone_of(unit: &Unit, offsets: &[(Coord, Coord)]) -> Vec<Position> {
    unit.pos().offsets_in_bounds(offsets).collect()
}

/// 一般移動：目標有敵人時經管線吃子，攻擊者仍在且目標已空才移入
pub fn move_or_capture(board: &mut Board, mover: UnitId, dest: Position) -> Result<CaptureOutcome> {
    let unit = unit_snapshot(board, mover)?;
    let mut outcome = CaptureOutcome::default();

    // 使魔離開原地就解除石化
    if unit.kind == UnitKind::Familiar && unit.is_stone {
        wizards::toggle_stone(board, mover)?;
    }

    if let Some(victim) = board.enemy_at(dest, unit.color).map(|u| u.id) {
        outcome = resolve_capture(board, victim, Some(mover), CaptureStyle::MoveIn);
        if !outcome.captured {
            return Ok(outcome);
        }
    }

    if board.contains(mover) && board.is_empty(dest) {
        board.relocate(mover, dest)?;
        log::debug!("{} {} → {}", unit.color, unit.kind, dest);
    }
    Ok(outcome)
}

/// 原地射擊：攻擊者不移動
pub fn ranged_capture(
    board: &mut Board,
    shooter: UnitId,
    target: Position,
) -> Result<CaptureOutcome> {
    let unit = unit_snapshot(board, shooter)?;
    let victim = board
        .enemy_at(target, unit.color)
        .map(|u| u.id)
        .ok_or(RuleError::MissingTarget {
            row: target.row,
            col: target.col,
        })?;
    log::info!("{} 從 {} 射擊 {}", unit.kind, unit.pos(), target);
    Ok(resolve_capture(board, victim, Some(shooter), CaptureStyle::Ranged))
}

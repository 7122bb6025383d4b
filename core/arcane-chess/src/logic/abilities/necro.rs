//! 亡靈陣營能力：自爆、裝填發射、召喚、暈眩、復活

use super::{ensure_kind, unit_snapshot, zone_of};
use crate::alias::UnitId;
use crate::component::{Color, Position, UnitKind};
use crate::constants::{ALL_DIRECTIONS, ORTHOGONAL, QUEEN_OF_BONES_SPAWN_COL, RING_OF_THREE};
use crate::error::Result;
use crate::logic::board::Board;
use crate::logic::capture::{resolve_capture, CaptureOutcome, CaptureStyle};

// ============================================================================
// 亡靈兵
// ============================================================================

/// 自爆預備時的警示範圍：自身 + 八方向
pub fn detonation_zone(board: &Board, bomber: UnitId) -> Result<Vec<Position>> {
    let unit = unit_snapshot(board, bomber)?;
    let mut zone = vec![unit.pos()];
    zone.extend(zone_of(&unit, &ALL_DIRECTIONS));
    Ok(zone)
}

// ============================================================================
// 亡者投射器
// ============================================================================

/// 裝填時高亮的上下左右格
pub fn load_zone(board: &Board, launcher: UnitId) -> Result<Vec<Position>> {
    let unit = unit_snapshot(board, launcher)?;
    Ok(zone_of(&unit, &ORTHOGONAL))
}

/// 發射環（曼哈頓距離恰為 3）
pub fn launch_zone(board: &Board, launcher: UnitId) -> Result<Vec<Position>> {
    let unit = unit_snapshot(board, launcher)?;
    Ok(zone_of(&unit, &RING_OF_THREE))
}

/// 可裝填：上下左右相鄰的己方兵系單位
pub fn can_load(board: &Board, launcher: UnitId, target: Position) -> bool {
    let Some(unit) = board.get(launcher) else {
        return false;
    };
    !unit.pawn_loaded
        && unit.pos().manhattan(target) == 1
        && board
            .friend_at(target, unit.color)
            .is_some_and(|friend| friend.kind.is_pawn_family())
}

/// 裝填：兵離開棋盤（不算被吃），投射器標記已裝填
pub fn load_pawn(board: &mut Board, launcher: UnitId, target: Position) -> Result<()> {
    let unit = unit_snapshot(board, launcher)?;
    ensure_kind(&unit, UnitKind::DeadLauncher, "裝填")?;
    let pawn = super::target_at(board, target)?;

    if let Some(loaded) = board.remove(pawn) {
        log::info!("{} 裝填 {}", unit.kind, loaded.kind);
    }
    if let Some(launcher) = board.get_mut(launcher) {
        launcher.pawn_loaded = true;
    }
    Ok(())
}

/// 發射：目標經管線吃子，成功時清除裝填
pub fn launch(board: &mut Board, launcher: UnitId, target: Position) -> Result<CaptureOutcome> {
    let unit = unit_snapshot(board, launcher)?;
    ensure_kind(&unit, UnitKind::DeadLauncher, "發射")?;

    let outcome = super::ranged_capture(board, launcher, target)?;
    if outcome.captured {
        if let Some(launcher) = board.get_mut(launcher) {
            launcher.pawn_loaded = false;
        }
    }
    Ok(outcome)
}

// ============================================================================
// 食屍鬼王
// ============================================================================

/// 可召喚的位置：八方向的空格
pub fn raise_zone(board: &Board, ghoul: UnitId) -> Result<Vec<Position>> {
    let unit = unit_snapshot(board, ghoul)?;
    Ok(zone_of(&unit, &ALL_DIRECTIONS)
        .into_iter()
        .filter(|pos| board.is_empty(*pos))
        .collect())
}

/// 召喚亡靈兵並用掉次數
pub fn raise(board: &mut Board, ghoul: UnitId, pos: Position) -> Result<UnitId> {
    let unit = unit_snapshot(board, ghoul)?;
    ensure_kind(&unit, UnitKind::GhoulKing, "召喚")?;

    let raised = board.spawn(UnitKind::NecroPawn, unit.color, pos)?;
    if let Some(ghoul) = board.get_mut(ghoul) {
        ghoul.raises_left = 0;
    }
    log::info!("{} 在 {} 召喚亡靈兵", unit.kind, pos);
    Ok(raised)
}

// ============================================================================
// 幽魂騎士
// ============================================================================

/// 暈眩八方向相鄰的所有敵人，回傳被暈眩的單位
pub fn stun_adjacent(board: &mut Board, knight: UnitId) -> Result<Vec<UnitId>> {
    let unit = unit_snapshot(board, knight)?;
    let victims: Vec<UnitId> = zone_of(&unit, &ALL_DIRECTIONS)
        .into_iter()
        .filter_map(|pos| board.enemy_at(pos, unit.color).map(|e| e.id))
        .collect();

    for id in &victims {
        if let Some(enemy) = board.get_mut(*id) {
            enemy.stunned = true;
            log::info!("{} 在 {} 被暈眩", enemy.kind, enemy.pos());
        }
    }
    Ok(victims)
}

// ============================================================================
// 死靈法師 / 骨后
// ============================================================================

/// 放置吃子召喚的兵
pub fn place_resurrection(board: &mut Board, color: Color, pos: Position) -> Result<UnitId> {
    let id = board.spawn(UnitKind::Pawn, color, pos)?;
    log::info!("{color} 在 {pos} 召喚兵");
    Ok(id)
}

/// 骨后的重生點
pub fn queen_of_bones_spawn(color: Color) -> Position {
    Position::new(color.home_row(), QUEEN_OF_BONES_SPAWN_COL)
}

/// 獻祭一個候選（經管線移除）
pub fn sacrifice(board: &mut Board, pos: Position) -> Result<CaptureOutcome> {
    let victim = super::target_at(board, pos)?;
    Ok(resolve_capture(board, victim, None, CaptureStyle::Ranged))
}

/// 重生骨后，重生點有單位時不放置
pub fn revive_queen_of_bones(board: &mut Board, color: Color) -> Result<Option<UnitId>> {
    let spawn = queen_of_bones_spawn(color);
    if !board.is_empty(spawn) {
        log::warn!("{color} 骨后重生點 {spawn} 被佔據，復活失敗");
        return Ok(None);
    }
    let id = board.spawn(UnitKind::QueenOfBones, color, spawn)?;
    log::info!("{color} 骨后在 {spawn} 復活");
    Ok(Some(id))
}

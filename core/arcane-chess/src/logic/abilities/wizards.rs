//! 巫師陣營能力：石化、傳送門共享槽、幻象交換

use super::{ensure_kind, unit_snapshot, zone_of};
use crate::alias::UnitId;
use crate::component::{Color, Position, Unit, UnitKind};
use crate::constants::ORTHOGONAL;
use crate::error::Result;
use crate::logic::board::Board;

/// 切換石化，回傳新的狀態
pub fn toggle_stone(board: &mut Board, familiar: UnitId) -> Result<bool> {
    let unit = unit_snapshot(board, familiar)?;
    ensure_kind(&unit, UnitKind::Familiar, "石化")?;

    let stone = !unit.is_stone;
    if let Some(familiar) = board.get_mut(familiar) {
        familiar.is_stone = stone;
    }
    log::info!(
        "{} 在 {} {}",
        unit.kind,
        unit.pos(),
        if stone { "石化" } else { "解除石化" }
    );
    Ok(stone)
}

/// 交換位置
pub fn swap_with(board: &mut Board, queen: UnitId, partner: UnitId) -> Result<()> {
    let unit = unit_snapshot(board, queen)?;
    ensure_kind(&unit, UnitKind::QueenOfIllusions, "交換")?;
    board.swap(queen, partner)?;
    log::info!("{} 與 {} 交換位置", unit.kind, unit.pos());
    Ok(())
}

// ============================================================================
// 傳送門
// ============================================================================

/// 可收納：上下左右相鄰的己方非傳送門單位
pub fn store_zone(board: &Board, portal: UnitId) -> Result<Vec<Position>> {
    let unit = unit_snapshot(board, portal)?;
    Ok(zone_of(&unit, &ORTHOGONAL)
        .into_iter()
        .filter(|pos| {
            board
                .friend_at(*pos, unit.color)
                .is_some_and(|friend| friend.kind != UnitKind::Portal)
        })
        .collect())
}

/// 可彈出：上下左右的空格
pub fn eject_zone(board: &Board, portal: UnitId) -> Result<Vec<Position>> {
    let unit = unit_snapshot(board, portal)?;
    Ok(zone_of(&unit, &ORTHOGONAL)
        .into_iter()
        .filter(|pos| board.is_empty(*pos))
        .collect())
}

/// 同色所有傳送門寫入同一個槽位
fn write_shared_slot(board: &mut Board, color: Color, slot: Option<Unit>) {
    for id in board.ids_of(color, UnitKind::Portal) {
        if let Some(portal) = board.get_mut(id) {
            portal.stored_unit = slot.clone().map(Box::new);
        }
    }
}

/// 收納相鄰友軍
pub fn store(board: &mut Board, portal: UnitId, target: Position) -> Result<()> {
    let unit = unit_snapshot(board, portal)?;
    ensure_kind(&unit, UnitKind::Portal, "收納")?;
    let stored_id = super::target_at(board, target)?;

    if let Some(stored) = board.remove(stored_id) {
        log::info!("{} 收納 {}", unit.kind, stored.kind);
        write_shared_slot(board, unit.color, Some(stored));
    }
    Ok(())
}

/// 在空格彈出儲存的單位，清空同色所有槽位
pub fn eject(board: &mut Board, portal: UnitId, pos: Position) -> Result<Option<UnitId>> {
    let unit = unit_snapshot(board, portal)?;
    ensure_kind(&unit, UnitKind::Portal, "彈出")?;

    let Some(stored) = unit.stored_unit else {
        return Ok(None);
    };
    let mut ejected = *stored;
    ejected.pos = pos;
    let id = ejected.id;
    let kind = ejected.kind;
    board.insert(ejected)?;
    write_shared_slot(board, unit.color, None);
    log::info!("{} 在 {} 彈出 {}", unit.kind, pos, kind);
    Ok(Some(id))
}

/// 讓傳送門採用所屬顏色目前的共享槽（顏色改變後呼叫）
pub fn adopt_shared_slot(board: &mut Board, portal: UnitId) {
    let Some(color) = board.get(portal).map(|unit| unit.color) else {
        return;
    };
    let slot = board
        .units()
        .find(|other| other.color == color && other.kind == UnitKind::Portal && other.id != portal)
        .and_then(|other| other.stored_unit.clone());
    if let Some(unit) = board.get_mut(portal) {
        unit.stored_unit = slot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_reaches_every_friendly_portal_only() {
        let mut board = Board::new();
        let left = board
            .spawn(UnitKind::Portal, Color::White, Position::new(0, 0))
            .unwrap();
        let right = board
            .spawn(UnitKind::Portal, Color::White, Position::new(0, 7))
            .unwrap();
        let enemy = board
            .spawn(UnitKind::Portal, Color::Black, Position::new(7, 0))
            .unwrap();
        board
            .spawn(UnitKind::Familiar, Color::White, Position::new(0, 1))
            .unwrap();

        store(&mut board, left, Position::new(0, 1)).unwrap();
        assert!(board.is_empty(Position::new(0, 1)));
        let stored = |id| board.get(id).unwrap().stored_unit.as_ref().map(|u| u.kind);
        assert_eq!(stored(left), Some(UnitKind::Familiar));
        assert_eq!(stored(right), Some(UnitKind::Familiar));
        assert_eq!(stored(enemy), None);
    }

    #[test]
    fn eject_keeps_unit_id_and_clears_slots() {
        let mut board = Board::new();
        let left = board
            .spawn(UnitKind::Portal, Color::White, Position::new(0, 0))
            .unwrap();
        let right = board
            .spawn(UnitKind::Portal, Color::White, Position::new(4, 4))
            .unwrap();
        let familiar = board
            .spawn(UnitKind::Familiar, Color::White, Position::new(1, 0))
            .unwrap();

        store(&mut board, left, Position::new(1, 0)).unwrap();
        let ejected = eject(&mut board, right, Position::new(4, 5)).unwrap();

        assert_eq!(ejected, Some(familiar));
        assert_eq!(board.id_at(Position::new(4, 5)), Some(familiar));
        assert!(board.get(left).unwrap().stored_unit.is_none());
        assert!(board.get(right).unwrap().stored_unit.is_none());
    }
}

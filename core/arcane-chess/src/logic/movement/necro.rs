//! 亡靈陣營

use super::{basic, self_marker, Emit};
use crate::component::Unit;
use crate::logic::board::Board;

/// 兵走法 + 自身標記（再點一次進入自爆預備）
pub fn necro_pawn(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    self_marker(unit, emit);
    basic::pawn(unit, emit, board);
}

pub fn ghost_knight(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    basic::knight(unit, emit, board);
}

pub fn necromancer(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    basic::bishop(unit, emit, board);
}

/// 車走法 + 自身標記（裝填 / 發射）
pub fn dead_launcher(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    self_marker(unit, emit);
    basic::rook(unit, emit, board);
}

pub fn queen_of_bones(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    basic::queen(unit, emit, board);
}

/// 王走法，還有召喚次數時加上自身標記
pub fn ghoul_king(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    if unit.raises_left > 0 {
        self_marker(unit, emit);
    }
    basic::king(unit, emit, board);
}

//! 惡魔陣營

use super::{basic, self_marker, step_quiet, Emit};
use crate::component::Unit;
use crate::constants::ORTHOGONAL;
use crate::logic::board::Board;

pub fn hell_pawn(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    basic::pawn(unit, emit, board);
}

pub fn prowler(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    basic::knight(unit, emit, board);
}

/// 象走法 + 吸收到的移動方式
pub fn howler(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    basic::bishop(unit, emit, board);
    let absorbed = unit.absorbed;
    if absorbed.knight {
        basic::knight(unit, emit, board);
    }
    if absorbed.rook {
        basic::rook(unit, emit, board);
    }
    if absorbed.queen {
        basic::queen(unit, emit, board);
    }
    if absorbed.pawn {
        basic::pawn(unit, emit, board);
    }
}

/// 上下左右一格，只能到空格；再點自身進入射擊瞄準
pub fn beholder(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    self_marker(unit, emit);
    step_quiet(unit, emit, board, &ORTHOGONAL);
}

pub fn queen_of_destruction(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    basic::queen(unit, emit, board);
}

pub fn hell_king(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    basic::king(unit, emit, board);
}

//! 基本棋子

use super::{leap, pawn_moves, slide, Emit};
use crate::component::Unit;
use crate::constants::{ALL_DIRECTIONS, DIAGONAL, KNIGHT_LEAPS, ORTHOGONAL};
use crate::logic::board::Board;

pub fn pawn(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    pawn_moves(unit, emit, board);
}

pub fn knight(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    leap(unit, emit, board, &KNIGHT_LEAPS);
}

pub fn bishop(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    slide(unit, emit, board, &DIAGONAL);
}

pub fn rook(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    slide(unit, emit, board, &ORTHOGONAL);
}

pub fn queen(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    slide(unit, emit, board, &ALL_DIRECTIONS);
}

pub fn king(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    leap(unit, emit, board, &ALL_DIRECTIONS);
}

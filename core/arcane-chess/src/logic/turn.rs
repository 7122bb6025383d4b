//! 回合控制

use crate::component::Color;
use crate::logic::board::Board;

/// 行動方與已完成的回合數
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Turn {
    side_to_move: Color,
    ply: u32,
}

impl Turn {
    pub fn new(first: Color) -> Self {
        Self {
            side_to_move: first,
            ply: 0,
        }
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn ply(&self) -> u32 {
        self.ply
    }

    pub fn is_turn_of(&self, color: Color) -> bool {
        self.side_to_move == color
    }

    /// 結束目前行動方的回合：清除其暈眩並交換行動方
    pub fn end(&mut self, board: &mut Board) {
        let finished = self.side_to_move;
        board.clear_stuns(finished);
        self.side_to_move = finished.opponent();
        self.ply += 1;
        log::info!("第 {} 回合結束，輪到 {}", self.ply, self.side_to_move);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Position, UnitKind};

    #[test]
    fn ending_a_turn_flips_once_and_clears_own_stuns() {
        let mut board = Board::new();
        let white = board
            .spawn(UnitKind::Pawn, Color::White, Position::new(1, 1))
            .unwrap();
        let black = board
            .spawn(UnitKind::Pawn, Color::Black, Position::new(6, 1))
            .unwrap();
        board.get_mut(white).unwrap().stunned = true;
        board.get_mut(black).unwrap().stunned = true;

        let mut turn = Turn::new(Color::White);
        turn.end(&mut board);

        assert_eq!(turn.side_to_move(), Color::Black);
        assert_eq!(turn.ply(), 1);
        assert!(!board.get(white).unwrap().stunned);
        assert!(board.get(black).unwrap().stunned);
    }
}

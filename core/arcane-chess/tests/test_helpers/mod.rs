//! 測試輔助：用 ASCII 棋盤建立對局並查詢結果

#![allow(dead_code)]

use arcane_chess::logic::highlight::HighlightTag;
use arcane_chess::{BoardView, Color, Game, Layout, Position, UnitKind};

/// 8×8 的 ASCII 棋盤，`.` 為空格，`w:Kind` / `b:Kind` 為單位
pub fn game_from_ascii(ascii: &str, first: Color) -> Game {
    let mut layout = Layout::from_ascii(ascii).expect("ASCII 棋盤格式錯誤");
    layout.first = first;
    Game::from_layout(&layout).expect("無法建立棋盤")
}

pub fn click(game: &mut Game, row: i32, col: i32) -> BoardView {
    game.on_square_clicked(row, col)
}

/// 依序點擊，回傳最後的快照
pub fn clicks(game: &mut Game, squares: &[(i32, i32)]) -> BoardView {
    let mut view = game.view();
    for &(row, col) in squares {
        view = game.on_square_clicked(row, col);
    }
    view
}

pub fn unit_at(game: &Game, row: i32, col: i32) -> Option<(Color, UnitKind)> {
    game.board()
        .unit_at(Position::new(row, col))
        .map(|unit| (unit.color, unit.kind))
}

/// 高亮格與分類，依位置排序
pub fn tagged(view: &BoardView) -> Vec<((i32, i32), HighlightTag)> {
    let mut tags: Vec<((i32, i32), HighlightTag)> = view
        .highlights
        .iter()
        .map(|h| ((h.pos.row, h.pos.col), h.tag))
        .collect();
    tags.sort_by_key(|(pos, _)| *pos);
    tags
}

/// 只取位置，依位置排序
pub fn squares(view: &BoardView) -> Vec<(i32, i32)> {
    tagged(view).into_iter().map(|(pos, _)| pos).collect()
}

pub fn tag_of(view: &BoardView, row: i32, col: i32) -> Option<HighlightTag> {
    view.highlights
        .iter()
        .find(|h| h.pos == Position::new(row, col))
        .map(|h| h.tag)
}

pub fn sorted(mut positions: Vec<(i32, i32)>) -> Vec<(i32, i32)> {
    positions.sort();
    positions
}

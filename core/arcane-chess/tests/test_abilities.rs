//! 各陣營能力的點擊流程測試

mod test_helpers;

use arcane_chess::interaction::state::Mode;
use arcane_chess::{Color, HighlightTag, Position, UnitKind};
use test_helpers::{click, clicks, game_from_ascii, squares, tag_of, tagged, unit_at};

// ============================================================================
// 亡靈
// ============================================================================

#[test]
fn test_dead_launcher_load_then_launch() {
    let ascii = r#"
w:DeadLauncher . . . . . . .
w:Pawn . . . . . . .
. b:Knight . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . b:King
    "#;
    let mut game = game_from_ascii(ascii, Color::White);

    let view = clicks(&mut game, &[(0, 0), (0, 0)]);
    assert_eq!(
        tagged(&view),
        vec![((0, 1), HighlightTag::Ability), ((1, 0), HighlightTag::Ability)]
    );

    let view = click(&mut game, 1, 0);
    assert_eq!(unit_at(&game, 1, 0), None);
    assert!(game.board().unit_at(Position::new(0, 0)).unwrap().pawn_loaded);
    assert_eq!(view.side_to_move, Color::Black);

    clicks(&mut game, &[(7, 7), (7, 6)]);
    assert_eq!(game.side_to_move(), Color::White);

    let view = clicks(&mut game, &[(0, 0), (0, 0)]);
    assert_eq!(squares(&view), vec![(0, 3), (1, 2), (2, 1), (3, 0)]);
    assert!(view.highlights.iter().all(|h| h.tag == HighlightTag::Capture));

    let view = click(&mut game, 2, 1);
    assert_eq!(unit_at(&game, 2, 1), None);
    assert_eq!(unit_at(&game, 0, 0), Some((Color::White, UnitKind::DeadLauncher)));
    assert!(!game.board().unit_at(Position::new(0, 0)).unwrap().pawn_loaded);
    assert_eq!(view.side_to_move, Color::Black);
}

#[test]
fn test_dead_launcher_ignores_non_pawn_load_target() {
    let ascii = r#"
w:DeadLauncher w:Knight . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . b:King
    "#;
    let mut game = game_from_ascii(ascii, Color::White);

    // 騎士不是兵系：裝填規則不處理，改為選取騎士
    let view = clicks(&mut game, &[(0, 0), (0, 0), (0, 1)]);
    assert_eq!(unit_at(&game, 0, 1), Some((Color::White, UnitKind::Knight)));
    assert_eq!(view.selected, Some(Position::new(0, 1)));
    assert_eq!(game.mode(), &Mode::Idle);
    assert_eq!(view.side_to_move, Color::White);
}

#[test]
fn test_ghoul_king_raise_keeps_turn() {
    let ascii = r#"
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . b:GhoulKing . . .
    "#;
    let mut game = game_from_ascii(ascii, Color::Black);

    let view = clicks(&mut game, &[(7, 4), (7, 4)]);
    assert!(view
        .highlights
        .iter()
        .all(|h| h.tag == HighlightTag::Ability));
    assert_eq!(squares(&view), vec![(6, 3), (6, 4), (6, 5), (7, 3), (7, 5)]);

    let view = click(&mut game, 6, 4);
    assert_eq!(unit_at(&game, 6, 4), Some((Color::Black, UnitKind::NecroPawn)));
    assert_eq!(view.side_to_move, Color::Black);
    assert_eq!(view.selected, Some(Position::new(7, 4)));
    // 召喚次數用完，不再顯示自身標記
    assert_eq!(tag_of(&view, 7, 4), None);
    assert_eq!(game.board().unit_at(Position::new(7, 4)).unwrap().raises_left, 0);
}

#[test]
fn test_ghost_knight_stuns_until_victims_turn_ends() {
    let ascii = r#"
. w:GhostKnight . . . . . .
. . . . . . . .
. . . . . . . .
. . . b:Pawn . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . b:King
    "#;
    let mut game = game_from_ascii(ascii, Color::White);

    clicks(&mut game, &[(0, 1), (2, 2)]);
    assert!(game.board().unit_at(Position::new(3, 3)).unwrap().stunned);
    assert_eq!(game.side_to_move(), Color::Black);

    // 被暈眩的單位無法選取
    let view = click(&mut game, 3, 3);
    assert_eq!(view.selected, None);
    assert!(view.highlights.is_empty());

    clicks(&mut game, &[(7, 7), (7, 6)]);
    assert_eq!(game.side_to_move(), Color::White);
    assert!(!game.board().unit_at(Position::new(3, 3)).unwrap().stunned);
}

// ============================================================================
// 野獸
// ============================================================================

#[test]
fn test_boulder_thrower_throws_without_moving() {
    let ascii = r#"
w:BoulderThrower . . . . . . .
. . . . . . . .
. . . . . . . .
b:Pawn . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . b:King
    "#;
    let mut game = game_from_ascii(ascii, Color::White);

    // 移動不能吃子
    let view = click(&mut game, 0, 0);
    assert_eq!(tag_of(&view, 2, 0), Some(HighlightTag::Move));
    assert_eq!(tag_of(&view, 3, 0), None);

    let view = click(&mut game, 0, 0);
    assert_eq!(tag_of(&view, 3, 0), Some(HighlightTag::Capture));

    let view = click(&mut game, 3, 0);
    assert_eq!(unit_at(&game, 3, 0), None);
    assert_eq!(unit_at(&game, 0, 0), Some((Color::White, UnitKind::BoulderThrower)));
    assert_eq!(view.side_to_move, Color::Black);
}

#[test]
fn test_domination_forces_one_queen_move() {
    let ascii = r#"
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . w:QueenOfDomination w:Knight . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . b:King
    "#;
    let mut game = game_from_ascii(ascii, Color::White);
    let queen = game.board().id_at(Position::new(3, 3)).unwrap();
    let knight = game.board().id_at(Position::new(3, 4)).unwrap();

    let view = click(&mut game, 3, 3);
    assert_eq!(tag_of(&view, 3, 4), Some(HighlightTag::Ability));

    let view = click(&mut game, 3, 4);
    assert_eq!(unit_at(&game, 3, 4), Some((Color::White, UnitKind::Queen)));
    assert_eq!(
        game.mode(),
        &Mode::DominationForcedMove {
            queen,
            dominated: knight
        }
    );
    assert_eq!(view.selected, Some(Position::new(3, 4)));
    assert_eq!(view.side_to_move, Color::White);

    // 強制移動中其他點擊無效
    let view = click(&mut game, 0, 0);
    assert!(!view.redraw);
    assert!(matches!(game.mode(), Mode::DominationForcedMove { .. }));

    let view = click(&mut game, 5, 4);
    assert_eq!(unit_at(&game, 5, 4), Some((Color::White, UnitKind::Knight)));
    assert_eq!(game.board().id_at(Position::new(5, 4)), Some(knight));
    assert!(game.board().get(queen).unwrap().stored_unit.is_none());
    assert_eq!(game.mode(), &Mode::Idle);
    assert_eq!(view.side_to_move, Color::Black);
}

#[test]
fn test_domination_without_destination_reverts() {
    let ascii = r#"
w:QueenOfDomination w:Pawn w:Pawn . . . . .
w:Pawn w:Pawn w:Pawn . . . . .
w:Pawn w:Pawn w:Pawn . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . b:King
    "#;
    let mut game = game_from_ascii(ascii, Color::White);

    // (1,1) 被友軍包圍，變成后也無處可去
    let view = clicks(&mut game, &[(0, 0), (1, 1)]);
    assert_eq!(unit_at(&game, 1, 1), Some((Color::White, UnitKind::Pawn)));
    assert!(game
        .board()
        .unit_at(Position::new(0, 0))
        .unwrap()
        .stored_unit
        .is_none());
    assert_eq!(game.mode(), &Mode::Idle);
    assert_eq!(view.side_to_move, Color::White);
}

// ============================================================================
// 巫師
// ============================================================================

#[test]
fn test_familiar_leaving_stone_keeps_turn() {
    let ascii = r#"
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . w:Familiar . . .
. . . . . . . .
. . . . . . . .
. . . . . . . b:King
    "#;
    let mut game = game_from_ascii(ascii, Color::White);

    clicks(&mut game, &[(4, 4), (4, 4)]);
    clicks(&mut game, &[(7, 7), (7, 6)]);
    assert!(game.board().unit_at(Position::new(4, 4)).unwrap().is_stone);

    let view = clicks(&mut game, &[(4, 4), (4, 4)]);
    assert!(!game.board().unit_at(Position::new(4, 4)).unwrap().is_stone);
    assert_eq!(view.side_to_move, Color::White);
    assert_eq!(view.selected, Some(Position::new(4, 4)));
}

#[test]
fn test_familiar_moving_drops_stone() {
    let ascii = r#"
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . w:Familiar . . .
. . . . . . . .
. . . . . b:Pawn . .
. . . . . . . b:King
    "#;
    let mut game = game_from_ascii(ascii, Color::White);

    clicks(&mut game, &[(4, 4), (4, 4)]);
    clicks(&mut game, &[(7, 7), (7, 6)]);
    assert!(game.board().unit_at(Position::new(4, 4)).unwrap().is_stone);

    // 石化中直接以騎士步吃子
    let view = clicks(&mut game, &[(4, 4), (6, 5)]);
    let familiar = game.board().unit_at(Position::new(6, 5)).unwrap();
    assert_eq!((familiar.color, familiar.kind), (Color::White, UnitKind::Familiar));
    assert!(!familiar.is_stone);
    assert_eq!(unit_at(&game, 4, 4), None);
    assert_eq!(view.side_to_move, Color::Black);
}

#[test]
fn test_portals_share_one_slot() {
    let ascii = r#"
w:Portal . . . . . . w:Portal
w:Knight . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . b:King
    "#;
    let mut game = game_from_ascii(ascii, Color::White);
    let knight = game.board().id_at(Position::new(1, 0)).unwrap();

    let view = clicks(&mut game, &[(0, 0), (0, 0)]);
    assert_eq!(tagged(&view), vec![((1, 0), HighlightTag::Ability)]);

    let view = click(&mut game, 1, 0);
    assert_eq!(unit_at(&game, 1, 0), None);
    assert_eq!(view.side_to_move, Color::Black);
    for pos in [Position::new(0, 0), Position::new(0, 7)] {
        let stored = game.board().unit_at(pos).unwrap().stored_unit.as_ref();
        assert_eq!(stored.map(|unit| unit.id), Some(knight), "{pos} 應共用儲存槽");
    }

    clicks(&mut game, &[(7, 7), (7, 6)]);

    // 從另一個傳送門彈出
    let view = clicks(&mut game, &[(0, 7), (0, 7)]);
    assert_eq!(squares(&view), vec![(0, 6), (1, 7)]);

    let view = click(&mut game, 1, 7);
    assert_eq!(game.board().id_at(Position::new(1, 7)), Some(knight));
    assert_eq!(view.side_to_move, Color::White);
    for pos in [Position::new(0, 0), Position::new(0, 7)] {
        assert!(game.board().unit_at(pos).unwrap().stored_unit.is_none());
    }
}

#[test]
fn test_queen_of_illusions_swaps_with_pawn_family() {
    let ascii = r#"
. . . w:QueenOfIllusions . . . .
. . . . . . w:YoungWiz .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . b:King
    "#;
    let mut game = game_from_ascii(ascii, Color::White);

    let view = click(&mut game, 0, 3);
    assert_eq!(tag_of(&view, 1, 6), Some(HighlightTag::Ability));

    let view = click(&mut game, 1, 6);
    assert_eq!(unit_at(&game, 1, 6), Some((Color::White, UnitKind::QueenOfIllusions)));
    assert_eq!(unit_at(&game, 0, 3), Some((Color::White, UnitKind::YoungWiz)));
    assert_eq!(view.side_to_move, Color::Black);
}

#[test]
fn test_young_wiz_zaps_straight_ahead() {
    let ascii = r#"
. . . . . . . .
. . w:YoungWiz . . . . .
. . b:Rook . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . b:King
    "#;
    let mut game = game_from_ascii(ascii, Color::White);

    let view = click(&mut game, 1, 2);
    assert_eq!(tagged(&view), vec![((2, 2), HighlightTag::Capture)]);

    click(&mut game, 2, 2);
    assert_eq!(unit_at(&game, 2, 2), None);
    assert_eq!(unit_at(&game, 1, 2), Some((Color::White, UnitKind::YoungWiz)));
    assert_eq!(game.side_to_move(), Color::Black);
}

// ============================================================================
// 惡魔
// ============================================================================

#[test]
fn test_prowler_follow_up_move() {
    let ascii = r#"
. . . . . . . .
. . . . . . . .
. . . w:Pawn . . . .
. . . . . . . .
. . . . b:Prowler . . .
. . . . . . . .
. . . . . . . .
w:King . . . . . . .
    "#;
    let mut game = game_from_ascii(ascii, Color::Black);

    let view = clicks(&mut game, &[(4, 4), (2, 3)]);
    assert_eq!(unit_at(&game, 2, 3), Some((Color::Black, UnitKind::Prowler)));
    assert!(matches!(game.mode(), Mode::FollowUpMove { .. }));
    assert_eq!(view.selected, Some(Position::new(2, 3)));
    assert_eq!(view.side_to_move, Color::Black);

    // 必須先走第二步
    let view = click(&mut game, 7, 7);
    assert!(!view.redraw);
    let view = click(&mut game, 2, 3);
    assert!(!view.redraw);

    // 可以回到原位
    let view = click(&mut game, 4, 4);
    assert_eq!(unit_at(&game, 4, 4), Some((Color::Black, UnitKind::Prowler)));
    assert_eq!(game.mode(), &Mode::Idle);
    assert_eq!(view.side_to_move, Color::White);
}

#[test]
fn test_prowler_caught_in_blast_ends_turn() {
    let ascii = r#"
. . . . . . . .
. . . . . . . .
. . . w:QueenOfDestruction . . . .
. . . . . . . .
. . . . b:Prowler . . .
. . . . . . . .
. . . . . . . .
w:King . . . . . . .
    "#;
    let mut game = game_from_ascii(ascii, Color::Black);

    let view = clicks(&mut game, &[(4, 4), (2, 3)]);
    assert_eq!(unit_at(&game, 2, 3), None);
    assert_eq!(unit_at(&game, 4, 4), None);
    assert_eq!(game.mode(), &Mode::Idle);
    assert_eq!(view.side_to_move, Color::White);
}

#[test]
fn test_hell_pawn_transforms_on_non_pawn_capture() {
    // (棋盤, 吃子目標, 吃子後目標格上的單位)
    let test_data = [
        (
            r#"
w:King . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . w:Knight . . .
. . . b:HellPawn . . . .
. . . . . . . .
    "#,
            (5, 4),
            UnitKind::Knight,
        ),
        (
            r#"
w:King . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . w:Pawn . . . . .
. . . b:HellPawn . . . .
. . . . . . . .
    "#,
            (5, 2),
            UnitKind::HellPawn,
        ),
    ];

    for (idx, (ascii, (row, col), expected)) in test_data.into_iter().enumerate() {
        let mut game = game_from_ascii(ascii, Color::Black);
        clicks(&mut game, &[(6, 3), (row, col)]);

        assert_eq!(unit_at(&game, row, col), Some((Color::Black, expected)), "Case {}", idx);
        assert_eq!(unit_at(&game, 6, 3), None, "Case {}", idx);
        assert_eq!(game.side_to_move(), Color::White, "Case {}", idx);
    }
}

#[test]
fn test_howler_absorbs_family_movement() {
    let ascii = r#"
. . . . . . . .
. . . . . . . .
. . w:Rook . . . . .
. . . . . . . .
. . . . b:Howler . . .
. . . . . . . .
. . . . . . . .
w:King . . . . . . .
    "#;
    let mut game = game_from_ascii(ascii, Color::Black);

    let view = click(&mut game, 4, 4);
    assert_eq!(tag_of(&view, 4, 5), None);

    clicks(&mut game, &[(2, 2)]);
    let howler = game.board().unit_at(Position::new(2, 2)).unwrap();
    assert_eq!(howler.kind, UnitKind::Howler);
    assert!(howler.absorbed.rook);
    assert_eq!(game.side_to_move(), Color::White);

    // 預覽時已經有車的直線移動
    let view = click(&mut game, 2, 2);
    assert_eq!(tag_of(&view, 2, 3), Some(HighlightTag::Move));
}

#[test]
fn test_hell_king_converts_adjacent_enemy() {
    let ascii = r#"
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . w:Rook . . .
. . . . b:HellKing . . .
. . . . . . . .
. . . . . . . .
w:King . . . . . . .
    "#;
    let mut game = game_from_ascii(ascii, Color::Black);
    let rook = game.board().id_at(Position::new(3, 4)).unwrap();

    let view = clicks(&mut game, &[(4, 4), (3, 4)]);
    assert_eq!(unit_at(&game, 3, 4), Some((Color::Black, UnitKind::Rook)));
    assert_eq!(game.board().id_at(Position::new(3, 4)), Some(rook));
    assert_eq!(unit_at(&game, 4, 4), Some((Color::Black, UnitKind::HellKing)));
    assert_eq!(view.side_to_move, Color::White);
}

#[test]
fn test_beholder_shoots_inside_zone() {
    let ascii = r#"
. . . . . . . .
. . . . . . . .
. . . w:Knight . . . .
. . . . . . . .
. . . . b:Beholder . . .
. . . . . . . .
. . . . . . . .
w:King . . . . . . .
    "#;
    let mut game = game_from_ascii(ascii, Color::Black);

    let view = click(&mut game, 4, 4);
    assert_eq!(squares(&view), vec![(3, 4), (4, 3), (4, 4), (4, 5), (5, 4)]);

    let view = click(&mut game, 4, 4);
    assert_eq!(view.highlights.len(), 20);
    assert_eq!(tag_of(&view, 2, 3), Some(HighlightTag::Capture));

    let view = click(&mut game, 2, 3);
    assert_eq!(unit_at(&game, 2, 3), None);
    assert_eq!(unit_at(&game, 4, 4), Some((Color::Black, UnitKind::Beholder)));
    assert_eq!(view.side_to_move, Color::White);
}

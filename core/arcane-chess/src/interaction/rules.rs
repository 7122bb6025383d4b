//! 規則表
//!
//! 依固定順序比對，第一條 `applies` 成立的規則處理點擊，其餘略過。
//! 多種能力共用「點自己、再點自己、點目標」的點擊形狀，順序決定誰優先，不可任意調整。
//!
//! 除非另外註明，規則 1–16 都要求「有選取且點在高亮格上」。
//! 會改動棋盤的處理都先檢查行動方；進入瞄準類模式不檢查（可預覽對手的範圍）。

use super::click::Click;
use super::state::{InteractionState, Mode};
use super::{Game, Outcome};
use crate::component::UnitKind;
use crate::constants::REVIVAL_SACRIFICES;
use crate::error::{Result, RuleError};
use crate::logic::abilities::{self, beasts, demons, necro, wizards};
use crate::logic::capture::{self, CaptureOutcome};
use crate::logic::highlight::HighlightTag;
use crate::logic::movement::{self, has_destination};

pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&Game, &Click) -> bool,
    pub handle: fn(&mut Game, &Click) -> Result<Outcome>,
}

pub const RULES: &[Rule] = &[
    Rule {
        name: "detonation",
        applies: detonation_applies,
        handle: detonation,
    },
    Rule {
        name: "load-launch",
        applies: launcher_applies,
        handle: launcher,
    },
    Rule {
        name: "raise",
        applies: raise_applies,
        handle: raise,
    },
    Rule {
        name: "ranged-throw",
        applies: aiming_applies,
        handle: aiming,
    },
    Rule {
        name: "follow-up-move",
        applies: follow_up_applies,
        handle: follow_up,
    },
    Rule {
        name: "shoot-without-moving",
        applies: shoot_applies,
        handle: shoot,
    },
    Rule {
        name: "domination",
        applies: domination_applies,
        handle: domination,
    },
    Rule {
        name: "swap",
        applies: swap_applies,
        handle: swap,
    },
    Rule {
        name: "petrify",
        applies: petrify_applies,
        handle: petrify,
    },
    Rule {
        name: "portal",
        applies: portal_applies,
        handle: portal,
    },
    Rule {
        name: "absorb",
        applies: absorb_applies,
        handle: absorb,
    },
    Rule {
        name: "transform",
        applies: transform_applies,
        handle: transform,
    },
    Rule {
        name: "hop-capture",
        applies: hop_applies,
        handle: hop,
    },
    Rule {
        name: "convert",
        applies: convert_applies,
        handle: convert,
    },
    Rule {
        name: "deselect",
        applies: deselect_applies,
        handle: deselect,
    },
    Rule {
        name: "move",
        applies: move_applies,
        handle: ordinary_move,
    },
    Rule {
        name: "forced-move-gate",
        applies: forced_gate_applies,
        handle: forced_gate,
    },
    Rule {
        name: "placement",
        applies: placement_applies,
        handle: placement,
    },
    Rule {
        name: "select",
        applies: select_applies,
        handle: select,
    },
    Rule {
        name: "fallback",
        applies: always,
        handle: fallback,
    },
];

/// 找出第一條符合的規則並執行
pub fn dispatch(game: &mut Game, click: &Click) -> Result<Outcome> {
    for rule in RULES {
        if (rule.applies)(game, click) {
            log::debug!("點擊 {} 由規則 `{}` 處理", click.pos, rule.name);
            return (rule.handle)(game, click);
        }
    }
    Ok(Outcome::REJECTED)
}

// ============================================================================
// 共用判斷
// ============================================================================

fn is_idle(game: &Game) -> bool {
    game.interaction.mode == Mode::Idle
}

/// 在空閒狀態再點一次自身標記
fn activates_self(game: &Game, click: &Click, kinds: &[UnitKind]) -> bool {
    is_idle(game)
        && click.is_reselect()
        && click.tag == Some(HighlightTag::SelfMarker)
        && game.selected_kind_is(click, kinds)
}

/// 點擊格上是選取單位的敵人
fn enemy_clicked(game: &Game, click: &Click) -> bool {
    click
        .selected
        .and_then(|id| game.board.get(id))
        .is_some_and(|unit| game.board.enemy_at(click.pos, unit.color).is_some())
}

/// 點擊格上是選取單位的友軍，且符合條件
fn friend_clicked(game: &Game, click: &Click, accept: impl Fn(UnitKind) -> bool) -> bool {
    click
        .selected
        .and_then(|id| game.board.get(id))
        .and_then(|unit| game.board.friend_at(click.pos, unit.color))
        .is_some_and(|friend| click.selected != Some(friend.id) && accept(friend.kind))
}

/// 吃子類動作的收尾：吃到才結束回合
fn finish_capture(game: &mut Game, outcome: CaptureOutcome) -> Outcome {
    game.clear_interaction();
    let captured = outcome.captured;
    game.open_pending(outcome.pending);
    if captured {
        Outcome::END_TURN
    } else {
        Outcome::CONTINUE
    }
}

// ============================================================================
// 1. 自爆
// ============================================================================

fn detonation_applies(game: &Game, click: &Click) -> bool {
    match game.interaction.mode {
        Mode::SacrificeArmed { unit } => click.target == Some(unit),
        Mode::Idle => activates_self(game, click, &[UnitKind::NecroPawn]),
        _ => false,
    }
}

fn detonation(game: &mut Game, click: &Click) -> Result<Outcome> {
    let unit = game.selected_unit(click)?;

    if let Mode::SacrificeArmed { .. } = game.interaction.mode {
        if !game.may_act(&unit) {
            return Ok(Outcome::REJECTED);
        }
        let outcome = capture::detonate(&mut game.board, unit.id);
        game.clear_interaction();
        game.open_pending(outcome.pending);
        return Ok(Outcome::END_TURN);
    }

    let zone = necro::detonation_zone(&game.board, unit.id)?;
    game.enter_mode(
        &unit,
        zone,
        HighlightTag::Capture,
        Mode::SacrificeArmed { unit: unit.id },
    );
    Ok(Outcome::CONTINUE)
}

// ============================================================================
// 2. 裝填 / 發射
// ============================================================================

fn launcher_applies(game: &Game, click: &Click) -> bool {
    if !game.selected_kind_is(click, &[UnitKind::DeadLauncher]) {
        return false;
    }
    match game.interaction.mode {
        Mode::Idle => activates_self(game, click, &[UnitKind::DeadLauncher]),
        Mode::Loading { unit } => {
            click.selected == Some(unit)
                && click.is_tagged(HighlightTag::Ability)
                && necro::can_load(&game.board, unit, click.pos)
        }
        Mode::Launching { unit } => {
            click.selected == Some(unit)
                && click.is_tagged(HighlightTag::Capture)
                && enemy_clicked(game, click)
        }
        _ => false,
    }
}

fn launcher(game: &mut Game, click: &Click) -> Result<Outcome> {
    let unit = game.selected_unit(click)?;

    match game.interaction.mode {
        Mode::Loading { .. } => {
            if !game.may_act(&unit) {
                return Ok(Outcome::REJECTED);
            }
            necro::load_pawn(&mut game.board, unit.id, click.pos)?;
            game.clear_interaction();
            Ok(Outcome::END_TURN)
        }
        Mode::Launching { .. } => {
            if !game.may_act(&unit) {
                return Ok(Outcome::REJECTED);
            }
            let outcome = necro::launch(&mut game.board, unit.id, click.pos)?;
            Ok(finish_capture(game, outcome))
        }
        _ if unit.pawn_loaded => {
            let zone = necro::launch_zone(&game.board, unit.id)?;
            game.enter_mode(
                &unit,
                zone,
                HighlightTag::Capture,
                Mode::Launching { unit: unit.id },
            );
            Ok(Outcome::CONTINUE)
        }
        _ => {
            let zone = necro::load_zone(&game.board, unit.id)?;
            game.enter_mode(
                &unit,
                zone,
                HighlightTag::Ability,
                Mode::Loading { unit: unit.id },
            );
            Ok(Outcome::CONTINUE)
        }
    }
}

// ============================================================================
// 3. 召喚
// ============================================================================

fn raise_applies(game: &Game, click: &Click) -> bool {
    match game.interaction.mode {
        Mode::Idle => activates_self(game, click, &[UnitKind::GhoulKing]),
        Mode::RaiseOffer { unit } => {
            click.selected == Some(unit)
                && click.is_tagged(HighlightTag::Ability)
                && game.board.is_empty(click.pos)
        }
        _ => false,
    }
}

fn raise(game: &mut Game, click: &Click) -> Result<Outcome> {
    let unit = game.selected_unit(click)?;

    if let Mode::RaiseOffer { .. } = game.interaction.mode {
        if !game.may_act(&unit) {
            return Ok(Outcome::REJECTED);
        }
        necro::raise(&mut game.board, unit.id, click.pos)?;
        // 召喚不消耗移動
        game.select(unit.id)?;
        return Ok(Outcome::CONTINUE);
    }

    let zone = necro::raise_zone(&game.board, unit.id)?;
    game.enter_mode(
        &unit,
        zone,
        HighlightTag::Ability,
        Mode::RaiseOffer { unit: unit.id },
    );
    Ok(Outcome::CONTINUE)
}

// ============================================================================
// 4. 投石 / 眼魔射擊
// ============================================================================

const AIMERS: [UnitKind; 2] = [UnitKind::BoulderThrower, UnitKind::Beholder];

fn aiming_applies(game: &Game, click: &Click) -> bool {
    match game.interaction.mode {
        Mode::Idle => activates_self(game, click, &AIMERS),
        Mode::Aiming { unit } => {
            click.selected == Some(unit)
                && click.is_tagged(HighlightTag::Capture)
                && enemy_clicked(game, click)
        }
        _ => false,
    }
}

fn aiming(game: &mut Game, click: &Click) -> Result<Outcome> {
    let unit = game.selected_unit(click)?;

    if let Mode::Aiming { .. } = game.interaction.mode {
        if !game.may_act(&unit) {
            return Ok(Outcome::REJECTED);
        }
        let outcome = abilities::ranged_capture(&mut game.board, unit.id, click.pos)?;
        return Ok(finish_capture(game, outcome));
    }

    let zone = match unit.kind {
        UnitKind::Beholder => demons::beholder_zone(&game.board, unit.id)?,
        _ => beasts::boulder_zone(&game.board, unit.id)?,
    };
    game.enter_mode(
        &unit,
        zone,
        HighlightTag::Capture,
        Mode::Aiming { unit: unit.id },
    );
    Ok(Outcome::CONTINUE)
}

// ============================================================================
// 5. 潛行者的第二步
// ============================================================================

fn follow_up_applies(game: &Game, click: &Click) -> bool {
    match game.interaction.mode {
        Mode::FollowUpMove { unit } => click.selected == Some(unit) && click.is_destination(),
        _ => false,
    }
}

fn follow_up(game: &mut Game, click: &Click) -> Result<Outcome> {
    let unit = game.selected_unit(click)?;
    if !game.may_act(&unit) {
        return Ok(Outcome::REJECTED);
    }
    let outcome = abilities::move_or_capture(&mut game.board, unit.id, click.pos)?;
    game.clear_interaction();
    game.open_pending(outcome.pending);
    Ok(Outcome::END_TURN)
}

// ============================================================================
// 6. 原地射擊
// ============================================================================

fn shoot_applies(game: &Game, click: &Click) -> bool {
    if !is_idle(game) || !click.is_tagged(HighlightTag::Capture) {
        return false;
    }
    let Some(unit) = click.selected.and_then(|id| game.board.get(id)) else {
        return false;
    };
    match unit.kind {
        UnitKind::YoungWiz => movement::wizards::zap_target(unit, &game.board) == Some(click.pos),
        UnitKind::WizardTower => true,
        UnitKind::WizardKing => {
            unit.pos().chebyshev(click.pos) > 1
                && movement::wizards::line_targets(unit, &game.board).contains(&click.pos)
        }
        _ => false,
    }
}

fn shoot(game: &mut Game, click: &Click) -> Result<Outcome> {
    let unit = game.selected_unit(click)?;
    if !game.may_act(&unit) {
        return Ok(Outcome::REJECTED);
    }
    let outcome = abilities::ranged_capture(&mut game.board, unit.id, click.pos)?;
    Ok(finish_capture(game, outcome))
}

// ============================================================================
// 7. 支配
// ============================================================================

fn domination_applies(game: &Game, click: &Click) -> bool {
    is_idle(game)
        && click.is_tagged(HighlightTag::Ability)
        && click
            .selected
            .and_then(|id| game.board.get(id))
            .is_some_and(|queen| {
                queen.kind == UnitKind::QueenOfDomination && queen.stored_unit.is_none()
            })
        && friend_clicked(game, click, |_| true)
}

fn domination(game: &mut Game, click: &Click) -> Result<Outcome> {
    let queen = game.selected_unit(click)?;
    if !game.may_act(&queen) {
        return Ok(Outcome::REJECTED);
    }
    let target = abilities::target_at(&game.board, click.pos)?;
    beasts::dominate(&mut game.board, queen.id, target)?;

    let dominated = game.unit(target)?;
    if has_destination(&dominated, &game.board) {
        game.force_move(
            target,
            Mode::DominationForcedMove {
                queen: queen.id,
                dominated: target,
            },
        )?;
    } else {
        log::info!("{} 沒有合法目的地，立即恢復", dominated.kind);
        beasts::release_domination(&mut game.board, queen.id, target)?;
        game.clear_interaction();
    }
    Ok(Outcome::CONTINUE)
}

// ============================================================================
// 8. 幻象交換
// ============================================================================

fn swap_applies(game: &Game, click: &Click) -> bool {
    is_idle(game)
        && click.is_tagged(HighlightTag::Ability)
        && game.selected_kind_is(click, &[UnitKind::QueenOfIllusions])
        && friend_clicked(game, click, UnitKind::is_pawn_family)
}

fn swap(game: &mut Game, click: &Click) -> Result<Outcome> {
    let queen = game.selected_unit(click)?;
    if !game.may_act(&queen) {
        return Ok(Outcome::REJECTED);
    }
    let partner = abilities::target_at(&game.board, click.pos)?;
    wizards::swap_with(&mut game.board, queen.id, partner)?;
    game.clear_interaction();
    Ok(Outcome::END_TURN)
}

// ============================================================================
// 9. 石化切換
// ============================================================================

fn petrify_applies(game: &Game, click: &Click) -> bool {
    activates_self(game, click, &[UnitKind::Familiar])
}

fn petrify(game: &mut Game, click: &Click) -> Result<Outcome> {
    let unit = game.selected_unit(click)?;
    if !game.may_act(&unit) {
        return Ok(Outcome::REJECTED);
    }
    if wizards::toggle_stone(&mut game.board, unit.id)? {
        game.clear_interaction();
        Ok(Outcome::END_TURN)
    } else {
        game.select(unit.id)?;
        Ok(Outcome::CONTINUE)
    }
}

// ============================================================================
// 10. 傳送門
// ============================================================================

fn portal_applies(game: &Game, click: &Click) -> bool {
    match game.interaction.mode {
        Mode::Idle => activates_self(game, click, &[UnitKind::Portal]),
        Mode::Loading { unit } => {
            click.selected == Some(unit)
                && game.selected_kind_is(click, &[UnitKind::Portal])
                && click.is_tagged(HighlightTag::Ability)
                && friend_clicked(game, click, |kind| kind != UnitKind::Portal)
        }
        Mode::Ejecting { unit } => {
            click.selected == Some(unit)
                && click.is_tagged(HighlightTag::Ability)
                && game.board.is_empty(click.pos)
        }
        _ => false,
    }
}

fn portal(game: &mut Game, click: &Click) -> Result<Outcome> {
    let unit = game.selected_unit(click)?;

    match game.interaction.mode {
        Mode::Loading { .. } => {
            if !game.may_act(&unit) {
                return Ok(Outcome::REJECTED);
            }
            wizards::store(&mut game.board, unit.id, click.pos)?;
            game.clear_interaction();
            Ok(Outcome::END_TURN)
        }
        Mode::Ejecting { .. } => {
            if !game.may_act(&unit) {
                return Ok(Outcome::REJECTED);
            }
            wizards::eject(&mut game.board, unit.id, click.pos)?;
            game.clear_interaction();
            Ok(Outcome::CONTINUE)
        }
        _ if unit.stored_unit.is_some() => {
            let zone = wizards::eject_zone(&game.board, unit.id)?;
            game.enter_mode(
                &unit,
                zone,
                HighlightTag::Ability,
                Mode::Ejecting { unit: unit.id },
            );
            Ok(Outcome::CONTINUE)
        }
        _ => {
            let zone = wizards::store_zone(&game.board, unit.id)?;
            game.enter_mode(
                &unit,
                zone,
                HighlightTag::Ability,
                Mode::Loading { unit: unit.id },
            );
            Ok(Outcome::CONTINUE)
        }
    }
}

// ============================================================================
// 11–14. 吃子變體
// ============================================================================

/// 空閒狀態、點在吃子高亮的敵人上，且選取單位為指定種類
fn capture_by(game: &Game, click: &Click, kind: UnitKind) -> bool {
    is_idle(game)
        && click.is_tagged(HighlightTag::Capture)
        && game.selected_kind_is(click, &[kind])
        && enemy_clicked(game, click)
}

fn absorb_applies(game: &Game, click: &Click) -> bool {
    capture_by(game, click, UnitKind::Howler)
}

fn absorb(game: &mut Game, click: &Click) -> Result<Outcome> {
    let unit = game.selected_unit(click)?;
    if !game.may_act(&unit) {
        return Ok(Outcome::REJECTED);
    }
    let outcome = demons::howl(&mut game.board, unit.id, click.pos)?;
    Ok(finish_capture(game, outcome))
}

fn transform_applies(game: &Game, click: &Click) -> bool {
    capture_by(game, click, UnitKind::HellPawn)
        && game
            .board
            .unit_at(click.pos)
            .is_some_and(|victim| !victim.kind.is_pawn_family())
}

fn transform(game: &mut Game, click: &Click) -> Result<Outcome> {
    let unit = game.selected_unit(click)?;
    if !game.may_act(&unit) {
        return Ok(Outcome::REJECTED);
    }
    let outcome = demons::transform(&mut game.board, unit.id, click.pos)?;
    Ok(finish_capture(game, outcome))
}

fn hop_applies(game: &Game, click: &Click) -> bool {
    is_idle(game)
        && click.is_tagged(HighlightTag::Capture)
        && click
            .selected
            .is_some_and(|id| beasts::is_hop_capture(&game.board, id, click.pos))
}

fn hop(game: &mut Game, click: &Click) -> Result<Outcome> {
    let unit = game.selected_unit(click)?;
    if !game.may_act(&unit) {
        return Ok(Outcome::REJECTED);
    }
    let outcome = beasts::hop(&mut game.board, unit.id, click.pos)?;
    Ok(finish_capture(game, outcome))
}

fn convert_applies(game: &Game, click: &Click) -> bool {
    capture_by(game, click, UnitKind::HellKing)
        && click
            .selected
            .and_then(|id| game.board.get(id))
            .is_some_and(|king| king.pos().chebyshev(click.pos) == 1)
}

fn convert(game: &mut Game, click: &Click) -> Result<Outcome> {
    let unit = game.selected_unit(click)?;
    if !game.may_act(&unit) {
        return Ok(Outcome::REJECTED);
    }
    demons::convert(&mut game.board, unit.id, click.pos)?;
    game.clear_interaction();
    Ok(Outcome::END_TURN)
}

// ============================================================================
// 15. 取消選取
// ============================================================================

fn deselect_applies(game: &Game, click: &Click) -> bool {
    game.interaction.selected == Some(click.pos) && !game.interaction.mode.is_forced()
}

fn deselect(game: &mut Game, _click: &Click) -> Result<Outcome> {
    game.clear_interaction();
    Ok(Outcome::CONTINUE)
}

// ============================================================================
// 16. 一般移動 / 吃子
// ============================================================================

fn move_applies(game: &Game, click: &Click) -> bool {
    if !click.is_destination() {
        return false;
    }
    match game.interaction.mode {
        Mode::Idle => true,
        Mode::DominationForcedMove { dominated, .. } => click.selected == Some(dominated),
        _ => false,
    }
}

fn ordinary_move(game: &mut Game, click: &Click) -> Result<Outcome> {
    let unit = game.selected_unit(click)?;
    if !game.may_act(&unit) {
        return Ok(Outcome::REJECTED);
    }
    let mode = game.interaction.mode.clone();

    let outcome = abilities::move_or_capture(&mut game.board, unit.id, click.pos)?;
    let alive = game.board.contains(unit.id);

    if alive && unit.kind == UnitKind::GhostKnight {
        necro::stun_adjacent(&mut game.board, unit.id)?;
    }
    if let Mode::DominationForcedMove { queen, dominated } = mode {
        beasts::release_domination(&mut game.board, queen, dominated)?;
    }
    game.clear_interaction();

    if outcome.pending.is_some() {
        game.open_pending(outcome.pending);
        return Ok(Outcome::END_TURN);
    }

    let follow_up = alive
        && unit.kind == UnitKind::Prowler
        && outcome.captured
        && !outcome.removed.iter().any(|u| u.kind.has_death_blast());
    if follow_up {
        let prowler = game.unit(unit.id)?;
        if has_destination(&prowler, &game.board) {
            game.force_move(unit.id, Mode::FollowUpMove { unit: unit.id })?;
            return Ok(Outcome::CONTINUE);
        }
    }
    Ok(Outcome::END_TURN)
}

// ============================================================================
// 17. 強制移動閘門
// ============================================================================

fn forced_gate_applies(game: &Game, _click: &Click) -> bool {
    game.interaction.mode.is_forced()
}

fn forced_gate(_game: &mut Game, click: &Click) -> Result<Outcome> {
    log::warn!("必須先完成強制移動，忽略點擊 {}", click.pos);
    Ok(Outcome::REJECTED)
}

// ============================================================================
// 18. 放置召喚的兵 / 選擇獻祭
// ============================================================================

fn placement_applies(game: &Game, click: &Click) -> bool {
    match &game.interaction.mode {
        Mode::ResurrectionPending { targets, .. } => {
            targets.contains(&click.pos) && game.board.is_empty(click.pos)
        }
        Mode::SacrificeSelection {
            color,
            candidates,
            picks,
        } => {
            candidates.contains(&click.pos)
                && !picks.contains(&click.pos)
                && game
                    .board
                    .friend_at(click.pos, *color)
                    .is_some_and(|unit| unit.kind.is_pawn_family())
        }
        _ => false,
    }
}

fn placement(game: &mut Game, click: &Click) -> Result<Outcome> {
    match game.interaction.mode.clone() {
        Mode::ResurrectionPending { color, .. } => {
            necro::place_resurrection(&mut game.board, color, click.pos)?;
            game.clear_interaction();
            Ok(Outcome::CONTINUE)
        }
        Mode::SacrificeSelection {
            color,
            candidates,
            mut picks,
        } => {
            picks.push(click.pos);
            if picks.len() < REVIVAL_SACRIFICES {
                let mode = Mode::SacrificeSelection {
                    color,
                    candidates,
                    picks,
                };
                game.set_highlights(mode.placement_highlights());
                game.set_mode(mode);
                return Ok(Outcome::CONTINUE);
            }

            for pos in picks {
                necro::sacrifice(&mut game.board, pos)?;
            }
            necro::revive_queen_of_bones(&mut game.board, color)?;
            game.clear_interaction();
            Ok(Outcome::CONTINUE)
        }
        other => Err(RuleError::WrongKind {
            kind: format!("{other:?}"),
            action: "放置",
        }
        .into()),
    }
}

// ============================================================================
// 19. 選取 / 20. 清除
// ============================================================================

fn select_applies(_game: &Game, click: &Click) -> bool {
    click.target.is_some()
}

fn select(game: &mut Game, click: &Click) -> Result<Outcome> {
    game.clear_interaction();
    let id = abilities::target_at(&game.board, click.pos)?;
    let unit = game.unit(id)?;
    if unit.stunned {
        log::warn!("{} {} 被暈眩，無法選取", unit.color, unit.kind);
        return Ok(Outcome::CONTINUE);
    }
    game.select(id)?;
    Ok(Outcome::CONTINUE)
}

fn always(_game: &Game, _click: &Click) -> bool {
    true
}

fn fallback(game: &mut Game, _click: &Click) -> Result<Outcome> {
    let had_state = game.interaction != InteractionState::default();
    game.clear_interaction();
    Ok(if had_state {
        Outcome::CONTINUE
    } else {
        Outcome::REJECTED
    })
}

//! Tests for casting rituals from the menu and the turn that follows.

use super::support::*;

fn scripted_text(screen: &BattleScreen) -> Option<&str> {
    screen.scripted().current().map(|beat| beat.text())
}

#[test]
fn fireball_success_pays_up_front_and_damages_the_enemy() {
    let mut out = FrameOutput::new();
    let mut screen = ready(1, &mut out);

    cast(&mut screen, "Fireball", &mut out);
    assert_eq!(screen.state(), BattleState::PlayerRitual);
    assert_eq!(screen.current().player().stats.mana(), 85.0);
    assert_eq!(screen.menu().page(), MenuPage::Main);
    assert!(out.cues.contains(&SoundCue::Click));
    assert_eq!(scripted_text(&screen), Some("Fireball"));

    settle(&mut screen, &mut out);
    out.clear();
    play_ritual(&mut screen, &mut out);

    let enemy = &screen.current().enemy().stats;
    assert_eq!(enemy.health(), 30.0);
    assert_eq!(enemy.shield(), 25.0);
    assert_eq!(screen.state(), BattleState::BeforeEnemyTurn);
    assert_eq!(screen.pending_notifications().len(), 2);
    assert_eq!(scripted_text(&screen), Some("Success!"));
    assert!(out.cues.contains(&SoundCue::Success));
    assert!(out.cues.contains(&SoundCue::Fireball));
    // The shield hit lands last, so its shake wins.
    assert_eq!(screen.enemy_shake(), 10.0);
}

#[test]
fn rejected_cast_changes_nothing() {
    let mut out = FrameOutput::new();
    let mut screen = ready(2, &mut out);
    screen.current_mut().player_mut().stats.set(StatKind::Mana, 10.0);
    out.clear();

    cast(&mut screen, "Obliterate", &mut out);

    assert_eq!(out.messages().collect::<Vec<_>>(), vec![NOT_ENOUGH_MANA]);
    assert_eq!(screen.state(), BattleState::PlayerMenu);
    assert_eq!(screen.current().player().stats.mana(), 10.0);
    assert!(screen.ritual().minigame().is_none());
    assert!(screen.scripted().is_empty());
}

#[test]
fn exact_mana_is_enough() {
    let mut out = FrameOutput::new();
    let mut screen = ready(2, &mut out);
    screen.current_mut().player_mut().stats.set(StatKind::Mana, 15.0);

    cast(&mut screen, "Fireball", &mut out);

    assert_eq!(screen.state(), BattleState::PlayerRitual);
    assert_eq!(screen.current().player().stats.mana(), 0.0);
}

#[test]
fn timed_out_ritual_fails_without_refund() {
    let mut out = FrameOutput::new();
    let mut screen = ready(3, &mut out);
    cast(&mut screen, "Fireball", &mut out);
    settle(&mut screen, &mut out);
    out.clear();

    for _ in 0..239 {
        idle(&mut screen, &mut out);
    }
    assert_eq!(screen.state(), BattleState::PlayerRitual);
    assert!(!out.cues.contains(&SoundCue::Failure));

    idle(&mut screen, &mut out);
    assert_eq!(screen.state(), BattleState::BeforeEnemyTurn);
    assert!(out.commands.contains(&ScreenCommand::ShakeScreen(40.0)));
    assert!(out.cues.contains(&SoundCue::Failure));
    assert_eq!(scripted_text(&screen), Some("Failure!"));
    assert_eq!(screen.current().player().stats.mana(), 85.0);
    assert_eq!(screen.current().enemy().stats.health(), 50.0);
    assert!(screen.ritual().minigame().is_none());
}

#[test]
fn enemy_turn_follows_the_ritual_and_notifications_flush_between_beats() {
    let mut out = FrameOutput::new();
    let mut screen = ready(4, &mut out);
    cast(&mut screen, "Fireball", &mut out);
    settle(&mut screen, &mut out);
    play_ritual(&mut screen, &mut out);
    settle(&mut screen, &mut out);

    out.clear();
    idle(&mut screen, &mut out);
    assert_eq!(
        out.messages().collect::<Vec<_>>(),
        vec![
            "The enemy was damaged for\n 20 health points.\n\
             The enemy shield was damaged for\n 5 shield points.\n"
        ]
    );
    assert_eq!(screen.state(), BattleState::EnemyTurn);
    assert_eq!(screen.current().turn(), Side::Enemy);
    assert_eq!(scripted_text(&screen), Some("Enemy turn!"));

    settle(&mut screen, &mut out);
    out.clear();
    idle(&mut screen, &mut out);
    assert_eq!(out.messages().collect::<Vec<_>>(), vec!["The demon pounces at the player."]);
    let player = &screen.current().player().stats;
    assert_eq!(player.health(), 70.0);
    assert_eq!(player.shield(), 47.0);
    assert_eq!(out.cues.iter().filter(|cue| **cue == SoundCue::EnemyAttack).count(), 2);
    assert_eq!(screen.state(), BattleState::BeforePlayerTurn);

    out.clear();
    idle(&mut screen, &mut out);
    assert_eq!(out.messages().count(), 1);
    assert_eq!(screen.state(), BattleState::PlayerMenu);
    assert_eq!(screen.current().turn(), Side::Player);
    assert_eq!(scripted_text(&screen), Some("Player turn!"));
}

#[test]
fn restore_mana_refills_through_the_gate() {
    let mut out = FrameOutput::new();
    let mut screen = ready(5, &mut out);
    screen.current_mut().player_mut().stats.set(StatKind::Mana, 0.0);

    cast(&mut screen, "Restore mana", &mut out);
    assert_eq!(screen.state(), BattleState::PlayerRitual);
    settle(&mut screen, &mut out);
    out.clear();
    play_ritual(&mut screen, &mut out);

    assert_eq!(screen.current().player().stats.mana(), 100.0);
    assert!(out.cues.contains(&SoundCue::Success));
    assert!(out.cues.contains(&SoundCue::ShieldUp));
}

#[test]
fn inspect_and_describe_open_message_boxes() {
    let mut out = FrameOutput::new();
    let mut screen = ready(6, &mut out);
    out.clear();

    choose(&mut screen, "Inspect enemy", &mut out);
    assert_eq!(
        out.messages().collect::<Vec<_>>(),
        vec!["Inspecting enemy...\n\nHealth: 50 / 50\nShield: 30 / 30\nPower: 10"]
    );

    choose(&mut screen, "Attack rituals", &mut out);
    out.clear();
    let at = screen.menu().entry_center("Fireball").expect("offense page");
    step(&mut screen, FrameInput { pointer: at, primary: false, secondary: true }, &mut out);
    let shown: Vec<_> = out.messages().collect();
    assert_eq!(shown.len(), 1);
    assert!(shown[0].ends_with("Time: 4\tMana: 15"));
    assert_eq!(screen.state(), BattleState::PlayerMenu);
}

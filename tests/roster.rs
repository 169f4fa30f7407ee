//! Integration tests for roster reconciliation and applying settings.

use dicepro_core::{
    apply_roll, apply_settings, reconcile_roster, GameSession, PlayerRecord, Settings,
};

fn names(players: &[PlayerRecord]) -> Vec<&str> {
    players.iter().map(|p| p.name.as_str()).collect()
}

fn scored_session() -> GameSession {
    let mut s = GameSession::default();
    apply_roll(&mut s, 6, 0).unwrap();
    apply_roll(&mut s, 3, 1).unwrap();
    s
}

#[test]
fn enabling_player3_appends_fresh_record() {
    let mut s = scored_session();
    let p1 = s.players()[0].clone();
    let p2 = s.players()[1].clone();
    s.select_player(1).unwrap();

    apply_settings(
        &mut s,
        Settings {
            is_player3_enabled: true,
            ..Settings::default()
        },
    );

    assert_eq!(names(s.players()), vec!["P1", "P2", "P3"]);
    let p3 = &s.players()[2];
    assert_eq!((p3.total_score, p3.current_score, p3.attempts), (0, 0, 0));
    assert_eq!(s.players()[0].total_score, p1.total_score);
    assert_eq!(s.players()[0].attempts, p1.attempts);
    assert_eq!(s.players()[1].total_score, p2.total_score);
    assert_eq!(s.players()[1].attempts, p2.attempts);
    assert_eq!(s.selected_index(), 0);
    assert!(s.players()[0].is_active);
    assert!(!s.players()[1].is_active);
    assert_eq!(p3.rank, 3);
}

#[test]
fn disabling_then_enabling_player3_discards_its_scores() {
    let three = Settings {
        is_player3_enabled: true,
        ..Settings::default()
    };
    let mut s = GameSession::default();
    apply_settings(&mut s, three);
    apply_roll(&mut s, 5, 2).unwrap();
    assert_eq!(s.players()[2].total_score, 5);

    apply_settings(&mut s, Settings::default());
    assert_eq!(names(s.players()), vec!["P1", "P2"]);

    apply_settings(&mut s, three);
    assert_eq!(s.players()[2].total_score, 0);
    assert_eq!(s.players()[2].attempts, 0);
}

#[test]
fn players_3_and_4_toggle_independently() {
    let only_four = Settings {
        is_player4_enabled: true,
        ..Settings::default()
    };
    let roster = reconcile_roster(&GameSession::default().state.players, &only_four);
    assert_eq!(names(&roster), vec!["P1", "P2", "P4"]);

    let both = Settings {
        is_player3_enabled: true,
        is_player4_enabled: true,
        ..Settings::default()
    };
    let roster = reconcile_roster(&roster, &both);
    assert_eq!(names(&roster), vec!["P1", "P2", "P3", "P4"]);
}

#[test]
fn enabled_player4_keeps_its_scores_across_reconciles() {
    let only_four = Settings {
        is_player4_enabled: true,
        ..Settings::default()
    };
    let mut s = GameSession::default();
    apply_settings(&mut s, only_four);
    apply_roll(&mut s, 7, 2).unwrap();

    apply_settings(&mut s, only_four);
    assert_eq!(s.players()[2].name, "P4");
    assert_eq!(s.players()[2].total_score, 7);

    apply_settings(
        &mut s,
        Settings {
            is_player3_enabled: true,
            ..only_four
        },
    );
    assert_eq!(names(s.players()), vec!["P1", "P2", "P3", "P4"]);
    assert_eq!(s.players()[3].total_score, 7);
    assert_eq!(s.players()[3].rank, 1);
}

#[test]
fn roster_length_tracks_settings() {
    for p3 in [false, true] {
        for p4 in [false, true] {
            let settings = Settings {
                is_player3_enabled: p3,
                is_player4_enabled: p4,
                ..Settings::default()
            };
            let roster = reconcile_roster(&GameSession::default().state.players, &settings);
            assert_eq!(roster.len(), settings.player_count());
            assert_eq!(roster.iter().filter(|p| p.is_active).count(), 1);
        }
    }
}

#[test]
fn apply_settings_stores_settings() {
    let mut s = GameSession::default();
    let settings = Settings {
        is_two_dices_enabled: true,
        is_screen_always_on_enabled: true,
        ..Settings::default()
    };
    apply_settings(&mut s, settings);
    assert_eq!(s.settings, settings);
    assert_eq!(s.players().len(), 2);
}

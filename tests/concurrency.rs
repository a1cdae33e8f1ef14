//! Shared-match tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::thread;

use farkle::{
    ActionKind, GamePhase, Match, MatchEvent, MatchOptions, Status, dice_from_faces, scoring_dice,
};

fn check_dice(status: &Status) {
    let total = status.live_dice.len() + status.kept_dice.len();
    assert!(total == 0 || total == 6, "dice lost or duplicated: {status:?}");
    if status.phase == GamePhase::Bust {
        assert_eq!(status.turn_score, 0);
    }
}

fn banked(status: &Status) -> u32 {
    status
        .events
        .iter()
        .map(|event| match event {
            MatchEvent::Banked { points, .. } => *points,
            _ => 0,
        })
        .sum()
}

#[test]
fn concurrent_players_and_pollers_see_consistent_state() {
    let game = Arc::new(Match::new(MatchOptions::default(), 2024));
    game.join("Ann").unwrap();
    game.join("Bo").unwrap();
    let start_version = game.version();

    let successes = Arc::new(AtomicU64::new(0));
    let banked_total = Arc::new(AtomicU32::new(0));

    let workers: Vec<_> = (0..4)
        .map(|worker| {
            let game = Arc::clone(&game);
            let successes = Arc::clone(&successes);
            let banked_total = Arc::clone(&banked_total);
            thread::spawn(move || {
                let poller = game.subscribe();
                for step in 0..300 {
                    let status = game.status();
                    check_dice(&status);
                    if status.phase == GamePhase::GameOver {
                        break;
                    }

                    let result = if status.allows(ActionKind::Select) {
                        let live = dice_from_faces(&status.live_dice).unwrap();
                        let keep: String = scoring_dice(&live)
                            .iter()
                            .map(|die| char::from(b'0' + die.face()))
                            .collect();
                        game.select(&keep)
                    } else if status.allows(ActionKind::Bank) && (step + worker) % 3 == 0 {
                        game.bank()
                    } else {
                        game.roll()
                    };

                    if let Ok(status) = result {
                        check_dice(&status);
                        successes.fetch_add(1, Ordering::SeqCst);
                        banked_total.fetch_add(banked(&status), Ordering::SeqCst);
                    }
                    let _ = game.poll_changed(poller);
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().unwrap();
    }

    let scores: u32 = game.players().iter().map(|p| p.score).sum();
    assert_eq!(scores, banked_total.load(Ordering::SeqCst));
    assert_eq!(
        game.version(),
        start_version + successes.load(Ordering::SeqCst)
    );
}

//! Duel coordination: matchmaking, arbitration, commit path, resolution.

mod common;

use std::sync::Arc;

use common::*;
use game_core::{DuelPhase, DuelWinner, FeedMessage};
use runtime::{
    DuelCoordinator, DuelEvent, Event, MockOpponentSource, RandomLinePolicy, RawDuelVerdict,
    RuntimeError, Session, SessionHandle, Topic,
};

fn exchange(damage: i64, winner: Option<&str>) -> anyhow::Result<RawDuelVerdict> {
    Ok(RawDuelVerdict {
        narrative: "As expansões colidem.".into(),
        p1_damage: Some(damage),
        p1_qi_cost: Some(15),
        winner: winner.map(str::to_string),
        ..RawDuelVerdict::default()
    })
}

async fn start_session() -> (Session, SessionHandle) {
    let session = Session::builder("sessao-duelo")
        .initial_state(test_state(21))
        .judge(ScriptedJudge::new(Vec::new()))
        .build()
        .expect("session");
    let handle = session.handle();
    (session, handle)
}

async fn join_duel(
    handle: &SessionHandle,
    verdicts: Vec<anyhow::Result<RawDuelVerdict>>,
) -> DuelCoordinator {
    DuelCoordinator::join(
        handle.clone(),
        Arc::new(MockOpponentSource),
        Arc::new(ScriptedArbiter::new(verdicts)),
        Arc::new(RandomLinePolicy::canned(4)),
        "sala-13",
    )
    .await
    .expect("join")
}

#[tokio::test]
async fn duel_runs_to_a_player_victory() {
    init_tracing();
    let (_session, handle) = start_session().await;
    let mut duel_events = handle.subscribe(Topic::Duel);

    let mut duel = join_duel(
        &handle,
        vec![exchange(40, None), exchange(10, Some("P1"))],
    )
    .await;

    assert_eq!(duel.state().phase, DuelPhase::InProgress);
    assert_eq!(
        duel.state().opponent.as_ref().map(|o| o.name.as_str()),
        Some("Sombras de Shibuya")
    );
    assert!(matches!(
        duel_events.recv().await,
        Ok(Event::Duel(DuelEvent::Started { .. }))
    ));

    duel.submit_turn("Abro com um corte reforçado").await.expect("turn");
    let mid = handle.snapshot().await.expect("snapshot");
    assert_eq!(mid.character.current_hp, 160);
    assert_eq!(mid.character.current_qi, 135);
    assert!(duel.winner().is_none());

    duel.submit_turn("Finalizo com tudo").await.expect("turn");
    assert_eq!(duel.winner(), Some(DuelWinner::Player));
    assert_eq!(duel.state().phase, DuelPhase::Resolved);

    // Opening + two exchanges with player/opponent declarations around each.
    let narrator_entries = duel
        .state()
        .history
        .iter()
        .filter(|m| m.is_narrator())
        .count();
    assert_eq!(narrator_entries, 3);

    // Resolved duels accept no further turns.
    assert!(matches!(
        duel.submit_turn("Mais um golpe").await,
        Err(RuntimeError::Duel(game_core::DuelError::AlreadyResolved))
    ));
}

#[tokio::test]
async fn arbitration_failure_discards_the_exchange() {
    let (_session, handle) = start_session().await;
    let mut duel_events = handle.subscribe(Topic::Duel);

    let mut duel = join_duel(
        &handle,
        vec![Err(anyhow::anyhow!("árbitro indisponível")), exchange(20, None)],
    )
    .await;
    let history_before = duel.state().history.len();

    assert!(matches!(
        duel.submit_turn("Ataco").await,
        Err(RuntimeError::ArbitrationFailed(_))
    ));

    // Nothing recorded, player untouched.
    assert_eq!(duel.state().history.len(), history_before);
    let state = handle.snapshot().await.expect("snapshot");
    assert_eq!(state.character.current_hp, 200);

    // Skip the Started/opening events, then expect the failure notice.
    loop {
        match duel_events.recv().await.expect("event") {
            Event::Duel(DuelEvent::ArbitrationFailed { room }) => {
                assert_eq!(room, "sala-13");
                break;
            }
            Event::Duel(_) => continue,
            other => panic!("unexpected event {other:?}"),
        }
    }

    // The duel is still live; the next exchange succeeds.
    duel.submit_turn("Ataco de novo").await.expect("turn");
    let state = handle.snapshot().await.expect("snapshot");
    assert_eq!(state.character.current_hp, 180);
}

#[tokio::test]
async fn empty_room_and_empty_action_are_rejected() {
    let (_session, handle) = start_session().await;

    let join = DuelCoordinator::join(
        handle.clone(),
        Arc::new(MockOpponentSource),
        Arc::new(ScriptedArbiter::new(Vec::new())),
        Arc::new(RandomLinePolicy::canned(4)),
        "  ",
    )
    .await;
    assert!(matches!(
        join,
        Err(RuntimeError::Duel(game_core::DuelError::EmptyRoom))
    ));

    let mut duel = join_duel(&handle, Vec::new()).await;
    assert!(matches!(
        duel.submit_turn("   ").await,
        Err(RuntimeError::EmptyAction)
    ));
}

#[tokio::test]
async fn duel_turns_share_the_session_turn_slot() {
    let (judge, release) = BlockingJudge::new(narrative_response("Tempo passa."));
    let session = Session::builder("sessao-duelo")
        .initial_state(test_state(21))
        .judge(judge)
        .build()
        .expect("session");
    let handle = session.handle();

    let mut duel = join_duel(&handle, vec![exchange(5, None)]).await;

    // A story turn holds the slot; the duel exchange must fail fast.
    let pending = {
        let handle = handle.clone();
        tokio::spawn(async move { handle.submit_action("Medito").await })
    };
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    assert!(matches!(
        duel.submit_turn("Golpe oportunista").await,
        Err(RuntimeError::TurnInFlight)
    ));

    release.notify_one();
    pending.await.expect("join").expect("turn");

    duel.submit_turn("Golpe oportunista").await.expect("turn");
    let state = handle.snapshot().await.expect("snapshot");
    assert_eq!(state.character.current_hp, 195);
}

#[tokio::test]
async fn duel_history_records_both_declarations() {
    let (_session, handle) = start_session().await;
    let mut duel = join_duel(&handle, vec![exchange(0, None)]).await;

    duel.submit_turn("Provoco o oponente").await.expect("turn");

    let history = &duel.state().history;
    // Opening narration, player line, opponent line, exchange narration.
    assert_eq!(history.len(), 4);
    assert!(matches!(&history[1], FeedMessage::Player { content } if content == "Provoco o oponente"));
    assert!(matches!(&history[2], FeedMessage::Opponent { .. }));
    assert!(history[3].is_narrator());
}

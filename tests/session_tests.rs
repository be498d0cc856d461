//! Session-level tests: configuration, timers, and a full automated game.

mod common;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use common::{bots, init_logging};
use sdg_agents::advisor::{AdviceRequest, AdviceTicket, Advisor, AdvisorError};
use sdg_agents::cards::Goal;
use sdg_agents::core::{Action, GameConfig, Phase, PlayerConfig, PlayerId};
use sdg_agents::games::SdgGameBuilder;
use sdg_agents::session::{GameSession, FEED_CAPACITY};

/// An advisor that never answers usefully.
struct Broken;

impl Advisor for Broken {
    fn strategist_advice(&mut self, _request: &AdviceRequest) -> Result<String, AdvisorError> {
        Err(AdvisorError::Timeout)
    }

    fn goal_insight(&mut self, _goal: Goal) -> Result<Option<String>, AdvisorError> {
        Err(AdvisorError::Unavailable("quota exceeded".to_string()))
    }
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Answer every queued advisory request.
fn serve(session: &mut GameSession, advisor: &mut impl Advisor, now: Duration) {
    if let Some(ticket) = session.take_advice_request() {
        let result = ticket.ask(advisor);
        session.resolve_advice(&ticket, result);
    }
    if let Some(ticket) = session.take_insight_request() {
        let result = ticket.ask(advisor);
        session.resolve_insight(ticket, result, now);
    }
}

#[test]
fn test_session_from_json_config() {
    init_logging();
    let config = GameConfig::from_json(
        r#"{
            "roster": [
                { "name": "Ana", "initiator": true },
                { "name": "Bot", "automated": true }
            ],
            "target_score": 20,
            "deck": { "1": 4, "17": 4 },
            "timing": { "autopilot_delay_ms": 500 }
        }"#,
    )
    .unwrap();

    let session = GameSession::from_config(config, 9).unwrap();

    assert_eq!(session.state().player_count(), 2);
    assert_eq!(session.state().deck_size(), 8);
    assert_eq!(session.state().target_score, 20);
    assert_eq!(session.feed().next(), Some("Mission initialized. Future secured by Ana."));
    // Seat 0 is human, so nothing is scheduled.
    assert_eq!(session.autopilot_due(), None);
}

#[test]
fn test_all_automated_session_plays_to_the_end() {
    init_logging();
    let (game, state) = SdgGameBuilder::new().roster(bots(3)).build(2024).unwrap();
    let mut session = GameSession::new(game, state);

    let transitions = Rc::new(Cell::new(0u64));
    let counter = Rc::clone(&transitions);
    session.subscribe(move |_, _| counter.set(counter.get() + 1));

    let mut now = Duration::ZERO;
    while !session.state().is_over() {
        now += ms(250);
        session.tick(now);
        serve(&mut session, &mut Broken, now);
        assert!(now < Duration::from_secs(3600), "automated game did not finish");
    }

    let state = session.state();
    assert_eq!(transitions.get(), state.version);
    assert!(state.is_conserved());
    assert_eq!(state.phase, Phase::GameOver);
    assert!(session.feed().count() <= FEED_CAPACITY);

    let tally = state.final_tally.as_ref().unwrap();
    let verdict = if tally.passed {
        "Future stabilized. Goals met."
    } else {
        "Insufficient momentum. Collapse imminent."
    };
    assert_eq!(session.status(), verdict);
    assert_eq!(session.autopilot_due(), None);
    assert_eq!(session.insight(now), None);
}

#[test]
fn test_broken_advisor_never_blocks_play() {
    init_logging();
    let (game, state) = SdgGameBuilder::new()
        .roster(vec![PlayerConfig::human("Ana")])
        .stacked_deck(vec![Goal::NoPoverty, Goal::ZeroHunger])
        .build(1)
        .unwrap();
    let mut session = GameSession::new(game, state);
    let p0 = PlayerId::new(0);

    session.act(p0, Action::StartTurn, ms(0)).unwrap();
    session.tick(ms(1000));
    serve(&mut session, &mut Broken, ms(1000));
    assert_eq!(session.advice(), "The future depends on your decision.");

    session.act(p0, Action::Collect, ms(1100)).unwrap();
    serve(&mut session, &mut Broken, ms(1100));
    assert_eq!(session.insight(ms(1200)), None);
    assert_eq!(session.advice(), "");

    session.act(p0, Action::StartTurn, ms(1300)).unwrap();
    session.act(p0, Action::Collect, ms(1400)).unwrap();
    assert_eq!(session.state().phase, Phase::GiftExchange);
    assert_eq!(session.status(), "Supply lines open: Support your fellow agents.");

    session.act(p0, Action::SkipGift, ms(1500)).unwrap();
    assert!(session.state().is_over());
}

#[test]
fn test_human_input_for_wrong_seat_is_rejected() {
    init_logging();
    let mut session = GameSession::from_config(GameConfig::default(), 3).unwrap();

    let err = session.act(PlayerId::new(1), Action::StartTurn, ms(0)).unwrap_err();
    assert!(err.to_string().contains("out of turn"));
    assert_eq!(session.state().version, 0);
    assert_eq!(session.status(), "Ready for your mission, Agent?");
}

/// An advisor that answers only when told to, like a slow remote service.
#[derive(Default)]
struct Slow {
    asked: Vec<AdviceTicket>,
}

impl Slow {
    fn take(&mut self, session: &mut GameSession) {
        self.asked.extend(session.take_advice_request());
    }
}

#[test]
fn test_play_continues_while_advisor_is_pending() {
    init_logging();
    let roster = vec![PlayerConfig::human("Ana"), PlayerConfig::automated("Bot")];
    let (game, state) = SdgGameBuilder::new()
        .roster(roster)
        .stacked_deck(vec![Goal::NoPoverty, Goal::ZeroHunger, Goal::CleanWater])
        .build(1)
        .unwrap();
    let mut session = GameSession::new(game, state);
    let mut slow = Slow::default();
    let p0 = PlayerId::new(0);

    session.act(p0, Action::StartTurn, ms(0)).unwrap();
    session.tick(ms(1000));
    slow.take(&mut session);
    assert_eq!(slow.asked.len(), 1);
    assert!(session.is_advice_loading());

    // Nobody has answered, yet the human and the driver both keep playing.
    session.act(p0, Action::Collect, ms(1100)).unwrap();
    assert_eq!(session.state().active_player, PlayerId::new(1));
    let transition = session.tick(ms(3100)).unwrap();
    assert_eq!(transition.to, Phase::Decision);

    // The answer finally arrives, long after the state it described.
    let ticket = slow.asked.remove(0);
    assert!(!session.resolve_advice(&ticket, Ok("Draw again.".to_string())));
    assert_ne!(session.advice(), "Draw again.");
}

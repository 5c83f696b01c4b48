use dartboard_game::{Command, DartEngine, EngineConfig, Mode, Point};
use dartboard_web::components::pages::{StatsPage, StatsProps, TrackerPage, TrackerProps};
use futures::executor::block_on;
use yew::{Callback, LocalServerRenderer};

fn tracker_html(engine: &DartEngine) -> String {
    let props = TrackerProps {
        view: engine.view(),
        on_command: Callback::noop(),
    };
    block_on(LocalServerRenderer::<TrackerPage>::with_props(props).render())
}

#[test]
fn fresh_practice_board() {
    let html = tracker_html(&DartEngine::practice());
    assert!(html.contains("aria-label=\"Dartboard\""));
    assert!(html.contains("Throws: 0 / Average: 0.00"));
    assert!(!html.contains("new-leg-btn"));
    assert!(!html.contains("class=\"marker"));
}

#[test]
fn visit_in_progress_shows_markers_and_slots() {
    let mut engine = DartEngine::practice();
    engine.apply(Command::Throw(Point::new(0.0, -103.0)), 0);
    engine.apply(Command::Throw(Point::new(2.0, -1.0)), 0);
    let html = tracker_html(&engine);
    assert_eq!(html.matches("class=\"marker\"").count(), 1);
    assert_eq!(html.matches("class=\"marker marker--current\"").count(), 1);
    assert!(html.contains(">T20</li>"));
    assert!(html.contains("data-slot=\"1\">BULL</li>"));
    assert!(html.contains("Throws: 2 / Average: 165.00"));
}

#[test]
fn new_visit_clears_old_markers() {
    let mut engine = DartEngine::practice();
    for _ in 0..3 {
        engine.apply(Command::Throw(Point::new(0.0, -103.0)), 0);
    }
    engine.apply(Command::BounceOut, 0);
    let html = tracker_html(&engine);
    assert!(!html.contains("class=\"marker"));
    assert!(html.contains("data-slot=\"0\">0</li>"));
}

#[test]
fn checkout_reveal_shows_overlay_and_disables_board() {
    let mut engine = DartEngine::new(EngineConfig {
        starting_score: 40,
        ..EngineConfig::default().with_mode(Mode::Game)
    });
    engine.apply(Command::Throw(Point::new(0.0, -166.0)), 0);
    let paused = tracker_html(&engine);
    assert!(paused.contains("board--disabled"));
    assert!(!paused.contains("overlay--checkout"));

    engine.advance(1_000);
    let revealed = tracker_html(&engine);
    assert!(revealed.contains("overlay--checkout"));
    assert!(revealed.contains("btn btn--primary"));
}

#[test]
fn stats_page_reports_session() {
    let mut engine = DartEngine::game();
    engine.apply(Command::Throw(Point::new(0.0, -103.0)), 0);
    let props = StatsProps {
        view: engine.view(),
    };
    let html = block_on(LocalServerRenderer::<StatsPage>::with_props(props).render());
    assert!(html.contains("Session (501)"));
    assert!(html.contains("<dt>Remaining</dt><dd>441</dd>"));
    assert!(html.contains("<dt>T20</dt><dd>1</dd>"));
}

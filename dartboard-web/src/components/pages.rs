//! Route-level views built from an engine snapshot.
use dartboard_game::{Command, EngineView, GamePhase};
use yew::prelude::*;

use super::board::Board;
use super::controls::Controls;
use super::overlay::LegOverlay;
use super::scoreboard::Scoreboard;
use super::stats_panel::StatsPanel;

#[derive(Properties, PartialEq, Clone)]
pub struct TrackerProps {
    pub view: EngineView,
    #[prop_or_default]
    pub on_command: Callback<Command>,
}

#[function_component(TrackerPage)]
pub fn tracker_page(props: &TrackerProps) -> Html {
    let stats = &props.view.stats;
    let leg = stats.leg.clone();
    let paused = leg.as_ref().is_some_and(|leg| leg.phase != GamePhase::Active);
    let on_throw = props.on_command.reform(Command::Throw);

    html! {
        <main id="main" class="tracker">
            <div class="tracker__board">
                <Board markers={stats.current_visit.markers.to_vec()} disabled={paused} {on_throw} />
                <LegOverlay overlay={leg.as_ref().and_then(|leg| leg.overlay)} />
            </div>
            <Scoreboard current_visit={stats.current_visit.clone()} leg={leg.clone()} />
            <p class="tracker__summary">
                { format!("Throws: {} / Average: {}", stats.total_throws, stats.average_display) }
            </p>
            <Controls
                mode={props.view.mode}
                {paused}
                show_new_leg={leg.as_ref().is_some_and(|leg| leg.show_new_leg)}
                can_undo={!props.view.throws.is_empty()}
                on_command={props.on_command.clone()}
            />
        </main>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct StatsProps {
    pub view: EngineView,
}

#[function_component(StatsPage)]
pub fn stats_page(props: &StatsProps) -> Html {
    html! {
        <main id="main" class="stats-page">
            <h2>{ format!("Session ({})", props.view.mode.label()) }</h2>
            <StatsPanel stats={props.view.stats.clone()} />
        </main>
    }
}

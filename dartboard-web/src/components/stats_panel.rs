use dartboard_game::{LegStats, StatsProjection, VisitTier};
use yew::prelude::*;

const TIERS: [VisitTier; 4] = [
    VisitTier::S180,
    VisitTier::S171,
    VisitTier::S131,
    VisitTier::S91,
];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub stats: StatsProjection,
}

fn stat_row(label: &str, value: String) -> Html {
    html! {
        <div class="stat">
            <dt>{ label.to_string() }</dt>
            <dd>{ value }</dd>
        </div>
    }
}

fn leg_block(leg: &LegStats) -> Html {
    html! {
        <section class="stats__leg" aria-label="Current leg">
            <h3>{ format!("Leg {}", leg.leg_number) }</h3>
            <dl>
                { stat_row("Remaining", leg.remaining.to_string()) }
                { stat_row("Darts", leg.darts.to_string()) }
                { stat_row("Leg average", leg.average_display.clone()) }
                { stat_row("Legs won", leg.legs_won.to_string()) }
            </dl>
        </section>
    }
}

#[function_component(StatsPanel)]
pub fn stats_panel(props: &Props) -> Html {
    let stats = &props.stats;
    let notables = stats.notables;
    html! {
        <section class="stats" aria-label="Statistics">
            <p class="stats__summary">
                { format!("Throws: {} / Average: {}", stats.total_throws, stats.average_display) }
            </p>
            <dl class="stats__visits">
                { stat_row("Visits", stats.visit_count.to_string()) }
                { for TIERS.iter().map(|&tier| stat_row(tier.label(), stats.tiers.get(tier).to_string())) }
            </dl>
            <dl class="stats__notables">
                { stat_row("T20", notables.t20.to_string()) }
                { stat_row("T19-T17", notables.t19_to_t17.to_string()) }
                { stat_row("D20", notables.d20.to_string()) }
                { stat_row("D16", notables.d16.to_string()) }
                { stat_row("BULL", notables.bull.to_string()) }
            </dl>
            { stats.leg.as_ref().map(leg_block).unwrap_or_default() }
        </section>
    }
}

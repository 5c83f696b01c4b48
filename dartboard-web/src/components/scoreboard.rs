use dartboard_game::{CurrentVisit, LegStats};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current_visit: CurrentVisit,
    #[prop_or_default]
    pub leg: Option<LegStats>,
}

#[function_component(Scoreboard)]
pub fn scoreboard(props: &Props) -> Html {
    let visit = &props.current_visit;
    let slots = visit.slots.iter().enumerate().map(|(index, label)| {
        let class = classes!(
            "slot",
            (visit.current_slot == Some(index)).then_some("slot--current")
        );
        html! { <li class={class} data-slot={index.to_string()}>{ label.clone() }</li> }
    });

    let remaining = props.leg.as_ref().map(|leg| {
        html! {
            <div class="scoreboard__remaining" aria-live="polite">
                <span class="scoreboard__leg">{ format!("Leg {}", leg.leg_number) }</span>
                <span class="scoreboard__score">{ leg.remaining.to_string() }</span>
            </div>
        }
    });

    html! {
        <section class="scoreboard" aria-label="Current visit">
            { remaining.unwrap_or_default() }
            <ol class="scoreboard__slots">{ for slots }</ol>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn visit(slots: [&str; 3], current_slot: Option<usize>) -> CurrentVisit {
        CurrentVisit {
            slots: slots.map(str::to_string),
            current_slot,
            markers: Default::default(),
        }
    }

    #[test]
    fn empty_visit_shows_placeholders() {
        let props = Props {
            current_visit: visit([".", ".", "."], None),
            leg: None,
        };
        let html = block_on(LocalServerRenderer::<Scoreboard>::with_props(props).render());
        assert_eq!(html.matches(">.</li>").count(), 3);
        assert!(!html.contains("slot--current"));
        assert!(!html.contains("scoreboard__remaining"));
    }

    #[test]
    fn latest_dart_is_highlighted() {
        let props = Props {
            current_visit: visit(["T20", "D16", "."], Some(1)),
            leg: None,
        };
        let html = block_on(LocalServerRenderer::<Scoreboard>::with_props(props).render());
        assert!(html.contains("class=\"slot slot--current\" data-slot=\"1\">D16"));
    }
}

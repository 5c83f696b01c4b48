use dartboard_game::Overlay;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub overlay: Option<Overlay>,
}

#[must_use]
pub const fn overlay_text(overlay: Overlay) -> &'static str {
    match overlay {
        Overlay::Checkout => "Checkout!",
        Overlay::Bust => "Bust",
    }
}

#[function_component(LegOverlay)]
pub fn leg_overlay(props: &Props) -> Html {
    let Some(overlay) = props.overlay else {
        return Html::default();
    };
    let class = match overlay {
        Overlay::Checkout => "overlay overlay--checkout",
        Overlay::Bust => "overlay overlay--bust",
    };
    html! {
        <div class={class} role="status" aria-live="assertive">
            { overlay_text(overlay) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn hidden_without_an_overlay() {
        let html = block_on(LocalServerRenderer::<LegOverlay>::with_props(Props { overlay: None }).render());
        assert!(!html.contains("overlay"));
    }

    #[test]
    fn bust_overlay_renders() {
        let props = Props {
            overlay: Some(Overlay::Bust),
        };
        let html = block_on(LocalServerRenderer::<LegOverlay>::with_props(props).render());
        assert!(html.contains("overlay--bust"));
        assert!(html.contains("Bust"));
    }
}

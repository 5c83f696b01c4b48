use dartboard_game::{Command, Mode};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub mode: Mode,
    #[prop_or_default]
    pub paused: bool,
    #[prop_or_default]
    pub show_new_leg: bool,
    #[prop_or_default]
    pub can_undo: bool,
    #[prop_or_default]
    pub on_command: Callback<Command>,
}

fn emit(on_command: &Callback<Command>, command: Command) -> Callback<MouseEvent> {
    on_command.reform(move |_: MouseEvent| command)
}

#[function_component(Controls)]
pub fn controls(props: &Props) -> Html {
    let on_command = &props.on_command;
    let (mode_label, mode_command) = match props.mode {
        Mode::Practice => ("Play 501", Command::EnterGame),
        Mode::Game => ("Practice", Command::EnterPractice),
    };
    let new_leg = props.mode.is_game().then(|| {
        let class = classes!("btn", props.show_new_leg.then_some("btn--primary"));
        html! {
            <button id="new-leg-btn" type="button" class={class}
                    onclick={emit(on_command, Command::ConfirmNewLeg)}>
                { "New leg" }
            </button>
        }
    });

    html! {
        <div class="controls" role="toolbar" aria-label="Throw controls">
            <button id="bounce-btn" type="button" class="btn" disabled={props.paused}
                    onclick={emit(on_command, Command::BounceOut)}>
                { "Bounce out" }
            </button>
            <button id="undo-btn" type="button" class="btn" disabled={!props.can_undo}
                    onclick={emit(on_command, Command::UndoLast)}>
                { "Undo" }
            </button>
            <button id="reset-btn" type="button" class="btn"
                    onclick={emit(on_command, Command::Reset)}>
                { "Reset" }
            </button>
            { new_leg.unwrap_or_default() }
            <button id="mode-btn" type="button" class="btn"
                    onclick={emit(on_command, mode_command)}>
                { mode_label }
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(props: Props) -> String {
        block_on(LocalServerRenderer::<Controls>::with_props(props).render())
    }

    #[test]
    fn practice_mode_has_no_leg_control() {
        let html = render(Props {
            mode: Mode::Practice,
            paused: false,
            show_new_leg: false,
            can_undo: true,
            on_command: Callback::noop(),
        });
        assert!(!html.contains("new-leg-btn"));
        assert!(html.contains("Play 501"));
    }

    #[test]
    fn revealed_checkout_highlights_new_leg() {
        let html = render(Props {
            mode: Mode::Game,
            paused: true,
            show_new_leg: true,
            can_undo: true,
            on_command: Callback::noop(),
        });
        assert!(html.contains("btn btn--primary"));
        assert!(html.contains("Practice"));
    }
}

#[cfg(target_arch = "wasm32")]
use crate::components::pages::{StatsPage, TrackerPage};
#[cfg(target_arch = "wasm32")]
use crate::dom;
#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use crate::state::{TrackerAction, TrackerState, delay_until};
#[cfg(target_arch = "wasm32")]
use dartboard_game::Command;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let tracker = use_reducer(TrackerState::default);
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let view = tracker.view();

    {
        let dispatcher = tracker.dispatcher();
        use_effect_with(view.next_deadline_ms, move |deadline| {
            if let Some(delay) = delay_until(*deadline, dom::now_ms()) {
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(err) = dom::sleep_ms(delay).await {
                        dom::console_error(&format!("timer failed: {err:?}"));
                    }
                    dispatcher.dispatch(TrackerAction::Tick {
                        now_ms: dom::now_ms(),
                    });
                });
            }
            || {}
        });
    }

    let on_command = {
        let dispatcher = tracker.dispatcher();
        Callback::from(move |command: Command| {
            dispatcher.dispatch(TrackerAction::Apply {
                command,
                now_ms: dom::now_ms(),
            });
        })
    };

    let page = match route {
        Route::Tracker => html! { <TrackerPage view={view.clone()} {on_command} /> },
        Route::Stats => html! { <StatsPage view={view.clone()} /> },
        Route::NotFound => html! { <main id="main"><p>{ "Page not found" }</p></main> },
    };

    html! {
        <>
            <nav class="nav">
                <Link<Route> to={Route::Tracker}>{ Route::Tracker.label() }</Link<Route>>
                <Link<Route> to={Route::Stats}>{ Route::Stats.label() }</Link<Route>>
                <span class="nav__mode">{ view.mode.label() }</span>
            </nav>
            { page }
        </>
    }
}

#![cfg(target_arch = "wasm32")]

use dartboard_web::app::App;
use dartboard_web::dom;
use wasm_bindgen_test::*;
use yew::Renderer;

wasm_bindgen_test_configure!(run_in_browser);

fn app_root() -> web_sys::Element {
    let doc = dom::window()
        .ok()
        .and_then(|w| w.document())
        .expect("document");
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

#[wasm_bindgen_test]
async fn app_mounts_board_and_controls() {
    let root = app_root();
    Renderer::<App>::with_root(root.clone()).render();
    dom::sleep_ms(0).await.expect("yield to renderer");

    assert!(root.query_selector("svg.board").expect("query board").is_some());
    assert!(root.query_selector("#undo-btn").expect("query undo").is_some());
    assert!(root.query_selector("#new-leg-btn").expect("query new leg").is_none());
}

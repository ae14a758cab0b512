//! Main module for the big data processing simulator using Yew.
//! Wires the progress driver hook into the window components.

use bigdata_sim::{
    config::{WINDOW_HEIGHT_PX, WINDOW_TITLE, WINDOW_WIDTH_PX},
    DriverConfig,
};
use yew::prelude::*;

mod components;
mod hooks;
mod logging;

use components::{CounterLabel, Header, ProgressBar, Terminal};
use hooks::use_progress_driver;

/// Fixed-size window hosting the simulation.
#[function_component]
pub fn App() -> Html {
    let progress = use_progress_driver(DriverConfig::default());

    let window_style = format!(
        "width: {}px; height: {}px; resize: none; overflow: hidden;",
        WINDOW_WIDTH_PX, WINDOW_HEIGHT_PX
    );

    html! {
        <div class="window" style={window_style}>
            <Header />
            <ProgressBar percent={progress.percent} />
            <Terminal text={AttrValue::from(progress.log_text)} />
            <CounterLabel label={AttrValue::from(progress.label)} />
        </div>
    }
}

/// Entry point: installs logging and renders the App component.
fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = logging::init() {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }
    gloo_utils::document().set_title(WINDOW_TITLE);
    yew::Renderer::<App>::new().render();
}

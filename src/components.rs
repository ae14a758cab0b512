//! Pure Yew view components for the simulator window.
//!
//! Everything here renders from props only; the driver state lives in
//! [`crate::hooks::use_progress_driver`].

use bigdata_sim::config::{
    HEADER_TEXT, PROGRESS_BAR_WIDTH_PX, TERMINAL_BACKGROUND, TERMINAL_COLUMNS,
    TERMINAL_FOREGROUND, TERMINAL_ROWS,
};
use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <div class="header">{ HEADER_TEXT }</div>
    }
}

/// Determinate progress bar on a 0–100 scale.
#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    pub percent: f64,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    html! {
        <progress
            class="progress"
            max="100"
            value={props.percent.to_string()}
            style={format!("width: {}px;", PROGRESS_BAR_WIDTH_PX)}
        />
    }
}

/// Read-only terminal area that keeps the newest line in view.
#[derive(Properties, PartialEq)]
pub struct TerminalProps {
    pub text: AttrValue,
}

#[function_component(Terminal)]
pub fn terminal(props: &TerminalProps) -> Html {
    let node = use_node_ref();

    // Scroll to the bottom whenever the content changes
    {
        let node = node.clone();
        use_effect_with(props.text.clone(), move |_| {
            if let Some(el) = node.cast::<web_sys::Element>() {
                el.set_scroll_top(el.scroll_height());
            }
            || ()
        });
    }

    let style = format!(
        "background: {}; color: {}; width: {}ch; height: calc({} * 1.2em);",
        TERMINAL_BACKGROUND, TERMINAL_FOREGROUND, TERMINAL_COLUMNS, TERMINAL_ROWS
    );

    html! {
        <pre class="terminal" ref={node} style={style}>{ props.text.clone() }</pre>
    }
}

#[derive(Properties, PartialEq)]
pub struct CounterLabelProps {
    pub label: AttrValue,
}

#[function_component(CounterLabel)]
pub fn counter_label(props: &CounterLabelProps) -> Html {
    html! {
        <div class="counter-label">{ props.label.clone() }</div>
    }
}

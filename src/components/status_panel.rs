use yew::prelude::*;

use crate::models::StatusMessage;

#[derive(Properties, PartialEq)]
pub struct StatusPanelProps {
    pub status: StatusMessage,
}

/// Panel que ocupa la región de contenido cuando el Layout está en modo
/// override: solo el texto del mensaje, en su color.
#[function_component(StatusPanel)]
pub fn status_panel(props: &StatusPanelProps) -> Html {
    html! {
        <div class={classes!("status-panel", props.status.color.css_class())}>
            {&props.status.text}
        </div>
    }
}

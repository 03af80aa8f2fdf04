use yew::prelude::*;

#[function_component(LogoHeader)]
pub fn logo_header() -> Html {
    html! {
        <div class="logo-header">
            <span class="logo-icon">{"🏥"}</span>
            <span class="logo-title">{"HMS"}</span>
        </div>
    }
}

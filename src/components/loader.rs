use yew::prelude::*;

/// Spinner a pantalla completa: splash del primer montaje.
#[function_component(SplashLoader)]
pub fn splash_loader() -> Html {
    html! {
        <div class="splash-loader">
            <div class="spinner" />
            <p>{"Loading..."}</p>
        </div>
    }
}

/// Barra fina de carga por navegación, montada sobre el contenido.
#[function_component(PageLoader)]
pub fn page_loader() -> Html {
    html! {
        <div class="page-loader">
            <div class="page-loader-bar" />
        </div>
    }
}

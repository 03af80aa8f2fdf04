// ============================================================================
// LAYOUT SHELL - Estado transversal de UI y máquina de estados del contenido
// ============================================================================
// Tres modos para la región principal:
//   1. Splash (first_load): solo el loader a pantalla completa, sin chrome.
//      Transición pura por timeout al modo Ready.
//   2. Routed (status None): LogoHeader + Header + Sidebar + página ruteada.
//   3. Overridden (status Some): el chrome se mantiene, el contenido se
//      sustituye por el panel de estado hasta que alguien escriba None.
// ============================================================================

use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{
    AdminConsole, Dashboard, Header, LogoHeader, NewAppointment, PageLoader, PatientRegister,
    Sidebar, SplashLoader, StatusPanel,
};
use crate::config::CONFIG;
use crate::hooks::{use_inactivity_logout, use_page_loader, use_session_store};
use crate::models::{DashboardTab, MenuAction, StatusMessage};
use crate::routes::Route;
use crate::utils::constants::TOGGLE_SIDEBAR_EVENT;

/// A qué booleano afecta un toggle según la clase de viewport. Nunca a los
/// dos a la vez.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToggleTarget {
    MobileOpen,
    Collapsed,
}

pub fn toggle_target(viewport_width: f64, breakpoint: f64) -> ToggleTarget {
    if viewport_width < breakpoint {
        ToggleTarget::MobileOpen
    } else {
        ToggleTarget::Collapsed
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContentMode {
    Splash,
    Overridden,
    Routed,
}

/// Resolución del modo de contenido: el splash gana a todo, el override
/// gana a la ruta.
pub fn content_mode(first_load: bool, has_status: bool) -> ContentMode {
    if first_load {
        ContentMode::Splash
    } else if has_status {
        ContentMode::Overridden
    } else {
        ContentMode::Routed
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SidebarState {
    pub collapsed: bool,
    pub mobile_open: bool,
}

pub enum SidebarAction {
    Toggle(ToggleTarget),
    CloseMobile,
}

impl Reducible for SidebarState {
    type Action = SidebarAction;

    fn reduce(self: Rc<Self>, action: SidebarAction) -> Rc<Self> {
        match action {
            SidebarAction::Toggle(ToggleTarget::MobileOpen) => Rc::new(Self {
                collapsed: self.collapsed,
                mobile_open: !self.mobile_open,
            }),
            SidebarAction::Toggle(ToggleTarget::Collapsed) => Rc::new(Self {
                collapsed: !self.collapsed,
                mobile_open: self.mobile_open,
            }),
            SidebarAction::CloseMobile => Rc::new(Self {
                collapsed: self.collapsed,
                mobile_open: false,
            }),
        }
    }
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(1024.0)
}

fn current_toggle_target() -> ToggleTarget {
    toggle_target(viewport_width(), CONFIG.ui_config.mobile_breakpoint_px)
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub route: Route,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let sidebar = use_reducer(SidebarState::default);
    let first_load = use_state(|| true);
    let status_message = use_state(|| None::<StatusMessage>);
    let active_tab = use_state(|| DashboardTab::Patient);
    let session = use_session_store();
    let navigator = use_navigator();
    let loading = use_page_loader();

    // Splash inicial: transición pura por timeout, sin acción del usuario.
    {
        let first_load = first_load.clone();
        use_effect_with((), move |_| {
            let timeout = Timeout::new(CONFIG.ui_config.splash_delay_ms, move || {
                first_load.set(false);
            });
            move || drop(timeout)
        });
    }

    // Evento custom toggleSidebar: cualquier descendiente puede pedir el
    // toggle sin prop drilling. El listener se libera al desmontar.
    {
        let sidebar = sidebar.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, TOGGLE_SIDEBAR_EVENT, move |_event| {
                    sidebar.dispatch(SidebarAction::Toggle(current_toggle_target()));
                })
            });
            move || drop(listener)
        });
    }

    // Política del override al navegar: configurable entre auto-limpiar y
    // pegajoso hasta un clear explícito.
    {
        let status_message = status_message.clone();
        use_effect_with(props.route.clone(), move |_| {
            if CONFIG.ui_config.clear_status_on_navigation {
                status_message.set(None);
            }
            || ()
        });
    }

    let set_status = {
        let status_message = status_message.clone();
        Callback::from(move |status: Option<StatusMessage>| status_message.set(status))
    };

    // Expiración por inactividad: limpiar sesión, avisar y replace a login,
    // en ese orden y de una sola vez.
    let on_expire = {
        let session = session.clone();
        let set_status = set_status.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            log::warn!("⏰ Sesión expirada por inactividad, forzando logout");
            session.clear();
            set_status.emit(Some(StatusMessage::red("Session expired due to inactivity.")));
            if let Some(navigator) = &navigator {
                navigator.replace(&Route::Login);
            }
        })
    };
    use_inactivity_logout(CONFIG.ui_config.inactivity_limit_ms, on_expire);

    let on_menu_click = {
        let sidebar = sidebar.clone();
        Callback::from(move |_: MouseEvent| {
            sidebar.dispatch(SidebarAction::Toggle(current_toggle_target()));
        })
    };

    let on_close_mobile = {
        let sidebar = sidebar.clone();
        Callback::from(move |_: ()| sidebar.dispatch(SidebarAction::CloseMobile))
    };

    let on_select_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: DashboardTab| active_tab.set(tab))
    };

    let on_menu_select = {
        let navigator = navigator.clone();
        let active_tab = active_tab.clone();
        let sidebar = sidebar.clone();
        Callback::from(move |action: MenuAction| {
            match action {
                MenuAction::Navigate(route) => {
                    if let Some(navigator) = &navigator {
                        navigator.push(&route);
                    }
                }
                MenuAction::SelectTab(tab) => {
                    active_tab.set(tab);
                    if let Some(navigator) = &navigator {
                        navigator.push(&Route::Dashboard);
                    }
                }
            }
            sidebar.dispatch(SidebarAction::CloseMobile);
        })
    };

    let mode = content_mode(*first_load, status_message.is_some());

    if mode == ContentMode::Splash {
        return html! { <SplashLoader /> };
    }

    let main_content = match (&mode, &*status_message) {
        (ContentMode::Overridden, Some(status)) => {
            html! { <StatusPanel status={status.clone()} /> }
        }
        _ => routed_page(&props.route, *active_tab, on_select_tab),
    };

    html! {
        <div class="layout-shell">
            <div class="layout-top">
                <LogoHeader />
                <Header on_menu_click={on_menu_click} set_status={set_status} />
            </div>

            <Sidebar
                collapsed={sidebar.collapsed}
                mobile_open={sidebar.mobile_open}
                active_tab={*active_tab}
                on_select={on_menu_select}
                on_close_mobile={on_close_mobile}
            />

            <main class={classes!("layout-main", sidebar.collapsed.then_some("collapsed"))}>
                if loading {
                    <PageLoader />
                }
                { main_content }
            </main>
        </div>
    }
}

fn routed_page(
    route: &Route,
    active_tab: DashboardTab,
    on_select_tab: Callback<DashboardTab>,
) -> Html {
    match route {
        Route::Dashboard => html! {
            <Dashboard active_tab={active_tab} on_select_tab={on_select_tab} />
        },
        Route::PatientRegister => html! { <PatientRegister /> },
        Route::AdminConsole => html! { <AdminConsole /> },
        Route::NewAppointment => html! { <NewAppointment /> },
        // Login nunca llega aquí: el switch lo renderiza fuera del shell.
        Route::Login | Route::NotFound => html! {
            <div class="not-found">{"Page not found"}</div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_below_breakpoint_targets_mobile_only() {
        assert_eq!(toggle_target(500.0, 768.0), ToggleTarget::MobileOpen);
        assert_eq!(toggle_target(767.9, 768.0), ToggleTarget::MobileOpen);
    }

    #[test]
    fn toggle_at_or_above_breakpoint_targets_collapsed_only() {
        assert_eq!(toggle_target(768.0, 768.0), ToggleTarget::Collapsed);
        assert_eq!(toggle_target(1920.0, 768.0), ToggleTarget::Collapsed);
    }

    #[test]
    fn mobile_toggle_never_touches_collapsed() {
        let state = Rc::new(SidebarState::default());
        let next = state.reduce(SidebarAction::Toggle(ToggleTarget::MobileOpen));
        assert!(next.mobile_open);
        assert!(!next.collapsed);

        let back = next.reduce(SidebarAction::Toggle(ToggleTarget::MobileOpen));
        assert!(!back.mobile_open);
        assert!(!back.collapsed);
    }

    #[test]
    fn desktop_toggle_never_touches_mobile_open() {
        let state = Rc::new(SidebarState {
            collapsed: false,
            mobile_open: true,
        });
        let next = state.reduce(SidebarAction::Toggle(ToggleTarget::Collapsed));
        assert!(next.collapsed);
        assert!(next.mobile_open);
    }

    #[test]
    fn close_mobile_is_one_directional() {
        let state = Rc::new(SidebarState {
            collapsed: true,
            mobile_open: true,
        });
        let next = state.reduce(SidebarAction::CloseMobile);
        assert!(!next.mobile_open);
        assert!(next.collapsed);

        let again = next.reduce(SidebarAction::CloseMobile);
        assert!(!again.mobile_open);
    }

    #[test]
    fn splash_wins_over_everything() {
        assert_eq!(content_mode(true, false), ContentMode::Splash);
        assert_eq!(content_mode(true, true), ContentMode::Splash);
    }

    #[test]
    fn override_wins_over_route_once_ready() {
        assert_eq!(content_mode(false, true), ContentMode::Overridden);
        assert_eq!(content_mode(false, false), ContentMode::Routed);
    }
}

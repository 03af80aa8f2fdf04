use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::{main_menu, DashboardTab, MenuAction, MenuEntry, MenuLeaf};
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub collapsed: bool,
    pub mobile_open: bool,
    pub active_tab: DashboardTab,
    pub on_select: Callback<MenuAction>,
    pub on_close_mobile: Callback<()>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let open_dropdown = use_state(|| None::<&'static str>);
    let current_route = use_route::<Route>();

    let leaf_item = |leaf: &MenuLeaf, nested: bool| -> Html {
        let active = match &leaf.action {
            MenuAction::Navigate(route) => current_route.as_ref() == Some(route),
            MenuAction::SelectTab(tab) => {
                current_route == Some(Route::Dashboard) && *tab == props.active_tab
            }
        };
        let on_select = props.on_select.clone();
        let action = leaf.action.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_select.emit(action.clone()));

        html! {
            <button
                key={leaf.key}
                class={classes!(
                    "menu-item",
                    nested.then_some("nested"),
                    active.then_some("active"),
                )}
                onclick={onclick}
            >
                { leaf.label }
            </button>
        }
    };

    let entries = main_menu()
        .into_iter()
        .map(|entry| match entry {
            MenuEntry::Leaf(leaf) => leaf_item(&leaf, false),
            MenuEntry::Group {
                label,
                icon,
                children,
            } => {
                let is_open = *open_dropdown == Some(label);
                let toggle = {
                    let open_dropdown = open_dropdown.clone();
                    Callback::from(move |_: MouseEvent| {
                        open_dropdown.set(if is_open { None } else { Some(label) });
                    })
                };
                html! {
                    <div key={label} class="menu-group">
                        <button class="menu-item" onclick={toggle}>
                            <span class="menu-icon">{icon}</span>
                            if !props.collapsed {
                                <span class="menu-label">{label}</span>
                                <span class="chevron">{ if is_open { "▾" } else { "▸" } }</span>
                            }
                        </button>
                        if is_open {
                            <div class="menu-children">
                                { for children.iter().map(|child| leaf_item(child, true)) }
                            </div>
                        }
                    </div>
                }
            }
        })
        .collect::<Html>();

    let on_overlay_click = {
        let on_close_mobile = props.on_close_mobile.clone();
        Callback::from(move |_: MouseEvent| on_close_mobile.emit(()))
    };

    html! {
        <>
            if props.mobile_open {
                <div class="sidebar-overlay" onclick={on_overlay_click} />
            }
            <aside class={classes!(
                "sidebar",
                props.collapsed.then_some("collapsed"),
                props.mobile_open.then_some("mobile-open"),
            )}>
                <nav class="sidebar-nav">
                    { entries }
                </nav>
            </aside>
        </>
    }
}

// ============================================================================
// MENU MODEL - Entradas de navegación del sidebar
// ============================================================================
// Una entrada es una acción hoja o un grupo de hojas, nunca ambas cosas.
// ============================================================================

use crate::models::ui::DashboardTab;
use crate::routes::Route;

/// Acción que dispara una hoja del menú.
#[derive(Clone, PartialEq, Debug)]
pub enum MenuAction {
    Navigate(Route),
    SelectTab(DashboardTab),
}

#[derive(Clone, PartialEq, Debug)]
pub struct MenuLeaf {
    pub label: &'static str,
    pub key: &'static str,
    pub action: MenuAction,
}

#[derive(Clone, PartialEq, Debug)]
pub enum MenuEntry {
    Leaf(MenuLeaf),
    Group {
        label: &'static str,
        icon: &'static str,
        children: Vec<MenuLeaf>,
    },
}

impl MenuEntry {
    pub fn label(&self) -> &'static str {
        match self {
            MenuEntry::Leaf(leaf) => leaf.label,
            MenuEntry::Group { label, .. } => label,
        }
    }
}

/// Menú principal del shell.
pub fn main_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::Group {
            label: "Dashboard",
            icon: "🏠",
            children: vec![
                MenuLeaf {
                    label: "Patient Dashboard",
                    key: "patient-dashboard",
                    action: MenuAction::SelectTab(DashboardTab::Patient),
                },
                MenuLeaf {
                    label: "Doctor Dashboard",
                    key: "doctor-dashboard",
                    action: MenuAction::SelectTab(DashboardTab::Doctor),
                },
            ],
        },
        MenuEntry::Leaf(MenuLeaf {
            label: "Appointments",
            key: "appointments",
            action: MenuAction::Navigate(Route::NewAppointment),
        }),
        MenuEntry::Leaf(MenuLeaf {
            label: "Patient Registration",
            key: "patient-register",
            action: MenuAction::Navigate(Route::PatientRegister),
        }),
        MenuEntry::Leaf(MenuLeaf {
            label: "Admin Console",
            key: "adminconsole",
            action: MenuAction::Navigate(Route::AdminConsole),
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn groups_are_never_empty() {
        for entry in main_menu() {
            if let MenuEntry::Group { children, .. } = entry {
                assert!(!children.is_empty());
            }
        }
    }

    #[test]
    fn leaf_keys_are_unique() {
        let mut keys = HashSet::new();
        for entry in main_menu() {
            match entry {
                MenuEntry::Leaf(leaf) => {
                    assert!(keys.insert(leaf.key));
                }
                MenuEntry::Group { children, .. } => {
                    for child in children {
                        assert!(keys.insert(child.key));
                    }
                }
            }
        }
    }

    #[test]
    fn dashboard_group_selects_tabs() {
        let menu = main_menu();
        let MenuEntry::Group { children, .. } = &menu[0] else {
            panic!("first entry should be the dashboard group");
        };
        assert!(children
            .iter()
            .all(|leaf| matches!(leaf.action, MenuAction::SelectTab(_))));
    }
}

// ============================================================================
// ADMIN CONSOLE - Administración de miembros del personal
// ============================================================================
// Alta/edición/baja de usuarios; crear un usuario con rol Doctor crea
// además su perfil de doctor vacío.
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::IdleDeadline;
use crate::models::{NewDoctor, StatusMessage, User};
use crate::services::{doctor_service, user_service};

const ROLES: [&str; 4] = ["Admin", "Staff", "Doctor", "Lab Assistant"];

#[function_component(AdminConsole)]
pub fn admin_console() -> Html {
    let users = use_state(Vec::<User>::new);
    let form = use_state(User::default);
    let editing_id = use_state(|| None::<String>);
    let message = use_state(|| None::<StatusMessage>);
    let dismiss_deadline = use_mut_ref(IdleDeadline::new);

    let load_users = {
        let users = users.clone();
        Callback::from(move |_: ()| {
            let users = users.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match user_service::fetch_users().await {
                    Ok(list) => {
                        log::info!("👥 {} usuarios cargados", list.len());
                        users.set(list);
                    }
                    Err(e) => log::error!("❌ Error cargando usuarios: {}", e),
                }
            });
        })
    };

    {
        let load_users = load_users.clone();
        use_effect_with((), move |_| {
            load_users.emit(());
            || ()
        });
    }

    let show_message = {
        let message = message.clone();
        let dismiss_deadline = dismiss_deadline.clone();
        Callback::from(move |status: StatusMessage| {
            message.set(Some(status));
            let message_off = message.clone();
            dismiss_deadline
                .borrow_mut()
                .schedule(CONFIG.ui_config.status_dismiss_ms, move || {
                    message_off.set(None);
                });
        })
    };

    let on_full_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.full_name = input.value();
            form.set(next);
        })
    };

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.email = input.value();
            form.set(next);
        })
    };

    let on_phone = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.phone = input.value();
            form.set(next);
        })
    };

    let on_role_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.role = select.value();
            form.set(next);
        })
    };

    let on_active_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.is_active = input.checked();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let editing_id = editing_id.clone();
        let load_users = load_users.clone();
        let show_message = show_message.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut payload = (*form).clone();
            payload.created_by = Some("admin001".to_string());

            let form = form.clone();
            let editing_id = editing_id.clone();
            let load_users = load_users.clone();
            let show_message = show_message.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = match &*editing_id {
                    Some(user_id) => user_service::update_user(user_id, &payload)
                        .await
                        .map(|_| "User updated successfully!".to_string()),
                    None => match user_service::create_user(&payload).await {
                        Ok(created) => {
                            let mut text = format!(
                                "User created! User ID: {}, Password: {}",
                                created.user_id, created.password
                            );
                            if payload.role == "Doctor" {
                                match doctor_service::create_doctor(&NewDoctor::empty_for(
                                    &created.user_id,
                                ))
                                .await
                                {
                                    Ok(_) => text.push_str(" | Doctor profile created."),
                                    Err(e) => {
                                        log::error!("❌ Error creando perfil de doctor: {}", e)
                                    }
                                }
                            }
                            Ok(text)
                        }
                        Err(e) => Err(e),
                    },
                };

                match result {
                    Ok(text) => {
                        show_message.emit(StatusMessage::green(text));
                        form.set(User::default());
                        editing_id.set(None);
                        load_users.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Error guardando usuario: {}", e);
                        show_message.emit(StatusMessage::red("Something went wrong"));
                    }
                }
            });
        })
    };

    let on_edit = {
        let form = form.clone();
        let editing_id = editing_id.clone();
        Callback::from(move |user: User| {
            editing_id.set(user.user_id.clone());
            form.set(user);
        })
    };

    let on_delete = {
        let load_users = load_users.clone();
        let show_message = show_message.clone();
        Callback::from(move |user_id: String| {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Are you sure to delete this user?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let load_users = load_users.clone();
            let show_message = show_message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match user_service::delete_user(&user_id).await {
                    Ok(_) => {
                        show_message.emit(StatusMessage::green("User deleted successfully!"));
                        load_users.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Error eliminando usuario: {}", e);
                        show_message.emit(StatusMessage::red("Something went wrong"));
                    }
                }
            });
        })
    };

    let rows = users
        .iter()
        .map(|user| {
            let edit = {
                let on_edit = on_edit.clone();
                let user = user.clone();
                Callback::from(move |_: MouseEvent| on_edit.emit(user.clone()))
            };
            let delete = {
                let on_delete = on_delete.clone();
                let user_id = user.user_id.clone().unwrap_or_default();
                Callback::from(move |_: MouseEvent| on_delete.emit(user_id.clone()))
            };

            html! {
                <tr key={user.user_id.clone().unwrap_or_default()}>
                    <td>{ &user.full_name }</td>
                    <td>{ &user.email }</td>
                    <td>{ &user.phone }</td>
                    <td>{ &user.role }</td>
                    <td>{ if user.is_active { "Yes" } else { "No" } }</td>
                    <td class="row-actions">
                        <button class="btn-edit" onclick={edit}>{"Edit"}</button>
                        <button class="btn-delete" onclick={delete}>{"Delete"}</button>
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <div class="admin-console">
            <h1>{"Admin Console – User Management"}</h1>

            if let Some(status) = &*message {
                <div class={classes!("form-message", status.color.css_class())}>
                    { &status.text }
                </div>
            }

            <form class="user-form" onsubmit={on_submit}>
                <input
                    type="text"
                    placeholder="Full Name"
                    required=true
                    value={form.full_name.clone()}
                    oninput={on_full_name}
                />
                <input
                    type="email"
                    placeholder="Email"
                    required=true
                    value={form.email.clone()}
                    oninput={on_email}
                />
                <input
                    type="text"
                    placeholder="Phone"
                    required=true
                    value={form.phone.clone()}
                    oninput={on_phone}
                />
                <select onchange={on_role_change}>
                    { for ROLES.iter().map(|role| html! {
                        <option value={*role} selected={form.role == *role}>{*role}</option>
                    }) }
                </select>
                <label class="active-toggle">
                    <input
                        type="checkbox"
                        checked={form.is_active}
                        onchange={on_active_change}
                    />
                    <span>{"Active"}</span>
                </label>
                <button type="submit" class="btn-primary">
                    { if editing_id.is_some() { "Update User" } else { "Create User" } }
                </button>
            </form>

            <div class="user-table">
                <table>
                    <thead>
                        <tr>
                            <th>{"Name"}</th>
                            <th>{"Email"}</th>
                            <th>{"Phone"}</th>
                            <th>{"Role"}</th>
                            <th>{"Active"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        if users.is_empty() {
                            <tr><td colspan="6" class="muted">{"No users found."}</td></tr>
                        } else {
                            { rows }
                        }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

// ============================================================================
// SESSION STORE - Persistencia de sesión sobre localStorage
// ============================================================================
// Dos claves: `token` (bearer string crudo) y `user` (JSON {userId, role}).
// Escrito en login, leído en cada evaluación del guard y borrado en logout
// o por el monitor de inactividad. Sin llamadas de red.
// ============================================================================

use crate::models::{Session, StoredUser};
use crate::utils::constants::{TOKEN_KEY, USER_KEY};
use crate::utils::storage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionStore;

impl SessionStore {
    pub fn new() -> Self {
        Self
    }

    /// Persiste la sesión completa. No valida la forma del token y pisa
    /// cualquier sesión anterior sin preguntar.
    pub fn set(&self, session: &Session) {
        if let Err(e) = storage::save_string(TOKEN_KEY, &session.token) {
            log::warn!("⚠️ No se pudo guardar el token: {}", e);
        }
        let user = StoredUser {
            user_id: session.user_id.clone(),
            role: session.role.clone(),
        };
        if let Err(e) = storage::save_to_storage(USER_KEY, &user) {
            log::warn!("⚠️ No se pudo guardar el usuario: {}", e);
        }
    }

    /// Sesión actual, o None si el token falta o está vacío. Un token
    /// presente con payload de usuario ilegible sigue contando como sesión:
    /// la presencia del token es la única señal de autorización.
    pub fn get(&self) -> Option<Session> {
        let token = storage::load_string(TOKEN_KEY)?;
        if token.is_empty() {
            return None;
        }
        let user = storage::load_from_storage::<StoredUser>(USER_KEY).unwrap_or_default();
        Some(Session {
            token,
            user_id: user.user_id,
            role: user.role,
        })
    }

    /// Elimina ambas claves. Idempotente: limpiar un store ya vacío no es
    /// un error.
    pub fn clear(&self) {
        let _ = storage::remove_from_storage(TOKEN_KEY);
        let _ = storage::remove_from_storage(USER_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}

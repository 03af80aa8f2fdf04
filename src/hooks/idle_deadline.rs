// ============================================================================
// IDLE DEADLINE - Primitiva de tarea retardada cancelable
// ============================================================================
// Un único deadline pendiente por instancia: schedule() cancela el anterior
// antes de armar el nuevo, de forma síncrona, así que ningún deadline viejo
// puede disparar después de un reset.
// ============================================================================

use gloo_timers::callback::Timeout;

#[derive(Default)]
pub struct IdleDeadline {
    pending: Option<Timeout>,
}

impl IdleDeadline {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Arma el deadline a `now + ms`. El deadline anterior, si lo hay, se
    /// cancela primero.
    pub fn schedule<F>(&mut self, ms: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        self.pending = Some(Timeout::new(ms, callback));
    }

    /// Cancela el deadline pendiente. Sin deadline pendiente es un no-op.
    pub fn cancel(&mut self) {
        if let Some(timeout) = self.pending.take() {
            timeout.cancel();
        }
    }
}

impl Drop for IdleDeadline {
    fn drop(&mut self) {
        self.cancel();
    }
}

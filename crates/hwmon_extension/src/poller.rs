//! Poller de sensores – um timer fixo, um ciclo por vez.
//!
//! Cada ciclo: query → normalização → `set_value`. Os ciclos rodam em série
//! numa única thread; se uma query passar do intervalo, o ciclo seguinte
//! começa logo depois dela (nunca há duas queries em voo).

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, bounded};
use hwmon_core::normalize::resolve;
use hwmon_core::plugin::ValueSink;
use hwmon_core::provider::SensorProvider;
use hwmon_core::types::PublishedState;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Cria o provider dentro da thread do poller.
pub type ProviderFactory = Box<dyn FnOnce() -> Box<dyn SensorProvider> + Send>;

/// Executa um ciclo: uma query, erros degradam para os defaults.
pub fn run_cycle(provider: &mut dyn SensorProvider) -> PublishedState {
    let result = provider.query();
    if let Err(e) = &result {
        debug!("Query de sensores falhou: {e}");
    }
    resolve(result)
}

/// Handle do poller. Soltar o handle não para a thread.
pub struct PollerHandle {
    stop_tx: Sender<()>,
    thread: Option<JoinHandle<()>>,
}

impl PollerHandle {
    /// Para o poller e aguarda a thread terminar.
    pub fn stop(mut self) {
        let _ = self.stop_tx.send(());
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                error!("Thread do poller terminou com panic");
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }
}

/// Inicia a thread do poller. O primeiro ciclo roda após um intervalo.
pub fn spawn_poller(
    interval: Duration,
    factory: ProviderFactory,
    sink: Arc<dyn ValueSink>,
) -> std::io::Result<PollerHandle> {
    let (stop_tx, stop_rx) = bounded::<()>(1);

    let thread = std::thread::Builder::new()
        .name("hw-poller".into())
        .spawn(move || {
            let mut provider = factory();
            poller_loop(provider.as_mut(), interval, sink.as_ref(), &stop_rx);
        })?;

    info!("Poller iniciado (intervalo {} ms)", interval.as_millis());

    Ok(PollerHandle {
        stop_tx,
        thread: Some(thread),
    })
}

/// Espera `timeout` ou até um pedido de parada. Retorna `true` se deve parar.
fn wait_for_stop(stop_rx: &Receiver<()>, timeout: Duration) -> bool {
    match stop_rx.recv_timeout(timeout) {
        Ok(()) => true,
        Err(RecvTimeoutError::Timeout) => false,
        Err(RecvTimeoutError::Disconnected) => {
            // Handle descartado: roda pelo resto da vida do processo
            std::thread::sleep(timeout);
            false
        }
    }
}

fn poller_loop(
    provider: &mut dyn SensorProvider,
    interval: Duration,
    sink: &dyn ValueSink,
    stop_rx: &Receiver<()>,
) {
    if wait_for_stop(stop_rx, interval) {
        return;
    }

    loop {
        let cycle_start = Instant::now();

        let state = run_cycle(provider);
        debug!(
            "CPU {} {} | GPU {} {} | RAM {}",
            state.get("hw-load-cpu").unwrap_or("-"),
            state.get("hw-temperature-cpu").unwrap_or("-"),
            state.get("hw-load-gpu").unwrap_or("-"),
            state.get("hw-temperature-gpu").unwrap_or("-"),
            state.get("hw-load-ram").unwrap_or("-"),
        );
        sink.set_value(state);

        // Dormir pelo tempo restante do intervalo
        let remaining = interval.saturating_sub(cycle_start.elapsed());
        if wait_for_stop(stop_rx, remaining) {
            break;
        }
    }

    debug!("Poller encerrado");
}

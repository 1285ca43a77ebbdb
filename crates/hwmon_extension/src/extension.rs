//! Extensão "Hardware Monitor" – implementa o contrato do host.
//!
//! Em Windows, `init_extension` inicia o poller de sensores. Em qualquer outra
//! plataforma, publica os defaults uma única vez e nunca consulta sensores.

use hwmon_core::config::PollerConfig;
use hwmon_core::manifest::hardware_monitor_manifest;
use hwmon_core::plugin::{Extension, ExtensionManifest, Platform, ValueSink};
use hwmon_core::types::PublishedState;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::poller::{PollerHandle, ProviderFactory, spawn_poller};

/// Extensão principal.
pub struct HardwareMonitor {
    manifest: ExtensionManifest,
    sink: Arc<dyn ValueSink>,
    platform: Platform,
    interval: Duration,
    factory: Option<ProviderFactory>,
    poller: Option<PollerHandle>,
}

impl HardwareMonitor {
    /// Extensão com o provider WMI do OpenHardwareMonitor.
    pub fn new(sink: Arc<dyn ValueSink>, config: &PollerConfig) -> Self {
        Self::with_provider(
            sink,
            Platform::current(),
            config.interval(),
            wmi_factory(config),
        )
    }

    /// Extensão com plataforma e provider explícitos.
    pub fn with_provider(
        sink: Arc<dyn ValueSink>,
        platform: Platform,
        interval: Duration,
        factory: ProviderFactory,
    ) -> Self {
        Self {
            manifest: hardware_monitor_manifest(),
            sink,
            platform,
            interval,
            factory: Some(factory),
            poller: None,
        }
    }

    pub fn is_polling(&self) -> bool {
        self.poller.as_ref().is_some_and(PollerHandle::is_running)
    }

    /// Para o poller, se estiver ativo.
    pub fn shutdown(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.stop();
            info!("Poller parado");
        }
    }
}

impl Extension for HardwareMonitor {
    fn manifest(&self) -> &ExtensionManifest {
        &self.manifest
    }

    fn init_extension(&mut self) {
        if !self.manifest.supports(self.platform) {
            info!("Plataforma {:?} sem suporte: publicando valores padrão", self.platform);
            self.factory = None;
            self.sink.set_value(PublishedState::defaults());
            return;
        }

        let Some(factory) = self.factory.take() else {
            warn!("init_extension chamado mais de uma vez; ignorando");
            return;
        };

        match spawn_poller(self.interval, factory, Arc::clone(&self.sink)) {
            Ok(handle) => self.poller = Some(handle),
            Err(e) => {
                error!("Falha ao criar thread do poller: {e}");
                self.sink.set_value(PublishedState::defaults());
            }
        }
    }

    fn execute(&self, action: &str, args: &[String]) {
        // Telemetria passiva: nenhuma ação a executar
        debug!("execute({action}, {args:?}) ignorado");
    }
}

#[cfg(windows)]
fn wmi_factory(config: &PollerConfig) -> ProviderFactory {
    use crate::ohm_sensors::WmiSensorProvider;
    use hwmon_core::provider::SensorProvider;

    let query = config.query();
    Box::new(move || -> Box<dyn SensorProvider> { Box::new(WmiSensorProvider::new(query)) })
}

#[cfg(not(windows))]
fn wmi_factory(_config: &PollerConfig) -> ProviderFactory {
    use hwmon_core::provider::{QueryError, SensorProvider};
    use hwmon_core::types::SensorReading;

    /// Nunca consultado: fora do Windows o poller não é iniciado.
    struct Unavailable;

    impl SensorProvider for Unavailable {
        fn query(&mut self) -> Result<Vec<SensorReading>, QueryError> {
            Err(QueryError::Query("WMI disponível apenas no Windows".into()))
        }
    }

    Box::new(|| -> Box<dyn SensorProvider> { Box::new(Unavailable) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::{Receiver, unbounded};
    use hwmon_core::provider::{QueryError, SensorProvider};
    use hwmon_core::types::{SensorReading, SensorType};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingProvider {
        queries: Arc<AtomicUsize>,
    }

    impl SensorProvider for CountingProvider {
        fn query(&mut self) -> Result<Vec<SensorReading>, QueryError> {
            self.queries.fetch_add(1, Ordering::SeqCst);
            Ok(vec![SensorReading::new("Memory", 63.5, SensorType::Load)])
        }
    }

    fn counting_factory(built: Arc<AtomicUsize>, queries: Arc<AtomicUsize>) -> ProviderFactory {
        Box::new(move || -> Box<dyn SensorProvider> {
            built.fetch_add(1, Ordering::SeqCst);
            Box::new(CountingProvider { queries })
        })
    }

    fn channel_sink() -> (Arc<dyn ValueSink>, Receiver<PublishedState>) {
        let (tx, rx) = unbounded();
        let sink: Arc<dyn ValueSink> = Arc::new(move |state: PublishedState| {
            let _ = tx.send(state);
        });
        (sink, rx)
    }

    #[test]
    fn unsupported_platform_publishes_defaults_once() {
        let (sink, rx) = channel_sink();
        let built = Arc::new(AtomicUsize::new(0));
        let queries = Arc::new(AtomicUsize::new(0));
        let mut ext = HardwareMonitor::with_provider(
            sink,
            Platform::Linux,
            Duration::from_millis(5),
            counting_factory(built.clone(), queries.clone()),
        );

        ext.init_extension();
        std::thread::sleep(Duration::from_millis(50));

        assert_eq!(rx.try_recv().unwrap(), PublishedState::defaults());
        assert!(rx.try_recv().is_err());
        assert!(!ext.is_polling());
        assert_eq!(built.load(Ordering::SeqCst), 0);
        assert_eq!(queries.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn windows_platform_polls_provider() {
        let (sink, rx) = channel_sink();
        let built = Arc::new(AtomicUsize::new(0));
        let queries = Arc::new(AtomicUsize::new(0));
        let mut ext = HardwareMonitor::with_provider(
            sink,
            Platform::Windows,
            Duration::from_millis(10),
            counting_factory(built.clone(), queries.clone()),
        );

        ext.init_extension();
        let state = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(ext.is_polling());
        ext.shutdown();

        assert_eq!(state.get("hw-load-ram"), Some("64%"));
        assert_eq!(state.get("hw-load-cpu"), Some("-%"));
        assert_eq!(built.load(Ordering::SeqCst), 1);
        assert!(queries.load(Ordering::SeqCst) >= 1);
        assert!(!ext.is_polling());
    }

    #[test]
    fn zero_interval_config_does_not_spin() {
        let config = PollerConfig {
            interval_ms: 0,
            ..PollerConfig::default()
        };
        let (sink, _rx) = channel_sink();
        let queries = Arc::new(AtomicUsize::new(0));
        let mut ext = HardwareMonitor::with_provider(
            sink,
            Platform::Windows,
            config.interval(),
            counting_factory(Arc::new(AtomicUsize::new(0)), queries.clone()),
        );

        ext.init_extension();
        std::thread::sleep(Duration::from_millis(150));
        ext.shutdown();

        // Período mínimo de 100 ms: no máximo um ciclo em 150 ms (+ folga)
        assert!(queries.load(Ordering::SeqCst) <= 2);
    }

    #[test]
    fn second_init_does_not_spawn_again() {
        let (sink, _rx) = channel_sink();
        let built = Arc::new(AtomicUsize::new(0));
        let mut ext = HardwareMonitor::with_provider(
            sink,
            Platform::Windows,
            Duration::from_secs(60),
            counting_factory(built.clone(), Arc::new(AtomicUsize::new(0))),
        );

        ext.init_extension();
        ext.init_extension();
        assert!(ext.is_polling());
        ext.shutdown();
        assert!(built.load(Ordering::SeqCst) <= 1);
    }

    #[test]
    fn execute_is_a_no_op() {
        let (sink, rx) = channel_sink();
        let ext = HardwareMonitor::with_provider(
            sink,
            Platform::Windows,
            Duration::from_secs(60),
            counting_factory(Arc::new(AtomicUsize::new(0)), Arc::new(AtomicUsize::new(0))),
        );

        ext.execute("hw-cpu", &["hw-load-cpu".to_string()]);
        assert!(rx.try_recv().is_err());
        assert_eq!(ext.manifest().name, "Hardware Monitor");
    }
}

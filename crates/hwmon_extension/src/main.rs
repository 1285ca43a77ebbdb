//! # Hardware Monitor – host avulso
//!
//! Roda a extensão fora do host de deck: cada estado publicado vira uma linha
//! JSON no stdout (logs vão para o stderr).
//!
//! ## Uso
//! ```bash
//! hwmon_extension.exe              # Polling contínuo
//! hwmon_extension.exe --manifest   # Imprime o manifesto e sai
//! ```

use hwmon_core::config::ExtensionConfig;
use hwmon_core::plugin::{Extension, ValueSink};
use hwmon_core::types::PublishedState;
use hwmon_extension::HardwareMonitor;
use std::io::Write;
use std::sync::Arc;
use tracing::{error, info};

/// Sink do host avulso: uma linha JSON por estado publicado.
fn stdout_sink(state: PublishedState) {
    match serde_json::to_string(&state) {
        Ok(line) => {
            let mut out = std::io::stdout().lock();
            if let Err(e) = writeln!(out, "{line}").and_then(|_| out.flush()) {
                error!("Erro ao escrever no stdout: {e}");
            }
        }
        Err(e) => error!("Erro ao serializar estado: {e}"),
    }
}

fn main() {
    // ── Logging (stderr; stdout é do host) ──
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // ── Carregar config (inválida → padrão) ──
    let config = ExtensionConfig::load(&ExtensionConfig::default_path());

    let sink: Arc<dyn ValueSink> = Arc::new(stdout_sink);
    let mut monitor = HardwareMonitor::new(sink, &config.poller);

    if std::env::args().any(|a| a == "--manifest") {
        match serde_json::to_string_pretty(monitor.manifest()) {
            Ok(json) => println!("{json}"),
            Err(e) => error!("Erro ao serializar manifesto: {e}"),
        }
        return;
    }

    // ── Banner ──
    let manifest = monitor.manifest();
    eprintln!();
    eprintln!("══════════════════════════════════════════════");
    eprintln!("   ⚡ {} – ATIVO (Rust)", manifest.name);
    eprintln!("══════════════════════════════════════════════");
    eprintln!("  Namespace: {}", config.poller.namespace);
    eprintln!("  Intervalo: {} ms", config.poller.interval_ms);
    eprintln!("  Ações:     {}", manifest.inputs.len());
    eprintln!("══════════════════════════════════════════════");
    eprintln!();

    monitor.init_extension();

    if !monitor.is_polling() {
        info!("Sem polling nesta plataforma; valores padrão publicados");
        return;
    }

    // O timer roda pela vida do processo
    loop {
        std::thread::park();
    }
}

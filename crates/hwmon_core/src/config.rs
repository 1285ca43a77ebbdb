//! Configuração via TOML (`config.toml` ao lado do executável, somente leitura).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use crate::provider::{DEFAULT_CLASS, DEFAULT_NAMESPACE, SensorQuery};

/// Limites do período do poller (ms).
pub const MIN_INTERVAL_MS: u64 = 100;
pub const MAX_INTERVAL_MS: u64 = 60_000;

/// Configuração do poller de sensores.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PollerConfig {
    /// Namespace WMI (OpenHardwareMonitor ou LibreHardwareMonitor)
    pub namespace: String,
    /// Classe WMI dos sensores
    pub class: String,
    /// Período fixo entre ciclos (ms)
    pub interval_ms: u64,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.into(),
            class: DEFAULT_CLASS.into(),
            interval_ms: 2000,
        }
    }
}

impl PollerConfig {
    /// Período entre ciclos, sempre dentro de 100–60000 ms.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS))
    }

    /// Query com todos os tipos de sensor publicados.
    pub fn query(&self) -> SensorQuery {
        SensorQuery::new()
            .namespace(self.namespace.clone())
            .class(self.class.clone())
    }
}

/// Configuração raiz da extensão.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtensionConfig {
    pub poller: PollerConfig,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            poller: PollerConfig::default(),
        }
    }
}

impl ExtensionConfig {
    /// Lê a configuração (somente leitura; o arquivo nunca é criado).
    ///
    /// Arquivo ausente, ilegível ou inválido → poller com OpenHardwareMonitor
    /// a cada 2000 ms.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            info!(
                "{} não encontrado: poller padrão ({DEFAULT_NAMESPACE}, 2000 ms)",
                path.display()
            );
            return ExtensionConfig::default();
        }

        let config = match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<ExtensionConfig>(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Erro ao parsear {}: {e}; usando poller padrão", path.display());
                    return ExtensionConfig::default();
                }
            },
            Err(e) => {
                warn!("Erro ao ler {}: {e}; usando poller padrão", path.display());
                return ExtensionConfig::default();
            }
        };

        let errors = config.validate();
        if !errors.is_empty() {
            for problem in &errors {
                warn!("Config do poller rejeitada: {problem}");
            }
            warn!("Usando poller padrão ({DEFAULT_NAMESPACE}, 2000 ms)");
            return ExtensionConfig::default();
        }

        info!(
            "Poller configurado por {}: {} a cada {} ms",
            path.display(),
            config.poller.namespace,
            config.poller.interval_ms
        );
        config
    }

    /// Retorna o caminho padrão do config.toml.
    pub fn default_path() -> PathBuf {
        let exe_dir = std::env::current_exe()
            .map(|p| p.parent().unwrap_or(Path::new(".")).to_path_buf())
            .unwrap_or_else(|_| PathBuf::from("."));
        exe_dir.join("config.toml")
    }

    /// Valida a configuração e retorna lista de erros.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !(MIN_INTERVAL_MS..=MAX_INTERVAL_MS).contains(&self.poller.interval_ms) {
            errors.push(format!(
                "Intervalo do poller inválido: {} ms ({MIN_INTERVAL_MS}–{MAX_INTERVAL_MS})",
                self.poller.interval_ms
            ));
        }
        if self.poller.namespace.trim().is_empty() {
            errors.push("Namespace WMI não pode ser vazio".into());
        }
        if self.poller.class.trim().is_empty() {
            errors.push("Classe WMI não pode ser vazia".into());
        }

        errors
    }
}

//! Interface do provider de sensores e construtor da query WQL.

use crate::types::{SensorReading, SensorType};

/// Namespace WMI do OpenHardwareMonitor.
pub const DEFAULT_NAMESPACE: &str = "root\\OpenHardwareMonitor";

/// Classe WMI que expõe os sensores.
pub const DEFAULT_CLASS: &str = "Sensor";

/// Falhas de transporte ao consultar o provider. Nunca fatais.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Falha ao conectar em {namespace}: {reason}")]
    Connection { namespace: String, reason: String },

    #[error("Falha na query: {0}")]
    Query(String),
}

/// Fonte de leituras de sensores, consultada uma vez por ciclo.
///
/// Não exige `Send`: o provider é criado e usado dentro da thread do poller
/// (conexões COM/WMI ficam presas à thread que as criou).
pub trait SensorProvider {
    fn query(&mut self) -> Result<Vec<SensorReading>, QueryError>;
}

/// Descrição da query: namespace, classe e filtro por `SensorType`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorQuery {
    namespace: String,
    class: String,
    sensor_types: Vec<SensorType>,
}

impl Default for SensorQuery {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.into(),
            class: DEFAULT_CLASS.into(),
            sensor_types: SensorType::ALL.to_vec(),
        }
    }
}

impl SensorQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn sensor_types(mut self, types: &[SensorType]) -> Self {
        self.sensor_types = types.to_vec();
        self
    }

    pub fn namespace_path(&self) -> &str {
        &self.namespace
    }

    /// Renderiza a query WQL.
    pub fn wql(&self) -> String {
        let mut wql = format!("SELECT Name, Value, SensorType FROM {}", self.class);
        if !self.sensor_types.is_empty() {
            let filter = self
                .sensor_types
                .iter()
                .map(|t| format!("SensorType='{}'", t.wmi_name()))
                .collect::<Vec<_>>()
                .join(" OR ");
            wql.push_str(" WHERE ");
            wql.push_str(&filter);
        }
        wql
    }
}

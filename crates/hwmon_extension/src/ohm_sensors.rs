//! Sensores via OpenHardwareMonitor WMI.
//!
//! Com o OpenHardwareMonitor (ou LibreHardwareMonitor) rodando, os sensores
//! ficam expostos na classe `Sensor` do namespace `root\OpenHardwareMonitor`
//! (`root\LibreHardwareMonitor` para o LHM).
//!
//! A conexão é aberta sob demanda e descartada após qualquer erro, para que o
//! próximo ciclo reconecte (ex: OHM iniciado depois do host).

use hwmon_core::provider::{QueryError, SensorProvider, SensorQuery};
use hwmon_core::types::SensorReading;
use tracing::{debug, info};
use wmi::{COMLibrary, WMIConnection};

/// Provider WMI. Não é `Send`: deve ser criado na thread do poller.
pub struct WmiSensorProvider {
    query: SensorQuery,
    wql: String,
    com: Option<COMLibrary>,
    conn: Option<WMIConnection>,
}

impl WmiSensorProvider {
    pub fn new(query: SensorQuery) -> Self {
        let wql = query.wql();
        Self {
            query,
            wql,
            com: None,
            conn: None,
        }
    }

    fn connection(&mut self) -> Result<&WMIConnection, QueryError> {
        if self.conn.is_none() {
            let namespace = self.query.namespace_path();
            let connection_error = |e: wmi::WMIError| QueryError::Connection {
                namespace: namespace.to_string(),
                reason: e.to_string(),
            };

            // COM é inicializado uma única vez por thread
            let com = match self.com {
                Some(com) => com,
                None => {
                    let com = COMLibrary::new().map_err(connection_error)?;
                    self.com = Some(com);
                    com
                }
            };

            let conn = WMIConnection::with_namespace_path(namespace, com).map_err(connection_error)?;
            info!("✓ WMI: conectado em {namespace}");
            self.conn = Some(conn);
        }

        self.conn
            .as_ref()
            .ok_or_else(|| QueryError::Query("conexão WMI indisponível".into()))
    }
}

impl SensorProvider for WmiSensorProvider {
    fn query(&mut self) -> Result<Vec<SensorReading>, QueryError> {
        let wql = self.wql.clone();
        let result = self
            .connection()?
            .raw_query::<SensorReading>(&wql)
            .map_err(|e| QueryError::Query(e.to_string()));

        match &result {
            Ok(rows) => debug!("WMI: {} sensores", rows.len()),
            Err(_) => {
                // Reconectar no próximo ciclo
                self.conn = None;
            }
        }

        result
    }
}

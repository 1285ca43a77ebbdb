//! Tipos de dados dos sensores e do estado publicado.
//!
//! `SensorReading` espelha a linha WMI da classe `Sensor` do
//! OpenHardwareMonitor; `PublishedState` é o mapa entregue ao host a cada ciclo.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::tables::DEFAULT_VALUES;

// ──────────────────────────────────────────────
// SensorType
// ──────────────────────────────────────────────

/// Categoria de sensor reportada pelo provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorType {
    Load,
    Temperature,
    Data,
}

impl SensorType {
    /// Todos os tipos consultados, na ordem do filtro WQL.
    pub const ALL: [SensorType; 3] = [SensorType::Load, SensorType::Temperature, SensorType::Data];

    /// Nome exato usado pelo provider (`'Load'`, `'Temperature'`, `'Data'`).
    pub fn wmi_name(self) -> &'static str {
        match self {
            SensorType::Load => "Load",
            SensorType::Temperature => "Temperature",
            SensorType::Data => "Data",
        }
    }

    /// Segmento minúsculo usado na chave composta `hw-<tipo>-<categoria>`.
    pub fn key_segment(self) -> &'static str {
        match self {
            SensorType::Load => "load",
            SensorType::Temperature => "temperature",
            SensorType::Data => "data",
        }
    }

    /// Interpreta o campo `SensorType` da linha WMI (case-insensitive).
    /// Tipos desconhecidos retornam `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.wmi_name().eq_ignore_ascii_case(raw))
    }
}

// ──────────────────────────────────────────────
// SensorReading
// ──────────────────────────────────────────────

/// Uma leitura bruta do provider (`Name`, `Value`, `SensorType`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SensorReading {
    pub name: String,
    pub value: f32,
    pub sensor_type: String,
}

impl SensorReading {
    pub fn new(name: impl Into<String>, value: f32, sensor_type: SensorType) -> Self {
        Self {
            name: name.into(),
            value,
            sensor_type: sensor_type.wmi_name().to_string(),
        }
    }
}

// ──────────────────────────────────────────────
// PublishedState
// ──────────────────────────────────────────────

/// Mapa `chave → valor formatado` entregue ao sink do host.
///
/// As chaves são sempre as da tabela de defaults: [`PublishedState::set`]
/// ignora qualquer chave fora dela.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PublishedState {
    values: BTreeMap<&'static str, String>,
}

impl PublishedState {
    /// Cópia nova da tabela de defaults.
    pub fn defaults() -> Self {
        Self {
            values: DEFAULT_VALUES
                .iter()
                .map(|&(key, placeholder)| (key, placeholder.to_string()))
                .collect(),
        }
    }

    /// Sobrescreve uma chave existente. Retorna `false` se a chave não é publicada.
    pub fn set(&mut self, key: &str, value: String) -> bool {
        match self.values.get_mut(key) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `true` se nenhuma chave difere do placeholder.
    pub fn is_default(&self) -> bool {
        *self == Self::defaults()
    }
}

impl Default for PublishedState {
    fn default() -> Self {
        Self::defaults()
    }
}

// ──────────────────────────────────────────────
// Testes
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensor_type_parse_is_case_insensitive() {
        assert_eq!(SensorType::parse("Load"), Some(SensorType::Load));
        assert_eq!(SensorType::parse("temperature"), Some(SensorType::Temperature));
        assert_eq!(SensorType::parse("DATA"), Some(SensorType::Data));
        assert_eq!(SensorType::parse("Fan"), None);
        assert_eq!(SensorType::parse(" Load"), None);
        assert_eq!(SensorType::parse(""), None);
    }

    #[test]
    fn defaults_have_nine_keys() {
        let state = PublishedState::defaults();
        assert_eq!(state.len(), 9);
        assert!(state.is_default());
        assert_eq!(state.get("hw-load-cpu"), Some("-%"));
        assert_eq!(state.get("hw-temperature-hdd"), Some("-°C"));
        assert_eq!(state.get("hw-data-avail"), Some("?GB"));
    }

    #[test]
    fn set_rejects_unknown_keys() {
        let mut state = PublishedState::defaults();
        assert!(!state.set("hw-load-foo", "1%".into()));
        assert_eq!(state.get("hw-load-foo"), None);
        assert_eq!(state.len(), 9);

        assert!(state.set("hw-load-cpu", "12%".into()));
        assert_eq!(state.get("hw-load-cpu"), Some("12%"));
        assert!(!state.is_default());
    }

    #[test]
    fn reading_deserializes_from_pascal_case() {
        let toml_row = r#"
Name = "CPU Package"
Value = 55.0
SensorType = "Temperature"
"#;
        let reading: SensorReading = toml::from_str(toml_row).unwrap();
        assert_eq!(
            reading,
            SensorReading::new("CPU Package", 55.0, SensorType::Temperature)
        );
    }
}

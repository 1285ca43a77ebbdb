//! Normalização: leituras brutas → estado publicado.
//!
//! Cada ciclo parte de uma cópia nova dos defaults. Um sensor que some do
//! resultado volta ao placeholder, não mantém o último valor.

use crate::provider::QueryError;
use crate::tables;
use crate::types::{PublishedState, SensorReading, SensorType};

/// Chave composta `hw-<tipo>-<categoria>`.
pub fn display_key(sensor_type: SensorType, category: &str) -> String {
    format!("hw-{}-{}", sensor_type.key_segment(), category)
}

/// Valor arredondado + sufixo (ex: `41.6` Load → `"42%"`).
///
/// Arredonda meio para cima (`2.5 → 3`, `-2.5 → -2`).
pub fn display_value(sensor_type: SensorType, value: f32) -> String {
    format!("{}{}", round_half_up(value), tables::suffix(sensor_type))
}

fn round_half_up(value: f32) -> i64 {
    (f64::from(value) + 0.5).floor() as i64
}

/// Converte uma leitura em `(chave, valor)`, ou `None` se não reconhecida.
fn map_reading(reading: &SensorReading) -> Option<(String, String)> {
    let sensor_type = SensorType::parse(&reading.sensor_type)?;
    let category = tables::category(sensor_type, &reading.name)?;
    if !reading.value.is_finite() {
        return None;
    }
    Some((
        display_key(sensor_type, category),
        display_value(sensor_type, reading.value),
    ))
}

/// Sobrepõe as leituras reconhecidas a uma cópia dos defaults.
/// Chaves duplicadas: vale a última, na ordem do provider.
pub fn normalize(readings: &[SensorReading]) -> PublishedState {
    readings
        .iter()
        .filter_map(map_reading)
        .fold(PublishedState::defaults(), |mut state, (key, value)| {
            state.set(&key, value);
            state
        })
}

/// Resultado da query → estado publicado. Erro ou vazio → defaults.
pub fn resolve(result: Result<Vec<SensorReading>, QueryError>) -> PublishedState {
    match result {
        Ok(readings) if !readings.is_empty() => normalize(&readings),
        _ => PublishedState::defaults(),
    }
}

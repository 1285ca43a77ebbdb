//! Tabelas estáticas: categorias, sufixos e valores padrão.
//!
//! Nunca mutadas. `DEFAULT_VALUES` define o conjunto fechado de chaves publicadas.

use crate::types::SensorType;

/// `Name` do provider → categoria curta, para sensores de carga.
const LOAD_CATEGORIES: &[(&str, &str)] = &[
    ("Memory", "ram"),
    ("CPU Total", "cpu"),
    ("GPU Core", "gpu"),
    ("Used Space", "hdd"),
];

const TEMPERATURE_CATEGORIES: &[(&str, &str)] = &[
    ("CPU Package", "cpu"),
    ("GPU Core", "gpu"),
    ("Temperature", "hdd"),
];

const DATA_CATEGORIES: &[(&str, &str)] = &[
    ("Used Memory", "used"),
    ("Available Memory", "avail"),
];

/// Chave `hw-<tipo>-<categoria>` → placeholder exibido sem dados.
pub const DEFAULT_VALUES: [(&str, &str); 9] = [
    ("hw-load-cpu", "-%"),
    ("hw-load-gpu", "-%"),
    ("hw-load-ram", "-%"),
    ("hw-load-hdd", "-%"),
    ("hw-temperature-cpu", "-°C"),
    ("hw-temperature-gpu", "-°C"),
    ("hw-temperature-hdd", "-°C"),
    ("hw-data-used", "?GB"),
    ("hw-data-avail", "?GB"),
];

fn categories(sensor_type: SensorType) -> &'static [(&'static str, &'static str)] {
    match sensor_type {
        SensorType::Load => LOAD_CATEGORIES,
        SensorType::Temperature => TEMPERATURE_CATEGORIES,
        SensorType::Data => DATA_CATEGORIES,
    }
}

/// Categoria de um sensor, ou `None` se o par (tipo, nome) não é reconhecido.
/// A comparação do nome é exata.
pub fn category(sensor_type: SensorType, name: &str) -> Option<&'static str> {
    categories(sensor_type)
        .iter()
        .find(|(sensor_name, _)| *sensor_name == name)
        .map(|&(_, category)| category)
}

/// Sufixo de unidade para exibição.
pub fn suffix(sensor_type: SensorType) -> &'static str {
    match sensor_type {
        SensorType::Load => "%",
        SensorType::Temperature => "°C",
        SensorType::Data => "GB",
    }
}

/// `true` se a chave pertence ao conjunto publicado.
pub fn is_published_key(key: &str) -> bool {
    DEFAULT_VALUES.iter().any(|(k, _)| *k == key)
}

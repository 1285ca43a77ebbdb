//! Manifesto da extensão "Hardware Monitor".

use crate::plugin::{ExtensionManifest, InputDefinition, InputField, InputItem, InputMethod, Platform};

pub const EXTENSION_NAME: &str = "Hardware Monitor";

const ICON: &str = "headphones";
const MODE: &str = "custom-value";
const FONT_ICON: &str = "fas";
const COLOR: &str = "#8E44AD";

fn monitor_input(label: &str, value: &str, items: &[(&str, &str)]) -> InputDefinition {
    InputDefinition {
        label: label.into(),
        value: value.into(),
        icon: ICON.into(),
        mode: MODE.into(),
        font_icon: FONT_ICON.into(),
        color: COLOR.into(),
        input: vec![InputField {
            label: "Select monitor".into(),
            kind: InputMethod::InputSelect,
            items: items
                .iter()
                .map(|&(value, label)| InputItem::new(value, label))
                .collect(),
        }],
    }
}

/// Manifesto registrado no host: só Windows, quatro ações, sem configs.
pub fn hardware_monitor_manifest() -> ExtensionManifest {
    ExtensionManifest {
        name: EXTENSION_NAME.into(),
        platforms: vec![Platform::Windows],
        inputs: vec![
            monitor_input(
                "Display CPU Stats",
                "hw-cpu",
                &[
                    ("hw-load-cpu", "CPU Load"),
                    ("hw-temperature-cpu", "CPU Temperature"),
                ],
            ),
            monitor_input(
                "Display GPU Stats",
                "hw-gpu",
                &[
                    ("hw-load-gpu", "GPU Load"),
                    ("hw-temperature-gpu", "GPU Temperature"),
                ],
            ),
            monitor_input(
                "Display RAM Stats",
                "hw-ram",
                &[
                    ("hw-load-ram", "RAM Load"),
                    ("hw-data-used", "RAM Used GB"),
                    ("hw-data-avail", "RAM Available GB"),
                ],
            ),
            monitor_input(
                "Display HDD Stats",
                "hw-hdd",
                &[
                    ("hw-load-hdd", "HDD Load"),
                    ("hw-temperature-hdd", "HDD Temperature"),
                ],
            ),
        ],
        configs: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{DEFAULT_VALUES, is_published_key};

    #[test]
    fn manifest_targets_windows_only() {
        let m = hardware_monitor_manifest();
        assert_eq!(m.name, "Hardware Monitor");
        assert!(m.supports(Platform::Windows));
        assert!(!m.supports(Platform::Linux));
        assert!(m.configs.is_empty());
        assert_eq!(m.inputs.len(), 4);
    }

    #[test]
    fn every_item_is_a_published_key() {
        let m = hardware_monitor_manifest();
        for input in &m.inputs {
            for field in &input.input {
                for item in &field.items {
                    assert!(is_published_key(&item.value), "{} não é publicada", item.value);
                }
            }
        }
    }

    #[test]
    fn every_published_key_is_selectable() {
        let m = hardware_monitor_manifest();
        let selectable: Vec<&str> = m
            .inputs
            .iter()
            .flat_map(|i| i.input.iter())
            .flat_map(|f| f.items.iter())
            .map(|item| item.value.as_str())
            .collect();
        for (key, _) in DEFAULT_VALUES {
            assert!(selectable.contains(&key), "{key} sem ação no host");
        }
    }

    #[test]
    fn manifest_serializes_host_field_names() {
        let json = serde_json::to_value(hardware_monitor_manifest()).unwrap();
        assert_eq!(json["platforms"][0], "windows");
        assert_eq!(json["inputs"][0]["fontIcon"], "fas");
        assert_eq!(json["inputs"][0]["color"], "#8E44AD");
        assert_eq!(json["inputs"][2]["input"][0]["items"][1]["value"], "hw-data-used");
    }
}

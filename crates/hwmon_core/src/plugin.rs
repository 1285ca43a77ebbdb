//! Contrato de plugin com o host (deck).
//!
//! O host registra o manifesto, entrega um [`ValueSink`] na construção,
//! chama [`Extension::init_extension`] uma vez na inicialização e
//! [`Extension::execute`] quando o usuário dispara uma ação.

use serde::Serialize;

use crate::types::PublishedState;

// ──────────────────────────────────────────────
// Plataformas
// ──────────────────────────────────────────────

/// Plataformas alvo reconhecidas pelo host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Linux,
    Mac,
    Other,
}

impl Platform {
    /// Plataforma do processo atual.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "macos") {
            Platform::Mac
        } else {
            Platform::Other
        }
    }
}

// ──────────────────────────────────────────────
// Definições de input
// ──────────────────────────────────────────────

/// Tipo de campo de input exibido pelo host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputMethod {
    InputSelect,
}

/// Uma opção de um campo select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputItem {
    pub value: String,
    pub label: String,
}

impl InputItem {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Campo aninhado de uma ação.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputField {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: InputMethod,
    pub items: Vec<InputItem>,
}

/// Ação configurável pelo usuário no host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDefinition {
    pub label: String,
    pub value: String,
    pub icon: String,
    pub mode: String,
    pub font_icon: String,
    pub color: String,
    pub input: Vec<InputField>,
}

/// Tudo o que o host precisa para registrar a extensão.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionManifest {
    pub name: String,
    pub platforms: Vec<Platform>,
    pub inputs: Vec<InputDefinition>,
    pub configs: Vec<InputField>,
}

impl ExtensionManifest {
    pub fn supports(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }
}

// ──────────────────────────────────────────────
// Sink e extensão
// ──────────────────────────────────────────────

/// Destino dos valores publicados (`setValue` do host). Fire-and-forget.
pub trait ValueSink: Send + Sync {
    fn set_value(&self, state: PublishedState);
}

impl<F> ValueSink for F
where
    F: Fn(PublishedState) + Send + Sync,
{
    fn set_value(&self, state: PublishedState) {
        self(state)
    }
}

/// Pontos de entrada chamados pelo host.
pub trait Extension {
    fn manifest(&self) -> &ExtensionManifest;

    /// Chamado uma vez na inicialização do host.
    fn init_extension(&mut self);

    /// Ação disparada pelo usuário.
    fn execute(&self, action: &str, args: &[String]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn closures_are_sinks() {
        let received = Mutex::new(Vec::new());
        let sink = |state: PublishedState| received.lock().unwrap().push(state);
        sink.set_value(PublishedState::defaults());
        assert_eq!(received.lock().unwrap().len(), 1);
    }

    #[test]
    fn current_platform_matches_cfg() {
        assert_eq!(Platform::current() == Platform::Windows, cfg!(windows));
    }

    #[test]
    fn input_method_serializes_kebab_case() {
        let field = InputField {
            label: "Select monitor".into(),
            kind: InputMethod::InputSelect,
            items: vec![InputItem::new("hw-load-cpu", "CPU Load")],
        };
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "input-select");
        assert_eq!(json["items"][0]["value"], "hw-load-cpu");
    }
}

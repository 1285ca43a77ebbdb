//! # Hardware Monitor Core
//!
//! Crate independente de plataforma da extensão "Hardware Monitor": tabelas
//! estáticas de sensores, normalização das leituras, contrato com o host e
//! configuração TOML.
//!
//! ## Módulos
//! - [`types`] – `SensorType`, `SensorReading`, `PublishedState`
//! - [`tables`] – Categorias, sufixos e valores padrão
//! - [`normalize`] – Leituras brutas → estado publicado
//! - [`provider`] – Trait do provider e query WQL
//! - [`plugin`] – Manifesto, `ValueSink` e `Extension`
//! - [`manifest`] – Manifesto da extensão
//! - [`config`] – Configuração via TOML

pub mod types;
pub mod tables;
pub mod normalize;
pub mod provider;
pub mod plugin;
pub mod manifest;
pub mod config;

// Re-exports convenientes
pub use types::{PublishedState, SensorReading, SensorType};
pub use normalize::{normalize, resolve};
pub use provider::{QueryError, SensorProvider, SensorQuery};
pub use plugin::{Extension, ExtensionManifest, Platform, ValueSink};
pub use config::{ExtensionConfig, PollerConfig};

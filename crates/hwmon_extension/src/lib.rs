//! # Hardware Monitor
//!
//! Extensão para o host de deck: consulta o OpenHardwareMonitor via WMI a cada
//! poucos segundos e publica nove valores formatados (carga, temperatura e
//! memória de CPU/GPU/RAM/HDD).
//!
//! - [`extension`] – `HardwareMonitor` (`init_extension` / `execute`)
//! - [`poller`] – Thread do timer e ciclo query → normalização → sink
//! - `ohm_sensors` – Provider WMI (somente Windows)

pub mod extension;
pub mod poller;
#[cfg(windows)]
pub mod ohm_sensors;

pub use extension::HardwareMonitor;
pub use poller::{PollerHandle, ProviderFactory, run_cycle, spawn_poller};

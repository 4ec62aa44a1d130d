use crate::config::DeviceConfig;
use crate::types::{DeviceType, OptimizationProfile};

/// Selects the content-density profile for a device class. Unknown devices
/// get the conservative phone profile; the pipeline never rejects a device.
pub fn select_optimization(device: DeviceType, config: &DeviceConfig) -> OptimizationProfile {
    match device {
        DeviceType::Phone => config.phone.clone(),
        DeviceType::Tablet => config.tablet.clone(),
        DeviceType::Unknown => config.phone.clone(),
    }
}

//! CPU vendor and microarchitecture detection, used to select the optimal
//! execution provider and loading strategy for a given host.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{HardwareError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CpuVendor {
    Intel,
    Amd,
    Apple,
    Arm,
    Unknown,
}

impl fmt::Display for CpuVendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Intel => write!(f, "Intel"),
            Self::Amd => write!(f, "AMD"),
            Self::Apple => write!(f, "Apple"),
            Self::Arm => write!(f, "ARM"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CpuArchitecture {
    AmdZen1,
    AmdZen2,
    AmdZen3,
    AmdZen4,
    AmdZen5,

    IntelHaswell,
    IntelBroadwell,
    IntelSkylake,
    IntelIcelake,
    IntelRocketlake,
    IntelAlderlake,

    AppleM1,
    AppleM2,
    AppleM3,

    ArmV8,
    ArmV9,

    Portable,
    Unknown,
}

impl CpuArchitecture {
    /// Binary variant name used to select an optimal prebuilt artifact for
    /// this microarchitecture.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::AmdZen1 => "amd-zen1",
            Self::AmdZen2 => "amd-zen2",
            Self::AmdZen3 => "amd-zen3",
            Self::AmdZen4 => "amd-zen4",
            Self::AmdZen5 => "amd-zen5",

            Self::IntelHaswell => "intel-haswell",
            Self::IntelBroadwell => "intel-broadwell",
            Self::IntelSkylake => "intel-skylake",
            Self::IntelIcelake => "intel-icelake",
            Self::IntelRocketlake => "intel-rocketlake",
            Self::IntelAlderlake => "intel-alderlake",

            Self::AppleM1 | Self::AppleM2 | Self::AppleM3 => "portable",
            Self::ArmV8 | Self::ArmV9 => "portable",

            Self::Portable | Self::Unknown => "portable",
        }
    }
}

impl fmt::Display for CpuArchitecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.variant_name())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuInfo {
    pub vendor: CpuVendor,
    pub architecture: CpuArchitecture,
    pub model_name: String,
    pub cores: u32,
    pub threads: u32,
    pub family: Option<u32>,
    pub model: Option<u32>,
    pub stepping: Option<u32>,
}

impl CpuInfo {
    pub fn variant_name(&self) -> &'static str {
        self.architecture.variant_name()
    }
}

/// Detects CPU information for the current platform.
pub fn detect_cpu() -> Result<CpuInfo> {
    #[cfg(target_os = "windows")]
    return crate::platform_windows::detect_cpu();

    #[cfg(target_os = "linux")]
    return crate::platform_linux::detect_cpu();

    #[cfg(target_os = "macos")]
    return crate::platform_macos::detect_cpu();

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    Err(HardwareError::UnsupportedPlatform(std::env::consts::OS.to_string()))
}

/// Coarse architecture detection from a reported model name string, refined
/// later by `refine_from_cpuid` when family/model numbers are available.
pub(crate) fn detect_from_name(model_name: &str, vendor: CpuVendor) -> CpuArchitecture {
    let name_lower = model_name.to_lowercase();

    match vendor {
        CpuVendor::Amd => {
            if name_lower.contains("ryzen") {
                if name_lower.contains("9950")
                    || name_lower.contains("9900")
                    || name_lower.contains("9700")
                    || name_lower.contains("9600")
                {
                    return CpuArchitecture::AmdZen5;
                }
                if name_lower.contains("7950")
                    || name_lower.contains("7900")
                    || name_lower.contains("7700")
                    || name_lower.contains("7600")
                {
                    return CpuArchitecture::AmdZen4;
                }
                if name_lower.contains("5950")
                    || name_lower.contains("5900")
                    || name_lower.contains("5800")
                    || name_lower.contains("5700")
                    || name_lower.contains("5600")
                {
                    return CpuArchitecture::AmdZen3;
                }
                if name_lower.contains("3950")
                    || name_lower.contains("3900")
                    || name_lower.contains("3700")
                    || name_lower.contains("3600")
                    || name_lower.contains("3300")
                {
                    return CpuArchitecture::AmdZen2;
                }
                if name_lower.contains("2700")
                    || name_lower.contains("2600")
                    || name_lower.contains("2400")
                    || name_lower.contains("2200")
                {
                    return CpuArchitecture::AmdZen2;
                }
                if name_lower.contains("1800")
                    || name_lower.contains("1700")
                    || name_lower.contains("1600")
                    || name_lower.contains("1500")
                    || name_lower.contains("1400")
                {
                    return CpuArchitecture::AmdZen1;
                }
            }

            if name_lower.contains("epyc") {
                if name_lower.contains('9') {
                    return CpuArchitecture::AmdZen4;
                }
                if name_lower.contains('7') {
                    return CpuArchitecture::AmdZen3;
                }
                return CpuArchitecture::AmdZen2;
            }
        }

        CpuVendor::Intel => {
            if name_lower.contains("12th")
                || name_lower.contains("13th")
                || name_lower.contains("14th")
                || name_lower.contains("i9-12")
                || name_lower.contains("i7-12")
                || name_lower.contains("i9-13")
                || name_lower.contains("i7-13")
                || name_lower.contains("i9-14")
                || name_lower.contains("i7-14")
            {
                return CpuArchitecture::IntelAlderlake;
            }

            if name_lower.contains("rocket lake") {
                return CpuArchitecture::IntelRocketlake;
            }
            if name_lower.contains("i9-11") || name_lower.contains("i7-11") {
                if name_lower.contains('k') || name_lower.contains("desktop") {
                    return CpuArchitecture::IntelRocketlake;
                }
                return CpuArchitecture::IntelIcelake;
            }

            if name_lower.contains("ice lake") {
                return CpuArchitecture::IntelIcelake;
            }
            if name_lower.contains("i9-10") || name_lower.contains("i7-10") {
                if name_lower.contains("-g") || name_lower.contains("ice") {
                    return CpuArchitecture::IntelIcelake;
                }
                return CpuArchitecture::IntelSkylake;
            }

            if name_lower.contains("6th")
                || name_lower.contains("7th")
                || name_lower.contains("8th")
                || name_lower.contains("9th")
                || name_lower.contains("i9-9")
                || name_lower.contains("i7-9")
                || name_lower.contains("i7-8")
                || name_lower.contains("i7-7")
                || name_lower.contains("i7-6")
            {
                return CpuArchitecture::IntelSkylake;
            }

            if name_lower.contains("broadwell") || name_lower.contains("5th") || name_lower.contains("i7-5") {
                return CpuArchitecture::IntelBroadwell;
            }

            if name_lower.contains("haswell") || name_lower.contains("4th") || name_lower.contains("i7-4") {
                return CpuArchitecture::IntelHaswell;
            }

            if name_lower.contains("xeon") {
                if name_lower.contains("platinum") || name_lower.contains("gold") {
                    return CpuArchitecture::IntelSkylake;
                }
                return CpuArchitecture::IntelHaswell;
            }
        }

        CpuVendor::Apple => {
            if name_lower.contains("m3") {
                return CpuArchitecture::AppleM3;
            }
            if name_lower.contains("m2") {
                return CpuArchitecture::AppleM2;
            }
            if name_lower.contains("m1") || name_lower.contains("apple") {
                return CpuArchitecture::AppleM1;
            }
        }

        _ => {}
    }

    CpuArchitecture::Portable
}

/// Refines a name-based guess using CPUID family/model numbers, when the
/// platform detector can read them.
pub(crate) fn refine_from_cpuid(initial: CpuArchitecture, vendor: CpuVendor, family: u32, model: u32) -> CpuArchitecture {
    match vendor {
        CpuVendor::Amd => {
            if family == 25 {
                if model >= 0x60 {
                    return CpuArchitecture::AmdZen4;
                }
                return CpuArchitecture::AmdZen3;
            }
            if family == 23 {
                if model >= 0x10 {
                    return CpuArchitecture::AmdZen2;
                }
                return CpuArchitecture::AmdZen1;
            }
            if family == 26 {
                return CpuArchitecture::AmdZen5;
            }
        }

        CpuVendor::Intel => {
            if family == 6 {
                if matches!(model, 0x97 | 0x9A | 0xB7 | 0xBA | 0xBF) {
                    return CpuArchitecture::IntelAlderlake;
                }
                if model == 0xA7 {
                    return CpuArchitecture::IntelRocketlake;
                }
                if matches!(model, 0x7D | 0x7E | 0x6A | 0x6C) {
                    return CpuArchitecture::IntelIcelake;
                }
                if matches!(model, 0x4E | 0x5E | 0x8E | 0x9E | 0xA5 | 0xA6) {
                    return CpuArchitecture::IntelSkylake;
                }
                if matches!(model, 0x3D | 0x47 | 0x4F | 0x56) {
                    return CpuArchitecture::IntelBroadwell;
                }
                if matches!(model, 0x3C | 0x3F | 0x45 | 0x46) {
                    return CpuArchitecture::IntelHaswell;
                }
            }
        }

        _ => {}
    }

    initial
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_from_name_recognizes_current_gen_ryzen() {
        assert_eq!(detect_from_name("AMD Ryzen 9 7950X", CpuVendor::Amd), CpuArchitecture::AmdZen4);
    }

    #[test]
    fn detect_from_name_falls_back_to_portable_for_unknown_model() {
        assert_eq!(detect_from_name("Some Unrecognized CPU", CpuVendor::Arm), CpuArchitecture::Portable);
    }

    #[test]
    fn refine_from_cpuid_overrides_name_guess_for_amd_family_25() {
        let refined = refine_from_cpuid(CpuArchitecture::Portable, CpuVendor::Amd, 25, 0x10);
        assert_eq!(refined, CpuArchitecture::AmdZen3);
    }

    #[test]
    fn variant_name_is_stable_per_architecture() {
        assert_eq!(CpuArchitecture::AmdZen2.variant_name(), "amd-zen2");
        assert_eq!(CpuArchitecture::IntelAlderlake.variant_name(), "intel-alderlake");
        assert_eq!(CpuArchitecture::Unknown.variant_name(), "portable");
    }
}

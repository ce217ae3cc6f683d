//! CPU capability detection.

use devprobe_core::ports::CpuCapabilityPort;

/// Highest vector instruction set the CPU backend can use on this host.
///
/// Returns `"avx2"`, `"avx"`, or `""` when neither is present (including
/// every non-x86 host).
pub fn detect_cpu_capability() -> &'static str {
    #[cfg(target_arch = "x86_64")]
    {
        if std::arch::is_x86_feature_detected!("avx2") {
            return "avx2";
        }
        if std::arch::is_x86_feature_detected!("avx") {
            return "avx";
        }
    }

    ""
}

/// `CpuCapabilityPort` using runtime feature detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCpuCapability;

impl CpuCapabilityPort for DefaultCpuCapability {
    fn capability(&self) -> String {
        detect_cpu_capability().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_is_known_tag() {
        let tag = DefaultCpuCapability.capability();
        assert!(["avx2", "avx", ""].contains(&tag.as_str()));
    }

    #[test]
    #[cfg(not(target_arch = "x86_64"))]
    fn test_non_x86_has_no_tag() {
        assert_eq!(detect_cpu_capability(), "");
    }
}

//! Durability mode configuration
//!
//! Controls action log sync behavior (Standard, Always).

/// Durability mode for action log appends
///
/// Every append is flushed out of the process before `append` returns; the
/// mode only decides whether the file is additionally fsynced.
///
/// # Modes
///
/// | Mode | flush | fsync | Data Loss Window |
/// |------|-------|-------|------------------|
/// | Standard | Every append | On close | OS crash only |
/// | Always | Every append | Every append | Zero |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurabilityMode {
    /// Flush to the OS after every append (the default)
    ///
    /// Survives process crashes. An OS crash or power loss may drop
    /// the tail of the log.
    #[default]
    Standard,

    /// Flush and fsync after every append (slow, maximum durability)
    Always,
}

impl DurabilityMode {
    /// Check if this mode requires an fsync on every append
    pub fn requires_immediate_fsync(&self) -> bool {
        matches!(self, DurabilityMode::Always)
    }

    /// Human-readable description of the mode
    pub fn description(&self) -> &'static str {
        match self {
            DurabilityMode::Standard => "Standard (flush every append)",
            DurabilityMode::Always => "Always sync (safest, slowest)",
        }
    }

    /// Parse the configuration spelling (`"standard"` / `"always"`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "standard" => Some(DurabilityMode::Standard),
            "always" => Some(DurabilityMode::Always),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard() {
        assert_eq!(DurabilityMode::default(), DurabilityMode::Standard);
        assert!(!DurabilityMode::default().requires_immediate_fsync());
    }

    #[test]
    fn test_always_fsyncs() {
        assert!(DurabilityMode::Always.requires_immediate_fsync());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(DurabilityMode::from_name("standard"), Some(DurabilityMode::Standard));
        assert_eq!(DurabilityMode::from_name("always"), Some(DurabilityMode::Always));
        assert_eq!(DurabilityMode::from_name("Always"), None);
        assert_eq!(DurabilityMode::from_name("cache"), None);
    }
}

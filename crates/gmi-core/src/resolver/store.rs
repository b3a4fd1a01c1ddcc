//! Read-only access to the OS state the resolver depends on.

use std::fs;
use std::path::Path;

/// Registry hive a value lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hive {
    LocalMachine,
    CurrentUser,
}

/// One named value under a registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistryValue {
    pub hive: Hive,
    pub subkey: &'static str,
    pub name: &'static str,
}

/// System-wide Steam install location (written by the Steam installer).
pub const STEAM_MACHINE_INSTALL_PATH: RegistryValue = RegistryValue {
    hive: Hive::LocalMachine,
    subkey: r"SOFTWARE\WOW6432Node\Valve\Steam",
    name: "InstallPath",
};

/// Per-user Steam location, used when the machine-wide value is missing.
pub const STEAM_USER_PATH: RegistryValue = RegistryValue {
    hive: Hive::CurrentUser,
    subkey: r"Software\Valve\Steam",
    name: "SteamPath",
};

/// Source of configuration values and auxiliary files.
///
/// Every failure is reported as `None`; callers treat it as "not found" and
/// move on to the next fallback.
pub trait SteamConfigStore {
    fn registry_value(&self, value: &RegistryValue) -> Option<String>;

    fn read_text(&self, path: &Path) -> Option<String> {
        fs::read_to_string(path).ok()
    }
}

/// Store backed by the real registry and filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemStore;

impl SteamConfigStore for SystemStore {
    #[cfg(windows)]
    fn registry_value(&self, value: &RegistryValue) -> Option<String> {
        use winreg::enums::{HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE};
        use winreg::RegKey;

        let root = match value.hive {
            Hive::LocalMachine => RegKey::predef(HKEY_LOCAL_MACHINE),
            Hive::CurrentUser => RegKey::predef(HKEY_CURRENT_USER),
        };
        let key = root.open_subkey(value.subkey).ok()?;
        key.get_value::<String, _>(value.name).ok()
    }

    #[cfg(not(windows))]
    fn registry_value(&self, value: &RegistryValue) -> Option<String> {
        tracing::debug!(subkey = value.subkey, name = value.name, "no registry on this platform");
        None
    }
}

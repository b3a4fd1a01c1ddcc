//! Addons directory discovery.
//!
//! Steam root comes from the registry (machine-wide value, then per-user
//! value). The default library is checked first; `libraryfolders.vdf` is only
//! read when the default library has no Garry's Mod install.

mod library_folders;
mod store;

use std::path::{Path, PathBuf};

pub use library_folders::library_roots;
pub use store::{
    Hive, RegistryValue, SteamConfigStore, SystemStore, STEAM_MACHINE_INSTALL_PATH,
    STEAM_USER_PATH,
};

/// Addons directory relative to a Steam library root.
pub const ADDONS_SUBDIR: &str = "steamapps/common/GarrysMod/garrysmod/addons";

/// Library index relative to the Steam root.
pub const LIBRARY_FOLDERS_FILE: &str = "steamapps/libraryfolders.vdf";

/// Steam install root from the registry, trying each fallback in order.
pub fn steam_root(store: &dyn SteamConfigStore) -> Option<PathBuf> {
    [STEAM_MACHINE_INSTALL_PATH, STEAM_USER_PATH]
        .iter()
        .find_map(|value| {
            let found = store.registry_value(value)?;
            tracing::debug!(subkey = value.subkey, name = value.name, "steam root from registry");
            Some(PathBuf::from(found))
        })
}

/// `<library>/steamapps/common/GarrysMod/garrysmod/addons`.
pub fn addons_dir_in(library: &Path) -> PathBuf {
    library.join(ADDONS_SUBDIR)
}

/// Resolve the addons directory of an existing Garry's Mod install.
///
/// Returns `None` when no Steam root is configured or no candidate exists.
pub fn resolve_addons_dir(store: &dyn SteamConfigStore) -> Option<PathBuf> {
    let root = steam_root(store)?;

    let primary = addons_dir_in(&root);
    if primary.exists() {
        tracing::info!("addons directory: {}", primary.display());
        return Some(primary);
    }

    let index = root.join(LIBRARY_FOLDERS_FILE);
    let found = store
        .read_text(&index)
        .map(|content| library_roots(&content))
        .unwrap_or_default()
        .into_iter()
        .map(|lib| addons_dir_in(&lib))
        .find(|candidate| candidate.exists());

    match &found {
        Some(dir) => tracing::info!("addons directory (library): {}", dir.display()),
        None => tracing::warn!("no addons directory under steam root {}", root.display()),
    }
    found
}

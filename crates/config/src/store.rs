// Settings store - single source of truth for presentation preferences.
//
// An explicit store object handed to consumers, plus a process-wide
// registry for app wiring. Reading the global store before init (or
// after teardown) is the one fatal error in the system; everything else
// recovers locally.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::settings::{AnimationSettings, LayoutSettings, Settings, SettingsPatch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// The global store was read before `init` or after `teardown`.
    NotInitialized,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotInitialized => write!(
                f,
                "settings store is not initialized; call store::init() at startup"
            ),
        }
    }
}

impl std::error::Error for StoreError {}

/// Mutable record of user preferences for one session.
///
/// Mutation happens on discrete user-triggered events, one at a time;
/// the lock only makes snapshots safe, there is no concurrent writer.
#[derive(Debug, Default)]
pub struct SettingsStore {
    inner: RwLock<Settings>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Settings::default()),
        }
    }

    /// Owned snapshot of the current settings.
    pub fn settings(&self) -> Settings {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Merge a partial update one level deep: keys present in the patch
    /// replace the corresponding top-level value entirely. No value
    /// validation happens here; consumers default out-of-domain strings
    /// at read time.
    pub fn update(&self, patch: SettingsPatch) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .apply(patch);
    }

    /// Change layout fields without losing their siblings: reads the
    /// current nested object (or its default), lets the closure edit it,
    /// and writes the whole object back as one top-level replacement.
    pub fn update_layout(&self, f: impl FnOnce(&mut LayoutSettings)) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let mut layout = guard.layout.clone().unwrap_or_default();
        f(&mut layout);
        guard.layout = Some(layout);
    }

    /// Same read-merge-write dance for the animations record.
    pub fn update_animations(&self, f: impl FnOnce(&mut AnimationSettings)) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let mut animations = guard.animations.clone().unwrap_or_default();
        f(&mut animations);
        guard.animations = Some(animations);
    }

    /// Back to hard-coded defaults (test isolation, session restart).
    pub fn reset(&self) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Settings::default();
    }
}

static GLOBAL: RwLock<Option<Arc<SettingsStore>>> = RwLock::new(None);

/// Install the process-wide store. Idempotent: a second call returns the
/// handle that is already installed.
pub fn init() -> Arc<SettingsStore> {
    let mut slot = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    match &*slot {
        Some(store) => Arc::clone(store),
        None => {
            let store = Arc::new(SettingsStore::new());
            *slot = Some(Arc::clone(&store));
            store
        }
    }
}

/// Handle to the process-wide store. Fails fast outside the init /
/// teardown window instead of silently handing out defaults.
pub fn global() -> Result<Arc<SettingsStore>, StoreError> {
    GLOBAL
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map(Arc::clone)
        .ok_or(StoreError::NotInitialized)
}

/// Uninstall the process-wide store. Existing handles stay usable;
/// subsequent `global()` calls fail.
pub fn teardown() {
    *GLOBAL.write().unwrap_or_else(PoisonError::into_inner) = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_then_snapshot_reflects_patch_keys_only() {
        let store = SettingsStore::new();
        let before = store.settings();

        store.update(SettingsPatch {
            theme: Some("light".into()),
            banner_zoom: Some(1.5),
            ..Default::default()
        });

        let after = store.settings();
        assert_eq!(after.theme, "light");
        assert_eq!(after.banner_zoom, 1.5);
        assert_eq!(after.component_style, before.component_style);
        assert_eq!(after.animations, before.animations);
    }

    #[test]
    fn update_layout_helper_preserves_siblings() {
        let store = SettingsStore::new();
        store.update_layout(|l| l.border_radius = Some("large".into()));

        let layout = store.settings().layout.unwrap();
        assert_eq!(layout.border_radius.as_deref(), Some("large"));
        // siblings from the default object survived the write-back
        assert_eq!(layout.spacing.as_deref(), Some("comfortable"));
        assert_eq!(layout.shadow_intensity.as_deref(), Some("medium"));
    }

    #[test]
    fn update_animations_helper_starts_from_default_when_missing() {
        let store = SettingsStore::new();
        // simulate a settings object with no animations record at all
        store.update(SettingsPatch {
            animations: Some(AnimationSettings {
                speed: None,
                easing: None,
                intensity: None,
                page_transition: None,
            }),
            ..Default::default()
        });

        store.update_animations(|a| a.speed = Some("fast".into()));
        let anims = store.settings().animations.unwrap();
        assert_eq!(anims.speed.as_deref(), Some("fast"));
        // other fields stay as the stored (empty) record left them
        assert_eq!(anims.easing, None);
    }

    #[test]
    fn reset_restores_defaults() {
        let store = SettingsStore::new();
        store.update(SettingsPatch {
            component_style: Some("cyber".into()),
            ..Default::default()
        });
        store.reset();
        assert_eq!(store.settings(), Settings::default());
    }

    // The global registry is process state, so its whole lifecycle lives
    // in one test to keep parallel runs honest.
    #[test]
    fn global_registry_lifecycle() {
        teardown();
        assert_eq!(global().unwrap_err(), StoreError::NotInitialized);

        let handle = init();
        handle.update(SettingsPatch {
            theme: Some("dark".into()),
            ..Default::default()
        });

        // second init returns the same store
        let again = init();
        assert_eq!(again.settings().theme, "dark");
        assert_eq!(global().unwrap().settings().theme, "dark");

        teardown();
        assert!(global().is_err());
        // existing handles keep working after teardown
        assert_eq!(handle.settings().theme, "dark");
    }
}

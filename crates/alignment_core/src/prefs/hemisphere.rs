//! Hemisphere preference service.
//!
//! # Invariants
//! - A stored hemisphere always wins over detection.
//! - Whatever `resolve` decides is persisted, so the next run is stable.

use super::store::PreferenceStore;
use super::{PrefError, PrefResult};
use crate::model::query::Hemisphere;
use log::{info, warn};

/// Storage key for the hemisphere preference.
pub const HEMISPHERE_KEY: &str = "hemisphere";

/// Where a resolved hemisphere came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HemisphereSource {
    Stored,
    Geolocation,
    Default,
}

impl HemisphereSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stored => "stored",
            Self::Geolocation => "geolocation",
            Self::Default => "default",
        }
    }
}

/// Outcome of the preference fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HemisphereChoice {
    pub hemisphere: Hemisphere,
    pub source: HemisphereSource,
}

/// Use-case wrapper around a preference store.
pub struct HemispherePreference<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> HemispherePreference<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the stored hemisphere, if any.
    ///
    /// # Errors
    /// - `PrefError::InvalidValue` when the stored text is not a hemisphere.
    pub fn load(&self) -> PrefResult<Option<Hemisphere>> {
        let Some(raw) = self.store.get(HEMISPHERE_KEY)? else {
            return Ok(None);
        };
        raw.parse::<Hemisphere>()
            .map(Some)
            .map_err(|source| PrefError::InvalidValue {
                key: HEMISPHERE_KEY.to_string(),
                source,
            })
    }

    /// Persists an explicit user selection.
    pub fn save(&self, hemisphere: Hemisphere) -> PrefResult<()> {
        self.store.set(HEMISPHERE_KEY, hemisphere.as_str())?;
        info!("event=pref_save module=prefs status=ok key={HEMISPHERE_KEY} value={hemisphere}");
        Ok(())
    }

    /// Forgets the stored selection so the next resolve re-detects.
    pub fn clear(&self) -> PrefResult<()> {
        self.store.remove(HEMISPHERE_KEY)
    }

    /// Resolves the hemisphere: stored value, else latitude, else northern.
    ///
    /// A corrupt stored value is logged and replaced through the same chain.
    pub fn resolve(&self, latitude: Option<f64>) -> PrefResult<HemisphereChoice> {
        match self.load() {
            Ok(Some(hemisphere)) => {
                info!(
                    "event=hemisphere_resolve module=prefs status=ok source=stored value={hemisphere}"
                );
                return Ok(HemisphereChoice {
                    hemisphere,
                    source: HemisphereSource::Stored,
                });
            }
            Ok(None) => {}
            Err(PrefError::InvalidValue { source, .. }) => {
                warn!(
                    "event=pref_load module=prefs status=error key={HEMISPHERE_KEY} error={source}"
                );
            }
            Err(err) => return Err(err),
        }

        let choice = match latitude.filter(|value| value.is_finite()) {
            Some(value) => HemisphereChoice {
                hemisphere: Hemisphere::from_latitude(value),
                source: HemisphereSource::Geolocation,
            },
            None => HemisphereChoice {
                hemisphere: Hemisphere::default(),
                source: HemisphereSource::Default,
            },
        };
        self.save(choice.hemisphere)?;
        info!(
            "event=hemisphere_resolve module=prefs status=ok source={} value={}",
            choice.source.as_str(),
            choice.hemisphere
        );
        Ok(choice)
    }
}

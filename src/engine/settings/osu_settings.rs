use crate::prelude::*;

/// tunables for slider nested object generation and stacking
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OsuSettings {
    /// sample name given to every slider tick
    pub tick_sample_name: String,

    /// ticks closer than `velocity * tick_end_exclusion` to the end of the path are dropped.
    /// at the default this is 10ms worth of travel
    pub tick_end_exclusion: f64,

    /// osu!pixels each stack level moves an object, scaled by the object's scale.
    /// negative moves up and left
    pub stack_offset_multiplier: f32,
}
impl OsuSettings {
    /// read settings from a json file, falling back to the defaults if its missing or broken
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        match std::fs::read_to_string(path).map(|s| serde_json::from_str(&s).map_err(|e|e.to_string())).map_err(|e|e.to_string()) {
            Ok(Ok(settings)) => {
                debug!("loaded slider settings from {}", path.display());
                settings
            }
            Err(e) | Ok(Err(e)) => {
                warn!("Error reading {}\nLoading defaults, {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> TatakuResult {
        let path = path.as_ref();
        debug!("Saving slider settings to {}", path.display());

        let str = serde_json::to_string_pretty(self)?;
        std::fs::write(path, str).log_error()?;
        trace!("settings saved successfully");
        Ok(())
    }
}
impl Default for OsuSettings {
    fn default() -> Self {
        Self {
            tick_sample_name: SLIDER_TICK_SAMPLE.to_owned(),
            tick_end_exclusion: 0.01,
            stack_offset_multiplier: -6.4,
        }
    }
}

use crate::prelude::*;

/// sample name for slider ticks
pub const SLIDER_TICK_SAMPLE: &str = "slidertick";

/// a single hitsound to play when an object is hit
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleInfo {
    /// sample bank, ie "normal", "soft", "drum"
    pub bank: String,
    /// sample name within the bank, ie "hitnormal", "hitclap"
    pub name: String,
    /// 0-100
    pub volume: u8,
}
impl SampleInfo {
    pub fn new(bank: impl ToString, name: impl ToString, volume: u8) -> Self {
        Self {
            bank: bank.to_string(),
            name: name.to_string(),
            volume,
        }
    }

    /// same bank and volume, different sample
    pub fn with_name(&self, name: impl ToString) -> Self {
        Self {
            bank: self.bank.clone(),
            name: name.to_string(),
            volume: self.volume,
        }
    }
}

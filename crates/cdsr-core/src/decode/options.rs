//! Decoder options.

use crate::metadata::DEFAULT_ANTENNA;

/// Ground stations known to appear as antenna tokens in scene directories.
pub const KNOWN_ANTENNAS: [&str; 3] = ["CB11", "CP5", "ETC2"];

/// Tunables of the path grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderOptions {
    /// Antenna assigned to families without an antenna token.
    pub default_antenna: String,
    /// Accepted antenna tokens.
    pub antennas: Vec<String>,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            default_antenna: DEFAULT_ANTENNA.to_string(),
            antennas: KNOWN_ANTENNAS.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl DecoderOptions {
    /// Adds antenna tokens to the accepted set.
    pub fn with_antennas<I, S>(mut self, antennas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for antenna in antennas {
            let antenna = antenna.into();
            if !self.antennas.contains(&antenna) {
                self.antennas.push(antenna);
            }
        }
        self
    }

    pub fn is_known_antenna(&self, token: &str) -> bool {
        self.antennas.iter().any(|a| a == token)
    }
}

//! Scene directory grammars, one per satellite family.
//!
//! Examples:
//! - `AMAZONIA_1_WFI_DRD_2021_03_03.12_57_40_CB11`
//! - `AMAZONIA_1_WFI_DRD_2021_03_03.14_35_23_CB11_SIR18`
//! - `CBERS_4A_WFI_RAW_2020_12_22.13_53_30_ETC2_CHUNK`
//! - `CBERS2B_CCD_20100301.130915`
//! - `LANDSAT1_MSS_19730521.120000`

use super::error::SegmentError;
use super::options::DecoderOptions;

/// Decoded scene directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneDir {
    pub satellite: String,
    pub sensor: String,
    /// Reception date, `YYYY-MM-DD`.
    pub date: String,
    /// Reception time, `HH:MM:SS`.
    pub time: String,
    pub antenna: String,
}

/// Naming families of scene directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneFamily {
    /// `<SAT>_<NUM>_<SENSOR>_<MODE>_<YYYY>_<MM>_<DD>.<HH>_<MM>_<SS>_<ANTENNA>[_<VARIANT>...]`
    /// (AMAZONIA1, CBERS4, CBERS4A).
    Underscored,
    /// `<SAT>_<SENSOR>_<YYYYMMDD>.<HHMMSS>` (CBERS2B, LANDSAT*), no antenna.
    Compact,
    Unrecognized,
}

/// Prefix table, first match wins.
const FAMILY_PREFIXES: [(&str, SceneFamily); 4] = [
    ("AMAZONIA_1", SceneFamily::Underscored),
    ("CBERS_4", SceneFamily::Underscored),
    ("CBERS2B", SceneFamily::Compact),
    ("LANDSAT", SceneFamily::Compact),
];

impl SceneFamily {
    /// Selects the family of a scene directory by prefix.
    pub fn detect(scene_dir: &str) -> Self {
        FAMILY_PREFIXES
            .iter()
            .find(|(prefix, _)| scene_dir.starts_with(prefix))
            .map(|(_, family)| *family)
            .unwrap_or(SceneFamily::Unrecognized)
    }

    /// Parses `scene_dir` with this family's grammar.
    pub fn parse(self, scene_dir: &str, options: &DecoderOptions) -> Result<SceneDir, SegmentError> {
        let unrecognized = || SegmentError::UnrecognizedSceneDir {
            scene_dir: scene_dir.to_string(),
        };
        let (first, second) = scene_dir.split_once('.').ok_or_else(unrecognized)?;

        match self {
            SceneFamily::Underscored => parse_underscored(scene_dir, first, second, options),
            SceneFamily::Compact => parse_compact(scene_dir, first, second, options),
            SceneFamily::Unrecognized => Err(unrecognized()),
        }
    }
}

/// Decodes a scene directory segment.
pub fn parse_scene_dir(scene_dir: &str, options: &DecoderOptions) -> Result<SceneDir, SegmentError> {
    let family = SceneFamily::detect(scene_dir);
    tracing::trace!(scene_dir, ?family, "scene family");
    family.parse(scene_dir, options)
}

fn parse_underscored(
    scene_dir: &str,
    first: &str,
    second: &str,
    options: &DecoderOptions,
) -> Result<SceneDir, SegmentError> {
    let fields: Vec<&str> = first.split('_').collect();
    if fields.len() < 5 {
        return Err(SegmentError::UnrecognizedSceneDir {
            scene_dir: scene_dir.to_string(),
        });
    }
    // fields[3] is the reception mode (DRD, RAW).
    let (satellite, number, sensor) = (fields[0], fields[1], fields[2]);

    let date_parts = &fields[4..];
    if !matches!(date_parts, [y, m, d] if is_digits(y, 4) && is_digits(m, 2) && is_digits(d, 2)) {
        return Err(SegmentError::InvalidReceptionDate {
            scene_dir: scene_dir.to_string(),
        });
    }

    // `13_53_00`, `13_53_00_ETC2`, `14_35_23_CB11_SIR18`, ...
    let tokens: Vec<&str> = second.split('_').collect();
    if tokens.len() < 3 || !tokens[..3].iter().all(|t| is_digits(t, 2)) {
        return Err(SegmentError::InvalidReceptionTime {
            scene_dir: scene_dir.to_string(),
        });
    }

    // First trailing token is the antenna, the rest are reception variants.
    let antenna = match tokens.get(3) {
        Some(token) if options.is_known_antenna(token) => token.to_string(),
        _ => {
            return Err(SegmentError::InvalidAntenna {
                scene_dir: scene_dir.to_string(),
            })
        }
    };

    Ok(SceneDir {
        satellite: format!("{}{}", satellite, number),
        sensor: sensor.to_string(),
        date: date_parts.join("-"),
        time: tokens[..3].join(":"),
        antenna,
    })
}

fn parse_compact(
    scene_dir: &str,
    first: &str,
    second: &str,
    options: &DecoderOptions,
) -> Result<SceneDir, SegmentError> {
    let (satellite, sensor, date) = match first.split('_').collect::<Vec<_>>()[..] {
        [satellite, sensor, date] => (satellite, sensor, date),
        _ => {
            return Err(SegmentError::UnrecognizedSceneDir {
                scene_dir: scene_dir.to_string(),
            })
        }
    };

    Ok(SceneDir {
        satellite: satellite.to_string(),
        sensor: sensor.to_string(),
        date: compact_date(date)?,
        time: compact_time(second)?,
        antenna: options.default_antenna.clone(),
    })
}

/// `20070925` -> `2007-09-25`.
pub(super) fn compact_date(date: &str) -> Result<String, SegmentError> {
    if !is_digits(date, 8) {
        return Err(SegmentError::InvalidDateSize {
            date: date.to_string(),
            expected: 8,
        });
    }
    Ok(format!("{}-{}-{}", &date[0..4], &date[4..6], &date[6..8]))
}

/// `145654` -> `14:56:54`.
fn compact_time(time: &str) -> Result<String, SegmentError> {
    if !is_digits(time, 6) {
        return Err(SegmentError::InvalidTimeSize {
            time: time.to_string(),
            expected: 6,
        });
    }
    Ok(format!("{}:{}:{}", &time[0..2], &time[2..4], &time[4..6]))
}

pub(super) fn is_digits(token: &str, len: usize) -> bool {
    token.len() == len && token.bytes().all(|b| b.is_ascii_digit())
}

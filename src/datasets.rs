use serde::Serialize;

use crate::constants::LAFAN1_DATASETS;
use crate::error::{ConfigError, Result};

pub fn is_lafan1_dataset(name: &str) -> bool {
    LAFAN1_DATASETS.contains(&name)
}

/// A LAFAN1 clip name split into its parts, e.g. `fallAndGetUp2_subject2`
/// is motion `fallAndGetUp`, take 2, subject 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Lafan1Clip<'a> {
    pub name: &'a str,
    pub motion: &'a str,
    pub take: u32,
    pub subject: u32,
}

impl<'a> Lafan1Clip<'a> {
    pub fn parse(name: &'a str) -> Result<Self> {
        let invalid = || ConfigError::InvalidClipName(name.to_string());

        let (motion_take, subject) = name.split_once("_subject").ok_or_else(invalid)?;
        let subject = subject.parse::<u32>().map_err(|_| invalid())?;

        let digits = motion_take
            .bytes()
            .rev()
            .take_while(u8::is_ascii_digit)
            .count();
        let (motion, take) = motion_take.split_at(motion_take.len() - digits);
        if motion.is_empty() || take.is_empty() {
            return Err(invalid());
        }
        let take = take.parse::<u32>().map_err(|_| invalid())?;

        Ok(Self {
            name,
            motion,
            take,
            subject,
        })
    }
}

/// Catalog clips whose motion matches `motion` exactly, in catalog order.
pub fn clips_for_motion(motion: &str) -> Vec<Lafan1Clip<'static>> {
    LAFAN1_DATASETS
        .iter()
        .copied()
        .filter_map(|name| Lafan1Clip::parse(name).ok())
        .filter(|clip| clip.motion == motion)
        .collect()
}

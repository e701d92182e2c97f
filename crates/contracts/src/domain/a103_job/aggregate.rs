use serde::{Deserialize, Deserializer};

/// Raw `position` attribute of a job entry.
///
/// Anything other than `top`/`left`/`right` is kept as `Other`; such jobs get
/// no slot. Required fields (`name`, `url`) are still enforced by the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobPosition {
    Top,
    Left,
    Right,
    Other(String),
}

impl JobPosition {
    pub fn as_str(&self) -> &str {
        match self {
            JobPosition::Top => "top",
            JobPosition::Left => "left",
            JobPosition::Right => "right",
            JobPosition::Other(raw) => raw,
        }
    }
}

impl From<&str> for JobPosition {
    fn from(raw: &str) -> Self {
        match raw {
            "top" => JobPosition::Top,
            "left" => JobPosition::Left,
            "right" => JobPosition::Right,
            other => JobPosition::Other(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for JobPosition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(JobPosition::from(raw.as_str()))
    }
}

/// One of the three rendering slots of the job panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobSlot {
    Top,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Job {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    pub url: String,
    #[serde(default = "missing_position")]
    pub position: JobPosition,
}

fn missing_position() -> JobPosition {
    JobPosition::Other(String::new())
}

impl Job {
    pub fn slot(&self) -> Option<JobSlot> {
        match self.position {
            JobPosition::Top => Some(JobSlot::Top),
            JobPosition::Left => Some(JobSlot::Left),
            JobPosition::Right => Some(JobSlot::Right),
            JobPosition::Other(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_positions() {
        let job: Job = serde_json::from_str(
            r#"{"name":"SSC","icon":"fas fa-briefcase","url":"https://x.test/ssc","position":"left"}"#,
        )
        .unwrap();
        assert_eq!(job.position, JobPosition::Left);
        assert_eq!(job.slot(), Some(JobSlot::Left));
    }

    #[test]
    fn test_unknown_position_has_no_slot() {
        let job: Job = serde_json::from_str(
            r#"{"name":"Bank","icon":"","url":"https://x.test/bank","position":"bottom"}"#,
        )
        .unwrap();
        assert_eq!(job.position, JobPosition::Other("bottom".into()));
        assert_eq!(job.slot(), None);

        let job: Job = serde_json::from_str(r#"{"name":"Rail","url":"https://x.test/rail"}"#).unwrap();
        assert_eq!(job.slot(), None);
    }

    #[test]
    fn test_position_case_sensitive() {
        assert_eq!(JobPosition::from("Top"), JobPosition::Other("Top".into()));
    }
}

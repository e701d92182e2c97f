use contracts::domain::a103_job::aggregate::{Job, JobSlot};

/// Jobs split by rendering slot, input order kept within each group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobGroups {
    pub top: Vec<Job>,
    pub left: Vec<Job>,
    pub right: Vec<Job>,
}

impl JobGroups {
    pub fn slot(&self, slot: JobSlot) -> &[Job] {
        match slot {
            JobSlot::Top => &self.top,
            JobSlot::Left => &self.left,
            JobSlot::Right => &self.right,
        }
    }
}

/// Entries with an unrecognized position land in no group.
pub fn partition_jobs(jobs: &[Job]) -> JobGroups {
    let mut groups = JobGroups::default();
    for job in jobs {
        match job.slot() {
            Some(JobSlot::Top) => groups.top.push(job.clone()),
            Some(JobSlot::Left) => groups.left.push(job.clone()),
            Some(JobSlot::Right) => groups.right.push(job.clone()),
            None => log::debug!(
                "job '{}' skipped: unknown position '{}'",
                job.name,
                job.position.as_str()
            ),
        }
    }
    groups
}

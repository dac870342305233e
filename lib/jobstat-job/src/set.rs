/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::num::NonZeroUsize;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::{JobKey, JobMergeError, JobRecord, JobStatsConfig};

/// Job records of one reporting period, keyed by job identity.
#[derive(Debug, Default)]
pub struct JobRecordSet {
    jobs: IndexMap<JobKey, JobRecord>,
    max_jobs: Option<NonZeroUsize>,
    dropped: u64,
}

impl JobRecordSet {
    pub fn new() -> Self {
        JobRecordSet::default()
    }

    pub fn with_config(config: &JobStatsConfig) -> Self {
        JobRecordSet {
            jobs: IndexMap::new(),
            max_jobs: config.max_jobs(),
            dropped: 0,
        }
    }

    /// Add the runs in `record` to the record of the same job, or keep it as
    /// a new job if there is none yet.
    ///
    /// New jobs beyond the configured limit are dropped.
    pub fn absorb(&mut self, record: JobRecord) -> Result<(), JobMergeError> {
        let full = self
            .max_jobs
            .is_some_and(|max| self.jobs.len() >= max.get());

        match self.jobs.entry(record.key().clone()) {
            Entry::Occupied(mut o) => {
                o.get_mut().combine(record)?;
            }
            Entry::Vacant(v) => {
                if full {
                    log::warn!(
                        "job record set is full, drop runs of new job {}",
                        v.key()
                    );
                    self.dropped += record.run_count();
                    return Ok(());
                }
                log::debug!("new job {} added to record set", v.key());
                v.insert(record);
            }
        }
        Ok(())
    }

    /// Merge all records of `other` into this set.
    ///
    /// On error the records of `other` before the failed one are already
    /// merged, the rest of `other` is dropped.
    pub fn merge(&mut self, other: JobRecordSet) -> Result<(), JobMergeError> {
        for record in other.jobs.into_values() {
            self.absorb(record)?;
        }
        self.dropped += other.dropped;
        Ok(())
    }

    pub fn get(&self, queue_name: &str, job_name: &str) -> Option<&JobRecord> {
        self.jobs.get(&JobKey::new(queue_name, job_name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &JobRecord> {
        self.jobs.values()
    }

    pub fn into_records(self) -> impl Iterator<Item = JobRecord> {
        self.jobs.into_values()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Number of runs dropped because the set was full.
    #[inline]
    pub fn dropped_runs(&self) -> u64 {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absorb() {
        let mut set = JobRecordSet::new();
        assert!(set.is_empty());
        set.absorb(JobRecord::new("Default", "SendEmail", 1.0, []))
            .unwrap();
        set.absorb(JobRecord::new("default", "sendemail", 3.0, []))
            .unwrap();
        set.absorb(JobRecord::new("default", "SendSms", 2.0, []))
            .unwrap();
        assert_eq!(set.len(), 2);

        let record = set.get("DEFAULT", "SENDEMAIL").unwrap();
        assert_eq!(record.queue_name(), "Default");
        assert_eq!(record.run_count(), 2);
        assert_eq!(record.timings()["avg"], 2.0);

        let names: Vec<&str> = set.iter().map(|r| r.job_name()).collect();
        assert_eq!(names, ["SendEmail", "SendSms"]);
    }

    #[test]
    fn max_jobs() {
        let mut config = JobStatsConfig::default();
        config.set_max_jobs(NonZeroUsize::new(1).unwrap());
        let mut set = JobRecordSet::with_config(&config);

        set.absorb(JobRecord::new("q", "a", 1.0, [])).unwrap();
        set.absorb(JobRecord::new("q", "b", 1.0, [])).unwrap();
        set.absorb(JobRecord::new("q", "A", 1.0, [])).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.dropped_runs(), 1);
        assert!(set.get("q", "b").is_none());
        assert_eq!(set.get("q", "a").unwrap().run_count(), 2);
    }

    #[test]
    fn merge() {
        let mut a = JobRecordSet::new();
        a.absorb(JobRecord::new("q", "a", 1.0, [])).unwrap();
        let mut b = JobRecordSet::new();
        b.absorb(JobRecord::new("Q", "A", 2.0, [])).unwrap();
        b.absorb(JobRecord::new("q", "b", 4.0, [])).unwrap();

        a.merge(b).unwrap();
        assert_eq!(a.len(), 2);
        assert_eq!(a.get("q", "a").unwrap().run_count(), 2);

        let total: u64 = a.into_records().map(|r| r.run_count()).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn merge_dropped() {
        let mut config = JobStatsConfig::default();
        config.set_max_jobs(NonZeroUsize::new(1).unwrap());
        let mut local = JobRecordSet::with_config(&config);
        local.absorb(JobRecord::new("q", "a", 1.0, [])).unwrap();
        local.absorb(JobRecord::new("q", "b", 1.0, [])).unwrap();
        assert_eq!(local.dropped_runs(), 1);

        let mut global = JobRecordSet::with_config(&config);
        global.absorb(JobRecord::new("q", "c", 1.0, [])).unwrap();
        global.merge(local).unwrap();
        assert_eq!(global.len(), 1);
        assert_eq!(global.dropped_runs(), 2);
        assert!(global.get("q", "a").is_none());
    }
}

/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::borrow::Borrow;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

use indexmap::IndexMap;

use jobstat_histogram::{NumericHistogram, Quantile};
use jobstat_metrics::{MetricMeta, MetricSet, MetricStats};

use crate::{JobKey, JobMergeError, JobStatsConfig};

pub const DEFAULT_HISTOGRAM_BINS: NonZeroUsize = NonZeroUsize::new(50).unwrap();

const TIMING_QUANTILES: [Quantile; 6] = [
    Quantile::PCT0,
    Quantile::PCT25,
    Quantile::PCT50,
    Quantile::PCT75,
    Quantile::PCT95,
    Quantile::PCT100,
];

/// Summary of all runs of one background job.
///
/// A record is identified by its queue name and job name, compared case
/// insensitively. Equality and hashing only look at this identity, never at
/// the accumulated data.
#[derive(Clone, Debug)]
pub struct JobRecord {
    key: JobKey,
    queue_name: String,
    job_name: String,
    runtime: NumericHistogram,
    metric_set: MetricSet,
}

impl JobRecord {
    /// Create a record from the first run of a job.
    ///
    /// `total_time` is the elapsed time of the run in seconds. It should be
    /// finite and non-negative, which is left to the caller to ensure.
    pub fn new<I>(queue_name: &str, job_name: &str, total_time: f64, metrics: I) -> Self
    where
        I: IntoIterator<Item = (MetricMeta, MetricStats)>,
    {
        JobRecord::with_bins(
            DEFAULT_HISTOGRAM_BINS,
            queue_name,
            job_name,
            total_time,
            metrics,
        )
    }

    pub fn with_config<I>(
        config: &JobStatsConfig,
        queue_name: &str,
        job_name: &str,
        total_time: f64,
        metrics: I,
    ) -> Self
    where
        I: IntoIterator<Item = (MetricMeta, MetricStats)>,
    {
        JobRecord::with_bins(
            config.histogram_bins(),
            queue_name,
            job_name,
            total_time,
            metrics,
        )
    }

    fn with_bins<I>(
        max_bins: NonZeroUsize,
        queue_name: &str,
        job_name: &str,
        total_time: f64,
        metrics: I,
    ) -> Self
    where
        I: IntoIterator<Item = (MetricMeta, MetricStats)>,
    {
        debug_assert!(total_time >= 0.0);

        let mut runtime = NumericHistogram::new(max_bins);
        runtime.add(total_time);
        let mut metric_set = MetricSet::new();
        metric_set.absorb_all(metrics);

        JobRecord {
            key: JobKey::new(queue_name, job_name),
            queue_name: queue_name.to_string(),
            job_name: job_name.to_string(),
            runtime,
            metric_set,
        }
    }

    /// Merge the runs of `other` into this record.
    ///
    /// Both records must be of the same job, or this record is left untouched
    /// and an error is returned.
    pub fn combine(&mut self, other: JobRecord) -> Result<&mut Self, JobMergeError> {
        if self.key != other.key {
            return Err(JobMergeError::IdentityMismatch {
                expected: self.key.clone(),
                found: other.key,
            });
        }

        self.metric_set.combine(other.metric_set);
        self.runtime.combine(&other.runtime);
        Ok(self)
    }

    #[inline]
    pub fn key(&self) -> &JobKey {
        &self.key
    }

    #[inline]
    pub fn queue_name(&self) -> &str {
        &self.queue_name
    }

    #[inline]
    pub fn job_name(&self) -> &str {
        &self.job_name
    }

    #[inline]
    pub fn runtime(&self) -> &NumericHistogram {
        &self.runtime
    }

    /// Runtime quantiles keyed by percentile, followed by the mean as `avg`.
    pub fn timings(&self) -> IndexMap<&'static str, f64> {
        let mut map = IndexMap::with_capacity(TIMING_QUANTILES.len() + 1);
        for q in &TIMING_QUANTILES {
            map.insert(q.as_str(), self.runtime.value_at(q));
        }
        map.insert("avg", self.runtime.mean());
        map
    }

    /// Number of runs aggregated in this record.
    #[inline]
    pub fn run_count(&self) -> u64 {
        self.runtime.total()
    }

    pub fn metrics(&self) -> impl Iterator<Item = (&MetricMeta, &MetricStats)> {
        self.metric_set.metrics()
    }

    #[inline]
    pub fn metric_set(&self) -> &MetricSet {
        &self.metric_set
    }
}

impl PartialEq for JobRecord {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for JobRecord {}

impl Hash for JobRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl Borrow<JobKey> for JobRecord {
    fn borrow(&self) -> &JobKey {
        &self.key
    }
}

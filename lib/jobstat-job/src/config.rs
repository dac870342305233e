/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::num::NonZeroUsize;

use crate::DEFAULT_HISTOGRAM_BINS;

pub const MAX_HISTOGRAM_BINS: usize = 10_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobStatsConfig {
    histogram_bins: NonZeroUsize,
    max_jobs: Option<NonZeroUsize>,
}

impl JobStatsConfig {
    #[inline]
    pub fn set_histogram_bins(&mut self, bins: NonZeroUsize) {
        self.histogram_bins = bins;
    }

    #[inline]
    pub fn set_max_jobs(&mut self, max: NonZeroUsize) {
        self.max_jobs = Some(max);
    }

    #[inline]
    pub fn histogram_bins(&self) -> NonZeroUsize {
        self.histogram_bins
    }

    /// Max number of distinct jobs kept in one record set, no limit if not set.
    #[inline]
    pub fn max_jobs(&self) -> Option<NonZeroUsize> {
        self.max_jobs
    }
}

impl Default for JobStatsConfig {
    fn default() -> Self {
        JobStatsConfig {
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            max_jobs: None,
        }
    }
}

/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::num::NonZeroUsize;

use anyhow::{Context, anyhow};
use yaml_rust::Yaml;

use jobstat_job::{JobStatsConfig, MAX_HISTOGRAM_BINS};

fn as_histogram_bins(value: &Yaml) -> anyhow::Result<NonZeroUsize> {
    let bins = super::as_nonzero_usize(value)?;
    if bins.get() > MAX_HISTOGRAM_BINS {
        return Err(anyhow!(
            "histogram bins {bins} should not be larger than {MAX_HISTOGRAM_BINS}"
        ));
    }
    Ok(bins)
}

pub fn as_job_stats_config(value: &Yaml) -> anyhow::Result<JobStatsConfig> {
    let mut config = JobStatsConfig::default();
    if let Yaml::Hash(map) = value {
        crate::foreach_kv(map, |k, v| match crate::key::normalize(k).as_str() {
            "histogram_bins" => {
                let bins = as_histogram_bins(v)
                    .context(format!("invalid histogram bins value for key {k}"))?;
                config.set_histogram_bins(bins);
                Ok(())
            }
            "max_jobs" => {
                let max = super::as_nonzero_usize(v)
                    .context(format!("invalid nonzero usize value for key {k}"))?;
                config.set_max_jobs(max);
                Ok(())
            }
            _ => Err(anyhow!("invalid key {k}")),
        })?;
    } else {
        let bins = as_histogram_bins(value).context(
            "the value for simplified form of job stats config map should be the histogram bins",
        )?;
        config.set_histogram_bins(bins);
    }
    Ok(config)
}

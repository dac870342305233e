/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;

/// Case insensitive identity of a background job.
///
/// Both names are stored lowercased, so `Default/SendEmail` and
/// `default/sendemail` are the same key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct JobKey {
    queue: String,
    job: String,
}

impl JobKey {
    pub fn new(queue_name: &str, job_name: &str) -> Self {
        JobKey {
            queue: queue_name.to_lowercase(),
            job: job_name.to_lowercase(),
        }
    }

    #[inline]
    pub fn queue(&self) -> &str {
        &self.queue
    }

    #[inline]
    pub fn job(&self) -> &str {
        &self.job
    }
}

impl fmt::Display for JobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.queue, self.job)
    }
}

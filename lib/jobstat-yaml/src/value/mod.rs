/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod job;
mod primary;

pub use job::as_job_stats_config;
pub use primary::as_nonzero_usize;

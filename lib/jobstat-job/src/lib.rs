/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod config;
pub use config::{JobStatsConfig, MAX_HISTOGRAM_BINS};

mod error;
pub use error::JobMergeError;

mod key;
pub use key::JobKey;

mod record;
pub use record::{DEFAULT_HISTOGRAM_BINS, JobRecord};

mod set;
pub use set::JobRecordSet;

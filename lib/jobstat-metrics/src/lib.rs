/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod meta;
pub use meta::{MetricMeta, MetricParseError};

mod stats;
pub use stats::MetricStats;

mod set;
pub use set::MetricSet;

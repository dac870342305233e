/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::ops;

/// Accumulated call statistics of one sub metric.
///
/// Times are in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MetricStats {
    call_count: u64,
    total_call_time: f64,
    total_exclusive_time: f64,
    min_call_time: f64,
    max_call_time: f64,
    sum_of_squares: f64,
}

impl MetricStats {
    pub fn new() -> Self {
        MetricStats::default()
    }

    /// Stats of a single call.
    pub fn with_call(call_time: f64, exclusive_time: f64) -> Self {
        let mut stats = MetricStats::new();
        stats.update(call_time, exclusive_time);
        stats
    }

    pub fn update(&mut self, call_time: f64, exclusive_time: f64) {
        if self.call_count == 0 {
            self.min_call_time = call_time;
            self.max_call_time = call_time;
        } else {
            self.min_call_time = self.min_call_time.min(call_time);
            self.max_call_time = self.max_call_time.max(call_time);
        }
        self.call_count += 1;
        self.total_call_time += call_time;
        self.total_exclusive_time += exclusive_time;
        self.sum_of_squares += call_time * call_time;
    }

    pub fn combine(&mut self, other: &MetricStats) {
        if other.call_count == 0 {
            return;
        }
        if self.call_count == 0 {
            *self = *other;
            return;
        }

        self.call_count += other.call_count;
        self.total_call_time += other.total_call_time;
        self.total_exclusive_time += other.total_exclusive_time;
        self.min_call_time = self.min_call_time.min(other.min_call_time);
        self.max_call_time = self.max_call_time.max(other.max_call_time);
        self.sum_of_squares += other.sum_of_squares;
    }

    #[inline]
    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    #[inline]
    pub fn total_call_time(&self) -> f64 {
        self.total_call_time
    }

    #[inline]
    pub fn total_exclusive_time(&self) -> f64 {
        self.total_exclusive_time
    }

    #[inline]
    pub fn min_call_time(&self) -> f64 {
        self.min_call_time
    }

    #[inline]
    pub fn max_call_time(&self) -> f64 {
        self.max_call_time
    }

    #[inline]
    pub fn sum_of_squares(&self) -> f64 {
        self.sum_of_squares
    }
}

impl ops::AddAssign<&MetricStats> for MetricStats {
    fn add_assign(&mut self, rhs: &MetricStats) {
        self.combine(rhs);
    }
}

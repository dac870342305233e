/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::num::NonZeroUsize;

use crate::Quantile;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistogramBin {
    value: f64,
    count: u64,
}

impl HistogramBin {
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }
}

/// A streaming histogram with a fixed number of bins.
///
/// Every sample is kept as its own bin until the bin limit is exceeded, after
/// which the two closest bins are merged into one bin at their count-weighted
/// centre. Merging keeps the sum of all samples up to f64 rounding, so the
/// mean is exact within rounding error while quantiles are approximated.
#[derive(Clone, Debug)]
pub struct NumericHistogram {
    max_bins: NonZeroUsize,
    bins: Vec<HistogramBin>,
    total: u64,
}

impl NumericHistogram {
    pub fn new(max_bins: NonZeroUsize) -> Self {
        NumericHistogram {
            max_bins,
            bins: Vec::new(),
            total: 0,
        }
    }

    #[inline]
    pub fn max_bins(&self) -> usize {
        self.max_bins.get()
    }

    /// Number of samples ever added, including the ones merged in.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    #[inline]
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    pub fn add(&mut self, value: f64) {
        self.add_count(value, 1);
    }

    /// Add `count` samples of `value`.
    ///
    /// The value should be finite, this is not checked in release builds.
    pub fn add_count(&mut self, value: f64, count: u64) {
        debug_assert!(value.is_finite());
        if count == 0 {
            return;
        }

        self.total += count;
        let pos = self.bins.partition_point(|b| b.value < value);
        if self.bins.get(pos).is_some_and(|b| b.value == value) {
            self.bins[pos].count += count;
        } else {
            self.bins.insert(pos, HistogramBin { value, count });
            self.trim();
        }
    }

    /// Merge all samples of `other` into this histogram.
    pub fn combine(&mut self, other: &NumericHistogram) {
        for bin in &other.bins {
            self.add_count(bin.value, bin.count);
        }
    }

    /// Get the nearest rank value at `quantile`.
    ///
    /// The quantile should be in range [0, 1], larger values are taken as a
    /// percentage. An empty histogram always returns 0.
    pub fn value_at_quantile(&self, quantile: f64) -> f64 {
        let Some(last) = self.bins.last() else {
            return 0.0;
        };

        let quantile = if quantile > 1.0 {
            quantile / 100.0
        } else {
            quantile
        };
        let mut remaining = quantile * self.total as f64;
        for bin in &self.bins {
            remaining -= bin.count as f64;
            if remaining <= 0.0 {
                return bin.value;
            }
        }
        last.value
    }

    #[inline]
    pub fn value_at(&self, quantile: &Quantile) -> f64 {
        self.value_at_quantile(quantile.value())
    }

    pub fn mean(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let sum: f64 = self
            .bins
            .iter()
            .map(|b| b.value * b.count as f64)
            .sum();
        sum / self.total as f64
    }

    pub fn min(&self) -> Option<f64> {
        self.bins.first().map(|b| b.value)
    }

    pub fn max(&self) -> Option<f64> {
        self.bins.last().map(|b| b.value)
    }

    fn trim(&mut self) {
        while self.bins.len() > self.max_bins.get() {
            self.merge_closest();
        }
    }

    fn merge_closest(&mut self) {
        let mut min_delta = f64::MAX;
        let mut index = 1;
        for (i, pair) in self.bins.windows(2).enumerate() {
            let delta = pair[1].value - pair[0].value;
            if delta < min_delta {
                min_delta = delta;
                index = i + 1;
            }
        }

        let cur = self.bins.remove(index);
        let prev = &mut self.bins[index - 1];
        let count = prev.count + cur.count;
        prev.value =
            (prev.value * prev.count as f64 + cur.value * cur.count as f64) / count as f64;
        prev.count = count;
    }
}

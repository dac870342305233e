/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use indexmap::IndexMap;

use crate::{MetricMeta, MetricStats};

/// Sub metrics of job runs, accumulated per [`MetricMeta`].
///
/// Entries keep the order in which their keys were first seen.
#[derive(Clone, Debug, Default)]
pub struct MetricSet {
    metrics: IndexMap<MetricMeta, MetricStats>,
}

impl MetricSet {
    pub fn new() -> Self {
        MetricSet::default()
    }

    pub fn absorb(&mut self, meta: MetricMeta, stats: MetricStats) {
        self.metrics
            .entry(meta)
            .and_modify(|v| *v += &stats)
            .or_insert(stats);
    }

    pub fn absorb_all<I>(&mut self, metrics: I)
    where
        I: IntoIterator<Item = (MetricMeta, MetricStats)>,
    {
        for (meta, stats) in metrics {
            self.absorb(meta, stats);
        }
    }

    /// Merge all entries of `other` into this set.
    pub fn combine(&mut self, other: MetricSet) -> &mut Self {
        self.absorb_all(other.metrics);
        self
    }

    pub fn get(&self, meta: &MetricMeta) -> Option<&MetricStats> {
        self.metrics.get(meta)
    }

    pub fn metrics(&self) -> impl Iterator<Item = (&MetricMeta, &MetricStats)> {
        self.metrics.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

impl Extend<(MetricMeta, MetricStats)> for MetricSet {
    fn extend<T: IntoIterator<Item = (MetricMeta, MetricStats)>>(&mut self, iter: T) {
        self.absorb_all(iter);
    }
}

impl FromIterator<(MetricMeta, MetricStats)> for MetricSet {
    fn from_iter<T: IntoIterator<Item = (MetricMeta, MetricStats)>>(iter: T) -> Self {
        let mut set = MetricSet::new();
        set.absorb_all(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sql() -> MetricMeta {
        MetricMeta::new("Database", "SQL")
    }

    fn http() -> MetricMeta {
        MetricMeta::new("HTTP", "GET")
    }

    #[test]
    fn absorb() {
        let mut set = MetricSet::new();
        assert!(set.is_empty());

        set.absorb_all([
            (sql(), MetricStats::with_call(0.3, 0.3)),
            (http(), MetricStats::with_call(1.0, 1.0)),
            (sql(), MetricStats::with_call(0.5, 0.5)),
        ]);
        assert_eq!(set.len(), 2);
        let stats = set.get(&sql()).unwrap();
        assert_eq!(stats.call_count(), 2);
        assert_eq!(stats.total_call_time(), 0.8);
    }

    #[test]
    fn first_seen_order() {
        let mut set: MetricSet = [
            (http(), MetricStats::with_call(1.0, 1.0)),
            (sql(), MetricStats::with_call(0.1, 0.1)),
        ]
        .into_iter()
        .collect();
        set.extend([(http(), MetricStats::with_call(2.0, 2.0))]);

        let keys: Vec<String> = set.metrics().map(|(m, _)| m.to_string()).collect();
        assert_eq!(keys, ["HTTP/GET", "Database/SQL"]);
    }

    #[test]
    fn combine() {
        let mut a = MetricSet::new();
        a.absorb(sql(), MetricStats::with_call(0.3, 0.3));
        let mut b = MetricSet::new();
        b.absorb(sql(), MetricStats::with_call(0.5, 0.5));
        b.absorb(http(), MetricStats::with_call(1.0, 0.9));

        a.combine(b).absorb(http(), MetricStats::with_call(2.0, 2.0));
        assert_eq!(a.len(), 2);
        assert_eq!(a.get(&sql()).unwrap().total_call_time(), 0.8);
        assert_eq!(a.get(&http()).unwrap().call_count(), 2);
    }
}

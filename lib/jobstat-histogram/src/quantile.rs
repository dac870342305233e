/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::cmp::Ordering;
use std::fmt;

/// A named point of a runtime distribution, such as the 95th percentile.
#[derive(Clone, Copy, Debug)]
pub struct Quantile {
    value: f64,
    name: &'static str,
}

impl Quantile {
    pub const PCT0: Quantile = Quantile::new(0.0, "0");
    pub const PCT25: Quantile = Quantile::new(0.25, "25");
    pub const PCT50: Quantile = Quantile::new(0.50, "50");
    pub const PCT75: Quantile = Quantile::new(0.75, "75");
    pub const PCT95: Quantile = Quantile::new(0.95, "95");
    pub const PCT100: Quantile = Quantile::new(1.0, "100");

    const fn new(value: f64, name: &'static str) -> Self {
        Quantile { value, name }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn as_str(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for Quantile {
    fn eq(&self, other: &Self) -> bool {
        self.value.total_cmp(&other.value).is_eq()
    }
}

impl Eq for Quantile {}

impl PartialOrd for Quantile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Quantile {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

impl fmt::Display for Quantile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

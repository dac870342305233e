/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t() {
        assert_eq!(normalize("Max-Jobs"), "max_jobs");
        assert_eq!(normalize("HISTOGRAM_BINS"), "histogram_bins");
        assert_eq!(normalize("histogram-Bins"), "histogram_bins");
    }
}

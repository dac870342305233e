/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod numeric;
pub use numeric::{HistogramBin, NumericHistogram};

mod quantile;
pub use quantile::Quantile;

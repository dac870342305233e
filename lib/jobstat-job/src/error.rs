/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use thiserror::Error;

use crate::JobKey;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum JobMergeError {
    #[error("mismatched merge of background job: expected {expected}, found {found}")]
    IdentityMismatch { expected: JobKey, found: JobKey },
}

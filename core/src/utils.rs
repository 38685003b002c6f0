// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Utility functions and types.

use std::fmt::Debug;

/// Redact hides credential material in `Debug` output.
///
/// - Secrets are never shown, only whether they are empty.
/// - Identifiers such as access keys keep a four character prefix when they
///   are at least 12 characters long, so two keys can be told apart in logs.
pub struct Redact<'a> {
    value: &'a str,
    keep_prefix: bool,
}

impl<'a> Redact<'a> {
    /// Redact a secret entirely.
    pub fn secret(value: &'a str) -> Self {
        Self {
            value,
            keep_prefix: false,
        }
    }

    /// Redact an identifier, keeping a short prefix.
    pub fn identifier(value: &'a str) -> Self {
        Self {
            value,
            keep_prefix: true,
        }
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.value.is_empty() {
            return f.write_str("EMPTY");
        }

        match self.value.get(..4) {
            Some(prefix) if self.keep_prefix && self.value.len() >= 12 => {
                f.write_str(prefix)?;
                f.write_str("***")
            }
            _ => f.write_str("***"),
        }
    }
}

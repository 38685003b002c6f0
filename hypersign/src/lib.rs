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

//! Signing and sending Hyper.sh API requests without effort.
//!
//! ```no_run
//! use hypersign::{default_context, Client, Config, DefaultCredentialProvider};
//!
//! # async fn example() -> hypersign::Result<()> {
//! let ctx = default_context();
//! let config = Config::default().from_env(&ctx);
//! let client = Client::from_provider(ctx, config, &DefaultCredentialProvider::new()).await?;
//!
//! for fip in client.fips_ls(None).await? {
//!     println!("{} -> {}", fip.fip, fip.container);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub use hypersign_core::*;
pub use hypersign_hyper::*;

mod classify;
pub use classify::classify;

mod client;
pub use client::Client;
pub use client::Response;

mod network;
pub use network::Fip;
pub use network::FipAllocateParams;

mod containers;
pub use containers::Container;
pub use containers::ListContainersOptions;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

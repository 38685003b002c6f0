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

use anyhow::Result;
use hypersign::{default_context, Client, Config, DefaultCredentialProvider};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Credentials come from HYPER_ACCESS_KEY/HYPER_SECRET_KEY or ~/.hyper/config.json.
    let ctx = default_context();
    let config = Config::default().from_env(&ctx);
    let client = Client::from_provider(ctx, config, &DefaultCredentialProvider::new()).await?;

    for fip in client.fips_ls(None).await? {
        let attached = if fip.container.is_empty() {
            "-"
        } else {
            fip.container.as_str()
        };
        println!("{}\t{}\t{}", fip.fip, fip.name, attached);
    }

    Ok(())
}

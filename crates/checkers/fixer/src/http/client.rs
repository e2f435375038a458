// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! HTTP client for the Fixer latest-rates endpoint.
//!
//! The client captures whatever the service returns (status code, headers,
//! JSON body) rather than failing on non-2xx statuses: the contract checks
//! decide what a given status means. Only transport failures and undecodable
//! bodies surface as errors. Nothing is retried.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::config::FixerConfig;
use crate::http::error::FixerHttpError;
use crate::http::models::{ApiResponse, FixerResponse};
use crate::http::query::LatestParams;
use crate::common::urls::FixerUrl;

const USER_AGENT: &str = "fixer-contract";

/// HTTP client for the Fixer latest-rates API
pub struct FixerHttpClient {
    client: Client,
    url: FixerUrl,
}

impl FixerHttpClient {
    /// Creates a new Fixer HTTP client
    pub fn new(config: &FixerConfig) -> Result<Self, FixerHttpError> {
        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.http_timeout));

        if let Some(proxy) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| FixerHttpError::ConnectionError(e.to_string()))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| FixerHttpError::ConnectionError(e.to_string()))?;

        Ok(Self {
            client,
            url: FixerUrl::new(config.base_url.clone()),
        })
    }

    pub fn url(&self) -> &FixerUrl {
        &self.url
    }

    /// Issues one GET against `/latest` and captures the full response.
    pub async fn latest(&self, params: &LatestParams) -> Result<ApiResponse, FixerHttpError> {
        let url = self.url.latest_url();
        debug!(url = %url, "requesting latest rates");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FixerHttpError::TimeoutError(e.to_string())
                } else if e.is_connect() {
                    FixerHttpError::ConnectionError(e.to_string())
                } else {
                    FixerHttpError::RequestError(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        let mut headers = BTreeMap::new();
        for (name, value) in response.headers() {
            headers.insert(
                name.as_str().to_ascii_lowercase(),
                String::from_utf8_lossy(value.as_bytes()).to_string(),
            );
        }

        let text = response
            .text()
            .await
            .map_err(|e| FixerHttpError::RequestError(e.to_string()))?;

        let body = serde_json::from_str(&text)
            .map_err(|e| FixerHttpError::JsonDecodeError(format!("Invalid JSON response: {e}")))?;

        debug!(status, "captured latest-rates response");

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }

    /// Issues one GET against `/latest` and decodes the typed envelope.
    ///
    /// An undecodable body on a non-200 status is reported through the status
    /// mapping rather than as a bare decode failure.
    pub async fn latest_typed(
        &self,
        params: &LatestParams,
    ) -> Result<FixerResponse, FixerHttpError> {
        let response = self.latest(params).await?;
        match response.decode() {
            Ok(decoded) => Ok(decoded),
            Err(e) if response.status != 200 => Err(FixerHttpError::from_http_status(
                response.status,
                e.to_string(),
            )),
            Err(e) => Err(FixerHttpError::JsonDecodeError(e.to_string())),
        }
    }
}

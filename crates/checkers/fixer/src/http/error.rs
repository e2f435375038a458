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

//! HTTP error types for the Fixer contract checker.

use thiserror::Error;

use crate::error::FixerError;

#[derive(Error, Debug)]
pub enum FixerHttpError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request error: {0}")]
    RequestError(String),

    #[error("HTTP error: {0} - {1}")]
    HttpError(u16, String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    #[error("Invalid request: {0}")]
    InvalidRequestError(String),

    #[error("Resource not found: {0}")]
    NotFoundError(String),

    #[error("JSON decode error: {0}")]
    JsonDecodeError(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Timeout error: {0}")]
    TimeoutError(String),
}

impl FixerHttpError {
    /// Classifies errors the remote could clear on its own (transport and
    /// server-side trouble). Classification is reporting-only: nothing in this
    /// crate retries.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            FixerHttpError::ConnectionError(_)
                | FixerHttpError::ServerError(_)
                | FixerHttpError::TimeoutError(_)
                | FixerHttpError::RateLimitError(_)
        )
    }

    /// Maps HTTP status codes to appropriate error variants
    pub fn from_http_status(status: u16, message: String) -> Self {
        match status {
            400 => FixerHttpError::InvalidRequestError(message),
            404 => FixerHttpError::NotFoundError(message),
            429 => FixerHttpError::RateLimitError(message),
            500..=599 => FixerHttpError::ServerError(message),
            _ => FixerHttpError::HttpError(status, message),
        }
    }
}

impl From<FixerHttpError> for FixerError {
    fn from(err: FixerHttpError) -> Self {
        match err {
            FixerHttpError::JsonDecodeError(_) => FixerError::SerializationError(err.to_string()),
            _ => FixerError::HttpError(err.to_string()),
        }
    }
}

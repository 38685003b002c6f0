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

use http::StatusCode;
use hypersign_core::ErrorKind;

/// Map a response status to an error kind.
///
/// Returns `None` for 2xx. Codes without a dedicated kind map to
/// [`ErrorKind::UnexpectedStatus`].
pub fn classify(status: StatusCode) -> Option<ErrorKind> {
    if status.is_success() {
        return None;
    }

    let kind = match status {
        StatusCode::NOT_MODIFIED => ErrorKind::NotModified,
        StatusCode::BAD_REQUEST => ErrorKind::BadRequest,
        StatusCode::UNAUTHORIZED => ErrorKind::Unauthorized,
        StatusCode::FORBIDDEN => ErrorKind::Forbidden,
        StatusCode::NOT_FOUND => ErrorKind::NotFound,
        StatusCode::NOT_ACCEPTABLE => ErrorKind::NotAcceptable,
        StatusCode::CONFLICT => ErrorKind::Conflict,
        StatusCode::UNPROCESSABLE_ENTITY => ErrorKind::UnprocessableEntity,
        StatusCode::TOO_MANY_REQUESTS => ErrorKind::TooManyRequests,
        StatusCode::INTERNAL_SERVER_ERROR => ErrorKind::InternalServerError,
        StatusCode::BAD_GATEWAY => ErrorKind::BadGateway,
        StatusCode::SERVICE_UNAVAILABLE => ErrorKind::ServiceUnavailable,
        StatusCode::GATEWAY_TIMEOUT => ErrorKind::GatewayTimeout,
        _ => ErrorKind::UnexpectedStatus,
    };
    Some(kind)
}

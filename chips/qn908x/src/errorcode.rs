// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Error enum for the lookup helpers.

use core::fmt;

/// Reasons a lookup into the register map can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum ErrorCode {
    /// An invalid parameter was passed, e.g. an instance index past the end
    /// of a peripheral family
    INVAL = 5,
    /// No exception, interrupt or peripheral exists for the request
    NODEVICE = 10,
    /// The interrupt vector slot exists but is reserved by the silicon
    RESERVED = 16,
}

impl From<ErrorCode> for usize {
    fn from(err: ErrorCode) -> usize {
        err as usize
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = match self {
            ErrorCode::INVAL => "invalid instance",
            ErrorCode::NODEVICE => "no such device",
            ErrorCode::RESERVED => "reserved vector",
        };
        f.write_str(msg)
    }
}

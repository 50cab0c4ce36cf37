//---------------------------------------------------------------------------//
// Copyright (c) 2026 Starlane Contributors. All rights reserved.
//
// This file is part of the Starlane project, a save-file codec and toolkit
// for a 1990s turn-based 4X space strategy game's file formats.
//
// This file is licensed under the MIT license, which can be found in the
// LICENSE file at the root of this repository.
//---------------------------------------------------------------------------//

//! The CLI's own error type: wraps [`starlane_core::error::CoreError`] and the handful of
//! filesystem failures the commands can hit, so `main` has one thing to print and exit on.

use thiserror::Error;

pub type Result<T, E = CliError> = core::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] starlane_core::error::CoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    LoggerInit(#[from] log::SetLoggerError),

    #[error("{0}")]
    Usage(String),
}

//! Encoding for message buses that carry errors as a name plus a list of
//! arguments, rather than as XML or JSON documents.

use serde::Serialize;

use crate::list::ErrorList;
use crate::record::MgmtError;
use crate::typed::TypedError;

/// Prefix of a single error's name; the error type follows it
pub const RPC_ERROR_PREFIX: &str = "com.vyatta.rpcerror.";

/// Name of an error list
pub const ERROR_LIST_NAME: &str = "com.vyatta.mgmterror.list";

/// Argument of a bus error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BusArg<'a> {
    Error(&'a MgmtError),
    List(&'a ErrorList),
}

/// An error as sent on a bus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusError<'a> {
    pub name: String,
    pub body: Vec<BusArg<'a>>,
}

impl MgmtError {
    /// `com.vyatta.rpcerror.<type>` with the record as the only argument
    pub fn bus_error(&self) -> BusError<'_> {
        BusError {
            name: format!("{RPC_ERROR_PREFIX}{}", self.error_type),
            body: vec![BusArg::Error(self)],
        }
    }
}

impl TypedError {
    pub fn bus_error(&self) -> BusError<'_> {
        self.record().bus_error()
    }
}

impl ErrorList {
    pub fn bus_error(&self) -> BusError<'_> {
        BusError {
            name: ERROR_LIST_NAME.to_string(),
            body: vec![BusArg::List(self)],
        }
    }
}

use thiserror::Error;

use crate::host::NodeId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("anchor node {0} is not in the host tree")]
    AnchorMissing(NodeId),

    #[error("root node {0} is not in the host tree")]
    RootMissing(NodeId),
}

pub type Result<T> = std::result::Result<T, Error>;

use std::io::Cursor;

use anyhow::Result;
use libipld_core::{
    codec::{Decode, Encode},
    ipld::Ipld,
    serde::{from_ipld, to_ipld},
};
use libipld_json::DagJsonCodec;
use serde::{de::DeserializeOwned, Serialize};

/// Canonical DAG-JSON form of any serde value.
///
/// DAG-JSON orders map keys, so two equal values always produce the same
/// bytes no matter how they were put together.
pub trait CanonicalDagJson: Serialize + DeserializeOwned {
    fn encode_dag_json(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        to_ipld(self)?.encode(DagJsonCodec, &mut bytes)?;
        Ok(bytes)
    }

    fn decode_dag_json(bytes: &[u8]) -> Result<Self> {
        let ipld = Ipld::decode(DagJsonCodec, &mut Cursor::new(bytes))?;
        Ok(from_ipld(ipld)?)
    }
}

impl<T> CanonicalDagJson for T where T: Serialize + DeserializeOwned {}

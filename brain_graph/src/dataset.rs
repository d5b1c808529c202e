use crate::error::{DatasetError, DatasetResult};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Canonical region key. JSON object keys are parsed into this type once, on load.
pub type RegionId = u32;

/// Weighted edge from one region to another.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub target: RegionId,
    /// Transcriptomic similarity in [0, 1].
    pub strength: f64,
}

/// One brain region: MNI coordinates, outgoing connections and cluster label.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Region {
    pub coords: [f64; 3],
    #[serde(default)]
    pub connections: Vec<Connection>,
    /// Cluster id, `None` when the region was left unclustered.
    #[serde(default)]
    pub label: Option<i64>,
}

/// Immutable mapping of region id to region, enumerated in ascending id order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    regions: BTreeMap<RegionId, Region>,
}

impl Dataset {
    /// Build a dataset, rejecting connections whose target is not a region.
    pub fn from_regions(regions: BTreeMap<RegionId, Region>) -> DatasetResult<Self> {
        for (&id, region) in &regions {
            if let Some(conn) = region
                .connections
                .iter()
                .find(|c| !regions.contains_key(&c.target))
            {
                return Err(DatasetError::DanglingConnection {
                    region: id,
                    target: conn.target,
                });
            }
        }
        Ok(Self { regions })
    }

    /// Build a dataset from raw string keys, as found in the JSON payload.
    pub fn from_raw(raw: BTreeMap<String, Region>) -> DatasetResult<Self> {
        let regions = raw
            .into_iter()
            .map(|(key, region)| Ok((parse_region_key(&key)?, region)))
            .collect::<DatasetResult<BTreeMap<_, _>>>()?;
        Self::from_regions(regions)
    }

    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(&id)
    }

    pub fn contains(&self, id: RegionId) -> bool {
        self.regions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RegionId, &Region)> + '_ {
        self.regions.iter().map(|(id, r)| (*id, r))
    }
}

fn parse_region_key(key: &str) -> DatasetResult<RegionId> {
    // `u32::from_str` accepts a leading '+', which is not a valid key
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DatasetError::InvalidRegionKey(key.to_string()));
    }
    key.parse()
        .map_err(|_| DatasetError::InvalidRegionKey(key.to_string()))
}

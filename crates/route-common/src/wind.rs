//! Wind field snapshots keyed by forecast hour.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::grid::Grid2;
use crate::time::{bucket_3h, ValidTime};

/// A wind snapshot: u/v components plus the coordinate grids they sit on.
///
/// All four grids share one shape. The lats/lons grids carry the coordinate
/// of every cell, so curvilinear source grids work unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindField {
    pub u: Grid2,
    pub v: Grid2,
    pub lats: Grid2,
    pub lons: Grid2,
    pub valid_time: Option<ValidTime>,
}

impl WindField {
    pub fn new(u: Grid2, v: Grid2, lats: Grid2, lons: Grid2) -> ChartResult<Self> {
        let shape = u.shape();
        if u.is_empty() {
            return Err(ChartError::EmptyGrid);
        }
        for (name, grid) in [("v", &v), ("lats", &lats), ("lons", &lons)] {
            if grid.shape() != shape {
                return Err(ChartError::ShapeMismatch(format!(
                    "wind grid '{}' has shape {:?}, expected {:?}",
                    name,
                    grid.shape(),
                    shape
                )));
            }
        }
        Ok(Self {
            u,
            v,
            lats,
            lons,
            valid_time: None,
        })
    }

    pub fn with_valid_time(mut self, valid_time: ValidTime) -> Self {
        self.valid_time = Some(valid_time);
        self
    }

    pub fn shape(&self) -> (usize, usize) {
        self.u.shape()
    }
}

/// Wind fields indexed by forecast hour, bucketed to 3-hour resolution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WindFieldSet {
    fields: BTreeMap<u32, WindField>,
}

impl WindFieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field for a forecast hour. The hour is bucketed; a later
    /// insert into the same bucket replaces the earlier one.
    pub fn insert(&mut self, forecast_hour: u32, field: WindField) {
        self.fields.insert(bucket_3h(forecast_hour), field);
    }

    /// Field for the bucket containing `forecast_hour`, falling back to the
    /// nearest populated bucket.
    pub fn at_hour(&self, forecast_hour: u32) -> Option<&WindField> {
        let bucket = bucket_3h(forecast_hour);
        if let Some(field) = self.fields.get(&bucket) {
            return Some(field);
        }

        let below = self.fields.range(..=bucket).next_back();
        let above = self.fields.range(bucket..).next();
        match (below, above) {
            (Some((bk, bf)), Some((ak, af))) => {
                if bucket - bk <= ak - bucket {
                    Some(bf)
                } else {
                    Some(af)
                }
            }
            (Some((_, f)), None) | (None, Some((_, f))) => Some(f),
            (None, None) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Populated buckets in ascending order.
    pub fn buckets(&self) -> impl Iterator<Item = u32> + '_ {
        self.fields.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(value: f64) -> WindField {
        WindField::new(
            Grid2::filled(2, 2, value),
            Grid2::filled(2, 2, 0.0),
            Grid2::filled(2, 2, 50.0),
            Grid2::filled(2, 2, -5.0),
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_shape_mismatch() {
        let result = WindField::new(
            Grid2::filled(2, 2, 0.0),
            Grid2::filled(2, 3, 0.0),
            Grid2::filled(2, 2, 0.0),
            Grid2::filled(2, 2, 0.0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_at_hour_buckets_to_3h() {
        let mut set = WindFieldSet::new();
        set.insert(0, field(1.0));
        set.insert(3, field(2.0));

        assert_eq!(set.at_hour(0).unwrap().u.get(0, 0), Some(1.0));
        assert_eq!(set.at_hour(2).unwrap().u.get(0, 0), Some(1.0));
        assert_eq!(set.at_hour(3).unwrap().u.get(0, 0), Some(2.0));
        assert_eq!(set.at_hour(5).unwrap().u.get(0, 0), Some(2.0));
    }

    #[test]
    fn test_at_hour_falls_back_to_nearest() {
        let mut set = WindFieldSet::new();
        set.insert(0, field(1.0));
        set.insert(12, field(2.0));

        // bucket 3 is closer to 0 than to 12
        assert_eq!(set.at_hour(4).unwrap().u.get(0, 0), Some(1.0));
        // bucket 9 is closer to 12
        assert_eq!(set.at_hour(10).unwrap().u.get(0, 0), Some(2.0));
        // beyond the last bucket clamps to it
        assert_eq!(set.at_hour(48).unwrap().u.get(0, 0), Some(2.0));

        assert!(WindFieldSet::new().at_hour(0).is_none());
    }
}

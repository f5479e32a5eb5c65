use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type CropId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crop {
    pub id: CropId,
    pub name: String,
    pub variety: String,
    pub planted_on: NaiveDate,
}

impl Crop {
    pub fn new(
        id: CropId,
        name: impl Into<String>,
        variety: impl Into<String>,
        planted_on: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            variety: variety.into(),
            planted_on,
        }
    }

    /// Negative when `today` is before the planting date.
    pub fn days_since_planting(&self, today: NaiveDate) -> i64 {
        (today - self.planted_on).num_days()
    }

    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.variety)
    }
}

pub fn sample_crops() -> Vec<Crop> {
    [
        (1, "Tomato", "San Marzano", (2026, 4, 12)),
        (2, "Wheat", "Hard Red Winter", (2025, 10, 3)),
        (3, "Corn", "Golden Bantam", (2026, 5, 1)),
        (4, "Potato", "Yukon Gold", (2026, 3, 20)),
    ]
    .into_iter()
    .filter_map(|(id, name, variety, (y, m, d))| {
        NaiveDate::from_ymd_opt(y, m, d).map(|date| Crop::new(id, name, variety, date))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_days_since_planting() {
        let crop = Crop::new(
            1,
            "Tomato",
            "Roma",
            NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
        );
        assert_eq!(
            crop.days_since_planting(NaiveDate::from_ymd_opt(2026, 4, 11).unwrap()),
            10
        );
        assert_eq!(
            crop.days_since_planting(NaiveDate::from_ymd_opt(2026, 3, 31).unwrap()),
            -1
        );
    }

    #[test]
    fn test_sample_crops_have_unique_ids() {
        let crops = sample_crops();
        assert_eq!(crops.len(), 4);
        let ids: HashSet<CropId> = crops.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), crops.len());
    }

    #[test]
    fn test_label() {
        let crop = &sample_crops()[0];
        assert_eq!(crop.label(), "Tomato (San Marzano)");
    }
}

//! Lot profile and revenue series shown on the dashboard

use serde::{Deserialize, Serialize};

/// Static description of the parking lot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotProfile {
    pub name: String,
    pub address: String,
    pub rating: f32,
    /// Hourly price in VND
    pub price_per_hour: i64,
    pub admin_name: String,
    pub admin_email: String,
}

impl LotProfile {
    pub fn demo() -> Self {
        Self {
            name: "Bãi Đỗ Xe An Phú Quận 2".to_string(),
            address: "120 Nguyễn Cơ Thạch, P. An Lợi Đông, TP. Thủ Đức".to_string(),
            rating: 4.7,
            price_per_hour: 5000,
            admin_name: "Nguyễn Minh Hòa".to_string(),
            admin_email: "hoa.nguyen@parkai.vn".to_string(),
        }
    }
}

/// Revenue chart period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevenuePeriod {
    Week,
    Month,
}

/// Two comparable revenue series on a shared axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueSeries {
    pub period: RevenuePeriod,
    pub labels: Vec<String>,
    /// This week / this year
    pub current: Vec<i64>,
    /// Last week / last year
    pub previous: Vec<i64>,
    /// Top of the y axis
    pub scale_max: i64,
}

impl RevenueSeries {
    pub fn weekly() -> Self {
        Self {
            period: RevenuePeriod::Week,
            labels: ["CN", "T2", "T3", "T4", "T5", "T6", "T7"]
                .map(String::from)
                .to_vec(),
            current: vec![
                3_200_000, 8_500_000, 6_000_000, 2_200_000, 3_000_000, 8_200_000, 6_500_000,
            ],
            previous: vec![
                4_000_000, 9_000_000, 5_000_000, 3_000_000, 4_500_000, 6_000_000, 4_000_000,
            ],
            scale_max: 10_000_000,
        }
    }

    pub fn monthly() -> Self {
        Self {
            period: RevenuePeriod::Month,
            labels: (1..=12).map(|m| format!("T{}", m)).collect(),
            current: vec![
                12_000_000, 14_500_000, 9_000_000, 17_000_000, 15_500_000, 18_000_000,
                20_000_000, 17_500_000, 16_000_000, 14_000_000, 13_000_000, 15_000_000,
            ],
            previous: vec![
                10_000_000, 12_000_000, 8_000_000, 15_000_000, 14_000_000, 16_000_000,
                17_000_000, 16_000_000, 15_000_000, 13_000_000, 12_000_000, 14_000_000,
            ],
            scale_max: 20_000_000,
        }
    }

    pub fn current_total(&self) -> i64 {
        self.current.iter().sum()
    }

    pub fn previous_total(&self) -> i64 {
        self.previous.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_shapes() {
        let week = RevenueSeries::weekly();
        assert_eq!(week.labels.len(), 7);
        assert_eq!(week.current.len(), 7);
        assert_eq!(week.previous.len(), 7);

        let month = RevenueSeries::monthly();
        assert_eq!(month.labels.first().map(String::as_str), Some("T1"));
        assert_eq!(month.labels.last().map(String::as_str), Some("T12"));
        assert_eq!(month.current.len(), 12);
    }

    #[test]
    fn test_series_stay_under_scale() {
        for series in [RevenueSeries::weekly(), RevenueSeries::monthly()] {
            let max = series.current.iter().chain(&series.previous).max().copied();
            assert!(max.unwrap() <= series.scale_max);
        }
    }

    #[test]
    fn test_totals() {
        let week = RevenueSeries::weekly();
        assert_eq!(week.current_total(), 37_600_000);
        assert_eq!(week.previous_total(), 35_500_000);
    }
}

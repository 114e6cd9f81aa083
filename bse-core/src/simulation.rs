//! Derived "home health" metrics.
//!
//! The derivation is a fixed arithmetic transform of the monthly bill.
//! The flat scores and the aid figure are assumed estimates, not a real
//! energy model; they are kept as named constants so the placeholder
//! nature stays visible.

use serde::Serialize;

/// First year shown on the projection chart.
pub const BASE_YEAR: u16 = 2025;
/// Number of yearly points on the projection chart.
pub const HORIZON_YEARS: usize = 10;

/// Share of the current bill a renovation is assumed to save each month.
const SAVINGS_RATE: f64 = 0.4;
/// Spend after renovation, as a share of current spend.
const OPTIMIZED_RATE: f64 = 0.6;

const ENERGY_SCORE: u8 = 45;
const WASTE_SCORE: u8 = 55;
const AUTONOMY_SCORE: u8 = 65;
const AID_AMOUNT: u32 = 7_500;
const ROI_YEARS: f64 = 6.5;

/// One yearly point of the cumulative-spend projection.
///
/// Serializes to the exact field names the D3 savings chart reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub year: u16,
    /// Cumulative spend at the current bill, in euros.
    pub current: u32,
    /// Cumulative spend after renovation, in euros.
    pub optimized: u32,
}

/// Display-only metrics computed once from the questionnaire.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// 0-100; above 60 reads as a good rating on the dashboard.
    pub energy_score: u8,
    /// 0-100.
    pub waste_score: u8,
    /// 0-100, shown on the autonomy tile.
    pub autonomy_score: u8,
    /// Projected monthly savings, in euros.
    pub projected_savings: u32,
    /// Estimated public aid, in euros.
    pub aid_amount: u32,
    /// Return-on-investment horizon, in years.
    pub roi_years: f64,
    pub analysis_short: &'static str,
    pub analysis_long: &'static str,
    /// Exactly [`HORIZON_YEARS`] consecutive years starting at [`BASE_YEAR`].
    pub chart_data: Vec<ChartPoint>,
}

impl SimulationResult {
    /// Cumulative savings over the full horizon (the dashboard headline).
    pub fn cumulative_savings(&self) -> u32 {
        match self.chart_data.last() {
            Some(last) => last.current.saturating_sub(last.optimized),
            None => 0,
        }
    }
}

/// Derive the simulation from the monthly bill.
///
/// Every other answer is recorded but does not influence the result.
pub fn derive(monthly_bill: u32) -> SimulationResult {
    let bill = f64::from(monthly_bill);

    let chart_data = (0..HORIZON_YEARS)
        .map(|i| {
            let years = (i + 1) as f64;
            ChartPoint {
                year: BASE_YEAR + i as u16,
                current: (bill * 12.0 * years).round() as u32,
                optimized: (bill * OPTIMIZED_RATE * 12.0 * years).round() as u32,
            }
        })
        .collect();

    SimulationResult {
        energy_score: ENERGY_SCORE,
        waste_score: WASTE_SCORE,
        autonomy_score: AUTONOMY_SCORE,
        projected_savings: (bill * SAVINGS_RATE).round() as u32,
        aid_amount: AID_AMOUNT,
        roi_years: ROI_YEARS,
        analysis_short: "Systeme de chauffage energivore detecte.",
        analysis_long: "Votre installation actuelle entraine des pertes importantes. \
                        Une renovation globale pourrait diviser votre facture par deux.",
        chart_data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_shape_for_all_valid_bills() {
        for bill in (50..=500).step_by(10) {
            let result = derive(bill);
            assert_eq!(result.chart_data.len(), HORIZON_YEARS);
            for (i, point) in result.chart_data.iter().enumerate() {
                assert_eq!(point.year, BASE_YEAR + i as u16);
                let expected = (0.6 * f64::from(point.current)).round() as u32;
                assert_eq!(point.optimized, expected, "bill={bill} i={i}");
            }
        }
    }

    #[test]
    fn test_years_strictly_increasing() {
        let result = derive(200);
        for pair in result.chart_data.windows(2) {
            assert_eq!(pair[1].year, pair[0].year + 1);
        }
    }

    #[test]
    fn test_projected_savings() {
        for bill in (50..=500).step_by(10) {
            let result = derive(bill);
            assert_eq!(
                result.projected_savings,
                (0.4 * f64::from(bill)).round() as u32
            );
        }
    }

    #[test]
    fn test_scenario_bill_150() {
        let result = derive(150);
        assert_eq!(result.projected_savings, 60);
        assert_eq!(result.chart_data[9].current, 18_000);
        assert_eq!(result.chart_data[9].optimized, 10_800);
        assert_eq!(result.cumulative_savings(), 7_200);
    }

    #[test]
    fn test_flat_estimates() {
        let a = derive(50);
        let b = derive(500);
        assert_eq!(a.energy_score, 45);
        assert_eq!(a.waste_score, 55);
        assert_eq!(a.autonomy_score, 65);
        assert_eq!(a.aid_amount, 7_500);
        assert_eq!(a.roi_years, 6.5);
        // the flat estimates do not vary with the bill
        assert_eq!(a.energy_score, b.energy_score);
        assert_eq!(a.aid_amount, b.aid_amount);
    }
}

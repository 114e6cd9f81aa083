//! Accumulated questionnaire answers.

/// Slider bounds and default for the monthly bill, in euros.
pub const BILL_MIN: u32 = 50;
pub const BILL_MAX: u32 = 500;
pub const BILL_STEP: u32 = 10;
pub const BILL_DEFAULT: u32 = 150;

/// French postal codes are 5 digits.
pub const POSTAL_LEN: usize = 5;

/// Occupancy status collected by the profile question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerStatus {
    Owner,
    Tenant,
}

impl OwnerStatus {
    /// Selectable values, in display order.
    pub const ALL: [OwnerStatus; 2] = [OwnerStatus::Owner, OwnerStatus::Tenant];

    /// Display label shown on the option card and in the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            OwnerStatus::Owner => "Proprietaire",
            OwnerStatus::Tenant => "Locataire",
        }
    }
}

/// Primary heating source collected by the heat-source question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatingType {
    Electric,
    Gas,
    Oil,
    Wood,
}

impl HeatingType {
    /// Selectable values, in display order.
    pub const ALL: [HeatingType; 4] = [
        HeatingType::Electric,
        HeatingType::Gas,
        HeatingType::Oil,
        HeatingType::Wood,
    ];

    /// Display label shown on the option card and in the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            HeatingType::Electric => "Electrique",
            HeatingType::Gas => "Gaz",
            HeatingType::Oil => "Fioul",
            HeatingType::Wood => "Bois",
        }
    }
}

/// Answers accumulated across the questionnaire.
///
/// Created with defaults at app start; lives only in memory and is
/// discarded on reload. The wizard's setters keep `monthly_bill` within
/// [`BILL_MIN`, `BILL_MAX`] and `postal_code` at digits only, at most
/// [`POSTAL_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserData {
    pub owner_status: Option<OwnerStatus>,
    pub heating_type: Option<HeatingType>,
    /// Monthly energy bill in euros.
    pub monthly_bill: u32,
    pub postal_code: String,
}

impl Default for UserData {
    fn default() -> Self {
        Self {
            owner_status: None,
            heating_type: None,
            monthly_bill: BILL_DEFAULT,
            postal_code: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let data = UserData::default();
        assert_eq!(data.owner_status, None);
        assert_eq!(data.heating_type, None);
        assert_eq!(data.monthly_bill, 150);
        assert!(data.postal_code.is_empty());
    }

    #[test]
    fn test_labels() {
        assert_eq!(OwnerStatus::Owner.label(), "Proprietaire");
        assert_eq!(OwnerStatus::Tenant.label(), "Locataire");
        assert_eq!(HeatingType::Oil.label(), "Fioul");
        assert_eq!(HeatingType::Wood.label(), "Bois");
    }
}

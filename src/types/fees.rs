use serde::{Deserialize, Serialize};

use super::errors::MinterError;

/// Fee tiers enabled on the V3 factory, in hundredths of a bip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FeeAmount {
    Lowest = 100,
    Low    = 500,
    Medium = 3000,
    High   = 10000
}

impl FeeAmount {
    pub const ALL: [FeeAmount; 4] =
        [FeeAmount::Lowest, FeeAmount::Low, FeeAmount::Medium, FeeAmount::High];

    #[inline]
    pub fn as_u32(&self) -> u32 {
        *self as u32
    }

    /// The tick spacing the factory assigns to pools of this fee tier.
    #[inline]
    pub fn tick_spacing(&self) -> i32 {
        match self {
            FeeAmount::Lowest => 1,
            FeeAmount::Low => 10,
            FeeAmount::Medium => 60,
            FeeAmount::High => 200
        }
    }
}

impl TryFrom<u32> for FeeAmount {
    type Error = MinterError;

    fn try_from(fee: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_u32() == fee)
            .ok_or(MinterError::UnsupportedFee(fee))
    }
}

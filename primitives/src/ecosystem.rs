//! Ecosystem Constants for the Threshold Top-Up Rule
//!
//! Single source of truth for the token denomination and the fixed parameters of the
//! top-up rule. Runtime configurations bind these through `parameter_types!`.

/// Balance type alias for consistency across the ecosystem
pub type Balance = u128;

/// Token denomination.
pub mod units {
  use super::Balance;

  /// Minor units per major unit (6 decimals).
  ///
  /// Balances are always held in minor units; major-unit figures are obtained by floor
  /// division by this scale.
  pub const MINOR_UNITS_PER_MAJOR: Balance = 1_000_000;

  /// Express a whole number of major units in minor units.
  pub const fn major(amount: Balance) -> Balance {
    amount * MINOR_UNITS_PER_MAJOR
  }
}

/// Fixed parameters of the top-up rule.
pub mod params {
  use super::{Balance, units};

  /// Balance floor below which the rule tops the target up (600 major units).
  pub const TOP_UP_THRESHOLD: Balance = units::major(600);

  /// Amount moved from funder to target per triggering evaluation (50 major units).
  ///
  /// Always transferred in full; the rule never performs a partial top-up.
  pub const TOP_UP_AMOUNT: Balance = units::major(50);

  /// Re-export of the denomination scale for runtime configs.
  pub const MINOR_UNITS_PER_MAJOR: Balance = units::MINOR_UNITS_PER_MAJOR;
}

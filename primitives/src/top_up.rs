use crate::Balance;
use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Snapshot of the top-up rule for one funder/target pair.
///
/// Returned by the pallet's `status` query so that clients (wallet UIs, keepers deciding
/// whether to submit the extrinsic) can fetch everything with a single call. All amounts
/// are in major units, floored.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Default,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub struct TopUpStatus {
  /// The target is registered and below the threshold
  pub will_trigger: bool,
  /// Target balance, 0 when unregistered
  pub target_balance_major: Balance,
  /// Funder balance, 0 when unregistered
  pub funder_balance_major: Balance,
  /// Shortfall to the threshold; the whole threshold when the target is unregistered
  pub amount_needed_major: Balance,
}

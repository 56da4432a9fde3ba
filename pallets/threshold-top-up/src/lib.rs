//! Threshold Top-Up Pallet
//!
//! Keeps a target account's native balance above a fixed floor. When a signed funder
//! invokes the rule and the target is registered and below `Threshold`, exactly
//! `TopUpAmount` moves from the funder to the target and a `TopUpExecuted` event records
//! the before/after state. In every other case the call is a silent no-op, except a
//! funder that cannot cover the top-up, which fails with `InsufficientBalance`.
//!
//! The pallet keeps no storage. How often the rule runs is up to whoever submits the
//! extrinsic (a scheduler, a keeper, a user); read-only queries are exposed as view
//! functions so those callers can predict whether a submission would do anything.

#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

pub mod adapters;
pub use adapters::{NativeLedger, TopUpLedger};

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

const LOG_TARGET: &str = "runtime::threshold-top-up";

/// Helper for benchmarking
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId, Balance> {
  /// Register `who` with the ledger and credit it `amount`.
  fn fund(who: &AccountId, amount: Balance) -> frame::deps::sp_runtime::DispatchResult;
}

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, TopUpLedger, WeightInfo};
  use frame::prelude::*;
  use primitives::{Balance, TopUpStatus};

  /// Configuration trait for the threshold top-up pallet
  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Ledger holding the watched token
    type Ledger: TopUpLedger<Self::AccountId, Balance>;

    /// Balance floor, in minor units, below which a target is topped up
    #[pallet::constant]
    type Threshold: Get<Balance>;

    /// Amount, in minor units, transferred per triggering call
    #[pallet::constant]
    type TopUpAmount: Get<Balance>;

    /// Minor units per major unit, used by the read-only queries
    #[pallet::constant]
    type MinorUnitsPerMajor: Get<Balance>;

    /// Weight information for extrinsics
    type WeightInfo: WeightInfo;

    /// Helper for benchmarking
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper<Self::AccountId, Balance>;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(PhantomData<T>);

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// A target below the threshold was topped up by a funder
    TopUpExecuted {
      funder: T::AccountId,
      target: T::AccountId,
      amount: Balance,
      target_balance_before: Balance,
      target_balance_after: Balance,
      threshold: Balance,
      funder_balance_after: Balance,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// The funder cannot cover the top-up amount
    InsufficientBalance,
  }

  #[pallet::hooks]
  impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
    fn integrity_test() {
      assert!(
        T::MinorUnitsPerMajor::get() != 0,
        "MinorUnitsPerMajor must be non-zero"
      );
      assert!(T::TopUpAmount::get() != 0, "TopUpAmount must be non-zero");
    }
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Top up `target` from the signing account if it sits below the threshold.
    ///
    /// No-op when the target is unregistered or already at or above the threshold. Fails
    /// with `InsufficientBalance` when the signer cannot spend the top-up amount; nothing
    /// is transferred in that case. A solvent signer topping up itself is a no-op.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::high_threshold_top_up())]
    pub fn high_threshold_top_up(origin: OriginFor<T>, target: T::AccountId) -> DispatchResult {
      let funder = ensure_signed(origin)?;
      Self::do_top_up(&funder, &target)
    }
  }

  /// Read-only queries. Unregistered accounts read as a zero balance.
  #[pallet::view_functions]
  impl<T: Config> Pallet<T> {
    /// Whether a top-up of `target` would be attempted right now.
    pub fn will_trigger(target: T::AccountId) -> bool {
      Self::registered_balance(&target).is_some_and(|balance| balance < T::Threshold::get())
    }

    /// Target balance in whole major units.
    pub fn target_balance_major(target: T::AccountId) -> Balance {
      Self::registered_balance(&target).map_or(0, Self::to_major)
    }

    /// Funder balance in whole major units.
    pub fn funder_balance_major(funder: T::AccountId) -> Balance {
      Self::registered_balance(&funder).map_or(0, Self::to_major)
    }

    /// Major units still missing before `target` reaches the threshold (floored).
    /// An unregistered target needs the whole threshold.
    pub fn amount_needed_to_reach_threshold(target: T::AccountId) -> Balance {
      let threshold = T::Threshold::get();
      let shortfall = match Self::registered_balance(&target) {
        None => threshold,
        Some(balance) => threshold.saturating_sub(balance),
      };
      Self::to_major(shortfall)
    }

    /// Whether `funder` could pay one top-up right now, counting only unlocked funds.
    pub fn can_funder_afford(funder: T::AccountId) -> bool {
      Self::spendable_balance(&funder) >= T::TopUpAmount::get()
    }

    /// All of the above for one funder/target pair.
    pub fn status(funder: T::AccountId, target: T::AccountId) -> TopUpStatus {
      TopUpStatus {
        will_trigger: Self::will_trigger(target.clone()),
        target_balance_major: Self::target_balance_major(target.clone()),
        funder_balance_major: Self::funder_balance_major(funder),
        amount_needed_major: Self::amount_needed_to_reach_threshold(target),
      }
    }
  }

  impl<T: Config> Pallet<T> {
    /// Evaluate the rule for `target`, paying from `funder`.
    ///
    /// At most one transfer and one event; both happen or neither does.
    pub fn do_top_up(funder: &T::AccountId, target: &T::AccountId) -> DispatchResult {
      let Some(target_balance_before) = Self::registered_balance(target) else {
        log::debug!(target: LOG_TARGET, "target {:?} not registered, skipping", target);
        return Ok(());
      };
      let threshold = T::Threshold::get();
      if target_balance_before >= threshold {
        log::debug!(
          target: LOG_TARGET,
          "target {:?} at {} is not below threshold {}",
          target,
          target_balance_before,
          threshold,
        );
        return Ok(());
      }
      let amount = T::TopUpAmount::get();
      let funder_balance = Self::spendable_balance(funder);
      if funder_balance < amount {
        log::warn!(
          target: LOG_TARGET,
          "funder {:?} holds {}, needs {} to top up {:?}",
          funder,
          funder_balance,
          amount,
          target,
        );
        return Err(Error::<T>::InsufficientBalance.into());
      }
      // Paying yourself cannot raise your balance.
      if funder == target {
        log::debug!(target: LOG_TARGET, "funder {:?} is the target, skipping", funder);
        return Ok(());
      }
      T::Ledger::transfer(funder, target, amount)?;
      let target_balance_after = T::Ledger::balance(target);
      let funder_balance_after = T::Ledger::balance(funder);
      log::info!(
        target: LOG_TARGET,
        "topped up {:?} from {:?}: {} -> {}",
        target,
        funder,
        target_balance_before,
        target_balance_after,
      );
      Self::deposit_event(Event::TopUpExecuted {
        funder: funder.clone(),
        target: target.clone(),
        amount,
        target_balance_before,
        target_balance_after,
        threshold,
        funder_balance_after,
      });
      Ok(())
    }

    /// Ledger balance of `who`, or `None` when the account is not registered.
    fn registered_balance(who: &T::AccountId) -> Option<Balance> {
      T::Ledger::is_registered(who).then(|| T::Ledger::balance(who))
    }

    /// Funds `who` can move right now; zero when the account is not registered.
    fn spendable_balance(who: &T::AccountId) -> Balance {
      if T::Ledger::is_registered(who) { T::Ledger::spendable(who) } else { 0 }
    }

    /// Floor conversion from minor to major units. A zero scale yields zero.
    fn to_major(amount: Balance) -> Balance {
      amount
        .checked_div(T::MinorUnitsPerMajor::get())
        .unwrap_or_default()
    }
  }
}

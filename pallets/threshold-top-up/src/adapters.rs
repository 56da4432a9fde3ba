//! Ledger adapter for the threshold top-up pallet.
//!
//! The pallet never touches balances directly. Registration, balance reads and the
//! transfer all go through [`TopUpLedger`], so the rule stays independent of which
//! currency implementation the runtime wires in.

use core::marker::PhantomData;
use frame::deps::frame_support::traits::{
  fungible::{Inspect as NativeInspect, Mutate as NativeMutate},
  tokens::{Fortitude, Preservation},
};
use frame::prelude::*;

/// Account registry, balance queries and transfers for the watched token.
pub trait TopUpLedger<AccountId, Balance> {
  /// Whether `who` is provisioned to hold the token.
  fn is_registered(who: &AccountId) -> bool;

  /// Balance of `who` in minor units. Only meaningful when `who` is registered.
  fn balance(who: &AccountId) -> Balance;

  /// Part of the balance `who` can actually move right now, net of locks and freezes.
  fn spendable(who: &AccountId) -> Balance;

  /// Move exactly `amount` from `from` to `to`, failing without side effects when
  /// `from` cannot cover it.
  fn transfer(from: &AccountId, to: &AccountId, amount: Balance) -> DispatchResult;
}

/// Unwired ledger: nobody is registered and every transfer fails.
impl<AccountId, Balance: Default> TopUpLedger<AccountId, Balance> for () {
  fn is_registered(_: &AccountId) -> bool {
    false
  }

  fn balance(_: &AccountId) -> Balance {
    Balance::default()
  }

  fn spendable(_: &AccountId) -> Balance {
    Balance::default()
  }

  fn transfer(_: &AccountId, _: &AccountId, _: Balance) -> DispatchResult {
    Err(DispatchError::Other("TopUpLedger not configured"))
  }
}

/// [`TopUpLedger`] over the runtime's native currency.
///
/// An account counts as registered while it exists in `frame_system`, i.e. while it holds
/// at least one provider reference. That admits registered accounts with a zero balance.
/// Transfers are `Expendable`: a funder holding exactly the top-up amount may pay it and
/// be reaped.
pub struct NativeLedger<T, Currency>(PhantomData<(T, Currency)>);

type NativeBalanceOf<T, Currency> =
  <Currency as NativeInspect<<T as frame_system::Config>::AccountId>>::Balance;

impl<T, Currency> TopUpLedger<T::AccountId, NativeBalanceOf<T, Currency>>
  for NativeLedger<T, Currency>
where
  T: frame_system::Config,
  Currency: NativeInspect<T::AccountId> + NativeMutate<T::AccountId>,
{
  fn is_registered(who: &T::AccountId) -> bool {
    frame_system::Pallet::<T>::account_exists(who)
  }

  fn balance(who: &T::AccountId) -> NativeBalanceOf<T, Currency> {
    <Currency as NativeInspect<T::AccountId>>::balance(who)
  }

  fn spendable(who: &T::AccountId) -> NativeBalanceOf<T, Currency> {
    <Currency as NativeInspect<T::AccountId>>::reducible_balance(
      who,
      Preservation::Expendable,
      Fortitude::Polite,
    )
  }

  fn transfer(
    from: &T::AccountId,
    to: &T::AccountId,
    amount: NativeBalanceOf<T, Currency>,
  ) -> DispatchResult {
    <Currency as NativeMutate<T::AccountId>>::transfer(from, to, amount, Preservation::Expendable)
      .map(|_| ())
  }
}

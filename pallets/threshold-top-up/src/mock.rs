use crate as pallet_threshold_top_up;
use polkadot_sdk::frame_support::{
  construct_runtime, derive_impl, parameter_types,
  traits::{ConstU32, ConstU128},
};
use polkadot_sdk::frame_system;
use polkadot_sdk::sp_runtime::{
  BuildStorage,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};
use primitives::{
  Balance,
  ecosystem::{params, units::major},
};

type Block = frame_system::mocking::MockBlock<Test>;
pub type AccountId = u64;

/// Well funded account paying for top-ups (1000)
pub const FUNDER: AccountId = 1;
/// Below the threshold (500)
pub const TARGET: AccountId = 2;
/// Exactly at the threshold (600)
pub const AT_THRESHOLD: AccountId = 3;
/// Above the threshold (700)
pub const FULL_TARGET: AccountId = 4;
/// Cannot cover a single top-up (10)
pub const POOR_FUNDER: AccountId = 5;
/// Never touched by genesis
pub const UNREGISTERED: AccountId = 6;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    TopUp: pallet_threshold_top_up,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = AccountId;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<Balance>;
}

impl polkadot_sdk::pallet_balances::Config for Test {
  type MaxLocks = ConstU32<50>;
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = Balance;
  type RuntimeEvent = RuntimeEvent;
  type DustRemoval = ();
  type ExistentialDeposit = ConstU128<1>;
  type AccountStore = System;
  type WeightInfo = ();
  type FreezeIdentifier = ();
  type MaxFreezes = ();
  type RuntimeHoldReason = RuntimeHoldReason;
  type RuntimeFreezeReason = RuntimeFreezeReason;
  type DoneSlashHandler = ();
}

parameter_types! {
  /// Balance floor (ecosystem constant: 600)
  pub const ThresholdTopUpThreshold: Balance = params::TOP_UP_THRESHOLD;

  /// Fixed top-up (ecosystem constant: 50)
  pub const ThresholdTopUpAmount: Balance = params::TOP_UP_AMOUNT;

  pub const ThresholdTopUpMinorUnitsPerMajor: Balance = params::MINOR_UNITS_PER_MAJOR;
}

impl pallet_threshold_top_up::Config for Test {
  type Ledger = pallet_threshold_top_up::NativeLedger<Test, Balances>;
  type Threshold = ThresholdTopUpThreshold;
  type TopUpAmount = ThresholdTopUpAmount;
  type MinorUnitsPerMajor = ThresholdTopUpMinorUnitsPerMajor;
  type WeightInfo = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = MockBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct MockBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl pallet_threshold_top_up::BenchmarkHelper<AccountId, Balance> for MockBenchmarkHelper {
  fn fund(who: &AccountId, amount: Balance) -> polkadot_sdk::sp_runtime::DispatchResult {
    use polkadot_sdk::frame_support::traits::fungible::Mutate;
    <Balances as Mutate<AccountId>>::mint_into(who, amount).map(|_| ())
  }
}

/// Register `who` with the ledger without giving it any balance.
pub fn register(who: AccountId) {
  let _ = System::inc_providers(&who);
}

/// Lock `amount` of `who`'s native balance against every kind of withdrawal.
pub fn lock(who: AccountId, amount: Balance) {
  use polkadot_sdk::frame_support::traits::{LockableCurrency, WithdrawReasons};
  Balances::set_lock(*b"toplock0", &who, amount, WithdrawReasons::all());
}

/// Native balance of `who` in minor units.
pub fn balance_of(who: AccountId) -> Balance {
  Balances::free_balance(who)
}

/// Credit `who` with `amount` minor units, creating the account if needed.
pub fn fund(who: AccountId, amount: Balance) {
  use polkadot_sdk::frame_support::{assert_ok, traits::fungible::Mutate};
  assert_ok!(<Balances as Mutate<AccountId>>::mint_into(&who, amount));
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  polkadot_sdk::pallet_balances::GenesisConfig::<Test> {
    balances: vec![
      (FUNDER, major(1_000)),
      (TARGET, major(500)),
      (AT_THRESHOLD, major(600)),
      (FULL_TARGET, major(700)),
      (POOR_FUNDER, major(10)),
    ],
    dev_accounts: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
  // Events are only recorded from block 1 onwards
  ext.execute_with(|| System::set_block_number(1));
  ext
}

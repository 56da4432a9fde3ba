use crate::*;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_support::traits::Get;
use polkadot_sdk::frame_system::RawOrigin;

#[benchmarks]
mod benches {
  use super::*;

  // Worst case: registered target just below the threshold, solvent funder.
  #[benchmark]
  fn high_threshold_top_up() {
    let funder: T::AccountId = whitelisted_caller();
    let target: T::AccountId = account("target", 0, 0);
    let amount = T::TopUpAmount::get();
    let below_threshold = T::Threshold::get().saturating_sub(1).max(1);

    T::BenchmarkHelper::fund(&funder, amount.saturating_mul(2))
      .expect("Failed to fund funder");
    T::BenchmarkHelper::fund(&target, below_threshold).expect("Failed to fund target");
    let target_before = T::Ledger::balance(&target);

    #[extrinsic_call]
    high_threshold_top_up(RawOrigin::Signed(funder), target.clone());

    assert_eq!(
      T::Ledger::balance(&target),
      target_before.saturating_add(amount)
    );
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}

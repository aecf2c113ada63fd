// crates/zippytrust-engine/tests/network_scenario.rs
//
// End-to-end scoring of the canonical two-wallet network: one origin
// anchor and one delegated wallet with a full metric profile.

use zippytrust_core::{DelegationGraph, ReputationMetric, Wallet, WalletId};
use zippytrust_engine::TrustEngine;

fn demo_wallet() -> Wallet {
    let mut wallet = Wallet::new("wallet-1");
    wallet.delegation_depth = 1;
    wallet.delegation_count = 2;
    wallet.stake_amount = 2000.0;

    let profile = [
        (ReputationMetric::TransactionSuccess, 95.0),
        (ReputationMetric::ValidatorUptime, 98.0),
        (ReputationMetric::CommunityVoting, 85.0),
        (ReputationMetric::SecurityCompliance, 90.0),
        (ReputationMetric::NetworkContribution, 80.0),
        (ReputationMetric::TimeOnNetwork, 70.0),
        (ReputationMetric::StakeConsistency, 88.0),
        (ReputationMetric::DelegationQuality, 92.0),
        (ReputationMetric::FraudPrevention, 85.0),
        (ReputationMetric::EcosystemGrowth, 75.0),
        (ReputationMetric::InnovationContrib, 60.0),
        (ReputationMetric::SocialTrust, 82.0),
    ];
    for (metric, value) in profile {
        wallet.reputation_metrics.set(metric, value);
    }
    wallet
}

#[test]
fn scores_the_canonical_two_wallet_network() {
    let mut wallets = vec![Wallet::origin("origin-1"), demo_wallet()];
    let mut graph = DelegationGraph::new();
    graph.add_delegation(WalletId::from("origin-1"), WalletId::from("wallet-1"));

    let engine = TrustEngine::default();
    let scored = engine.update_network_trust(&mut wallets, &graph);
    assert_eq!(scored, 2);

    // The anchor is pinned at 100.
    assert_eq!(wallets[0].trust_score, 100.0);

    // wallet-1: one delegator resolved to the flat neutral 50, one hop
    // of decay, reputation factor 0.8602 under the default weights, two
    // delegators worth of network effect, and stake at twice the
    // minimum.
    let stake_factor = 0.7 + 0.1 * 2.0_f64.ln();
    let expected = 50.0 * 0.9 * 0.8602 * 0.6 * stake_factor;
    assert!((wallets[1].trust_score - expected).abs() < 1e-6);
    assert!(wallets[1].trust_score > 0.0 && wallets[1].trust_score < 100.0);
}

#[test]
fn rerunning_the_update_converges_immediately() {
    // Because delegators are resolved to a flat neutral score, a second
    // pass over the same snapshot reproduces the same scores.
    let mut wallets = vec![Wallet::origin("origin-1"), demo_wallet()];
    let mut graph = DelegationGraph::new();
    graph.add_delegation(WalletId::from("origin-1"), WalletId::from("wallet-1"));

    let engine = TrustEngine::default();
    engine.update_network_trust(&mut wallets, &graph);
    let first = wallets[1].trust_score;
    engine.update_network_trust(&mut wallets, &graph);
    assert_eq!(wallets[1].trust_score, first);
}

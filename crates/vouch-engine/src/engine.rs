//! The verification engine.

use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use vouch_core::{
    AdapterError, ChainConfirmation, Confidence, DecisionRequest, HealthReport, IChainLookup,
    IExecutionVerifier, IMarketFeed, MarketContext, VerificationResult, VouchConfig, VouchResult,
};
use vouch_ledger::LedgerVerifier;
use vouch_observability::{EngineMetrics, HealthReporter};
use vouch_signals::{StubChainLookup, StubMarketFeed};

use crate::blend::{self, BlendInputs};
use crate::cache::TtlCache;
use crate::classify;
use crate::validate;

/// Orchestrates one verification end to end: validation, ledger claims,
/// signal gathering, blending, classification, and memoization.
///
/// All methods take `&self`; an engine is shared across tasks behind an
/// `Arc` and verifies requests concurrently. Signal adapters are optional at
/// construction. An unconfigured adapter is a deployment choice and is
/// skipped silently; a configured adapter that fails or misses its deadline
/// degrades the verification and leaves an advisory on the result.
pub struct VerificationEngine<C, M> {
    config: VouchConfig,
    ledger: LedgerVerifier,
    chain: Option<C>,
    market: Option<M>,
    result_cache: TtlCache<VerificationResult>,
    market_cache: TtlCache<MarketContext>,
    metrics: EngineMetrics,
    adapter_timeout: Duration,
}

impl VerificationEngine<StubChainLookup, StubMarketFeed> {
    /// Engine with no signal adapters at all.
    ///
    /// Verifications run on the baseline prior and claim evidence alone.
    /// Used in tests and in deployments with no upstream access.
    pub fn offline(config: VouchConfig) -> Self {
        Self::new(config, None, None)
    }
}

impl<C: IChainLookup, M: IMarketFeed> VerificationEngine<C, M> {
    /// Build an engine from configuration and whichever adapters the
    /// deployment has.
    pub fn new(config: VouchConfig, chain: Option<C>, market: Option<M>) -> Self {
        let result_cache = TtlCache::new(
            config.cache.capacity,
            Duration::from_secs(config.cache.result_ttl_secs),
        );
        let market_cache = TtlCache::new(
            config.cache.capacity,
            Duration::from_secs(config.cache.market_ttl_secs),
        );
        let adapter_timeout = Duration::from_secs(config.signals.adapter_timeout_secs);

        Self {
            config,
            ledger: LedgerVerifier::new(),
            chain,
            market,
            result_cache,
            market_cache,
            metrics: EngineMetrics::new(),
            adapter_timeout,
        }
    }

    /// Replace both cache TTLs, keeping the configured capacity. Lets tests
    /// exercise expiry without multi-minute sleeps.
    pub fn with_cache_ttls(mut self, result_ttl: Duration, market_ttl: Duration) -> Self {
        self.result_cache = TtlCache::new(self.config.cache.capacity, result_ttl);
        self.market_cache = TtlCache::new(self.config.cache.capacity, market_ttl);
        self
    }

    /// Verify one decision request.
    ///
    /// Returns a cached result unchanged (same `verification_id`, same
    /// `timestamp`) when an identical request was verified within the result
    /// TTL. Hard errors are limited to malformed requests and invalid
    /// execution claims; adapter trouble degrades the result instead of
    /// failing it.
    pub async fn verify(&self, request: &DecisionRequest) -> VouchResult<VerificationResult> {
        validate::validate_request(request)?;

        let fingerprint = request.fingerprint();
        if let Some(cached) = self.result_cache.get(&fingerprint) {
            self.metrics.record_cache_hit();
            debug!(
                verification_id = %cached.verification_id,
                agent_id = %request.agent_id,
                "serving cached verification"
            );
            return Ok(cached);
        }
        self.metrics.record_cache_miss();

        let strategy_consistency = self.claim_consistency(request)?;
        let (chain, chain_advisory) = self.chain_signal(request).await;
        let (market, market_advisory) = self.market_signal(&request.decision.asset).await;

        let inputs = BlendInputs {
            chain: chain.as_ref(),
            market: market.as_ref(),
            action: request.decision.action,
        };
        let outcome = blend::blend(&inputs);
        let status = classify::classify(outcome.confidence, outcome.risk_score);
        let trust_metrics = blend::build_trust_metrics(&outcome, &inputs, strategy_consistency);

        // Risk issues keep their evaluation order; advisories go after.
        let mut issues = outcome.risk_issues;
        issues.extend(chain_advisory);
        issues.extend(market_advisory);

        let result = VerificationResult {
            verification_id: Uuid::new_v4().to_string(),
            status,
            confidence: outcome.confidence,
            risk_score: outcome.risk_score,
            issues,
            trust_metrics,
            blockchain: chain,
            market,
            timestamp: Utc::now(),
        };

        self.metrics.record_verification(status);
        info!(
            verification_id = %result.verification_id,
            agent_id = %request.agent_id,
            asset = %request.decision.asset,
            status = %status,
            confidence = %result.confidence,
            "verification complete"
        );
        self.result_cache.insert(fingerprint, result.clone());
        Ok(result)
    }

    /// Counters for this engine instance.
    pub fn metrics(&self) -> &EngineMetrics {
        &self.metrics
    }

    /// Point-in-time health derived from the engine's own counters.
    pub fn health_report(&self) -> HealthReport {
        HealthReporter::build(&self.metrics, &self.config.observability)
    }

    pub fn config(&self) -> &VouchConfig {
        &self.config
    }

    /// Run an attached execution claim through the ledger.
    ///
    /// A verified claim contributes its trust score as the strategy
    /// consistency dimension; no claim means the neutral prior. An invalid
    /// claim fails the whole verification since the agent asserted evidence
    /// that does not hold.
    fn claim_consistency(&self, request: &DecisionRequest) -> VouchResult<Confidence> {
        let envelope = match &request.claim {
            Some(envelope) => envelope,
            None => return Ok(Confidence::default()),
        };

        match self
            .ledger
            .verify_execution(&envelope.claim, envelope.proof_data, &request.agent_id)
        {
            Ok(record) => {
                debug!(
                    agent_id = %request.agent_id,
                    trust_score = %record.trust_score,
                    "execution claim verified"
                );
                Ok(record.trust_score.as_confidence())
            }
            Err(err) => {
                self.metrics.record_ledger_rejection();
                warn!(agent_id = %request.agent_id, error = %err, "execution claim rejected");
                Err(err.into())
            }
        }
    }

    /// Confirm the decision's transaction, if there is one to confirm and an
    /// adapter to ask.
    async fn chain_signal(
        &self,
        request: &DecisionRequest,
    ) -> (Option<ChainConfirmation>, Option<String>) {
        let hash = match &request.decision.transaction_hash {
            Some(hash) => hash,
            None => return (None, None),
        };
        let adapter = match &self.chain {
            Some(adapter) => adapter,
            None => return (None, None),
        };

        self.metrics.record_adapter_call("chain");
        let lookup = adapter.verify_transaction(hash, request.decision.chain);
        match tokio::time::timeout(self.adapter_timeout, lookup).await {
            Ok(Ok(confirmation)) => (Some(confirmation), None),
            Ok(Err(err)) => {
                self.metrics.record_adapter_failure("chain");
                warn!(tx_hash = %hash, error = %err, "chain lookup failed");
                (None, Some(format!("Chain lookup unavailable: {err}")))
            }
            Err(_) => {
                self.metrics.record_adapter_failure("chain");
                let err = AdapterError::Timeout {
                    adapter: "chain".to_string(),
                    timeout_secs: self.adapter_timeout.as_secs(),
                };
                warn!(tx_hash = %hash, error = %err, "chain lookup timed out");
                (None, Some(format!("Chain lookup unavailable: {err}")))
            }
        }
    }

    /// Fetch market context for the asset, serving from the market cache
    /// when a fresh snapshot is already in hand.
    async fn market_signal(&self, asset: &str) -> (Option<MarketContext>, Option<String>) {
        let adapter = match &self.market {
            Some(adapter) => adapter,
            None => return (None, None),
        };

        if let Some(context) = self.market_cache.get(asset) {
            debug!(asset, "market context served from cache");
            return (Some(context), None);
        }

        self.metrics.record_adapter_call("market");
        match tokio::time::timeout(self.adapter_timeout, adapter.market_context(asset)).await {
            Ok(Ok(context)) => {
                self.market_cache.insert(asset.to_string(), context.clone());
                (Some(context), None)
            }
            Ok(Err(err)) => {
                self.metrics.record_adapter_failure("market");
                warn!(asset, error = %err, "market context fetch failed");
                (None, Some(format!("Market data unavailable: {err}")))
            }
            Err(_) => {
                self.metrics.record_adapter_failure("market");
                let err = AdapterError::Timeout {
                    adapter: "market".to_string(),
                    timeout_secs: self.adapter_timeout.as_secs(),
                };
                warn!(asset, error = %err, "market context fetch timed out");
                (None, Some(format!("Market data unavailable: {err}")))
            }
        }
    }
}

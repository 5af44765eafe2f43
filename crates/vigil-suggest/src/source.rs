use async_trait::async_trait;
use vigil_core::{BaseThreat, Result, SystemDetails};

/// A producer of candidate threats for a system description.
///
/// Both the curated intelligence feed and the generative advisor implement
/// this trait, which is the seam the orchestrator composes over. An `Ok`
/// with an empty list and an `Err` are distinct signals: the orchestrator
/// treats them differently depending on which source produced them.
#[async_trait]
pub trait ThreatSource: Send + Sync {
    /// Short source name used in logs and diagnostics.
    fn name(&self) -> &str;

    /// Produce candidate threats for the given system details.
    async fn threats(&self, details: &SystemDetails) -> Result<Vec<BaseThreat>>;
}

#[async_trait]
impl ThreatSource for Box<dyn ThreatSource> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn threats(&self, details: &SystemDetails) -> Result<Vec<BaseThreat>> {
        (**self).threats(details).await
    }
}

use async_trait::async_trait;

/// Podcasts refresh capability.
/// 播客刷新能力
#[async_trait]
pub trait PodcastsRepositoryPort: Send + Sync {
    /// Refresh podcasts into the local store.
    ///
    /// With `force == false` an implementation may skip the refresh when it
    /// considers local data fresh enough.
    async fn update_podcasts(&self, force: bool) -> anyhow::Result<()>;
}

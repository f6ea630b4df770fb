use crate::error::RenderError;
use crate::models::{AppConfig, ParamsUpdate};
use crate::rendering::encode_png;
use crate::services::BackgroundGenerator;
use mondrian_recolor::{Compositor, Frame, RecolorError, Rgb, Snapshot, SourceImage};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Last frame handed out, tagged with the pass that produced it.
struct Published {
    generation: u64,
    frame: Arc<Frame>,
}

/// Live recoloring session for one source image.
///
/// Parameters are edited in place and only read when a pass starts: each
/// pass copies the current [`Snapshot`], computes on the blocking pool
/// without holding any lock, then swaps the published frame. Passes are
/// numbered on start; a pass that finishes after a newer one has already
/// been published is dropped.
pub struct Studio {
    source: Arc<SourceImage>,
    params: RwLock<Snapshot>,
    backgrounds: Mutex<BackgroundGenerator>,
    published: RwLock<Published>,
    next_generation: AtomicU64,
}

impl Studio {
    /// Create a studio and publish an initial recompute with `snapshot`.
    pub fn new(
        source: impl Into<Arc<SourceImage>>,
        snapshot: Snapshot,
        backgrounds: BackgroundGenerator,
    ) -> Self {
        let source = source.into();
        let frame = Arc::new(Compositor::recompute(&source, &snapshot));

        tracing::info!(
            width = source.width(),
            height = source.height(),
            background = %snapshot.background,
            "Studio ready"
        );

        Self {
            source,
            params: RwLock::new(snapshot),
            backgrounds: Mutex::new(backgrounds),
            published: RwLock::new(Published {
                generation: 0,
                frame,
            }),
            next_generation: AtomicU64::new(1),
        }
    }

    /// Create a studio from configuration.
    ///
    /// The configured background wins; otherwise the first random color is
    /// drawn from a generator seeded by `config.seed`.
    pub fn from_config(
        source: impl Into<Arc<SourceImage>>,
        config: &AppConfig,
    ) -> Result<Self, RecolorError> {
        let mut backgrounds = BackgroundGenerator::new(config.seed);
        let background = match config.fixed_background()? {
            Some(bg) => bg,
            None => backgrounds.next_color(),
        };
        let snapshot = config.base_snapshot(background)?;
        Ok(Self::new(source, snapshot, backgrounds))
    }

    pub fn source(&self) -> &Arc<SourceImage> {
        &self.source
    }

    /// Copy of the current parameters.
    pub async fn snapshot(&self) -> Snapshot {
        *self.params.read().await
    }

    /// Apply a partial update. Does not recompute.
    pub async fn update(&self, update: &ParamsUpdate) -> Result<Snapshot, RecolorError> {
        let mut params = self.params.write().await;
        let next = update.apply(*params)?;
        *params = next;
        tracing::debug!(
            threshold = next.threshold.get(),
            transparency = next.transparency.get(),
            background = %next.background,
            "Parameters updated"
        );
        Ok(next)
    }

    /// Draw a new random background and store it. Does not recompute.
    pub async fn regenerate_background(&self) -> Rgb {
        let color = self.backgrounds.lock().await.next_color();
        self.params.write().await.background = color;
        tracing::debug!(background = %color, "Background regenerated");
        color
    }

    /// Run a full pass with the current parameters and publish it.
    pub async fn request_recompute(&self) -> Result<Arc<Frame>, RenderError> {
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst);
        let snapshot = self.snapshot().await;
        let source = self.source.clone();

        let frame = tokio::task::spawn_blocking(move || Compositor::recompute(&source, &snapshot))
            .await
            .map_err(|e| RenderError::Task(e.to_string()))?;

        Ok(self.publish(generation, frame, "recompute").await)
    }

    /// Publish a copy of the source, ignoring the parameters.
    pub async fn request_reset(&self) -> Result<Arc<Frame>, RenderError> {
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst);
        let source = self.source.clone();

        let frame = tokio::task::spawn_blocking(move || Compositor::reset(&source))
            .await
            .map_err(|e| RenderError::Task(e.to_string()))?;

        Ok(self.publish(generation, frame, "reset").await)
    }

    /// The last published frame.
    pub async fn frame(&self) -> Arc<Frame> {
        self.published.read().await.frame.clone()
    }

    /// The last published frame, PNG encoded.
    pub async fn frame_png(&self) -> Result<Vec<u8>, RenderError> {
        let frame = self.frame().await;
        tokio::task::spawn_blocking(move || encode_png(&frame))
            .await
            .map_err(|e| RenderError::Task(e.to_string()))?
    }

    /// Swap in `frame` unless a newer pass already published.
    ///
    /// Returns whatever frame is published afterwards.
    async fn publish(&self, generation: u64, frame: Frame, kind: &'static str) -> Arc<Frame> {
        let mut published = self.published.write().await;
        if generation > published.generation {
            published.generation = generation;
            published.frame = Arc::new(frame);
            tracing::debug!(generation, kind, "Frame published");
        } else {
            tracing::debug!(
                generation,
                current = published.generation,
                kind,
                "Discarding stale frame"
            );
        }
        published.frame.clone()
    }
}

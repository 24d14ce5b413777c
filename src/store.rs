// src/store.rs
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockWriteGuard};

use fontscheme_core::{
    ContentSizeContext, FontHandle, FontMapping, FontRenderer, FontResolutionScheme, FontSpec,
    SchemeError, SchemeResult,
};
use tracing::{debug, info};

/// Active mapping and the generation of the request that installed it
struct ActiveMapping {
    generation: u64,
    mapping: Arc<FontMapping>,
}

/// Owns the mapping for the current accessibility context
///
/// Readers get an `Arc` to an immutable mapping. A context change builds a
/// complete replacement outside the lock and then swaps it in, so lookups
/// never observe a partially built table. Each change takes a generation
/// number on entry; a build only lands if no later change has landed first.
pub struct SchemeStore<R: FontRenderer> {
    scheme: FontResolutionScheme<R>,
    next_generation: AtomicU64,
    current: RwLock<ActiveMapping>,
}

impl<R: FontRenderer> SchemeStore<R> {
    pub fn new(scheme: FontResolutionScheme<R>, ctx: ContentSizeContext) -> Self {
        let mapping = scheme.build(ctx);
        info!("Font scheme store initialized with {} entries", mapping.len());
        Self {
            scheme,
            next_generation: AtomicU64::new(1),
            current: RwLock::new(ActiveMapping {
                generation: 0,
                mapping: Arc::new(mapping),
            }),
        }
    }

    pub fn scheme(&self) -> &FontResolutionScheme<R> {
        &self.scheme
    }

    /// Snapshot of the active mapping
    pub fn current(&self) -> SchemeResult<Arc<FontMapping>> {
        self.current
            .read()
            .map(|active| Arc::clone(&active.mapping))
            .map_err(|e| SchemeError::LockPoisoned { message: e.to_string() })
    }

    pub fn context(&self) -> SchemeResult<ContentSizeContext> {
        Ok(self.current()?.context())
    }

    /// Rebuild for `ctx` and swap the mapping in.
    ///
    /// Returns `false` without rebuilding when `ctx` is already active, and
    /// `false` after building when a later call has already been applied.
    pub fn update_context(&self, ctx: ContentSizeContext) -> SchemeResult<bool> {
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst);

        {
            let mut active = self.write_active()?;
            if active.mapping.context() == ctx {
                // Still counts as the latest request, so older builds in flight lose
                active.generation = active.generation.max(generation);
                debug!("Font context unchanged ({:?}), keeping mapping", ctx);
                return Ok(false);
            }
        }

        let mapping = Arc::new(self.scheme.build(ctx));
        let mut active = self.write_active()?;
        if generation < active.generation {
            debug!(
                "Discarding font mapping for {:?}: generation {} superseded by {}",
                ctx, generation, active.generation
            );
            return Ok(false);
        }
        *active = ActiveMapping { generation, mapping };

        info!(
            "Font mapping replaced: category={:?}, bold_text={}, generation={}",
            ctx.category, ctx.bold_text, generation
        );
        Ok(true)
    }

    fn write_active(&self) -> SchemeResult<RwLockWriteGuard<'_, ActiveMapping>> {
        self.current
            .write()
            .map_err(|e| SchemeError::LockPoisoned { message: e.to_string() })
    }

    /// Resolve `spec` against the active mapping
    pub fn resolve(&self, spec: &FontSpec) -> SchemeResult<Option<FontHandle>> {
        Ok(self.current()?.resolve(spec).cloned())
    }
}

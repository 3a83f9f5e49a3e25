//! Host wiring: forwards attach, resize and change signals into render passes.
//!
//! Signals take `&mut self`, so passes on one host are serialized. Callers
//! receiving bursts of resize events should debounce before forwarding.

use crate::compose::Composer;
use crate::error::RenderError;
use crate::provider::ConfigProvider;
use crate::surface::{RenderSurface, Resizable, Scene};

pub struct SketchHost<P, S> {
    composer: Composer,
    provider: P,
    surface: S,
}

impl<P, S> SketchHost<P, S>
where
    P: ConfigProvider,
    S: RenderSurface,
{
    pub fn new(composer: Composer, provider: P, surface: S) -> Self {
        Self { composer, provider, surface }
    }

    /// First draw after the surface becomes available.
    pub fn attach(&mut self) -> Result<Scene, RenderError> {
        log::info!("Surface attached, rendering schematic");
        self.redraw()
    }

    /// The configuration changed; redraw from a fresh snapshot.
    pub fn notify_changed(&mut self) -> Result<Scene, RenderError> {
        log::debug!("Configuration changed, redrawing");
        self.redraw()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    fn redraw(&mut self) -> Result<Scene, RenderError> {
        self.composer.render(&mut self.surface, &self.provider)
    }
}

impl<P, S> SketchHost<P, S>
where
    P: ConfigProvider,
    S: RenderSurface + Resizable,
{
    pub fn resize(&mut self, width: f64, height: f64) -> Result<Scene, RenderError> {
        log::debug!("Surface resized to {width}x{height}");
        self.surface.resize(width, height);
        self.redraw()
    }
}

use anyhow::anyhow;
use winit::window::{Fullscreen, Window, WindowId};

use crate::coords::ViewportSize;
use crate::device::Gpu;
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;
use crate::window::{RuntimeCtx, WindowMode};

/// Per-window handles and immutable window metadata.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    pub fn window_mode(&self) -> WindowMode {
        if self.window.fullscreen().is_some() {
            WindowMode::Fullscreen
        } else {
            WindowMode::Windowed
        }
    }

    /// Switches between windowed and borderless full-screen on the current monitor.
    pub fn set_window_mode(&self, mode: WindowMode) {
        log::debug!("window {:?} -> {mode:?}", self.id);
        match mode {
            WindowMode::Fullscreen => self.window.set_fullscreen(Some(Fullscreen::Borderless(None))),
            WindowMode::Windowed => self.window.set_fullscreen(None),
        }
    }
}

/// Outcome of a successful [`FrameCtx::render`] call.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameStatus {
    /// A frame was recorded, submitted and presented.
    Presented,
    /// No frame this iteration (zero-sized or transiently unavailable surface).
    Skipped,
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub time: FrameTime,
    pub viewport: ViewportSize,
    pub runtime: &'a mut RuntimeCtx,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Clears the surface with `clear`, calls `draw` with a ready [`RenderCtx`] and
    /// [`RenderTarget`], then presents the frame.
    ///
    /// Recoverable surface errors skip the frame; unrecoverable ones are
    /// returned as `Err`.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> anyhow::Result<FrameStatus>
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        if self.gpu.is_zero_sized() {
            return Ok(FrameStatus::Skipped);
        }

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let msg = err.to_string();
                let action = self.gpu.handle_surface_error(err);
                if action.is_fatal() {
                    return Err(anyhow!("surface acquisition failed: {msg}"));
                }
                return Ok(FrameStatus::Skipped);
            }
        };

        // Clear pass; dropped before the encoder is moved into submit().
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("orbit clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear.r as f64,
                            g: clear.g as f64,
                            b: clear.b as f64,
                            a: clear.a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            self.viewport,
        );

        // RenderTarget borrows frame.encoder; dropped before submit() takes frame.
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            draw(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        Ok(FrameStatus::Presented)
    }
}

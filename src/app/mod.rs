//! App module - contains the main application state and logic

use crate::bootstrap::{bootstrap, BootstrapError, BootstrapOptions, Mounted};
use crate::constants::ROOT_CONTAINER_ID;
use crate::host::Document;
use crate::settings::Settings;
use crate::theme;
use crate::types::Node;
use crate::ui::personal_details::personal_details;
use crate::ui::renderer::Renderer;
use crate::vitals::{self, Metric, MetricName, ReportHook};
use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) document: Document,
    pub(crate) renderer: Renderer,
    pub(crate) mounted: Mounted,
    pub(crate) report_hook: Option<Box<ReportHook<'static>>>,
    pub(crate) started: Instant,
    pub(crate) first_paint_reported: bool,
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
}

/// Top-level application tree
pub fn root() -> Node {
    personal_details()
}

/// Mount the application root into the document's root container
pub fn mount_root(
    document: &mut Document,
    report: Option<&ReportHook<'_>>,
    started: Instant,
) -> Result<Mounted, BootstrapError> {
    let mounted = bootstrap(
        document,
        root,
        BootstrapOptions {
            container_id: ROOT_CONTAINER_ID,
            strict: cfg!(debug_assertions),
            report,
            started,
        },
    )?;
    info!(
        container = %mounted.container_id,
        pure = mounted.pure,
        mount_ms = mounted.mount_ms,
        "Bootstrap complete"
    );
    Ok(mounted)
}

impl App {
    /// Mount the application root into `document` and build the app around it.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        mut document: Document,
        settings: Settings,
        data_dir: PathBuf,
        started: Instant,
    ) -> Result<Self, BootstrapError> {
        let report_hook = settings.report_vitals.then(vitals::log_hook);

        let mounted = mount_root(&mut document, report_hook.as_deref(), started)?;

        theme::apply_visuals(&cc.egui_ctx);

        Ok(Self {
            document,
            renderer: Renderer::new(),
            mounted,
            report_hook,
            started,
            first_paint_reported: false,
            settings,
            data_dir,
            window_pos: None,
            window_size: None,
            needs_center: false,
        })
    }

    fn report_first_paint(&mut self) {
        if self.first_paint_reported {
            return;
        }
        self.first_paint_reported = true;
        let metric = Metric::since(MetricName::FirstPaint, self.started);
        debug!(value_ms = metric.value_ms, "First frame painted");
        vitals::report(self.report_hook.as_deref(), &metric);
    }
}

// ============================================================================
// MAIN UPDATE LOOP
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        egui::CentralPanel::default()
            .frame(theme::page_frame())
            .show(ctx, |ui| {
                if let Some(root) = self.document.get_element_by_id(&self.mounted.container_id) {
                    self.renderer.show(ui, root.children());
                }
            });

        self.report_first_paint();
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.settings.set_window(self.window_pos, self.window_size);
        self.settings.save(&self.data_dir);
        info!("Application shutting down");
    }
}

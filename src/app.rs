use egui::{Color32, Key, KeyboardShortcut, Modifiers, Rect};
use log::{error, info, warn};

use crate::config::SketchConfig;
use crate::export::{self, ExportDialog, ExportRequest};
use crate::input::{InputHandler, route_event};
use crate::panels;
use crate::renderer::CanvasRenderer;
use crate::state::EditorContext;

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const REDO_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
    Error,
}

/// One line of feedback shown under the tools
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn color(&self) -> Color32 {
        match self.kind {
            StatusKind::Info => Color32::from_rgb(76, 175, 80),
            StatusKind::Warning => Color32::from_rgb(255, 152, 0),
            StatusKind::Error => Color32::from_rgb(244, 67, 54),
        }
    }
}

pub struct SketchApp {
    context: EditorContext,
    renderer: CanvasRenderer,
    input: InputHandler,
    config: SketchConfig,
    export_dialog: ExportDialog,
    /// Export waiting for the screenshot of the next frame
    pending_export: Option<ExportRequest>,
    canvas_rect: Option<Rect>,
    /// Fill color restored when fill is switched back on
    last_fill_color: Color32,
    status: Option<StatusMessage>,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SketchConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_config(config)
    }

    pub fn with_config(config: SketchConfig) -> Self {
        let export_dialog = ExportDialog::new(export::default_file_name(&config.file_stem), config.export_format);
        Self {
            context: EditorContext::new(),
            renderer: CanvasRenderer::new(),
            input: InputHandler::new(),
            config,
            export_dialog,
            pending_export: None,
            canvas_rect: None,
            last_fill_color: Color32::LIGHT_BLUE,
            status: None,
        }
    }

    pub fn context(&self) -> &EditorContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut EditorContext {
        &mut self.context
    }

    pub fn export_dialog_mut(&mut self) -> &mut ExportDialog {
        &mut self.export_dialog
    }

    pub fn last_fill_color(&self) -> Color32 {
        self.last_fill_color
    }

    pub fn set_last_fill_color(&mut self, color: Color32) {
        self.last_fill_color = color;
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(StatusMessage { kind, text: text.into() });
    }

    /// Feed this frame's pointer input to the editor
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        self.canvas_rect = Some(canvas_rect);
        for event in self.input.process_input(ctx, canvas_rect) {
            route_event(&event, &mut self.context, canvas_rect);
        }
    }

    pub fn paint_canvas(&mut self, painter: &egui::Painter, canvas_rect: Rect) {
        let preview = self.context.preview();
        self.renderer
            .paint(painter, canvas_rect, self.context.drawing(), preview.as_ref());
    }

    /// Validate the export form and ask egui for a screenshot to encode
    pub fn request_export(&mut self, ctx: &egui::Context) {
        let (request, warning) = self.export_dialog.request();
        match warning {
            Some(warning) => {
                warn!("{warning}");
                self.set_status(StatusKind::Warning, warning);
            }
            None => self.status = None,
        }
        info!("Export requested: {}", request.file_name_with_extension());
        self.pending_export = Some(request);
        ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
    }

    fn handle_screenshot(&mut self, ctx: &egui::Context) {
        if self.pending_export.is_none() {
            return;
        }

        let screenshot = ctx.input(|input| {
            input.raw.events.iter().find_map(|event| match event {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        let Some(screenshot) = screenshot else {
            return;
        };
        let Some(request) = self.pending_export.take() else {
            return;
        };

        let canvas = self
            .canvas_rect
            .map(|rect| screenshot.region(&rect, Some(ctx.pixels_per_point())));

        match export::export_canvas(canvas.as_ref(), &request, &self.config.export_dir) {
            Ok(location) => self.set_status(StatusKind::Info, format!("Saved {location}")),
            Err(err) => {
                error!("Export failed: {err}");
                self.set_status(StatusKind::Error, err.to_string());
            }
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // redo first: its shortcut is a superset of undo's
        let (redo, undo) = ctx.input_mut(|input| {
            let redo = input.consume_shortcut(&REDO) || input.consume_shortcut(&REDO_ALT);
            let undo = !redo && input.consume_shortcut(&UNDO);
            (redo, undo)
        });
        if redo {
            self.context.redo();
        } else if undo {
            self.context.undo();
        }
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_screenshot(ctx);
        self.handle_shortcuts(ctx);

        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! Terminal camera screen
//!
//! Composes the camera screen in the terminal: top bar, live preview rendered
//! with Unicode half-block characters, the sliding filter strip, the bottom bar
//! and a status line. Also owns the UI message loop that feeds session events
//! and task results back into [`CameraScreen::update`].

use crate::app::editor::{EditorResult, PromptEditor};
use crate::app::picker::FileDialogPicker;
use crate::app::{
    CameraScreen, Collaborators, CompletionHandler, Control, Message, Presentation, StatusMessage,
};
use crate::assets::{AssetResolver, EmbeddedAssets};
use crate::backends::camera::{Photo, VirtualCaptureSession};
use crate::config::Config;
use crate::constants::{icons, timing, ui};
use crate::errors::{AppError, AppResult, LibraryResult};
use crate::filters::FilterType;
use crate::fl;
use crate::storage::DirectoryPhotoLibrary;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use image::RgbaImage;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{error, info};

/// Where captured photos go
#[derive(Debug, Clone)]
pub enum HandOff {
    /// Open the editor prompt; edited photos are saved to the library
    Editor,
    /// Write the first photo to this path and exit
    WriteTo(PathBuf),
}

/// Run the terminal camera screen
///
/// Returns the written path when `hand_off` is [`HandOff::WriteTo`] and a photo
/// was taken or picked before quitting.
pub fn run(config: Config, hand_off: HandOff) -> AppResult<Option<PathBuf>> {
    let runtime = tokio::runtime::Runtime::new()?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = {
        let _guard = runtime.enter();
        run_app(&mut terminal, runtime.handle(), config, hand_off)
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // A picker dialog may still hold a blocking thread
    runtime.shutdown_background();

    result
}

/// Outcome slot shared with the completion callback
type Written = Arc<Mutex<Option<LibraryResult<PathBuf>>>>;

fn write_to_completion(path: PathBuf, written: Written) -> CompletionHandler {
    Box::new(move |photo: Option<Photo>| {
        let result = match photo {
            Some(photo) => write_photo(&photo, &path).map(|()| path.clone()),
            None => Ok(path.clone()),
        };
        match &result {
            Ok(path) => info!(path = %path.display(), "Photo written"),
            Err(e) => error!(error = %e, "Failed to write photo"),
        }
        *written.lock().unwrap_or_else(PoisonError::into_inner) = Some(result);
    })
}

fn write_photo(photo: &image::DynamicImage, path: &Path) -> LibraryResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    photo.to_rgb8().save(path)?;
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &Handle,
    config: Config,
    hand_off: HandOff,
) -> AppResult<Option<PathBuf>> {
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let (message_tx, mut message_rx) = mpsc::unbounded_channel();
    forward_session_events(runtime, event_rx, message_tx.clone());

    let session = VirtualCaptureSession::new(config.virtual_camera.clone(), event_tx)?;
    let photo_dir = config.photo_directory();
    let editor = PromptEditor::new();
    let assets: Arc<dyn AssetResolver> = Arc::new(EmbeddedAssets);
    let collaborators = Collaborators {
        session: Some(Arc::new(session)),
        library: Arc::new(DirectoryPhotoLibrary::new(photo_dir.clone())),
        picker: Arc::new(FileDialogPicker::new(Some(photo_dir))),
        editor: Arc::new(editor.clone()),
        assets: Arc::clone(&assets),
    };

    let written: Written = Arc::default();
    let mut screen = CameraScreen::new(config, collaborators);
    if let HandOff::WriteTo(path) = hand_off {
        info!(path = %path.display(), "Photos will be written instead of edited");
        screen = screen.with_completion(write_to_completion(path, Arc::clone(&written)));
    }

    screen.on_appear().spawn(runtime, &message_tx);

    let mut show_help = false;
    let mut overlay: Option<EditorOverlay> = None;

    loop {
        // Drain everything the session and finished tasks delivered
        while let Ok(message) = message_rx.try_recv() {
            screen.update(message).spawn(runtime, &message_tx);
        }

        if let Some(result) = written.lock().unwrap_or_else(PoisonError::into_inner).take() {
            return result.map(Some).map_err(AppError::from);
        }

        overlay = match (editor.pending(), overlay.take()) {
            (Some(request), Some(current)) if Arc::ptr_eq(&current.source, &request.image) => {
                Some(current)
            }
            (Some(request), _) => Some(EditorOverlay::new(request.image, request.initial_filter)),
            (None, _) => None,
        };

        let now = Instant::now();
        terminal.draw(|f| draw(f, &screen, assets.as_ref(), overlay.as_ref(), show_help, now))?;

        // Handle input with timeout for animation updates
        if event::poll(timing::INPUT_POLL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            // Ctrl+C or 'q' quits
            if (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
                || key.code == KeyCode::Char('q')
            {
                break;
            }

            if overlay.is_some() {
                match key.code {
                    KeyCode::Enter => {
                        editor.finish(EditorResult::Done);
                    }
                    KeyCode::Esc => {
                        editor.finish(EditorResult::Cancelled);
                    }
                    _ => {}
                }
                continue;
            }

            if key.code == KeyCode::Char('h') {
                show_help = !show_help;
                continue;
            }

            if let Some(message) = key_to_message(&screen, key) {
                show_help = false;
                screen.update(message).spawn(runtime, &message_tx);
            }
        }
    }

    Ok(None)
}

/// Relay session events onto the UI channel
fn forward_session_events(
    runtime: &Handle,
    mut events: UnboundedReceiver<crate::backends::camera::CaptureEvent>,
    messages: UnboundedSender<Message>,
) {
    runtime.spawn(async move {
        while let Some(event) = events.recv().await {
            if messages.send(Message::Session(event)).is_err() {
                break;
            }
        }
    });
}

fn key_to_message(screen: &CameraScreen, key: KeyEvent) -> Option<Message> {
    if screen.presentation != Presentation::None {
        return None;
    }

    let strip_open = screen.filter_panel.is_expanded();
    match key.code {
        KeyCode::Char('f') => Some(Message::ChangeFlash),
        KeyCode::Char('s') => Some(Message::SwitchCamera),
        KeyCode::Char('r') => Some(Message::ShowCameraRoll),
        KeyCode::Char(' ') | KeyCode::Char('p') => Some(Message::TakePhoto),
        KeyCode::Char('t') => Some(Message::ToggleFilters),
        KeyCode::Left if strip_open => Some(Message::MoveFilterCursor(-1)),
        KeyCode::Right if strip_open => Some(Message::MoveFilterCursor(1)),
        KeyCode::Enter if strip_open => {
            Some(Message::SelectFilter(screen.filter_strip.highlighted()))
        }
        _ => None,
    }
}

fn draw(
    f: &mut Frame,
    screen: &CameraScreen,
    assets: &dyn AssetResolver,
    overlay: Option<&EditorOverlay>,
    show_help: bool,
    now: Instant,
) {
    let strip_rows = (f32::from(ui::TERMINAL_STRIP_ROWS)
        * screen.filter_panel.revealed_fraction(now))
    .round() as u16;

    let [top, preview, strip, bottom, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(2),
        Constraint::Length(strip_rows),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .areas(f.area());

    f.render_widget(TopBar { screen, assets }, top);

    let preview_image = screen.session().and_then(|session| session.latest_preview());
    f.render_widget(
        &FrameWidget {
            image: preview_image.as_deref(),
            placeholder: fl!("no-preview"),
        },
        preview,
    );

    if strip_rows > 0 {
        f.render_widget(FilterStripWidget { screen }, strip);
    }

    f.render_widget(BottomBar { screen, assets, now }, bottom);

    let message = status_message(screen, show_help);
    f.render_widget(StatusBar { message: &message }, status);

    if let Some(overlay) = overlay {
        f.render_widget(overlay, centered(f.area(), 60, 60));
    }
}

fn status_message(screen: &CameraScreen, show_help: bool) -> String {
    if show_help {
        return fl!("status-help");
    }
    if screen.presentation == Presentation::CameraRoll {
        return fl!("status-picker");
    }
    match &screen.status {
        Some(StatusMessage::CaptureFailed(error)) => {
            return fl!("status-capture-failed", error = error.clone());
        }
        Some(StatusMessage::Saved(path)) => {
            return fl!("status-saved", path = path.display().to_string());
        }
        None => {}
    }
    if screen.controls.is_enabled() {
        fl!("status-ready")
    } else {
        fl!("status-busy")
    }
}

fn control_style(screen: &CameraScreen, control: Control) -> Style {
    if screen.controls.accepts_input(control) {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Flash on the left, title in the middle, camera switch on the right
struct TopBar<'a> {
    screen: &'a CameraScreen,
    assets: &'a dyn AssetResolver,
}

impl Widget for TopBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let controls = &self.screen.controls;

        if !controls.is_hidden(Control::Flash) {
            let label = format!(
                " {} {}",
                self.assets.glyph(controls.flash_icon()),
                fl!("flash")
            );
            Line::from(Span::styled(label, control_style(self.screen, Control::Flash)))
                .render(area, buf);
        }

        Line::from(fl!("app-title"))
            .style(Style::default().add_modifier(Modifier::BOLD))
            .centered()
            .render(area, buf);

        if !controls.is_hidden(Control::SwitchCamera) {
            let label = format!(
                "{} {} ",
                fl!("switch-camera"),
                self.assets.glyph(icons::SWITCH_CAMERA)
            );
            Line::from(Span::styled(
                label,
                control_style(self.screen, Control::SwitchCamera),
            ))
            .right_aligned()
            .render(area, buf);
        }
    }
}

/// Camera roll thumbnail, shutter and filter toggle
struct BottomBar<'a> {
    screen: &'a CameraScreen,
    assets: &'a dyn AssetResolver,
    now: Instant,
}

impl Widget for BottomBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let screen = self.screen;
        let [roll, shutter, toggle] = Layout::horizontal([
            Constraint::Length(6),
            Constraint::Min(1),
            Constraint::Length(6),
        ])
        .areas(area);

        let thumb_area = Rect {
            x: roll.x + 1,
            width: roll.width.saturating_sub(2),
            ..roll
        };
        FrameWidget {
            image: screen.camera_roll_thumbnail.as_ref().map(|t| &*t.image),
            placeholder: self.assets.glyph(icons::CAMERA_ROLL_PLACEHOLDER),
        }
        .render(thumb_area, buf);

        let shutter_glyph = self.assets.glyph(&screen.shutter.icon_at(self.now));
        Paragraph::new(vec![
            Line::from(Span::styled(
                shutter_glyph,
                control_style(screen, Control::Shutter).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                fl!("shutter"),
                control_style(screen, Control::Shutter),
            )),
        ])
        .centered()
        .render(shutter, buf);

        // Icon art points up at rest; the collapsed panel turns it half a turn
        let glyph = self.assets.glyph(icons::SHOW_FILTER);
        let turned = screen.filter_panel.rotation_at(self.now) > std::f32::consts::FRAC_PI_2;
        let glyph = if turned { flip_glyph(&glyph) } else { glyph };
        Paragraph::new(vec![
            Line::from(Span::styled(
                glyph,
                control_style(screen, Control::FilterToggle),
            )),
            Line::from(Span::styled(
                fl!("filters-title"),
                control_style(screen, Control::FilterToggle),
            )),
        ])
        .centered()
        .render(toggle, buf);
    }
}

fn flip_glyph(glyph: &str) -> String {
    glyph
        .chars()
        .map(|c| match c {
            '▲' => '▼',
            '▼' => '▲',
            '△' => '▽',
            '▽' => '△',
            other => other,
        })
        .collect()
}

/// Preset names with the cursor highlighted and the active preset marked
struct FilterStripWidget<'a> {
    screen: &'a CameraScreen,
}

impl Widget for FilterStripWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let strip = &self.screen.filter_strip;
        let enabled = strip.is_interaction_enabled();
        let active = strip.active();

        let mut spans = Vec::new();
        let first = strip.cursor().saturating_sub(2);
        for (index, filter) in strip.presets().iter().enumerate().skip(first) {
            let marker = if *filter == active { "•" } else { " " };
            let mut style = if enabled {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            if index == strip.cursor() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(
                format!("{marker}{}", filter.display_name()),
                style,
            ));
            spans.push(Span::raw(" "));
        }

        let title = Line::from(Span::styled(
            fl!("filters-title"),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        let active_line = Line::from(format!("{}: {}", fl!("filters-title"), active.display_name()));

        Clear.render(area, buf);
        Paragraph::new(vec![title, Line::from(spans), active_line])
            .style(Style::default().bg(Color::Black))
            .render(area, buf);
    }
}

/// Pending editor request drawn over the screen
struct EditorOverlay {
    source: Photo,
    preview: RgbaImage,
    filter: FilterType,
}

impl EditorOverlay {
    fn new(source: Photo, filter: FilterType) -> Self {
        let preview = source.thumbnail(160, 120).to_rgba8();
        Self {
            source,
            preview,
            filter,
        }
    }
}

impl Widget for &EditorOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(fl!("editor-title"));
        let inner = block.inner(area);
        block.render(area, buf);

        let [image_area, text_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).areas(inner);

        FrameWidget {
            image: Some(&self.preview),
            placeholder: String::new(),
        }
        .render(image_area, buf);

        Paragraph::new(vec![
            Line::from(fl!("editor-filter", filter = self.filter.display_name())),
            Line::from(fl!("editor-hint")).style(Style::default().fg(Color::Gray)),
        ])
        .centered()
        .render(text_area, buf);
    }
}

/// Widget that renders an image using half-block characters
struct FrameWidget<'a> {
    image: Option<&'a RgbaImage>,
    placeholder: String,
}

impl Widget for &FrameWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let image = match self.image {
            Some(image) if image.width() > 0 && image.height() > 0 => image,
            _ => {
                let msg = self.placeholder.as_str();
                let len = msg.chars().count() as u16;
                let x = area.x + (area.width.saturating_sub(len)) / 2;
                let y = area.y + area.height / 2;
                if y < area.y + area.height && x < area.x + area.width {
                    buf.set_string(x, y, msg, Style::default());
                }
                return;
            }
        };

        if area.width == 0 || area.height == 0 {
            return;
        }

        // Each terminal cell displays 2 vertical pixels using half-block characters
        let frame_aspect = image.width() as f64 / image.height() as f64;
        let term_width = area.width as f64;
        let term_height = (area.height * 2) as f64;

        let (display_width, display_height) = if term_width / term_height > frame_aspect {
            // Terminal is wider - fit to height
            let h = term_height;
            let w = h * frame_aspect;
            (w as u16, (h / 2.0) as u16)
        } else {
            // Terminal is taller - fit to width
            let w = term_width;
            let h = w / frame_aspect;
            (w as u16, (h / 2.0) as u16)
        };
        if display_width == 0 || display_height == 0 {
            return;
        }

        // Center the image
        let x_offset = area.x + (area.width.saturating_sub(display_width)) / 2;
        let y_offset = area.y + (area.height.saturating_sub(display_height)) / 2;

        let x_scale = image.width() as f64 / display_width as f64;
        let y_scale = image.height() as f64 / (display_height * 2) as f64;

        // Upper half (▀) colored with fg, lower half with bg
        for ty in 0..display_height {
            for tx in 0..display_width {
                let term_x = x_offset + tx;
                let term_y = y_offset + ty;

                if term_x >= area.x + area.width || term_y >= area.y + area.height {
                    continue;
                }

                let src_x = (tx as f64 * x_scale) as u32;
                let src_y_top = (ty as f64 * 2.0 * y_scale) as u32;
                let src_y_bottom = ((ty as f64 * 2.0 + 1.0) * y_scale) as u32;

                if let Some(cell) = buf.cell_mut((term_x, term_y)) {
                    cell.set_char('▀');
                    cell.set_fg(sample_pixel(image, src_x, src_y_top));
                    cell.set_bg(sample_pixel(image, src_x, src_y_bottom));
                }
            }
        }
    }
}

impl Widget for FrameWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self).render(area, buf);
    }
}

fn sample_pixel(image: &RgbaImage, x: u32, y: u32) -> Color {
    let x = x.min(image.width() - 1);
    let y = y.min(image.height() - 1);
    let [r, g, b, _] = image.get_pixel(x, y).0;
    Color::Rgb(r, g, b)
}

/// Status bar widget
struct StatusBar<'a> {
    message: &'a str,
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_char(' ');
                cell.set_bg(Color::DarkGray);
            }
        }

        let text: String = self.message.chars().take(area.width as usize).collect();
        buf.set_string(
            area.x,
            area.y,
            text,
            Style::default().fg(Color::White).bg(Color::DarkGray),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_glyph() {
        assert_eq!(flip_glyph("▲"), "▼");
        assert_eq!(flip_glyph("x"), "x");
    }

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let inner = centered(area, 60, 50);
        assert_eq!(inner, Rect::new(20, 10, 60, 20));
    }

    #[test]
    fn test_frame_widget_renders_half_blocks() {
        let image = RgbaImage::from_pixel(4, 4, image::Rgba([255, 0, 0, 255]));
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        FrameWidget {
            image: Some(&image),
            placeholder: String::new(),
        }
        .render(area, &mut buf);

        let cell = &buf[(0, 0)];
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Rgb(255, 0, 0));
    }

    #[test]
    fn test_write_photo_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.jpg");
        let photo = image::DynamicImage::new_rgb8(8, 8);
        write_photo(&photo, &path).unwrap();
        assert!(path.exists());
    }
}

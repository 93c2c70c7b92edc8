/// Top-level TUI event loop and input handler
use crate::components::ExpanderState;
use crate::keymap::KeyMap;
use crate::router::{self, PageContext, PageView, RenderPass};
use crate::screens::{PageFrame, Sidebar};
use crate::session::Session;
use crate::theme::Theme;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use trendhire_core::{ApiClient, Config, DataSource};

const SIDEBAR_WIDTH: u16 = 34;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    Help,
}

#[derive(Debug, Clone)]
struct Modal {
    title: String,
    message: String,
}

impl Modal {
    fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

pub struct AppState {
    screen: Screen,
    session: Session,
    pass: Option<RenderPass>,
    expander: ExpanderState,
    modal_stack: Vec<Modal>,
    data_source: DataSource,
    client: Option<ApiClient>,
    theme: Theme,
    pending_action: bool,
    should_quit: bool,
}

impl AppState {
    pub fn new(data_source: DataSource, client: Option<ApiClient>, theme: Theme) -> Self {
        Self {
            screen: Screen::Main,
            session: Session::new(),
            pass: None,
            expander: ExpanderState::default(),
            modal_stack: Vec::new(),
            data_source,
            client,
            theme,
            pending_action: false,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn pass(&self) -> Option<&RenderPass> {
        self.pass.as_ref()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether Enter was pressed and the action has not run yet
    pub fn has_pending_action(&self) -> bool {
        self.pending_action
    }

    fn push_modal(&mut self, modal: Modal) {
        self.modal_stack.push(modal);
    }

    fn pop_modal(&mut self) {
        self.modal_stack.pop();
    }

    fn current_modal(&self) -> Option<&Modal> {
        self.modal_stack.last()
    }

    /// Any input change invalidates what is on screen
    fn invalidate(&mut self) {
        if self.pass.take().is_some() {
            log::debug!("Inputs changed, clearing {}", self.session.page.label());
        }
        self.expander = ExpanderState::default();
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if KeyMap::is_quit(code, modifiers) {
            if self.screen != Screen::Main {
                self.screen = Screen::Main;
            } else {
                self.should_quit = true;
            }
            return;
        }

        if self.screen == Screen::Help {
            // Any key closes help
            self.screen = Screen::Main;
            return;
        }

        if KeyMap::is_help(code) && !self.session.focus_is_text() {
            self.screen = Screen::Help;
            return;
        }

        if let Some(page) = KeyMap::page_for(code) {
            if self.session.select_page(page) {
                self.invalidate();
            }
            return;
        }

        if KeyMap::is_focus_next(code) {
            self.session.focus_next();
        } else if KeyMap::is_focus_prev(code) {
            self.session.focus_prev();
        } else if KeyMap::is_left(code) || KeyMap::is_right(code) {
            if self.session.cycle(KeyMap::is_right(code)) {
                self.invalidate();
            }
        } else if KeyMap::is_action(code) {
            self.pending_action = true;
        } else if self.session.focus_is_text() {
            let changed = match code {
                KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                    self.session.type_char(c)
                }
                KeyCode::Backspace => self.session.backspace(),
                _ => false,
            };
            if changed {
                self.invalidate();
            }
        } else if self.showing_learning_path() {
            if KeyMap::is_down(code) {
                self.expander.move_down();
            } else if KeyMap::is_up(code) {
                self.expander.move_up();
            } else if KeyMap::is_space(code) {
                self.expander.toggle_selected();
            }
        }
    }

    fn showing_learning_path(&self) -> bool {
        matches!(
            self.pass.as_ref().and_then(|p| p.view.as_ref()),
            Some(PageView::LearningPaths(_))
        )
    }

    /// Whether the pending action will block on the network
    pub fn action_blocks(&self) -> bool {
        self.session.page.uses_api(self.data_source)
    }

    /// Run the current page's primary action and keep its pass on screen
    pub fn run_action(&mut self) {
        self.pending_action = false;

        let ctx = PageContext {
            data_source: self.data_source,
            client: self.client.as_ref(),
        };
        let pass = router::render_pass(&self.session, &ctx);

        self.expander = match &pass.view {
            Some(PageView::LearningPaths(view)) => ExpanderState::new(view.steps.len()),
            _ => ExpanderState::default(),
        };

        if pass.is_noop() {
            log::debug!("{} produced nothing", pass.page.label());
            self.pass = None;
        } else {
            self.pass = Some(pass);
        }
    }

    pub fn draw(&self, f: &mut Frame) {
        let size = f.area();

        match self.screen {
            Screen::Main => {
                let chunks = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                    .split(size);

                f.render_widget(
                    Sidebar::new(&self.session, self.data_source, self.theme),
                    chunks[0],
                );
                f.render_widget(
                    PageFrame::new(
                        self.session.page,
                        self.pass.as_ref(),
                        &self.expander,
                        self.theme,
                    ),
                    chunks[1],
                );
            }
            Screen::Help => render_help(f, size, self.theme),
        }

        // Render modal stack (blocking operations modal)
        if let Some(modal) = self.current_modal() {
            render_modal(f, size, &modal.title, &modal.message, self.theme);
        }
    }
}

pub fn run_tui(config: &Config, high_contrast: bool) -> Result<()> {
    let client = match config.data_source {
        DataSource::Api => Some(ApiClient::from_config(config)?),
        DataSource::Mock => None,
    };
    let mut app = AppState::new(config.data_source, client, Theme::new(high_contrast));

    log::info!(
        "Starting TUI (data source: {}, api: {})",
        config.data_source,
        config.api_base_url
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut AppState) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| app.draw(f))?;

        if app.pending_action {
            if app.action_blocks() {
                // 1. Push modal
                app.push_modal(Modal::new(
                    "LOADING",
                    format!(
                        "Please wait. Fetching {} from the API.",
                        app.session.page.label()
                    ),
                ));

                // 2. Render modal immediately
                terminal.draw(|f| app.draw(f))?;

                // 3. Execute blocking operation
                app.run_action();

                // 4. Pop modal
                app.pop_modal();
            } else {
                app.run_action();
            }
            continue;
        }

        // Handle input
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code, key.modifiers);
                }
            }
        }
    }

    log::info!("TUI closed");
    Ok(())
}

fn render_help(f: &mut Frame, area: Rect, theme: Theme) {
    let accent = theme.accent();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(Span::styled(" Help - Keybindings ", theme.title_style()));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let help_items = KeyMap::help_text();
    let mut lines = vec![
        Line::from(Span::styled(
            "TrendHire - AI Career Intelligence",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (key, desc) in help_items {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:14}", key),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw(desc),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        theme.dim(),
    )));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    f.render_widget(paragraph, inner);
}

fn render_modal(f: &mut Frame, area: Rect, title: &str, message: &str, theme: Theme) {
    let accent = theme.accent();

    // Center the modal
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(35),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(vertical[1]);

    let modal_area = horizontal[1];

    f.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(modal_area);
    f.render_widget(block, modal_area);

    let text = Paragraph::new(message)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Left);
    f.render_widget(text, inner);
}

// SPDX-FileCopyrightText: 2026 channelbox-plus contributors
// SPDX-License-Identifier: MIT

//! Interactive demo shell (ratatui + crossterm).
//!
//! Renders the in-memory host as a miniature channel box: a search line on
//! top, the node list on the left, and the filtered, colour-coded attribute
//! rows on the right. Typing edits the query live; Tab cycles the selected
//! node, which fires the host's selection-changed notification and drives the
//! widget exactly as a real host would.

use std::error::Error;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame, Terminal,
};
use smol_str::SmolStr;

use crate::host::{ChannelBoxHost, MemoryHost};
use crate::model::{AttributeInfo, NodeId};
use crate::palette::Colour;
use crate::search::AttrFilter;
use crate::widget::{SearchWidget, WidgetConfig};

/// Builds the demo scene: a couple of rigged nodes with built-in transform
/// attributes plus user-defined sections separated by divider attributes.
pub fn demo_host() -> Rc<MemoryHost> {
    let host = Rc::new(MemoryHost::new());

    let cube = NodeId::new("cube1").expect("demo node id");
    for name in [
        "translateX",
        "translateY",
        "translateZ",
        "rotateX",
        "rotateY",
        "rotateZ",
        "scaleX",
        "scaleY",
        "scaleZ",
        "visibility",
    ] {
        host.add_attribute(&cube, AttributeInfo::keyable(name), false);
    }
    host.add_attribute(&cube, AttributeInfo::divider("shapeControls"), true);
    host.add_attribute(&cube, AttributeInfo::keyable("stretch"), true);
    host.add_attribute(&cube, AttributeInfo::keyable("squash"), true);
    host.add_attribute(&cube, AttributeInfo::keyable("volume"), true);
    host.add_attribute(&cube, AttributeInfo::divider("extras"), true);
    host.add_attribute(&cube, AttributeInfo::keyable("spin"), true);
    host.add_attribute(&cube, AttributeInfo::keyable("offset"), true);

    let spine = NodeId::new("spine_ctrl").expect("demo node id");
    for name in ["translateX", "translateY", "translateZ", "visibility"] {
        host.add_attribute(&spine, AttributeInfo::keyable(name), false);
    }
    host.add_attribute(&spine, AttributeInfo::divider("ikControls"), true);
    host.add_attribute(&spine, AttributeInfo::keyable("ikWeight"), true);
    host.add_attribute(&spine, AttributeInfo::keyable("ikTwist"), true);
    host.add_attribute(&spine, AttributeInfo::keyable("ikStretch"), true);
    host.add_attribute(&spine, AttributeInfo::divider("fkControls"), true);
    host.add_attribute(&spine, AttributeInfo::keyable("fkBlend"), true);
    host.add_attribute(&spine, AttributeInfo::keyable("fkCurl"), true);

    host
}

/// One renderable attribute row: name plus the background applied by the
/// colour pass, if the attribute has been coloured.
fn visible_rows(host: &MemoryHost, node: &NodeId) -> Vec<(SmolStr, Option<Colour>)> {
    let filter = host.applied_filter().unwrap_or(AttrFilter::All);

    host.interactive_attributes(node)
        .iter()
        .filter(|attr| match &filter {
            AttrFilter::All => true,
            AttrFilter::Restrict(names) => names.iter().any(|name| name == attr.name()),
        })
        .map(|attr| (attr.name().clone(), host.background(attr.name())))
        .collect()
}

struct App {
    host: Rc<MemoryHost>,
    widget: SearchWidget,
    nodes: Vec<NodeId>,
    selected: usize,
    input: String,
}

impl App {
    fn new(host: Rc<MemoryHost>, widget: SearchWidget) -> Self {
        let nodes = host.registered_nodes();
        let app = Self {
            host,
            widget,
            nodes,
            selected: 0,
            input: String::new(),
        };
        app.apply_selection();
        app
    }

    fn apply_selection(&self) {
        if let Some(node) = self.nodes.get(self.selected) {
            self.host.select(vec![node.clone()]);
        }
    }

    fn select_next(&mut self) {
        if self.nodes.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.nodes.len();
        self.apply_selection();
    }

    fn select_prev(&mut self) {
        if self.nodes.is_empty() {
            return;
        }
        self.selected = (self.selected + self.nodes.len() - 1) % self.nodes.len();
        self.apply_selection();
    }

    /// Returns true when the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'));
        }

        match key.code {
            KeyCode::Esc => {
                if self.input.is_empty() {
                    return true;
                }
                self.input.clear();
                self.widget.clear_query();
            }
            KeyCode::Tab | KeyCode::Down => self.select_next(),
            KeyCode::BackTab | KeyCode::Up => self.select_prev(),
            KeyCode::Backspace => {
                self.input.pop();
                self.widget.set_query(self.input.clone());
            }
            KeyCode::Char(ch) => {
                self.input.push(ch);
                self.widget.set_query(self.input.clone());
            }
            _ => {}
        }
        false
    }

    fn filter_summary(&self) -> String {
        match self.host.applied_filter() {
            None | Some(AttrFilter::All) => "no filter".to_owned(),
            Some(filter) if filter.is_no_match() => "no matches".to_owned(),
            Some(AttrFilter::Restrict(names)) => format!("{} match(es)", names.len()),
        }
    }
}

pub fn run(config: WidgetConfig) -> Result<(), Box<dyn Error>> {
    run_with_host(demo_host(), config)
}

pub fn run_with_host(host: Rc<MemoryHost>, config: WidgetConfig) -> Result<(), Box<dyn Error>> {
    let widget = SearchWidget::attach(host.clone(), config)?;

    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(host, widget);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key) {
                        break;
                    }
                }
                _ => {}
            }
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.size());

    draw_search_line(frame, rows[0], app);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(1)])
        .split(rows[1]);

    draw_node_list(frame, columns[0], app);
    draw_attribute_rows(frame, columns[1], app);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled("type", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" search  "),
        Span::styled("tab", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" next node  "),
        Span::styled("esc", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" clear/quit  "),
        Span::styled("ctrl-c", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" quit"),
    ]));
    frame.render_widget(hints, rows[2]);
}

fn draw_search_line(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let text = if app.input.is_empty() {
        Line::from(Span::styled(
            "Search...",
            Style::default().add_modifier(Modifier::DIM),
        ))
    } else {
        Line::from(app.input.as_str())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Search ({})", app.filter_summary()));
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn draw_node_list(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let items: Vec<ListItem<'_>> = app
        .nodes
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let style = if index == app.selected {
                Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(node.as_str().to_owned()).style(style)
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title("Nodes");
    frame.render_widget(List::new(items).block(block), area);
}

fn draw_attribute_rows(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let items: Vec<ListItem<'_>> = match app.nodes.get(app.selected) {
        Some(node) => visible_rows(&app.host, node)
            .into_iter()
            .map(|(name, colour)| {
                let style = match colour {
                    Some(colour) => {
                        let (r, g, b) = colour.to_rgb8();
                        Style::default().bg(Color::Rgb(r, g, b))
                    }
                    None => Style::default(),
                };
                ListItem::new(format!(" {name}")).style(style)
            })
            .collect(),
        None => Vec::new(),
    };

    let block = Block::default().borders(Borders::ALL).title("Channel Box");
    frame.render_widget(List::new(items).block(block), area);
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

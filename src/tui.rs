//! Terminal User Interface

use crate::cipher::{
    affine, caesar, shift, transposition, AffineKey, Candidate, CandidateKey, TranspositionKey,
};
use crate::cli::candidate_lines;
use crate::rsa::{self, generate_keypair};
use crate::types::{parse_integer, parse_natural, Mode, CIPHERS};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputField {
    Cipher,
    Text,
    Key,
    KeyB,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FocusedWidget {
    Input(InputField),
    Encode,
    Decode,
    Extra,
    Output,
}

/// What an action puts in the output pane
enum RunOutput {
    Text(String),
    Candidates(Vec<Candidate>),
}

pub struct TuiApp {
    text: String,
    key: String,
    key_b: String,
    cipher_state: ListState,
    output: String,
    candidates: Vec<Candidate>,
    candidate_state: ListState,
    status_message: String,
    focused: FocusedWidget,
    should_quit: bool,
}

impl TuiApp {
    fn new() -> Self {
        let mut cipher_state = ListState::default();
        cipher_state.select(Some(0));

        Self {
            text: String::new(),
            key: String::new(),
            key_b: String::new(),
            cipher_state,
            output: String::new(),
            candidates: Vec::new(),
            candidate_state: ListState::default(),
            status_message: String::new(),
            focused: FocusedWidget::Input(InputField::Cipher),
            should_quit: false,
        }
    }

    fn cipher(&self) -> &'static str {
        CIPHERS[self.cipher_state.selected().unwrap_or(0)].0
    }

    /// Titles of the two key fields for the selected cipher
    fn key_titles(&self) -> (&'static str, &'static str) {
        match self.cipher() {
            "caesar" => ("Key (fixed k = 3)", "-"),
            "shift" => ("Shift k", "-"),
            "affine" => ("a (coprime with 26)", "b"),
            "transposition" => ("Keyword (2+ letters)", "-"),
            _ => ("Prime p", "Prime q"),
        }
    }

    fn text_title(&self) -> &'static str {
        if self.cipher() == "rsa" {
            "Message M / Ciphertext C"
        } else {
            "Text"
        }
    }

    fn extra_label(&self) -> &'static str {
        match self.cipher() {
            "caesar" | "shift" | "affine" => "Brute force",
            "rsa" => "Keygen",
            _ => "-",
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.next_field();
            }
            KeyCode::BackTab => {
                self.prev_field();
            }
            KeyCode::Enter => {
                self.handle_enter();
            }
            KeyCode::Char(c) => {
                self.handle_char(c);
            }
            KeyCode::Backspace => {
                self.handle_backspace();
            }
            KeyCode::Up => match self.focused {
                FocusedWidget::Input(InputField::Cipher) => self.prev_cipher(),
                FocusedWidget::Output => self.prev_candidate(),
                _ => {}
            },
            KeyCode::Down => match self.focused {
                FocusedWidget::Input(InputField::Cipher) => self.next_cipher(),
                FocusedWidget::Output => self.next_candidate(),
                _ => {}
            },
            _ => {}
        }
    }

    fn next_field(&mut self) {
        self.focused = match self.focused {
            FocusedWidget::Input(InputField::Cipher) => FocusedWidget::Input(InputField::Text),
            FocusedWidget::Input(InputField::Text) => FocusedWidget::Input(InputField::Key),
            FocusedWidget::Input(InputField::Key) => FocusedWidget::Input(InputField::KeyB),
            FocusedWidget::Input(InputField::KeyB) => FocusedWidget::Encode,
            FocusedWidget::Encode => FocusedWidget::Decode,
            FocusedWidget::Decode => FocusedWidget::Extra,
            FocusedWidget::Extra => FocusedWidget::Output,
            FocusedWidget::Output => FocusedWidget::Input(InputField::Cipher),
        };
    }

    fn prev_field(&mut self) {
        self.focused = match self.focused {
            FocusedWidget::Input(InputField::Cipher) => FocusedWidget::Output,
            FocusedWidget::Input(InputField::Text) => FocusedWidget::Input(InputField::Cipher),
            FocusedWidget::Input(InputField::Key) => FocusedWidget::Input(InputField::Text),
            FocusedWidget::Input(InputField::KeyB) => FocusedWidget::Input(InputField::Key),
            FocusedWidget::Encode => FocusedWidget::Input(InputField::KeyB),
            FocusedWidget::Decode => FocusedWidget::Encode,
            FocusedWidget::Extra => FocusedWidget::Decode,
            FocusedWidget::Output => FocusedWidget::Extra,
        };
    }

    fn handle_char(&mut self, c: char) {
        match self.focused {
            FocusedWidget::Input(InputField::Text) => self.text.push(c),
            FocusedWidget::Input(InputField::Key) => self.key.push(c),
            FocusedWidget::Input(InputField::KeyB) => self.key_b.push(c),
            _ => {}
        }
    }

    fn handle_backspace(&mut self) {
        match self.focused {
            FocusedWidget::Input(InputField::Text) => {
                self.text.pop();
            }
            FocusedWidget::Input(InputField::Key) => {
                self.key.pop();
            }
            FocusedWidget::Input(InputField::KeyB) => {
                self.key_b.pop();
            }
            _ => {}
        }
    }

    fn next_cipher(&mut self) {
        let i = match self.cipher_state.selected() {
            Some(i) if i + 1 < CIPHERS.len() => i + 1,
            _ => 0,
        };
        self.cipher_state.select(Some(i));
        self.clear_output();
    }

    fn prev_cipher(&mut self) {
        let i = match self.cipher_state.selected() {
            Some(0) | None => CIPHERS.len() - 1,
            Some(i) => i - 1,
        };
        self.cipher_state.select(Some(i));
        self.clear_output();
    }

    fn clear_output(&mut self) {
        self.output.clear();
        self.candidates.clear();
        self.candidate_state.select(None);
    }

    fn next_candidate(&mut self) {
        if self.candidates.is_empty() {
            return;
        }
        let i = match self.candidate_state.selected() {
            Some(i) if i + 1 < self.candidates.len() => i + 1,
            _ => 0,
        };
        self.candidate_state.select(Some(i));
    }

    fn prev_candidate(&mut self) {
        if self.candidates.is_empty() {
            return;
        }
        let i = match self.candidate_state.selected() {
            Some(0) | None => self.candidates.len() - 1,
            Some(i) => i - 1,
        };
        self.candidate_state.select(Some(i));
    }

    /// Copy the selected candidate's key into the key fields and show its plaintext
    fn pick_candidate(&mut self) {
        let Some(candidate) = self
            .candidate_state
            .selected()
            .and_then(|i| self.candidates.get(i))
            .cloned()
        else {
            return;
        };

        match candidate.key {
            // Caesar's key field is fixed at 3
            CandidateKey::Shift { k } if self.cipher() == "shift" => self.key = k.to_string(),
            CandidateKey::Shift { .. } => {}
            CandidateKey::Affine { a, b } => {
                self.key = a.to_string();
                self.key_b = b.to_string();
            }
        }

        self.clear_output();
        self.output = candidate.text;
        self.status_message = format!("Picked {}", candidate.key);
        self.focused = FocusedWidget::Input(InputField::Key);
    }

    fn handle_enter(&mut self) {
        let result = match self.focused {
            FocusedWidget::Encode => self.run(Some(Mode::Encode)),
            FocusedWidget::Decode => self.run(Some(Mode::Decode)),
            FocusedWidget::Extra => self.run(None),
            FocusedWidget::Output => {
                self.pick_candidate();
                return;
            }
            _ => return,
        };

        match result {
            Ok((output, status)) => {
                self.clear_output();
                match output {
                    RunOutput::Text(text) => self.output = text,
                    RunOutput::Candidates(candidates) => {
                        self.candidates = candidates;
                        self.candidate_state.select(Some(0));
                        self.focused = FocusedWidget::Output;
                    }
                }
                self.status_message = status;
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    /// Run the selected cipher; `None` is the extra action (brute force or keygen)
    fn run(&self, mode: Option<Mode>) -> anyhow::Result<(RunOutput, String)> {
        let cipher = self.cipher();
        match (cipher, mode) {
            ("caesar", Some(mode)) => {
                let out = caesar::apply(&self.text, mode)?;
                Ok((RunOutput::Text(out), format!("Caesar {}", mode.label())))
            }
            ("caesar", None) => {
                let candidates = caesar::brute_force(&self.text)?;
                let status = format!("{} caesar candidates", candidates.len());
                Ok((RunOutput::Candidates(candidates), status))
            }
            ("shift", Some(mode)) => {
                let k = parse_integer("k", &self.key)?;
                let out = shift::apply(&self.text, k, mode)?;
                Ok((RunOutput::Text(out), format!("Shift (k = {}) {}", k, mode.label())))
            }
            ("shift", None) => {
                let candidates = shift::brute_force(&self.text)?;
                let status = format!("{} shift candidates", candidates.len());
                Ok((RunOutput::Candidates(candidates), status))
            }
            ("affine", Some(mode)) => {
                let a = parse_integer("a", &self.key)?;
                let key = AffineKey::new(a, parse_integer("b", &self.key_b)?)?;
                let out = affine::apply(&self.text, &key, mode)?;
                let status = format!("Affine (a = {}, b = {}) {}", key.a(), key.b(), mode.label());
                Ok((RunOutput::Text(out), status))
            }
            ("affine", None) => {
                let candidates = affine::brute_force(&self.text)?;
                let status = format!("{} affine candidates", candidates.len());
                Ok((RunOutput::Candidates(candidates), status))
            }
            ("transposition", Some(mode)) => {
                let key = TranspositionKey::new(&self.key)?;
                let out = transposition::apply(&self.text, &key, mode)?;
                Ok((
                    RunOutput::Text(format!("{}\n\n{}", out.text, out.grid)),
                    format!("Transposition {}", mode.label()),
                ))
            }
            ("rsa", mode) => {
                let keypair = generate_keypair(
                    &parse_natural("p", &self.key)?,
                    &parse_natural("q", &self.key_b)?,
                )?;
                let summary = format!(
                    "n = {}\nφ(n) = {}\ne (public) = {}\nd (private) = {}",
                    keypair.n, keypair.phi, keypair.e, keypair.d
                );
                let (text, status) = match mode {
                    None => (summary, "RSA key pair generated"),
                    Some(Mode::Encode) => {
                        let m = parse_natural("m", &self.text)?;
                        let c = rsa::encrypt(&m, &keypair.public_key())?;
                        (format!("{}\n\nC = {}", summary, c), "RSA encrypted")
                    }
                    Some(Mode::Decode) => {
                        let c = parse_natural("c", &self.text)?;
                        let m = rsa::decrypt(&c, &keypair.private_key())?;
                        (format!("{}\n\nM = {}", summary, m), "RSA decrypted")
                    }
                };
                Ok((RunOutput::Text(text), status.to_string()))
            }
            (_, None) => anyhow::bail!("{} has no brute force", cipher),
            (_, Some(_)) => anyhow::bail!("Unknown cipher {}", cipher),
        }
    }
}

fn field_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn button_style(focused: bool, color: Color) -> Style {
    if focused {
        Style::default().fg(Color::Black).bg(color)
    } else {
        Style::default().fg(color)
    }
}

fn ui(f: &mut Frame, app: &mut TuiApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status
            Constraint::Length(2), // Help
        ])
        .split(f.area());

    // Title
    let title = Paragraph::new("ClassicCipherKit - Classical Ciphers & Textbook RSA")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    // Left panel - Inputs
    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(7),    // Cipher
            Constraint::Length(3), // Text
            Constraint::Length(3), // Key
            Constraint::Length(3), // Key b
            Constraint::Length(3), // Buttons
        ])
        .split(main_chunks[0]);

    let ciphers: Vec<ListItem> = CIPHERS
        .iter()
        .map(|(_, desc)| ListItem::new(*desc))
        .collect();
    let cipher_list = List::new(ciphers)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Cipher (↑↓ to select)")
                .border_style(field_style(app.focused == FocusedWidget::Input(InputField::Cipher))),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");
    f.render_stateful_widget(cipher_list, left_chunks[0], &mut app.cipher_state);

    let (key_title, key_b_title) = app.key_titles();
    let inputs = [
        (InputField::Text, app.text_title(), app.text.as_str()),
        (InputField::Key, key_title, app.key.as_str()),
        (InputField::KeyB, key_b_title, app.key_b.as_str()),
    ];
    for (i, (field, title, value)) in inputs.into_iter().enumerate() {
        let input = Paragraph::new(value).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(field_style(app.focused == FocusedWidget::Input(field))),
        );
        f.render_widget(input, left_chunks[i + 1]);
    }

    // Buttons
    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(left_chunks[4]);

    let buttons = [
        (FocusedWidget::Encode, "Encode", Color::Green),
        (FocusedWidget::Decode, "Decode", Color::Blue),
        (FocusedWidget::Extra, app.extra_label(), Color::Cyan),
    ];
    for (i, (widget, label, color)) in buttons.into_iter().enumerate() {
        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(button_style(app.focused == widget, color)),
            );
        f.render_widget(button, button_chunks[i]);
    }

    // Right panel - Output
    let output_style = field_style(app.focused == FocusedWidget::Output);
    if app.candidates.is_empty() {
        let output = Paragraph::new(app.output.as_str())
            .style(Style::default().fg(Color::Green))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Output")
                    .border_style(output_style),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(output, main_chunks[1]);
    } else {
        let items: Vec<ListItem> = candidate_lines(&app.candidates)
            .into_iter()
            .map(ListItem::new)
            .collect();
        let candidate_list = List::new(items)
            .style(Style::default().fg(Color::Green))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Candidates (↑↓ to select, Enter to pick)")
                    .border_style(output_style),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol(">> ");
        f.render_stateful_widget(candidate_list, main_chunks[1], &mut app.candidate_state);
    }

    // Status bar
    let status_color = if app.status_message.starts_with("Error") {
        Color::Red
    } else {
        Color::Green
    };
    let status = Paragraph::new(app.status_message.as_str())
        .style(Style::default().fg(status_color))
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    // Help bar
    let help_text =
        "Tab: Next field | Shift+Tab: Prev | Enter: Execute / Pick | ↑↓: Select | Esc: Quit";
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[3]);
}

pub fn run_tui() -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = TuiApp::new();

    // Main loop
    loop {
        terminal.draw(|f| ui(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

use certeq_core::{
    EstimatorError, HorizonDistribution, HorizonPoint, RateBounds, RateModel, rate_curve,
    rate_distributions,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::chart;
use crate::format::{format_percentage, format_rate};

/// Horizons evaluated for the chart, in years
pub const DEFAULT_HORIZONS: [u32; 4] = [10, 50, 100, 300];

pub struct App {
    curve: Vec<HorizonPoint>,
    bands: Vec<HorizonDistribution>,
    bounds: RateBounds,
    seed: u64,
    exit: bool,
}

impl App {
    /// Evaluate the rate curve and its Monte Carlo band up front; rendering
    /// afterwards is read-only.
    pub fn new(bounds: RateBounds, trials: usize, seed: u64) -> Result<Self, EstimatorError> {
        let model = RateModel::Uniform(bounds);

        let mut rng = SmallRng::seed_from_u64(seed);
        let curve = rate_curve(&mut rng, &DEFAULT_HORIZONS, &model)?;
        let bands = rate_distributions(&model, &DEFAULT_HORIZONS, trials, seed)?;

        for point in &curve {
            tracing::info!(
                horizon = point.horizon,
                rate = point.rate,
                factor = point.factor,
                "certainty-equivalent rate"
            );
        }

        Ok(Self {
            curve,
            bands,
            bounds,
            seed,
            exit: false,
        })
    }

    /// Runs the chart viewer until the user quits.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(12),
                Constraint::Length(4 + DEFAULT_HORIZONS.len() as u16),
                Constraint::Length(1),
            ])
            .split(frame.area());

        chart::render_rate_curve(frame, chunks[0], &self.curve, &self.bands);
        self.render_summary(frame, chunks[1]);
        self.render_footer(frame, chunks[2]);
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title(" SUMMARY ");

        let mut lines = vec![Line::from(vec![
            Span::styled("Rate interval: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(
                    "{} - {}",
                    format_percentage(self.bounds.min_rate),
                    format_percentage(self.bounds.max_rate)
                ),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(format!("   seed {}", self.seed)),
        ])];

        for (point, band) in self.curve.iter().zip(&self.bands) {
            let median = band.percentile(0.50).unwrap_or(point.rate);
            let p5 = band.percentile(0.05).unwrap_or(point.rate);
            let p95 = band.percentile(0.95).unwrap_or(point.rate);

            lines.push(Line::from(vec![
                Span::raw(format!("{:>4} yr  ", point.horizon)),
                Span::styled("sampled ", Style::default().fg(Color::Yellow)),
                Span::raw(format!("{:>7}  ", format_rate(point.rate))),
                Span::styled("median ", Style::default().fg(Color::Cyan)),
                Span::raw(format!("{:>7}  ", format_rate(median))),
                Span::styled(
                    format!("[{} - {}]", format_rate(p5), format_rate(p95)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let hint = Paragraph::new(" q / Esc to quit").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, area);
    }

    fn handle_events(&mut self) -> color_eyre::Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.exit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.exit = true;
            }
            _ => {}
        }
    }
}

use clap::Parser;
use iced::widget::{button, column, row, scrollable, text, Column, Container, Row};
use iced::{Alignment, Element, Length, Task, Theme};
use log::{debug, warn};
use qsolvecore::grid::Axis;
use qsolvecore::math::Matrix;
use qsolvecore::session::SessionStore;
use qsolvecore::telemetry::SubmitMetrics;
use qsolvecore::EntryResult;
use std::path::PathBuf;

mod api;
mod app_config;
mod panel;

use app_config::CalculatorConfig;
use panel::{dimension_input_id, MatrixPanel};

/// Panel positions the submit pipeline pulls from, by fixed convention:
/// index 0 holds the coefficient matrix, index 1 the right-hand side.
const COEFFICIENT_PANEL: usize = 0;
const RHS_PANEL: usize = 1;

const INVALID_ENTRY_MESSAGE: &str =
    "Kindly make sure values entered in Matrix is either an integer, decimal or fractional";

#[derive(Parser)]
#[command(author, version, about = "Desktop front end for the QSolve rational solver")]
struct Args {
    /// Load calculator settings from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the solver endpoint, e.g. http://127.0.0.1:5000
    #[arg(long)]
    endpoint: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match args.config {
        Some(path) => CalculatorConfig::load(path)?,
        None => CalculatorConfig::default(),
    }
    .with_endpoint(args.endpoint);

    iced::application(
        move || Calculator::boot(config.clone()),
        Calculator::update,
        Calculator::view,
    )
    .title(application_title)
    .theme(application_theme)
    .run()?;
    Ok(())
}

fn application_title(_: &Calculator) -> String {
    "QSolve Calculator".into()
}

fn application_theme(_: &Calculator) -> Theme {
    Theme::Dark
}

#[derive(Debug)]
struct Calculator {
    config: CalculatorConfig,
    session: SessionStore,
    panels: Vec<MatrixPanel>,
    display: Option<String>,
    status: String,
    history: Vec<String>,
    metrics: SubmitMetrics,
    submit_seq: u64,
}

#[derive(Debug, Clone)]
enum Message {
    CellEdited {
        panel: usize,
        row: usize,
        column: usize,
        value: String,
    },
    DimensionEdited {
        panel: usize,
        axis: Axis,
        value: String,
    },
    DimensionCommitted {
        panel: usize,
        axis: Axis,
    },
    ResetPressed {
        panel: usize,
    },
    SubmitPressed,
    SolveFetched {
        seq: u64,
        result: Result<String, String>,
    },
}

impl Calculator {
    fn boot(config: CalculatorConfig) -> (Self, Task<Message>) {
        let session = SessionStore::new();
        let panels =
            build_panels(&config, &session).expect("matrix panels failed to initialize");
        (
            Calculator {
                config,
                session,
                panels,
                display: None,
                status: "Enter matrices and press Solve".into(),
                history: Vec::new(),
                metrics: SubmitMetrics::new(),
                submit_seq: 0,
            },
            Task::none(),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::CellEdited {
                panel,
                row,
                column,
                value,
            } => {
                if let Some(panel) = state.panels.get_mut(panel) {
                    if let Err(err) = panel.grid.set_entry(row, column, value) {
                        warn!("ignoring edit: {}", err);
                    }
                }
                Task::none()
            }
            Message::DimensionEdited { panel, axis, value } => {
                if let Some(panel) = state.panels.get_mut(panel) {
                    panel.grid.dim_mut(axis).set_text(value);
                }
                Task::none()
            }
            Message::DimensionCommitted { panel: index, axis } => {
                if let Some(panel) = state.panels.get_mut(index) {
                    let (rows, columns) = panel.grid.commit_dimensions();
                    state.status = format!("{} is now {}x{}", panel.label(), rows, columns);
                    // leave the clamped value selected for quick overwrite
                    return iced::widget::operation::select_all(dimension_input_id(index, axis));
                }
                Task::none()
            }
            Message::ResetPressed { panel } => {
                if let Some(panel) = state.panels.get_mut(panel) {
                    panel.grid.reset();
                    state.status = format!("{} cleared", panel.label());
                }
                Task::none()
            }
            Message::SubmitPressed => {
                state.submit_seq += 1;
                let seq = state.submit_seq;
                state.metrics.record_submitted();
                match prepare_submission(&mut state.panels, &mut state.session) {
                    Ok((a_literal, b_literal)) => {
                        state.status = "Solving...".into();
                        state.push_history(format!("Submitted A={} b={}", a_literal, b_literal));
                        let endpoint = state.config.endpoint.clone();
                        Task::perform(
                            api::fetch_solution(endpoint, a_literal, b_literal),
                            move |result| Message::SolveFetched { seq, result },
                        )
                    }
                    Err(err) => {
                        warn!("rejected submission: {}", err);
                        state.metrics.record_failed();
                        state.display = Some(INVALID_ENTRY_MESSAGE.to_string());
                        state.status = "Submission rejected".into();
                        Task::none()
                    }
                }
            }
            Message::SolveFetched { seq, result } => {
                if seq != state.submit_seq {
                    debug!(
                        "dropping stale solver response (seq {}, current {})",
                        seq, state.submit_seq
                    );
                    return Task::none();
                }
                match result {
                    Ok(fragment) => {
                        state.metrics.record_solved();
                        state.status = "Result ready".into();
                        state.push_history("Result rendered".into());
                        state.display = Some(fragment);
                    }
                    Err(err) => {
                        state.metrics.record_failed();
                        state.status = format!("Solver error: {}", err);
                    }
                }
                Task::none()
            }
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let mut panels_row = Row::new().spacing(24);
        for (index, panel) in state.panels.iter().enumerate() {
            panels_row = panels_row.push(panel.view(index));
        }

        let controls = row![
            button("Solve").on_press(Message::SubmitPressed).padding(10),
            text(&state.status).size(14),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let display_text = state.display.as_deref().unwrap_or("No result yet");

        let history_list = if state.history.is_empty() {
            Column::new().push(text("No activity yet").size(12))
        } else {
            state
                .history
                .iter()
                .rev()
                .fold(Column::new().spacing(4), |col, entry| {
                    col.push(text(entry.clone()).size(12))
                })
        };

        let (submitted, solved, failed) = state.metrics.snapshot();

        let layout = column![
            text("QSolve").size(28),
            panels_row,
            controls,
            text("Result").size(18),
            Container::new(scrollable(text(display_text).size(14)).height(Length::Fixed(140.0)))
                .padding(8),
            text(format!(
                "Submissions {} / solved {} / failed {}",
                submitted, solved, failed
            ))
            .size(12),
            text("Activity log").size(16),
            Container::new(scrollable(history_list).height(Length::Fixed(90.0))).padding(6),
        ]
        .spacing(12)
        .padding(20);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn push_history(&mut self, entry: String) {
        self.history.push(entry);
        if self.history.len() > 20 {
            self.history.remove(0);
        }
    }
}

/// One panel per matrix the page carries: the coefficient matrix first, the
/// right-hand side second.
fn build_panels(
    config: &CalculatorConfig,
    session: &SessionStore,
) -> Result<Vec<MatrixPanel>, qsolvecore::SetupError> {
    Ok(vec![
        MatrixPanel::from_session("A", "Matrix A", session, config)?,
        MatrixPanel::from_session("b", "Vector b", session, config)?,
    ])
}

/// Pulls the two designated panels, validating and canonicalizing every
/// cell, and returns the pair of request literals. A snapshot of each
/// validated grid is saved back to the session store.
fn prepare_submission(
    panels: &mut [MatrixPanel],
    session: &mut SessionStore,
) -> EntryResult<(String, String)> {
    let mut literals = Vec::with_capacity(2);
    for index in [COEFFICIENT_PANEL, RHS_PANEL] {
        let panel = &mut panels[index];
        let tokens = panel.grid.to_array()?;
        let rows = tokens.len();
        let columns = tokens.first().map(Vec::len).unwrap_or(0);
        let matrix = Matrix::from_tokens(rows, columns, &tokens)?;
        if let Err(err) = session.save_grid(panel.grid.id(), &tokens) {
            warn!("session snapshot for {} not saved: {}", panel.grid.id(), err);
        }
        literals.push(matrix.request_literal());
    }
    let b_literal = literals.pop().unwrap_or_default();
    let a_literal = literals.pop().unwrap_or_default();
    Ok((a_literal, b_literal))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(panel: &mut MatrixPanel, values: &[&[&str]]) {
        panel
            .grid
            .dim_mut(Axis::Row)
            .set_text(values.len().to_string());
        panel
            .grid
            .dim_mut(Axis::Column)
            .set_text(values[0].len().to_string());
        panel.grid.commit_dimensions();
        for (row, cells) in values.iter().enumerate() {
            for (column, value) in cells.iter().enumerate() {
                panel.grid.set_entry(row, column, value.to_string()).unwrap();
            }
        }
    }

    fn test_calculator() -> Calculator {
        let config = CalculatorConfig::default();
        let session = SessionStore::new();
        let panels = build_panels(&config, &session).unwrap();
        Calculator {
            config,
            session,
            panels,
            display: None,
            status: String::new(),
            history: Vec::new(),
            metrics: SubmitMetrics::new(),
            submit_seq: 0,
        }
    }

    #[test]
    fn submission_serializes_both_panels() {
        let mut calc = test_calculator();
        fill(&mut calc.panels[0], &[&["1", "2"], &["3", "4"]]);
        fill(&mut calc.panels[1], &[&["5"], &["6"]]);
        let (a, b) = prepare_submission(&mut calc.panels, &mut calc.session).unwrap();
        assert_eq!(a, "[[1,2],[3,4]]");
        assert_eq!(b, "[[5],[6]]");
    }

    #[test]
    fn submission_saves_canonical_session_snapshots() {
        let mut calc = test_calculator();
        fill(&mut calc.panels[0], &[&["0.5", " 1 , 5 "]]);
        fill(&mut calc.panels[1], &[&["", "2/4"]]);
        prepare_submission(&mut calc.panels, &mut calc.session).unwrap();
        assert_eq!(
            calc.session.load_grid("A").unwrap().unwrap(),
            vec![vec!["1/2".to_string(), "3/2".to_string()]]
        );
        assert_eq!(
            calc.session.load_grid("b").unwrap().unwrap(),
            vec![vec!["0".to_string(), "1/2".to_string()]]
        );
    }

    #[test]
    fn malformed_cell_shows_fallback_and_issues_no_request() {
        let mut calc = test_calculator();
        fill(&mut calc.panels[0], &[&["abc"]]);
        fill(&mut calc.panels[1], &[&["1"]]);
        let _ = Calculator::update(&mut calc, Message::SubmitPressed);
        assert_eq!(calc.display.as_deref(), Some(INVALID_ENTRY_MESSAGE));
        // nothing was stored for the malformed panel either
        assert!(calc.session.load_grid("A").unwrap().is_none());
        assert_eq!(calc.metrics.snapshot(), (1, 0, 1));
    }

    #[test]
    fn successful_response_renders_fragment_verbatim() {
        let mut calc = test_calculator();
        calc.submit_seq = 1;
        let fragment = "<div class='res_hdr'>Result</div>".to_string();
        let _ = Calculator::update(
            &mut calc,
            Message::SolveFetched {
                seq: 1,
                result: Ok(fragment.clone()),
            },
        );
        assert_eq!(calc.display.as_deref(), Some(fragment.as_str()));
        assert_eq!(calc.metrics.snapshot(), (0, 1, 0));
    }

    #[test]
    fn stale_response_never_overwrites_display() {
        let mut calc = test_calculator();
        calc.submit_seq = 2;
        calc.display = Some("current".to_string());
        let _ = Calculator::update(
            &mut calc,
            Message::SolveFetched {
                seq: 1,
                result: Ok("stale".to_string()),
            },
        );
        assert_eq!(calc.display.as_deref(), Some("current"));

        let _ = Calculator::update(
            &mut calc,
            Message::SolveFetched {
                seq: 2,
                result: Ok("fresh".to_string()),
            },
        );
        assert_eq!(calc.display.as_deref(), Some("fresh"));
    }

    #[test]
    fn fetch_error_keeps_display_and_reports_status() {
        let mut calc = test_calculator();
        calc.submit_seq = 1;
        calc.display = Some("previous result".to_string());
        let _ = Calculator::update(
            &mut calc,
            Message::SolveFetched {
                seq: 1,
                result: Err("connection refused".to_string()),
            },
        );
        assert_eq!(calc.display.as_deref(), Some("previous result"));
        assert!(calc.status.contains("connection refused"));
    }

    #[test]
    fn restored_panel_keeps_saved_shape_and_values() {
        let config = CalculatorConfig::default();
        let mut session = SessionStore::new();
        session
            .save_grid(
                "A",
                &vec![
                    vec!["1".to_string()],
                    vec!["2".to_string()],
                    vec!["3".to_string()],
                ],
            )
            .unwrap();
        let panel = MatrixPanel::from_session("A", "Matrix A", &session, &config).unwrap();
        assert_eq!(panel.grid.shape(), (3, 1));
        assert_eq!(panel.grid.entry(2, 0).unwrap(), "3");
        assert_eq!(panel.grid.row_dim().last_valid(), 3);
        assert_eq!(panel.grid.col_dim().last_valid(), 1);
    }

    #[test]
    fn reset_message_blanks_the_panel() {
        let mut calc = test_calculator();
        fill(&mut calc.panels[0], &[&["1", "2"], &["3", "4"]]);
        let _ = Calculator::update(&mut calc, Message::ResetPressed { panel: 0 });
        assert_eq!(calc.panels[0].grid.shape(), (2, 2));
        assert_eq!(calc.panels[0].grid.entry(1, 1).unwrap(), "");
    }
}

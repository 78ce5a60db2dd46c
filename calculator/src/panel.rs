use crate::app_config::CalculatorConfig;
use crate::Message;
use iced::widget::{button, column, row, text, text_input, Column, Row};
use iced::{Element, Length};
use qsolvecore::grid::{Axis, GridModel};
use qsolvecore::session::SessionStore;
use qsolvecore::SetupError;

/// One matrix-entry widget: its display label and the grid state behind it.
#[derive(Debug, Clone)]
pub struct MatrixPanel {
    label: String,
    pub grid: GridModel,
}

impl MatrixPanel {
    /// Builds the panel from its saved session snapshot when one exists,
    /// otherwise from the default 1x1 grid.
    pub fn from_session(
        id: &str,
        label: &str,
        session: &SessionStore,
        config: &CalculatorConfig,
    ) -> Result<Self, SetupError> {
        let grid = match session.load_grid(id)? {
            Some(snapshot) => {
                GridModel::from_saved(id, &snapshot, config.max_rows, config.max_cols)?
            }
            None => GridModel::new(id, config.max_rows, config.max_cols),
        };
        Ok(Self {
            label: label.to_string(),
            grid,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn view(&self, index: usize) -> Element<'_, Message> {
        let dimensions = row![
            text("Rows").size(14),
            text_input("rows", self.grid.row_dim().text())
                .id(dimension_input_id(index, Axis::Row))
                .on_input(move |value| Message::DimensionEdited {
                    panel: index,
                    axis: Axis::Row,
                    value,
                })
                .on_submit(Message::DimensionCommitted {
                    panel: index,
                    axis: Axis::Row,
                })
                .width(Length::Fixed(56.0))
                .padding(6),
            text("Columns").size(14),
            text_input("columns", self.grid.col_dim().text())
                .id(dimension_input_id(index, Axis::Column))
                .on_input(move |value| Message::DimensionEdited {
                    panel: index,
                    axis: Axis::Column,
                    value,
                })
                .on_submit(Message::DimensionCommitted {
                    panel: index,
                    axis: Axis::Column,
                })
                .width(Length::Fixed(56.0))
                .padding(6),
            button("Reset")
                .on_press(Message::ResetPressed { panel: index })
                .padding(6),
        ]
        .spacing(8);

        let (rows, columns) = self.grid.shape();
        let mut cells = Column::new().spacing(6);
        for r in 0..rows {
            let mut cell_row = Row::new().spacing(6);
            for c in 0..columns {
                let value = self.grid.entry(r, c).unwrap_or("");
                cell_row = cell_row.push(
                    text_input("0", value)
                        .on_input(move |value| Message::CellEdited {
                            panel: index,
                            row: r,
                            column: c,
                            value,
                        })
                        .width(Length::Fixed(72.0))
                        .padding(6),
                );
            }
            cells = cells.push(cell_row);
        }

        column![text(&self.label).size(20), dimensions, cells]
            .spacing(10)
            .into()
    }
}

/// Stable input id so a committed dimension field can be re-selected.
pub fn dimension_input_id(panel: usize, axis: Axis) -> iced::widget::Id {
    iced::widget::Id::from(format!("dimension-{}-{}", panel, axis.as_str()))
}
